use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use release_pr::{ChangeWorkflow, Config, Error, Event, HttpTransport, RepoClient};

fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "release_pr=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run() {
        error!("run failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let config = Config::from_env()?;

    let event = Event::from_path(&config.event_path)?;
    let Some(release) = event.release.as_ref() else {
        return Err(Error::NotRelease);
    };
    info!(
        repo = %event.repository.full_name,
        tag = %release.tag_name,
        "handling release event"
    );

    let branch = format!("update-{}", release.tag_name);
    let transport = HttpTransport::new(&config.api_url, &config.token, None)?;
    let client = RepoClient::new(transport, &config.repo, &branch);

    // Branch → fetch → mutate → commit → PR. A failure after this point
    // leaves the branch in place; see ChangeWorkflow.
    let workflow = ChangeWorkflow::begin(client)?;

    let mut file = workflow.client().fetch_file(&config.file_path)?;
    let updated = file.text()?.replace(&config.replace_from, &config.replace_to);
    file.set_text(&updated);

    workflow
        .client()
        .commit_file(&file, &config.commit_message)?;

    let pr = workflow.finish(&config.pr_title, &config.pr_body)?;
    info!(url = %pr.html_url, "done");

    Ok(())
}
