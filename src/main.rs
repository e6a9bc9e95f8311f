use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tmc::{Store, StoreConfig, StoreError};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "tmc=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StoreError> {
    let config = StoreConfig::from_env()?;
    let store = Store::open(&config).await?;

    if std::env::args().nth(1).as_deref() == Some("reset") {
        store.reset().await?;
    }

    for entry in store.config().list().await? {
        debug!("config {} = {}", entry.name, entry.value);
    }

    if store.config().has_remote_configured().await? {
        info!("remote: {}", store.config().get(tmc::models::REMOTE_URL_KEY).await?);
    } else {
        info!("no remote configured");
    }

    match store.courses().get_selected().await {
        Ok(course) => info!("selected: {}", course),
        Err(e) if e.is_domain() => info!("{}", e),
        Err(e) => return Err(e),
    }

    match store.exercises().get_selected().await {
        Ok(exercise) => info!("selected: {} - {}", exercise, exercise.display_name()),
        Err(e) if e.is_domain() => info!("{}", e),
        Err(e) => return Err(e),
    }

    Ok(())
}
