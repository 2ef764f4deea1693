use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tripquest::{router, AppConfig, AppState, GamificationService, InMemoryTravelRepository};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tripquest=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TripQuest gamification server");

    // Catalog and ladder are validated here so a bad file stops startup
    let config = AppConfig::from_env()?;
    let catalog = config.load_catalog()?;
    let ladder = config.load_ladder()?;
    let challenges = config.load_challenges()?;
    let repository = Arc::new(InMemoryTravelRepository::from_snapshot(
        config.load_snapshot()?,
    ));

    let gamification = GamificationService::builder(repository)
        .with_catalog(catalog)
        .with_ladder(ladder)
        .with_challenges(challenges)
        .build();
    let app = router(AppState::new(Arc::new(gamification)));

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!("Server running on http://{}", config.bind_address());
    axum::serve(listener, app).await?;

    Ok(())
}
