use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{EnvFilter, fmt};

use events_api::modules::admission::core::limiter::AdmissionLimiter;
use events_api::modules::admission::core::policy::RatePolicy;
use events_api::modules::events::adapters::outbound::store_in_memory::InMemoryEventStore;
use events_api::shell::config::AppConfig;
use events_api::shell::http::router;
use events_api::shell::state::AppState;
use events_api::shell::workers::spawn_window_sweeper;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    let store = Arc::new(InMemoryEventStore::new());
    let limiter = Arc::new(AdmissionLimiter::new());
    spawn_window_sweeper(limiter.clone(), config.sweep_interval);

    let state = AppState {
        store,
        limiter,
        environment: config.environment,
        create_policy: RatePolicy::strict(),
        update_policy: RatePolicy::moderate(),
    };

    // The front end is a browser tool served from another origin.
    let app = router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("listening on http://{}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
