mod config;
mod state;
mod routes;
mod handlers;
mod models;
mod error;
mod middleware;

#[cfg(test)]
mod test_util;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{ layer::SubscriberExt, util::SubscriberInitExt };

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber
        ::registry()
        .with(
            tracing_subscriber::EnvFilter
                ::try_from_default_env()
                .unwrap_or_else(|_|
                    "portfolio_hub_bff=debug,tower_http=debug,axum::rejection=trace".into()
                )
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().expect("Failed to load configuration");

    tracing::info!("Environment: {}", config.server.environment);
    tracing::info!("Service version: {}", config.server.version);
    tracing::info!("CORS enabled: {}", config.security.cors_enabled);

    let state = AppState::new(config.clone());

    let app = routes
        ::create_routes(state)
        .layer(middleware::cors::setup_cors(&config))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Creator Portfolio Hub BFF starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.expect("Failed to bind to address");

    axum::serve(listener, app).await.expect("Failed to start server");
}
