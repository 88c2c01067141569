//! GrowGuide - Backend Server
//!
//! A small advisory service that tells growers whether a crop suits a
//! city's season and predicts its market price from a trained linear model.

use axum::{routing::get, Json, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shared::PriceModel;

mod config;
mod error;
mod handlers;
mod routes;
mod services;

pub use config::Config;

use services::store::TabularStore;
use shared::FeatureEncoders;

/// Immutable data loaded once at startup and shared by every request
#[derive(Debug)]
pub struct AppContext {
    pub store: TabularStore,
    pub encoders: FeatureEncoders,
    pub model: Option<PriceModel>,
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub ctx: Arc<AppContext>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "growguide_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting GrowGuide Server");
    tracing::info!("Environment: {}", config.environment);

    // Load reference tables; a missing or malformed table is fatal
    tracing::info!("Loading market data...");
    let store = TabularStore::load(&config.data.prices_path, &config.data.seasonal_path)?;
    tracing::info!(
        "Loaded {} price rows and {} seasonal rows",
        store.price_count(),
        store.seasonal_count()
    );

    // Encoders derive from price-table order
    let encoders = store.feature_encoders();

    // The model artifact is optional; serving falls back to the default price
    let model = match PriceModel::load(&config.data.model_path) {
        Ok(model) => {
            tracing::info!("Loaded price model from {}", config.data.model_path);
            Some(model)
        }
        Err(err) => {
            tracing::warn!(
                "Price model unavailable ({err}); serving default price of {}",
                shared::DEFAULT_PRICE
            );
            None
        }
    };

    // Create application state
    let state = AppState {
        ctx: Arc::new(AppContext {
            store,
            encoders,
            model,
        }),
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration; open to any origin for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Welcome to GrowGuide API" }))
}
