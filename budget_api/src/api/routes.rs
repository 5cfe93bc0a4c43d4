//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use budget_core::{
    load_catalog_or_builtin, BudgetCalculator, BudgetRequest, BudgetResponse, CalcError,
    CatalogResult, Locale, Material, MaterialCatalog,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

use super::types::{ErrorResponse, HealthResponse};
use crate::config::Config;

/// Shared application state.
///
/// Everything in here is immutable after startup, so handlers share it
/// without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    pub calculator: BudgetCalculator,
    pub locale: Locale,
}

impl AppState {
    pub fn new(catalog: Arc<MaterialCatalog>, locale: Locale) -> Self {
        Self {
            calculator: BudgetCalculator::new(catalog),
            locale,
        }
    }

    /// Load the configured catalog (or the built-in one) and bind it to
    /// the configured locale.
    pub fn from_config(config: &Config) -> CatalogResult<Self> {
        let catalog = load_catalog_or_builtin(config.catalog_path.as_deref())?;
        Ok(Self::new(Arc::new(catalog), config.locale))
    }
}

/// A calculation failure rendered as a 400 response.
#[derive(Debug)]
pub struct ApiError {
    error: CalcError,
    locale: Locale,
}

impl ApiError {
    pub fn new(error: CalcError, locale: Locale) -> Self {
        Self { error, locale }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            message: self.error.user_message(self.locale).to_string(),
            code: self.error.error_code().to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Build the router with all routes and middleware.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/materials", get(list_materials))
        .route("/api/calculate", post(calculate_budget))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Load the catalog, bind, and serve until SIGINT/SIGTERM.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState::from_config(&config)?);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Health check.
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        materials: state.calculator.catalog().len(),
    })
}

/// List the catalog in definition order.
async fn list_materials(State(state): State<Arc<AppState>>) -> Json<Vec<Material>> {
    Json(state.calculator.catalog().materials().to_vec())
}

/// Calculate a budget.
///
/// The body is decoded as JSON whatever the `Content-Type` header says.
/// Undecodable bodies (bad JSON, wrong field types) are reported as
/// invalid parameters, the same as a missing field.
async fn calculate_budget(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<BudgetResponse>, ApiError> {
    let request: BudgetRequest = serde_json::from_slice(&body).map_err(|e| {
        debug!(reason = %e, "undecodable budget request");
        ApiError::new(CalcError::invalid_parameters("body", e.to_string()), state.locale)
    })?;

    state
        .calculator
        .calculate(&request)
        .map(Json)
        .map_err(|e| ApiError::new(e, state.locale))
}
