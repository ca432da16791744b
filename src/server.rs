//! HTTP API for the goal calculator.
//!
//! Accepts a user profile as JSON and answers with the calorie target and
//! macro split, or with the full calculation breakdown.

use anyhow::Context;
use axum::{
    Router,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use serde::Serialize;
use thiserror::Error;
use tower_http::cors::CorsLayer;

use crate::calculator::{GoalBreakdown, compute_breakdown, compute_goal};
use crate::domain::{ActivityLevel, BodyType, Gender, Goal, MacroPlan, Profile};
use crate::error::ProfileError;

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind (default: 0.0.0.0).
    pub host: String,
    /// Port to listen on (default: 8080).
    pub port: u16,
    /// Whether to answer cross-origin requests from any origin (default: off).
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            cors: false,
        }
    }
}

/// Errors returned by API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidProfile(#[from] ProfileError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidProfile(err) => {
                log::warn!("Rejected profile: {}", err);
                let body = ErrorResponse {
                    error: err.to_string(),
                    field: err.field(),
                };
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
        }
    }
}

// === JSON Response Types ===

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub field: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsResponse {
    pub genders: Vec<&'static str>,
    pub body_types: Vec<&'static str>,
    pub activity_levels: Vec<&'static str>,
    pub goals: Vec<&'static str>,
}

// === Router Setup ===

/// Creates the application router.
pub fn create_router(config: &ServerConfig) -> Router {
    let router = Router::new()
        .route("/api/health", get(get_health))
        .route("/api/options", get(get_options))
        .route("/api/goal", post(post_goal))
        .route("/api/goal/breakdown", post(post_goal_breakdown));

    if config.cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Runs the web server.
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let app = create_router(&config);
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;

    log::info!(
        "Server running at http://{} (CORS {})",
        listener.local_addr()?,
        if config.cors { "enabled" } else { "disabled" }
    );

    axum::serve(listener, app).await?;

    Ok(())
}

// === API Handlers ===

/// GET /api/health - Liveness check.
async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/options - Accepted values for every enumerated field.
async fn get_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        genders: Gender::all().iter().map(Gender::as_str).collect(),
        body_types: BodyType::all().iter().map(BodyType::as_str).collect(),
        activity_levels: ActivityLevel::all()
            .iter()
            .map(ActivityLevel::as_str)
            .collect(),
        goals: Goal::all().iter().map(Goal::as_str).collect(),
    })
}

/// POST /api/goal - Calorie target and macro split for a profile.
async fn post_goal(Json(profile): Json<Profile>) -> Result<Json<MacroPlan>, ApiError> {
    profile.validate()?;
    Ok(Json(compute_goal(&profile)))
}

/// POST /api/goal/breakdown - Same calculation with every intermediate value.
async fn post_goal_breakdown(
    Json(profile): Json<Profile>,
) -> Result<Json<GoalBreakdown>, ApiError> {
    profile.validate()?;
    Ok(Json(compute_breakdown(&profile)))
}
