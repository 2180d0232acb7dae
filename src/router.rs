use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::{Json, Router, extract::State, middleware};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::role::require_admin;
use crate::modules::auth::router::init_auth_router;
use crate::modules::exercises::router::init_exercises_router;
use crate::modules::goals::router::init_goals_router;
use crate::modules::programs::router::init_programs_router;
use crate::modules::routes::router::init_routes_router;
use crate::modules::running::router::init_running_router;
use crate::modules::sessions::router::init_sessions_router;
use crate::modules::stats::router::init_stats_router;
use crate::modules::users::router::{init_users_admin_router, init_users_router};
use crate::state::AppState;

#[derive(Serialize)]
struct HealthCheckResponse {
    status: &'static str,
    database: &'static str,
    timestamp: DateTime<Utc>,
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "name": "Cruxlog API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "docs": "/swagger-ui"
    }))
}

async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    let database = match sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(&state.db).await {
        Ok(_) => "ok",
        Err(e) => {
            tracing::error!(error = %e, "Database health check failed");
            "error"
        }
    };

    Json(HealthCheckResponse {
        status: if database == "ok" { "ok" } else { "degraded" },
        database,
        timestamp: Utc::now(),
    })
}

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest(
            "/api",
            Router::new()
                .nest("/auth", init_auth_router())
                .nest(
                    "/users",
                    init_users_router().merge(init_users_admin_router().route_layer(
                        middleware::from_fn_with_state(state.clone(), require_admin),
                    )),
                )
                .nest("/exercises", init_exercises_router())
                .nest("/sessions", init_sessions_router())
                .nest("/routes", init_routes_router())
                .nest("/goals", init_goals_router())
                .nest("/running", init_running_router())
                .nest("/programs", init_programs_router())
                .nest("/stats", init_stats_router()),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
