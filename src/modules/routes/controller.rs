use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use cruxlog_core::errors::AppError;

use crate::middleware::auth::CurrentUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{CreateRouteDto, Route, RouteFilterParams, UpdateRouteDto};
use super::service::RouteService;

/// List the caller's routes
#[utoipa::path(
    get,
    path = "/api/routes",
    params(
        ("type" = Option<String>, Query, description = "Filter by route type"),
        ("validated_only" = Option<bool>, Query, description = "Only routes validated for the DE")
    ),
    responses(
        (status = 200, description = "List of routes", body = Vec<Route>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Routes"
)]
#[instrument(skip_all)]
pub async fn list_routes(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Query(filter): Query<RouteFilterParams>,
) -> Result<Json<Vec<Route>>, AppError> {
    let routes = RouteService::list(&state.db, user.id, &filter).await?;
    Ok(Json(routes))
}

/// Get one route by id
#[utoipa::path(
    get,
    path = "/api/routes/{route_id}",
    params(("route_id" = Uuid, Path, description = "Route id")),
    responses(
        (status = 200, description = "Route", body = Route),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Route not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Routes"
)]
#[instrument(skip_all)]
pub async fn get_route(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(route_id): Path<Uuid>,
) -> Result<Json<Route>, AppError> {
    let route = RouteService::get(&state.db, user.id, route_id).await?;
    Ok(Json(route))
}

/// Record a route
#[utoipa::path(
    post,
    path = "/api/routes",
    request_body = CreateRouteDto,
    responses(
        (status = 201, description = "Route created", body = Route),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Routes"
)]
#[instrument(skip_all)]
pub async fn create_route(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    ValidatedJson(dto): ValidatedJson<CreateRouteDto>,
) -> Result<(StatusCode, Json<Route>), AppError> {
    let route = RouteService::create(&state.db, user.id, dto).await?;
    Ok((StatusCode::CREATED, Json(route)))
}

/// Update a route
#[utoipa::path(
    put,
    path = "/api/routes/{route_id}",
    params(("route_id" = Uuid, Path, description = "Route id")),
    request_body = UpdateRouteDto,
    responses(
        (status = 200, description = "Route updated", body = Route),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Route not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Routes"
)]
#[instrument(skip_all)]
pub async fn update_route(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(route_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateRouteDto>,
) -> Result<Json<Route>, AppError> {
    let route = RouteService::update(&state.db, user.id, route_id, dto).await?;
    Ok(Json(route))
}

/// Delete a route
#[utoipa::path(
    delete,
    path = "/api/routes/{route_id}",
    params(("route_id" = Uuid, Path, description = "Route id")),
    responses(
        (status = 200, description = "Route deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Route not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Routes"
)]
#[instrument(skip_all)]
pub async fn delete_route(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(route_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    RouteService::delete(&state.db, user.id, route_id).await?;
    Ok(Json(MessageResponse {
        message: "Route deleted successfully".to_string(),
    }))
}
