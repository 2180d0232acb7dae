use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_route, delete_route, get_route, list_routes, update_route};

pub fn init_routes_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_routes).post(create_route))
        .route(
            "/{route_id}",
            get(get_route).put(update_route).delete(delete_route),
        )
}
