use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    create_goal_category, delete_goal_category, get_goal_category, list_goal_categories,
    update_goal_category,
};

pub fn init_goals_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_goal_categories).post(create_goal_category))
        .route(
            "/{category_id}",
            get(get_goal_category)
                .put(update_goal_category)
                .delete(delete_goal_category),
        )
}
