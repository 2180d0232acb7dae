use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    get_best_performances, get_dashboard_stats, get_grade_progression, get_monthly_volume,
};

pub fn init_stats_router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(get_dashboard_stats))
        .route("/monthly-volume", get(get_monthly_volume))
        .route("/progression/{grade}", get(get_grade_progression))
        .route("/best-performances", get(get_best_performances))
}
