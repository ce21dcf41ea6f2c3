use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/goals", get(handlers::list_goals).post(handlers::create_goal))
        .route("/api/goals/reorder", post(handlers::reorder_goals))
        .route("/api/goals/:id", patch(handlers::update_goal).delete(handlers::delete_goal))
        .route("/api/toggle", post(handlers::toggle))
        .route("/api/day", get(handlers::get_day))
        .route("/api/week", get(handlers::get_week))
        .route("/api/month", get(handlers::get_month))
        .route("/api/insight", get(handlers::get_insight))
        .with_state(state)
}
