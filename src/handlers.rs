use crate::data::{Goal, GoalUpdate};
use crate::errors::AppError;
use crate::insight;
use crate::models::{
    DayQuery, DaySummary, InsightResponse, MonthQuery, MonthResponse, NewGoalRequest,
    ReorderRequest, ToggleRequest, ToggleResponse, WeekQuery, WeekResponse,
};
use crate::state::AppState;
use crate::stats;
use crate::storage::{save_goals, save_logs};
use crate::ui::render_index;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
};
use chrono::{Datelike, Local, NaiveDate};

pub async fn index() -> Html<String> {
    Html(render_index(today()))
}

pub async fn list_goals(State(state): State<AppState>) -> Json<Vec<Goal>> {
    let data = state.data.lock().await;
    Json(data.goals.clone())
}

pub async fn create_goal(
    State(state): State<AppState>,
    Json(payload): Json<NewGoalRequest>,
) -> Result<Json<Goal>, AppError> {
    let mut data = state.data.lock().await;
    let Some(goal) = data.add_goal(&payload.title, payload.categories) else {
        return Err(AppError::bad_request(
            "a goal needs a title and at least one category",
        ));
    };
    save_goals(&state.data_dir, &data.goals).await?;

    let snapshot = data.clone();
    drop(data);
    insight::spawn_refresh(&state, snapshot);
    Ok(Json(goal))
}

pub async fn update_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<GoalUpdate>,
) -> Result<Json<Goal>, AppError> {
    let mut data = state.data.lock().await;
    if !data.update_goal(&id, update) {
        return Err(AppError::not_found("no such goal"));
    }
    save_goals(&state.data_dir, &data.goals).await?;

    let goal = data.goal(&id).cloned().ok_or_else(|| AppError::not_found("no such goal"))?;
    Ok(Json(goal))
}

pub async fn delete_goal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut data = state.data.lock().await;
    if data.delete_goal(&id) {
        // The cascade touches both collections.
        save_goals(&state.data_dir, &data.goals).await?;
        save_logs(&state.data_dir, &data.logs_vec()).await?;

        let snapshot = data.clone();
        drop(data);
        insight::spawn_refresh(&state, snapshot);
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn reorder_goals(
    State(state): State<AppState>,
    Json(payload): Json<ReorderRequest>,
) -> Result<Json<Vec<Goal>>, AppError> {
    let mut data = state.data.lock().await;
    if !data.reorder_goal(payload.from, payload.to) {
        return Err(AppError::bad_request("reorder index out of range"));
    }
    save_goals(&state.data_dir, &data.goals).await?;
    Ok(Json(data.goals.clone()))
}

pub async fn toggle(
    State(state): State<AppState>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, AppError> {
    let mut data = state.data.lock().await;
    if data.goal(&payload.goal_id).is_none() {
        return Err(AppError::bad_request("unknown goal id"));
    }

    let is_new_log = !data.logs.contains_key(&payload.date);
    let completed = data.toggle_completion(payload.date, &payload.goal_id);
    save_logs(&state.data_dir, &data.logs_vec()).await?;

    if is_new_log {
        let snapshot = data.clone();
        drop(data);
        insight::spawn_refresh(&state, snapshot);
    }

    Ok(Json(ToggleResponse {
        date: payload.date,
        goal_id: payload.goal_id,
        completed,
    }))
}

pub async fn get_day(
    State(state): State<AppState>,
    Query(query): Query<DayQuery>,
) -> Json<DaySummary> {
    let date = query.date.unwrap_or_else(today);
    let data = state.data.lock().await;
    Json(stats::day_summary(&data, date))
}

pub async fn get_week(
    State(state): State<AppState>,
    Query(query): Query<WeekQuery>,
) -> Json<WeekResponse> {
    let end = query.end.unwrap_or_else(today);
    let data = state.data.lock().await;
    Json(stats::build_week_at(end, &data))
}

pub async fn get_month(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthResponse>, AppError> {
    let now = today();
    let year = query.year.unwrap_or_else(|| now.year());
    let month = query.month.unwrap_or_else(|| now.month());
    let data = state.data.lock().await;
    let response = stats::build_month(year, month, &data)
        .ok_or_else(|| AppError::bad_request("invalid year or month"))?;
    Ok(Json(response))
}

pub async fn get_insight(State(state): State<AppState>) -> Json<InsightResponse> {
    let insight = state.insight.lock().await.clone();
    Json(InsightResponse { insight })
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
