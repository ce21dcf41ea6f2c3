use crate::data::Category;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub date: NaiveDate,
    pub goal_id: String,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub date: NaiveDate,
    pub goal_id: String,
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct NewGoalRequest {
    pub title: String,
    pub categories: BTreeSet<Category>,
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// Selected-day progress plus the current streak for the quick-stats cards.
#[derive(Debug, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub completed_goal_ids: BTreeSet<String>,
    pub completed_count: usize,
    pub goal_count: usize,
    pub percent: u32,
    pub streak: u32,
}

#[derive(Debug, Serialize)]
pub struct WeekDayPoint {
    pub date: NaiveDate,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct WeekResponse {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub goal_count: usize,
    pub days: Vec<WeekDayPoint>,
    pub total: usize,
    pub percent: u32,
}

/// Discrete bucket for the monthly calendar heat coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeatTier {
    None,
    /// Completions recorded while no goals are defined; no ratio to rank.
    Activity,
    Low,
    Mid,
    High,
}

#[derive(Debug, Serialize)]
pub struct MonthDayCell {
    pub date: NaiveDate,
    pub day: u32,
    pub count: usize,
    pub tier: HeatTier,
}

#[derive(Debug, Serialize)]
pub struct MonthResponse {
    pub year: i32,
    pub month: u32,
    /// Weekday index of day 1 (Sunday = 0), used to pad the calendar grid.
    pub leading_blanks: u32,
    pub goal_count: usize,
    pub days: Vec<MonthDayCell>,
    pub total_actions: usize,
    pub percent: u32,
}

#[derive(Debug, Serialize)]
pub struct InsightResponse {
    pub insight: Option<String>,
}
