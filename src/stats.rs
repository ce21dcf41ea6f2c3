use crate::data::AppData;
use crate::models::{
    DaySummary, HeatTier, MonthDayCell, MonthResponse, WeekDayPoint, WeekResponse,
};
use chrono::{Datelike, Duration, Local, NaiveDate};

/// Upper bound on the backward walk so a pathological log set cannot loop.
const STREAK_LOOKBACK_DAYS: u32 = 365;

pub fn day_summary(data: &AppData, date: NaiveDate) -> DaySummary {
    day_summary_at(Local::now().date_naive(), data, date)
}

pub fn day_summary_at(today: NaiveDate, data: &AppData, date: NaiveDate) -> DaySummary {
    let completed = data.logs.get(&date).cloned().unwrap_or_default();
    let goal_count = data.goals.len();
    DaySummary {
        date,
        completed_count: completed.len(),
        percent: percent(completed.len(), goal_count),
        completed_goal_ids: completed,
        goal_count,
        streak: streak_at(today, data),
    }
}

pub fn streak(data: &AppData) -> u32 {
    streak_at(Local::now().date_naive(), data)
}

/// Consecutive days with at least one completion, walking backward from
/// `today`. Today itself may be missing or empty without ending the streak
/// (the day is not over yet); any earlier gap terminates the walk.
pub fn streak_at(today: NaiveDate, data: &AppData) -> u32 {
    let mut count = 0;
    let mut date = today;
    for _ in 0..STREAK_LOOKBACK_DAYS {
        let active = data.logs.get(&date).is_some_and(|ids| !ids.is_empty());
        if active {
            count += 1;
        } else if date != today {
            break;
        }
        date = date - Duration::days(1);
    }
    count
}

pub fn build_week(data: &AppData) -> WeekResponse {
    build_week_at(Local::now().date_naive(), data)
}

/// Seven days ending at `end`, oldest first, plus the week total and the
/// completion percentage against `goal_count * 7`.
pub fn build_week_at(end: NaiveDate, data: &AppData) -> WeekResponse {
    let goal_count = data.goals.len();
    let mut days = Vec::with_capacity(7);
    let mut total = 0;
    for offset in (0..7).rev() {
        let date = end - Duration::days(offset);
        let count = data.logs.get(&date).map_or(0, |ids| ids.len());
        total += count;
        days.push(WeekDayPoint {
            date,
            label: date.format("%a").to_string(),
            count,
        });
    }

    WeekResponse {
        start_date: end - Duration::days(6),
        end_date: end,
        goal_count,
        days,
        total,
        percent: percent(total, goal_count * 7),
    }
}

/// Calendar grid for one month: a completion count and heat tier per day,
/// plus the month total and completion percentage. `None` when year/month do
/// not name a real month.
pub fn build_month(year: i32, month: u32, data: &AppData) -> Option<MonthResponse> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let day_count = days_in_month(year, month)?;
    let goal_count = data.goals.len();

    let mut days = Vec::with_capacity(day_count as usize);
    let mut total_actions = 0;
    for day in 1..=day_count {
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        let count = data.logs.get(&date).map_or(0, |ids| ids.len());
        total_actions += count;
        days.push(MonthDayCell {
            date,
            day,
            count,
            tier: heat_tier(count, goal_count),
        });
    }

    Some(MonthResponse {
        year,
        month,
        leading_blanks: first.weekday().num_days_from_sunday(),
        goal_count,
        days,
        total_actions,
        percent: percent(total_actions, goal_count * day_count as usize),
    })
}

pub fn heat_tier(count: usize, goal_count: usize) -> HeatTier {
    if count == 0 {
        return HeatTier::None;
    }
    if goal_count == 0 {
        return HeatTier::Activity;
    }
    let ratio = count as f64 / goal_count as f64;
    if ratio >= 0.8 {
        HeatTier::High
    } else if ratio >= 0.5 {
        HeatTier::Mid
    } else {
        HeatTier::Low
    }
}

/// Integer percentage, rounded; 0 when the maximum is 0.
fn percent(actual: usize, max: usize) -> u32 {
    if max == 0 {
        return 0;
    }
    (actual as f64 / max as f64 * 100.0).round() as u32
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next - first).num_days() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{AppData, Category};
    use std::collections::BTreeSet;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn data_with_goals(n: usize) -> AppData {
        let mut data = AppData::default();
        for i in 0..n {
            let categories: BTreeSet<Category> = [Category::Other].into_iter().collect();
            data.add_goal(&format!("Goal {i}"), categories).unwrap();
        }
        data
    }

    fn complete(data: &mut AppData, day: &str, n: usize) {
        let ids: Vec<String> = data.goals.iter().take(n).map(|g| g.id.clone()).collect();
        for id in ids {
            data.toggle_completion(date(day), &id);
        }
    }

    #[test]
    fn streak_counts_consecutive_days() {
        let mut data = data_with_goals(3);
        complete(&mut data, "2026-08-30", 1);
        complete(&mut data, "2026-08-29", 2);
        complete(&mut data, "2026-08-28", 1);
        // no log on 2026-08-27

        assert_eq!(streak_at(date("2026-08-30"), &data), 3);
    }

    #[test]
    fn streak_tolerates_missing_today() {
        let mut data = data_with_goals(3);
        complete(&mut data, "2026-08-29", 1);

        assert_eq!(streak_at(date("2026-08-30"), &data), 1);
    }

    #[test]
    fn streak_breaks_on_empty_log_before_today() {
        let mut data = data_with_goals(3);
        // Log exists for yesterday but holds no completions.
        let id = data.goals[0].id.clone();
        data.toggle_completion(date("2026-08-29"), &id);
        data.toggle_completion(date("2026-08-29"), &id);
        complete(&mut data, "2026-08-28", 1);

        assert_eq!(streak_at(date("2026-08-30"), &data), 0);
    }

    #[test]
    fn streak_is_zero_with_no_logs() {
        let data = data_with_goals(3);
        assert_eq!(streak_at(date("2026-08-30"), &data), 0);
    }

    #[test]
    fn streak_stops_at_lookback_bound() {
        let mut data = data_with_goals(1);
        let today = date("2026-08-30");
        let id = data.goals[0].id.clone();
        for offset in 0..400i64 {
            data.toggle_completion(today - Duration::days(offset), &id);
        }

        assert_eq!(streak_at(today, &data), STREAK_LOOKBACK_DAYS);
    }

    #[test]
    fn day_summary_for_unlogged_date_is_empty() {
        let data = data_with_goals(4);
        let summary = day_summary_at(date("2026-08-30"), &data, date("2026-08-15"));
        assert!(summary.completed_goal_ids.is_empty());
        assert_eq!(summary.completed_count, 0);
        assert_eq!(summary.goal_count, 4);
        assert_eq!(summary.percent, 0);
    }

    #[test]
    fn week_percent_half_complete() {
        let mut data = data_with_goals(4);
        // 14 completions across the window: 4 + 4 + 4 + 2.
        complete(&mut data, "2026-08-30", 4);
        complete(&mut data, "2026-08-28", 4);
        complete(&mut data, "2026-08-26", 4);
        complete(&mut data, "2026-08-24", 2);

        let week = build_week_at(date("2026-08-30"), &data);
        assert_eq!(week.days.len(), 7);
        assert_eq!(week.start_date, date("2026-08-24"));
        assert_eq!(week.end_date, date("2026-08-30"));
        assert_eq!(week.total, 14);
        assert_eq!(week.percent, 50);
    }

    #[test]
    fn week_days_run_oldest_to_newest() {
        let data = data_with_goals(1);
        let week = build_week_at(date("2026-08-30"), &data);
        let dates: Vec<NaiveDate> = week.days.iter().map(|d| d.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted);
        assert_eq!(week.days[6].date, date("2026-08-30"));
        assert_eq!(week.days[6].label, "Sun");
    }

    #[test]
    fn week_percent_zero_goals() {
        let mut data = AppData::default();
        data.toggle_completion(date("2026-08-30"), "ghost");
        let week = build_week_at(date("2026-08-30"), &data);
        assert_eq!(week.percent, 0);
        assert_eq!(week.total, 1);
    }

    #[test]
    fn heat_tiers_by_ratio() {
        assert_eq!(heat_tier(4, 5), HeatTier::High);
        assert_eq!(heat_tier(2, 5), HeatTier::Low);
        assert_eq!(heat_tier(3, 5), HeatTier::Mid);
        assert_eq!(heat_tier(0, 5), HeatTier::None);
        assert_eq!(heat_tier(0, 0), HeatTier::None);
        assert_eq!(heat_tier(2, 0), HeatTier::Activity);
    }

    #[test]
    fn month_grid_shape_and_totals() {
        let mut data = data_with_goals(5);
        complete(&mut data, "2026-02-01", 4);
        complete(&mut data, "2026-02-10", 2);
        // Outside the month, must not count.
        complete(&mut data, "2026-03-01", 5);

        let month = build_month(2026, 2, &data).unwrap();
        assert_eq!(month.days.len(), 28);
        // 2026-02-01 is a Sunday.
        assert_eq!(month.leading_blanks, 0);
        assert_eq!(month.total_actions, 6);
        assert_eq!(month.days[0].tier, HeatTier::High);
        assert_eq!(month.days[9].tier, HeatTier::Low);
        assert_eq!(month.days[1].tier, HeatTier::None);
        // round(6 / (5 * 28) * 100) = 4
        assert_eq!(month.percent, 4);
    }

    #[test]
    fn month_handles_leap_february() {
        let data = data_with_goals(1);
        assert_eq!(build_month(2028, 2, &data).unwrap().days.len(), 29);
        assert_eq!(build_month(2026, 12, &data).unwrap().days.len(), 31);
        assert!(build_month(2026, 13, &data).is_none());
        assert!(build_month(2026, 0, &data).is_none());
    }

    #[test]
    fn month_percent_zero_goals() {
        let mut data = AppData::default();
        data.toggle_completion(date("2026-08-05"), "ghost");
        let month = build_month(2026, 8, &data).unwrap();
        assert_eq!(month.percent, 0);
        assert_eq!(month.total_actions, 1);
        assert_eq!(month.days[4].tier, HeatTier::Activity);
    }
}
