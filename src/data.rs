use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

/// Fixed set of category tags a goal can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Health,
    Learning,
    Productivity,
    Mindfulness,
    Finance,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub categories: BTreeSet<Category>,
    pub created_at: DateTime<Utc>,
}

/// One day's completions, as stored on disk. In memory the logs live in a
/// date-keyed map instead; see [`AppData`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLog {
    pub date: NaiveDate,
    pub completed_goal_ids: BTreeSet<String>,
}

/// The goal list (ordered, position is meaningful) and the per-day
/// completion logs. All mutations go through the methods here so validation
/// cannot be bypassed by callers.
#[derive(Debug, Clone, Default)]
pub struct AppData {
    pub goals: Vec<Goal>,
    pub logs: BTreeMap<NaiveDate, BTreeSet<String>>,
}

/// Partial goal update; absent fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct GoalUpdate {
    pub title: Option<String>,
    pub categories: Option<BTreeSet<Category>>,
}

impl AppData {
    pub fn from_parts(goals: Vec<Goal>, logs: Vec<DailyLog>) -> Self {
        let mut map: BTreeMap<NaiveDate, BTreeSet<String>> = BTreeMap::new();
        for log in logs {
            // Duplicate dates should not exist in storage; union if they do.
            map.entry(log.date).or_default().extend(log.completed_goal_ids);
        }
        Self { goals, logs: map }
    }

    /// Logs in storage form, ordered by date.
    pub fn logs_vec(&self) -> Vec<DailyLog> {
        self.logs
            .iter()
            .map(|(date, ids)| DailyLog {
                date: *date,
                completed_goal_ids: ids.clone(),
            })
            .collect()
    }

    pub fn goal(&self, id: &str) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    /// Flips membership of `goal_id` in the log for `date`, creating the log
    /// entry if it does not exist yet. Returns the new membership state.
    pub fn toggle_completion(&mut self, date: NaiveDate, goal_id: &str) -> bool {
        let ids = self.logs.entry(date).or_default();
        if ids.remove(goal_id) {
            false
        } else {
            ids.insert(goal_id.to_string());
            true
        }
    }

    /// Appends a new goal. Rejected (returns `None`, no state change) when
    /// the title is empty after trimming or no category is given.
    pub fn add_goal(&mut self, title: &str, categories: BTreeSet<Category>) -> Option<Goal> {
        let title = title.trim();
        if title.is_empty() || categories.is_empty() {
            return None;
        }
        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            categories,
            created_at: Utc::now(),
        };
        self.goals.push(goal.clone());
        Some(goal)
    }

    /// Merges the provided fields into an existing goal. A title that would
    /// become empty or a category set that would become empty is dropped for
    /// that field, keeping the current value. Returns `false` only when the
    /// id is unknown.
    pub fn update_goal(&mut self, id: &str, update: GoalUpdate) -> bool {
        let Some(goal) = self.goals.iter_mut().find(|g| g.id == id) else {
            return false;
        };
        if let Some(title) = update.title {
            let title = title.trim();
            if !title.is_empty() {
                goal.title = title.to_string();
            }
        }
        if let Some(categories) = update.categories {
            if !categories.is_empty() {
                goal.categories = categories;
            }
        }
        true
    }

    /// Removes the goal and purges its id from every log. Unknown id is a
    /// no-op. Logs stay in place even when the purge empties them.
    pub fn delete_goal(&mut self, id: &str) -> bool {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        if self.goals.len() == before {
            return false;
        }
        for ids in self.logs.values_mut() {
            ids.remove(id);
        }
        true
    }

    /// Moves the goal at `from` to position `to`. Out-of-range indices are
    /// rejected without touching the list.
    pub fn reorder_goal(&mut self, from: usize, to: usize) -> bool {
        if from >= self.goals.len() || to >= self.goals.len() {
            return false;
        }
        let goal = self.goals.remove(from);
        self.goals.insert(to, goal);
        true
    }
}

/// Goals seeded on first run, when no stored goal list exists.
pub fn default_goals() -> Vec<Goal> {
    use Category::*;
    let seeds: [(&str, &[Category]); 14] = [
        ("Meditate", &[Mindfulness]),
        ("Practice ASL", &[Learning]),
        ("Practice Spanish", &[Learning]),
        ("Walk", &[Health, Mindfulness]),
        ("Hit Protein Goal", &[Health]),
        ("Pamper / Self Care", &[Mindfulness]),
        ("Complete the Crossword", &[Learning]),
        ("Cook", &[Productivity]),
        ("Ali", &[Other]),
        ("Clean", &[Productivity]),
        ("Read", &[Learning]),
        ("Write", &[Learning]),
        ("Journal", &[Mindfulness]),
        ("Workout", &[Health]),
    ];
    let now = Utc::now();
    seeds
        .iter()
        .map(|(title, categories)| Goal {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            categories: categories.iter().copied().collect(),
            created_at: now,
        })
        .collect()
}
