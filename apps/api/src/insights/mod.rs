//! Insights Aggregator: summary statistics derived from the entry
//! collection, recomputed on every call.

pub mod filters;

use serde::{Deserialize, Serialize};

use crate::models::entry::DiaryEntry;

pub use filters::{filter_entries, DateFilter};

/// Number of emotions reported in `most_common_emotions`.
const TOP_EMOTIONS: usize = 3;
/// Upper bound of the practice-days counter.
const STREAK_CAP: usize = 7;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Insights {
    pub total_entries: usize,
    pub average_hunger: f64,
    pub average_satisfaction: f64,
    pub most_common_emotions: Vec<String>,
    pub streak_days: usize,
}

pub fn compute_insights(entries: &[DiaryEntry]) -> Insights {
    let total_entries = entries.len();
    Insights {
        total_entries,
        average_hunger: average(entries.iter().map(|e| e.hunger_level)),
        average_satisfaction: average(entries.iter().map(|e| e.satisfaction_level)),
        most_common_emotions: most_common_emotions(entries, TOP_EMOTIONS),
        // Entry count capped at a week, not a consecutive-day streak.
        streak_days: total_entries.min(STREAK_CAP),
    }
}

/// Mean rounded to one decimal place; 0 for no values.
fn average(values: impl Iterator<Item = i32>) -> f64 {
    let (sum, count) = values.fold((0i64, 0usize), |(s, c), v| (s + i64::from(v), c + 1));
    if count == 0 {
        return 0.0;
    }
    round_one_decimal(sum as f64 / count as f64)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Top `limit` emotion names by number of mentions, before and after the
/// meal counted separately. Ties keep first-seen order.
pub fn most_common_emotions(entries: &[DiaryEntry], limit: usize) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let names = entries
        .iter()
        .flat_map(|e| e.emotions_before.iter().chain(&e.emotions_after));
    for name in names {
        let name = name.as_str();
        match counts.iter_mut().find(|(n, _)| *n == name) {
            Some((_, count)) => *count += 1,
            None => counts.push((name, 1)),
        }
    }
    // sort_by is stable, so equal counts stay in scan order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(name, _)| name.to_string())
        .collect()
}
