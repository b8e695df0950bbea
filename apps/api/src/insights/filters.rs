use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::models::entry::DiaryEntry;

/// Date-range views over the entry collection.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DateFilter {
    /// Same calendar day as `now`, in `now`'s time zone.
    Today,
    /// Rolling 168 hours ending at `now`.
    Week,
    #[default]
    All,
}

/// True when `date` falls on the same calendar day as `now` in `now`'s zone.
pub fn is_same_day<Tz: TimeZone>(date: &DateTime<Utc>, now: &DateTime<Tz>) -> bool {
    date.with_timezone(&now.timezone()).date_naive() == now.date_naive()
}

/// Entries matching `filter`, in collection order.
pub fn filter_entries<Tz: TimeZone>(
    entries: &[DiaryEntry],
    filter: DateFilter,
    now: &DateTime<Tz>,
) -> Vec<DiaryEntry> {
    let week_start = now.with_timezone(&Utc) - Duration::days(7);
    entries
        .iter()
        .filter(|e| match filter {
            DateFilter::Today => is_same_day(&e.date, now),
            DateFilter::Week => e.date >= week_start,
            DateFilter::All => true,
        })
        .cloned()
        .collect()
}
