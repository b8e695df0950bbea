//! Wire shapes of the `diary_entries` table and their mapping onto the
//! in-memory entry types. Columns are snake_case; optional text columns may
//! come back as `null` or be missing entirely.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::entry::{DiaryEntry, EntryDraft, EntryPatch, MealType};

/// A full row as returned by the remote store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiaryEntryRow {
    pub id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub date: DateTime<Utc>,
    pub meal_type: MealType,
    pub foods: Vec<String>,
    pub hunger_level: i32,
    pub satisfaction_level: i32,
    #[serde(default)]
    pub emotions_before: Vec<String>,
    #[serde(default)]
    pub emotions_after: Vec<String>,
    #[serde(default)]
    pub thoughts: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub companions: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DiaryEntryRow> for DiaryEntry {
    fn from(row: DiaryEntryRow) -> Self {
        DiaryEntry {
            id: row.id,
            date: row.date,
            meal_type: row.meal_type,
            foods: row.foods,
            hunger_level: row.hunger_level,
            satisfaction_level: row.satisfaction_level,
            emotions_before: row.emotions_before,
            emotions_after: row.emotions_after,
            thoughts: row.thoughts.unwrap_or_default(),
            context: row.context.unwrap_or_default(),
            location: row.location.unwrap_or_default(),
            companions: row.companions.unwrap_or_default(),
            photo: non_empty(row.photo_url),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<&DiaryEntry> for DiaryEntryRow {
    fn from(entry: &DiaryEntry) -> Self {
        DiaryEntryRow {
            id: entry.id.clone(),
            user_id: None,
            date: entry.date,
            meal_type: entry.meal_type,
            foods: entry.foods.clone(),
            hunger_level: entry.hunger_level,
            satisfaction_level: entry.satisfaction_level,
            emotions_before: entry.emotions_before.clone(),
            emotions_after: entry.emotions_after.clone(),
            thoughts: Some(entry.thoughts.clone()),
            context: Some(entry.context.clone()),
            location: Some(entry.location.clone()),
            companions: Some(entry.companions.clone()),
            photo_url: non_empty(entry.photo.clone()),
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

/// Insert payload. `user_id` is always sent as `null`; ownership is left to
/// the store's row-level policies.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewEntryRow {
    pub user_id: Option<String>,
    pub date: DateTime<Utc>,
    pub meal_type: MealType,
    pub foods: Vec<String>,
    pub hunger_level: i32,
    pub satisfaction_level: i32,
    pub emotions_before: Vec<String>,
    pub emotions_after: Vec<String>,
    pub thoughts: String,
    pub context: String,
    pub location: String,
    pub companions: String,
    pub photo_url: Option<String>,
}

impl From<&EntryDraft> for NewEntryRow {
    fn from(draft: &EntryDraft) -> Self {
        NewEntryRow {
            user_id: None,
            date: draft.date,
            meal_type: draft.meal_type,
            foods: draft.foods.clone(),
            hunger_level: draft.hunger_level,
            satisfaction_level: draft.satisfaction_level,
            emotions_before: draft.emotions_before.clone(),
            emotions_after: draft.emotions_after.clone(),
            thoughts: draft.thoughts.clone(),
            context: draft.context.clone(),
            location: draft.location.clone(),
            companions: draft.companions.clone(),
            photo_url: non_empty(draft.photo.clone()),
        }
    }
}

/// Update payload. Only the columns present in the patch are sent, plus a
/// refreshed `updated_at`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EntryPatchRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foods: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hunger_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub satisfaction_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotions_before: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotions_after: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thoughts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<Option<String>>,
    pub updated_at: DateTime<Utc>,
}

impl EntryPatchRow {
    pub fn from_patch(patch: &EntryPatch, updated_at: DateTime<Utc>) -> Self {
        EntryPatchRow {
            date: patch.date,
            meal_type: patch.meal_type,
            foods: patch.foods.clone(),
            hunger_level: patch.hunger_level,
            satisfaction_level: patch.satisfaction_level,
            emotions_before: patch.emotions_before.clone(),
            emotions_after: patch.emotions_after.clone(),
            thoughts: patch.thoughts.clone(),
            context: patch.context.clone(),
            location: patch.location.clone(),
            companions: patch.companions.clone(),
            photo_url: patch.photo.clone().map(non_empty),
            updated_at,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
