//! Entry Repository: create/read/update/delete of diary entries against the
//! remote store.
//!
//! Every operation is infallible from the caller's point of view: remote
//! failures are logged and replaced by the per-operation fallback.
//!
//! | Operation | On remote failure |
//! |-----------|-------------------|
//! | list      | fixed fallback entries |
//! | create    | locally synthesised entry, tagged `LocalOnly` |
//! | update    | `None` |
//! | delete    | `false` |

pub mod supabase;

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;

use crate::models::entry::{DiaryEntry, EntryDraft, EntryPatch, MealType};

/// Result of a create: whether the remote store durably accepted the entry or
/// it only exists in this process.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "durability", content = "entry", rename_all = "snake_case")]
pub enum SaveOutcome {
    Persisted(DiaryEntry),
    LocalOnly(DiaryEntry),
}

impl SaveOutcome {
    pub fn entry(&self) -> &DiaryEntry {
        match self {
            SaveOutcome::Persisted(e) | SaveOutcome::LocalOnly(e) => e,
        }
    }

    pub fn is_persisted(&self) -> bool {
        matches!(self, SaveOutcome::Persisted(_))
    }
}

/// Storage backend for diary entries. Implementations never surface errors.
///
/// Carried by the store as `Arc<dyn EntryRepository>`.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// All entries, newest `date` first.
    async fn list_entries(&self) -> Vec<DiaryEntry>;

    async fn create_entry(&self, draft: EntryDraft) -> SaveOutcome;

    /// Applies `patch` and refreshes `updated_at`. `None` if the remote update failed.
    async fn update_entry(&self, id: &str, patch: EntryPatch) -> Option<DiaryEntry>;

    async fn delete_entry(&self, id: &str) -> bool;
}

/// The single entry served when the remote store cannot be listed.
pub fn fallback_entries() -> Vec<DiaryEntry> {
    let now = Utc::now();
    vec![DiaryEntry {
        id: "1".to_string(),
        date: now,
        meal_type: MealType::Breakfast,
        foods: vec!["Aveia com frutas".to_string(), "Chá de camomila".to_string()],
        hunger_level: 6,
        satisfaction_level: 8,
        emotions_before: vec!["Ansioso".to_string(), "Neutro".to_string()],
        emotions_after: vec!["Calmo".to_string(), "Grato".to_string()],
        thoughts: "Foi uma manhã tranquila. Consegui comer sem pressa.".to_string(),
        context: "Casa, assistindo notícias".to_string(),
        location: "Cozinha".to_string(),
        companions: "Sozinho".to_string(),
        photo: None,
        created_at: now,
        updated_at: now,
    }]
}

/// Issues ids for entries that never reached the remote store.
///
/// Ids are the current time in milliseconds, bumped past the last issued id
/// so two fallbacks within the same millisecond stay distinct.
#[derive(Debug, Default)]
pub struct LocalIds {
    last: AtomicI64,
}

impl LocalIds {
    pub fn next(&self) -> String {
        let now = Utc::now().timestamp_millis();
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(prev + 1);
            match self
                .last
                .compare_exchange_weak(prev, candidate, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return candidate.to_string(),
                Err(actual) => prev = actual,
            }
        }
    }
}

/// Builds the `LocalOnly` entry returned when a create could not be persisted.
pub fn local_entry(draft: EntryDraft, ids: &LocalIds) -> SaveOutcome {
    let now = Utc::now();
    SaveOutcome::LocalOnly(draft.into_entry(ids.next(), now, now))
}
