//! In-memory repository used by store and route tests.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::entry::{DiaryEntry, EntryDraft, EntryPatch, MealType};
use crate::repository::{fallback_entries, local_entry, EntryRepository, LocalIds, SaveOutcome};

#[derive(Default)]
pub struct MemoryRepository {
    pub rows: Mutex<Vec<DiaryEntry>>,
    offline: AtomicBool,
    next_id: AtomicU32,
    local_ids: LocalIds,
    /// Simulated remote latency for creates, keyed by the draft's first food.
    create_delays: Mutex<Vec<(String, Duration)>>,
    list_delay: Mutex<Option<Duration>>,
    update_delay: Mutex<Option<Duration>>,
}

impl MemoryRepository {
    pub fn with_rows(rows: Vec<DiaryEntry>) -> Self {
        let repo = Self::default();
        *repo.rows.lock().unwrap() = rows;
        repo
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn delay_create(&self, first_food: &str, delay: Duration) {
        self.create_delays
            .lock()
            .unwrap()
            .push((first_food.to_string(), delay));
    }

    pub fn delay_list(&self, delay: Option<Duration>) {
        *self.list_delay.lock().unwrap() = delay;
    }

    pub fn delay_update(&self, delay: Option<Duration>) {
        *self.update_delay.lock().unwrap() = delay;
    }

    fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EntryRepository for MemoryRepository {
    async fn list_entries(&self) -> Vec<DiaryEntry> {
        let delay = *self.list_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.is_offline() {
            return fallback_entries();
        }
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        rows
    }

    async fn create_entry(&self, draft: EntryDraft) -> SaveOutcome {
        let delay = draft.foods.first().and_then(|food| {
            self.create_delays
                .lock()
                .unwrap()
                .iter()
                .find(|(f, _)| f == food)
                .map(|(_, d)| *d)
        });
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.is_offline() {
            return local_entry(draft, &self.local_ids);
        }
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now();
        let entry = draft.into_entry(format!("mem-{n}"), now, now);
        self.rows.lock().unwrap().push(entry.clone());
        SaveOutcome::Persisted(entry)
    }

    async fn update_entry(&self, id: &str, patch: EntryPatch) -> Option<DiaryEntry> {
        let delay = *self.update_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.is_offline() {
            return None;
        }
        let mut rows = self.rows.lock().unwrap();
        let row = rows.iter_mut().find(|r| r.id == id)?;
        apply_patch(row, patch);
        row.updated_at = Utc::now();
        Some(row.clone())
    }

    async fn delete_entry(&self, id: &str) -> bool {
        if self.is_offline() {
            return false;
        }
        self.rows.lock().unwrap().retain(|r| r.id != id);
        true
    }
}

fn apply_patch(entry: &mut DiaryEntry, patch: EntryPatch) {
    let EntryPatch {
        date,
        meal_type,
        foods,
        hunger_level,
        satisfaction_level,
        emotions_before,
        emotions_after,
        thoughts,
        context,
        location,
        companions,
        photo,
    } = patch;
    if let Some(v) = date {
        entry.date = v;
    }
    if let Some(v) = meal_type {
        entry.meal_type = v;
    }
    if let Some(v) = foods {
        entry.foods = v;
    }
    if let Some(v) = hunger_level {
        entry.hunger_level = v;
    }
    if let Some(v) = satisfaction_level {
        entry.satisfaction_level = v;
    }
    if let Some(v) = emotions_before {
        entry.emotions_before = v;
    }
    if let Some(v) = emotions_after {
        entry.emotions_after = v;
    }
    if let Some(v) = thoughts {
        entry.thoughts = v;
    }
    if let Some(v) = context {
        entry.context = v;
    }
    if let Some(v) = location {
        entry.location = v;
    }
    if let Some(v) = companions {
        entry.companions = v;
    }
    if let Some(v) = photo {
        entry.photo = v;
    }
}

pub fn draft_at(date: DateTime<Utc>, foods: &[&str]) -> EntryDraft {
    EntryDraft {
        date,
        meal_type: MealType::Lunch,
        foods: foods.iter().map(|f| f.to_string()).collect(),
        hunger_level: 5,
        satisfaction_level: 5,
        emotions_before: vec![],
        emotions_after: vec![],
        thoughts: String::new(),
        context: String::new(),
        location: String::new(),
        companions: String::new(),
        photo: None,
    }
}

pub fn entry_at(id: &str, date: DateTime<Utc>) -> DiaryEntry {
    draft_at(date, &["Arroz"]).into_entry(id.to_string(), date, date)
}
