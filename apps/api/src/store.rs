//! Diary Store: the process-wide entry collection and its mutation API.
//!
//! The collection lives behind a single `RwLock`. Remote calls are awaited
//! without holding the lock and the result is applied afterwards, so
//! concurrent mutations land in completion order. Every applied change bumps
//! a `watch` revision that subscribers can await.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;
use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::insights::filters::{filter_entries, DateFilter};
use crate::models::entry::{DiaryEntry, EntryDraft, EntryPatch};
use crate::repository::{EntryRepository, SaveOutcome};

#[derive(Debug, Default)]
struct StoreState {
    entries: Vec<DiaryEntry>,
    loaded: bool,
    /// Loads started but not yet applied.
    pending_loads: usize,
}

impl StoreState {
    fn is_loading(&self) -> bool {
        !self.loaded || self.pending_loads > 0
    }
}

/// Read-only view of the collection handed to the presentation layer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StoreSnapshot {
    pub entries: Vec<DiaryEntry>,
    pub loading: bool,
    /// Change counter at the time of the read.
    pub revision: u64,
}

#[derive(Clone)]
pub struct DiaryStore {
    repo: Arc<dyn EntryRepository>,
    state: Arc<RwLock<StoreState>>,
    revision: Arc<watch::Sender<u64>>,
}

impl DiaryStore {
    /// Creates an empty store in the loading state. Call
    /// [`DiaryStore::spawn_initial_load`] to populate it.
    pub fn new(repo: Arc<dyn EntryRepository>) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            repo,
            state: Arc::new(RwLock::new(StoreState::default())),
            revision: Arc::new(revision),
        }
    }

    pub fn spawn_initial_load(&self) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move { store.refresh().await })
    }

    /// Receiver whose value increases after every applied change.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    fn notify(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }

    /// Reloads the whole collection from the repository. The store reports
    /// `loading` until every overlapping reload has landed.
    pub async fn refresh(&self) {
        self.state.write().await.pending_loads += 1;
        let entries = self.repo.list_entries().await;
        let count = entries.len();
        {
            let mut state = self.state.write().await;
            state.entries = entries;
            state.loaded = true;
            state.pending_loads -= 1;
        }
        info!("Diary store loaded {count} entries");
        self.notify();
    }

    /// Creates the entry and puts it at the front of the collection,
    /// regardless of its `date`.
    pub async fn add(&self, draft: EntryDraft) -> SaveOutcome {
        let outcome = self.repo.create_entry(draft).await;
        self.state
            .write()
            .await
            .entries
            .insert(0, outcome.entry().clone());
        debug!(
            "Added entry {} (persisted: {})",
            outcome.entry().id,
            outcome.is_persisted()
        );
        self.notify();
        outcome
    }

    /// Replaces the matching entry in place with the repository's result.
    /// Leaves the collection untouched when the repository returns `None`.
    pub async fn update(&self, id: &str, patch: EntryPatch) -> Option<DiaryEntry> {
        let updated = self.repo.update_entry(id, patch).await?;
        {
            let mut state = self.state.write().await;
            if let Some(slot) = state.entries.iter_mut().find(|e| e.id == id) {
                *slot = updated.clone();
            }
        }
        debug!("Updated entry {id}");
        self.notify();
        Some(updated)
    }

    pub async fn remove(&self, id: &str) -> bool {
        if !self.repo.delete_entry(id).await {
            return false;
        }
        self.state.write().await.entries.retain(|e| e.id != id);
        debug!("Removed entry {id}");
        self.notify();
        true
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        let state = self.state.read().await;
        StoreSnapshot {
            entries: state.entries.clone(),
            loading: state.is_loading(),
            revision: *self.revision.borrow(),
        }
    }

    pub async fn entries(&self) -> Vec<DiaryEntry> {
        self.state.read().await.entries.clone()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading()
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.state.read().await.entries.iter().any(|e| e.id == id)
    }

    /// Entries dated on the current local calendar day, in collection order.
    pub async fn todays_entries(&self) -> Vec<DiaryEntry> {
        self.entries_on_day_of(&Local::now()).await
    }

    pub async fn entries_on_day_of<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Vec<DiaryEntry> {
        let state = self.state.read().await;
        filter_entries(&state.entries, DateFilter::Today, now)
    }
}
