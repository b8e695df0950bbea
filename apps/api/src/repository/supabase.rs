//! Supabase/PostgREST-backed entry repository.
//!
//! Talks to `{SUPABASE_URL}/rest/v1/{table}` with the anon key as both
//! `apikey` and bearer token. Row ownership is decided by the store's
//! row-level policies; this client never sets `user_id`.
//!
//! No retries: each remote failure is handled exactly once by the fallback
//! policy of the calling operation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{header::ACCEPT, Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::config::Config;
use crate::models::entry::{DiaryEntry, EntryDraft, EntryPatch};
use crate::models::row::{DiaryEntryRow, EntryPatchRow, NewEntryRow};
use crate::repository::{fallback_entries, local_entry, EntryRepository, LocalIds, SaveOutcome};

const REST_PATH: &str = "rest/v1";
/// Asks PostgREST for exactly one row as a bare object; zero or many rows is a 406.
const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";
const RETURN_REPRESENTATION: &str = "return=representation";

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Store error (status {status}): {message}")]
    Store { status: u16, message: String },
}

#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
}

#[derive(Clone)]
pub struct SupabaseRepository {
    client: Client,
    table_url: String,
    api_key: String,
    local_ids: Arc<LocalIds>,
}

impl SupabaseRepository {
    pub fn new(
        base_url: &str,
        api_key: String,
        table: &str,
        timeout: Duration,
    ) -> Result<Self, RemoteError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            table_url: format!("{}/{REST_PATH}/{table}", base_url.trim_end_matches('/')),
            api_key,
            local_ids: Arc::new(LocalIds::default()),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, RemoteError> {
        Self::new(
            &config.supabase_url,
            config.supabase_anon_key.clone(),
            &config.diary_table,
            Duration::from_secs(config.remote_timeout_secs),
        )
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, &self.table_url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    pub async fn fetch_entries(&self) -> Result<Vec<DiaryEntryRow>, RemoteError> {
        let response = self
            .request(Method::GET)
            .query(&[("select", "*"), ("order", "date.desc")])
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    pub async fn insert_entry(&self, row: &NewEntryRow) -> Result<DiaryEntryRow, RemoteError> {
        let response = self
            .request(Method::POST)
            .header("Prefer", RETURN_REPRESENTATION)
            .header(ACCEPT, SINGLE_OBJECT)
            .json(&[row])
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    pub async fn patch_entry(
        &self,
        id: &str,
        row: &EntryPatchRow,
    ) -> Result<DiaryEntryRow, RemoteError> {
        let response = self
            .request(Method::PATCH)
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", RETURN_REPRESENTATION)
            .header(ACCEPT, SINGLE_OBJECT)
            .json(row)
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    pub async fn remove_entry(&self, id: &str) -> Result<(), RemoteError> {
        let response = self
            .request(Method::DELETE)
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

/// Turns a non-2xx response into `RemoteError::Store`, preferring the
/// PostgREST error message over the raw body.
async fn check_status(response: Response) -> Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<PostgrestError>(&body)
        .map(|e| e.message)
        .unwrap_or(body);
    Err(RemoteError::Store {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl EntryRepository for SupabaseRepository {
    async fn list_entries(&self) -> Vec<DiaryEntry> {
        match self.fetch_entries().await {
            Ok(rows) => {
                debug!("Fetched {} diary entries", rows.len());
                rows.into_iter().map(DiaryEntry::from).collect()
            }
            Err(e) => {
                error!("Error fetching entries: {e}");
                warn!("Serving fallback diary entries");
                fallback_entries()
            }
        }
    }

    async fn create_entry(&self, draft: EntryDraft) -> SaveOutcome {
        match self.insert_entry(&NewEntryRow::from(&draft)).await {
            Ok(row) => {
                debug!("Created diary entry {}", row.id);
                SaveOutcome::Persisted(row.into())
            }
            Err(e) => {
                error!("Error creating entry: {e}");
                let outcome = local_entry(draft, &self.local_ids);
                warn!("Entry {} kept locally only", outcome.entry().id);
                outcome
            }
        }
    }

    async fn update_entry(&self, id: &str, patch: EntryPatch) -> Option<DiaryEntry> {
        let row = EntryPatchRow::from_patch(&patch, Utc::now());
        match self.patch_entry(id, &row).await {
            Ok(row) => {
                debug!("Updated diary entry {id}");
                Some(row.into())
            }
            Err(e) => {
                error!("Error updating entry {id}: {e}");
                None
            }
        }
    }

    async fn delete_entry(&self, id: &str) -> bool {
        match self.remove_entry(id).await {
            Ok(()) => {
                debug!("Deleted diary entry {id}");
                true
            }
            Err(e) => {
                error!("Error deleting entry {id}: {e}");
                false
            }
        }
    }
}
