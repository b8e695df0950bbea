use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Local, Utc};
use serde::Deserialize;

use crate::errors::AppError;
use crate::insights::{filter_entries, DateFilter};
use crate::models::entry::{DiaryEntry, EntryDraft, EntryPatch, MealType};
use crate::repository::SaveOutcome;
use crate::state::AppState;
use crate::store::StoreSnapshot;
use crate::validation::{validate_draft, validate_patch, FoodsInput};

#[derive(Debug, Deserialize)]
pub struct FilterQuery {
    #[serde(default)]
    pub filter: DateFilter,
}

/// Body of POST /api/v1/entries. `date` defaults to the time of the request.
#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    pub meal_type: MealType,
    pub foods: FoodsInput,
    pub hunger_level: i32,
    pub satisfaction_level: i32,
    #[serde(default)]
    pub emotions_before: Vec<String>,
    #[serde(default)]
    pub emotions_after: Vec<String>,
    #[serde(default)]
    pub thoughts: String,
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub companions: String,
    #[serde(default)]
    pub photo: Option<String>,
}

impl CreateEntryRequest {
    fn into_draft(self, now: DateTime<Utc>) -> EntryDraft {
        EntryDraft {
            date: self.date.unwrap_or(now),
            meal_type: self.meal_type,
            foods: self.foods.normalize(),
            hunger_level: self.hunger_level,
            satisfaction_level: self.satisfaction_level,
            emotions_before: self.emotions_before,
            emotions_after: self.emotions_after,
            thoughts: self.thoughts,
            context: self.context,
            location: self.location,
            companions: self.companions,
            photo: self.photo,
        }
    }
}

/// GET /api/v1/entries
pub async fn handle_list_entries(
    State(state): State<AppState>,
    Query(params): Query<FilterQuery>,
) -> Json<StoreSnapshot> {
    let snapshot = state.store.snapshot().await;
    Json(StoreSnapshot {
        entries: filter_entries(&snapshot.entries, params.filter, &Local::now()),
        ..snapshot
    })
}

/// GET /api/v1/entries/today
pub async fn handle_todays_entries(State(state): State<AppState>) -> Json<Vec<DiaryEntry>> {
    Json(state.store.todays_entries().await)
}

/// POST /api/v1/entries
pub async fn handle_create_entry(
    State(state): State<AppState>,
    Json(req): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<SaveOutcome>), AppError> {
    let draft = req.into_draft(Utc::now());
    validate_draft(&draft)?;
    let outcome = state.store.add(draft).await;
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// PATCH /api/v1/entries/:id
pub async fn handle_update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<EntryPatch>,
) -> Result<Json<DiaryEntry>, AppError> {
    let patch = validate_patch(patch)?;
    if let Some(entry) = state.store.update(&id, patch).await {
        return Ok(Json(entry));
    }
    // Checked after the remote call so a concurrent delete reads as 404.
    if state.store.contains(&id).await {
        Err(AppError::Unavailable(format!(
            "Entry {id} could not be updated"
        )))
    } else {
        Err(AppError::NotFound(format!("Entry {id} not found")))
    }
}

/// DELETE /api/v1/entries/:id
pub async fn handle_delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.store.remove(&id).await {
        return Ok(StatusCode::NO_CONTENT);
    }
    if state.store.contains(&id).await {
        Err(AppError::Unavailable(format!(
            "Entry {id} could not be deleted"
        )))
    } else {
        Err(AppError::NotFound(format!("Entry {id} not found")))
    }
}

/// POST /api/v1/entries/refresh
pub async fn handle_refresh(State(state): State<AppState>) -> Json<StoreSnapshot> {
    state.store.refresh().await;
    Json(state.store.snapshot().await)
}
