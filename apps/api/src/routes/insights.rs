use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Local, Timelike};
use serde::Serialize;

use crate::catalog::{greeting_for_hour, random_message};
use crate::insights::{compute_insights, filter_entries, Insights};
use crate::models::entry::DiaryEntry;
use crate::models::reference::{MessageKind, NutriMessage};
use crate::routes::entries::FilterQuery;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub greeting: &'static str,
    pub message: Option<&'static NutriMessage>,
    pub todays_entries: Vec<DiaryEntry>,
    pub loading: bool,
}

/// GET /api/v1/insights
pub async fn handle_insights(
    State(state): State<AppState>,
    Query(params): Query<FilterQuery>,
) -> Json<Insights> {
    let entries = state.store.entries().await;
    let entries = filter_entries(&entries, params.filter, &Local::now());
    Json(compute_insights(&entries))
}

/// GET /api/v1/home
pub async fn handle_home(State(state): State<AppState>) -> Json<HomeResponse> {
    let now = Local::now();
    Json(HomeResponse {
        greeting: greeting_for_hour(now.hour()),
        message: random_message(Some(MessageKind::Welcome)),
        todays_entries: state.store.entries_on_day_of(&now).await,
        loading: state.store.is_loading().await,
    })
}
