use crate::store::DiaryStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owner of the in-memory entry collection; handlers only go through its API.
    pub store: DiaryStore,
}
