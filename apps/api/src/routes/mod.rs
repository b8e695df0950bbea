pub mod catalog;
pub mod entries;
pub mod health;
pub mod insights;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Diary entries
        .route(
            "/api/v1/entries",
            get(entries::handle_list_entries).post(entries::handle_create_entry),
        )
        .route("/api/v1/entries/today", get(entries::handle_todays_entries))
        .route("/api/v1/entries/refresh", post(entries::handle_refresh))
        .route(
            "/api/v1/entries/:id",
            patch(entries::handle_update_entry).delete(entries::handle_delete_entry),
        )
        // Derived views
        .route("/api/v1/insights", get(insights::handle_insights))
        .route("/api/v1/home", get(insights::handle_home))
        // Reference data
        .route("/api/v1/catalog/emotions", get(catalog::handle_emotions))
        .route("/api/v1/catalog/emotions/:name", get(catalog::handle_emotion))
        .route("/api/v1/catalog/meal-types", get(catalog::handle_meal_types))
        .route("/api/v1/catalog/messages", get(catalog::handle_messages))
        .route(
            "/api/v1/catalog/messages/random",
            get(catalog::handle_random_message),
        )
        .route("/api/v1/catalog/content", get(catalog::handle_content))
        .route(
            "/api/v1/catalog/reflection-prompts",
            get(catalog::handle_reflection_prompts),
        )
        .route(
            "/api/v1/catalog/hunger-scale",
            get(catalog::handle_hunger_scale),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DiaryStore;
    use crate::test_support::{entry_at, MemoryRepository};
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use chrono::{Duration, Utc};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn app_with(repo: Arc<MemoryRepository>) -> Router {
        let store = DiaryStore::new(repo);
        store.refresh().await;
        build_router(AppState { store })
    }

    async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let app = app_with(Arc::new(MemoryRepository::default())).await;
        let (status, body) = send(app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_create_entry_from_comma_text() {
        let repo = Arc::new(MemoryRepository::default());
        let app = app_with(repo.clone()).await;
        let (status, body) = send(
            app,
            Method::POST,
            "/api/v1/entries",
            Some(json!({
                "meal_type": "breakfast",
                "foods": "Aveia,  Banana , ",
                "hunger_level": 6,
                "satisfaction_level": 8,
                "emotions_before": ["Ansioso"]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["durability"], "persisted");
        assert_eq!(body["entry"]["foods"], json!(["Aveia", "Banana"]));
        assert_eq!(body["entry"]["thoughts"], "");
        assert_eq!(repo.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_entry_offline_is_local_only() {
        let repo = Arc::new(MemoryRepository::default());
        let app = app_with(repo.clone()).await;
        repo.set_offline(true);
        let (status, body) = send(
            app,
            Method::POST,
            "/api/v1/entries",
            Some(json!({
                "meal_type": "snack",
                "foods": ["Castanhas"],
                "hunger_level": 3,
                "satisfaction_level": 7
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["durability"], "local_only");
    }

    #[tokio::test]
    async fn test_create_entry_rejects_empty_foods() {
        let repo = Arc::new(MemoryRepository::default());
        let app = app_with(repo.clone()).await;
        let (status, body) = send(
            app,
            Method::POST,
            "/api/v1/entries",
            Some(json!({
                "meal_type": "lunch",
                "foods": " , ",
                "hunger_level": 5,
                "satisfaction_level": 5
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(repo.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_entries_with_week_filter() {
        let now = Utc::now();
        let repo = Arc::new(MemoryRepository::with_rows(vec![
            entry_at("recent", now - Duration::days(6)),
            entry_at("old", now - Duration::days(8)),
        ]));
        let app = app_with(repo).await;

        let (status, body) = send(app.clone(), Method::GET, "/api/v1/entries?filter=week", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["loading"], false);
        let entries = body["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["id"], "recent");

        let (_, body) = send(app, Method::GET, "/api/v1/entries", None).await;
        assert_eq!(body["entries"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_update_entry_status_codes() {
        let repo = Arc::new(MemoryRepository::with_rows(vec![entry_at("a", Utc::now())]));
        let app = app_with(repo.clone()).await;

        let (status, body) = send(
            app.clone(),
            Method::PATCH,
            "/api/v1/entries/a",
            Some(json!({"satisfaction_level": 9, "photo": null})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["satisfaction_level"], 9);

        let (status, _) = send(
            app.clone(),
            Method::PATCH,
            "/api/v1/entries/ghost",
            Some(json!({"hunger_level": 2})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            app.clone(),
            Method::PATCH,
            "/api/v1/entries/a",
            Some(json!({"hunger_level": 0})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        repo.set_offline(true);
        let (status, body) = send(
            app,
            Method::PATCH,
            "/api/v1/entries/a",
            Some(json!({"hunger_level": 2})),
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "REMOTE_UNAVAILABLE");
    }

    #[tokio::test(start_paused = true)]
    async fn test_update_racing_delete_is_not_found() {
        let repo = Arc::new(MemoryRepository::with_rows(vec![entry_at("a", Utc::now())]));
        let app = app_with(repo.clone()).await;
        repo.delay_update(Some(std::time::Duration::from_millis(50)));

        let update = send(
            app.clone(),
            Method::PATCH,
            "/api/v1/entries/a",
            Some(json!({"hunger_level": 3})),
        );
        let delete = send(app, Method::DELETE, "/api/v1/entries/a", None);
        let ((update_status, body), (delete_status, _)) = tokio::join!(update, delete);

        assert_eq!(delete_status, StatusCode::NO_CONTENT);
        assert_eq!(update_status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_delete_entry() {
        let repo = Arc::new(MemoryRepository::with_rows(vec![
            entry_at("a", Utc::now()),
            entry_at("b", Utc::now()),
        ]));
        let app = app_with(repo.clone()).await;

        let (status, _) = send(app.clone(), Method::DELETE, "/api/v1/entries/a", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        repo.set_offline(true);
        let (status, _) = send(app.clone(), Method::DELETE, "/api/v1/entries/b", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let (_, body) = send(app, Method::GET, "/api/v1/entries", None).await;
        let ids: Vec<_> = body["entries"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[tokio::test]
    async fn test_insights_endpoint() {
        let mut first = entry_at("a", Utc::now());
        first.hunger_level = 6;
        first.satisfaction_level = 8;
        first.emotions_before = vec!["Ansioso".into(), "Neutro".into()];
        first.emotions_after = vec!["Calmo".into(), "Grato".into()];
        let mut second = entry_at("b", Utc::now() - Duration::hours(2));
        second.hunger_level = 4;
        second.satisfaction_level = 5;
        second.emotions_before = vec!["Calmo".into()];

        let app = app_with(Arc::new(MemoryRepository::with_rows(vec![first, second]))).await;
        let (status, body) = send(app, Method::GET, "/api/v1/insights", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_entries"], 2);
        assert_eq!(body["average_hunger"], 5.0);
        assert_eq!(body["average_satisfaction"], 6.5);
        assert_eq!(body["most_common_emotions"][0], "Calmo");
        assert_eq!(body["streak_days"], 2);
    }

    #[tokio::test]
    async fn test_refresh_reloads_from_repository() {
        let repo = Arc::new(MemoryRepository::default());
        let app = app_with(repo.clone()).await;
        *repo.rows.lock().unwrap() = vec![entry_at("late", Utc::now())];

        let (status, body) = send(app, Method::POST, "/api/v1/entries/refresh", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["entries"][0]["id"], "late");
    }

    #[tokio::test]
    async fn test_catalog_endpoints() {
        let app = app_with(Arc::new(MemoryRepository::default())).await;

        let (_, emotions) = send(app.clone(), Method::GET, "/api/v1/catalog/emotions", None).await;
        assert_eq!(emotions.as_array().unwrap().len(), 10);
        assert_eq!(emotions[0]["category"], "positive");

        let (status, calmo) =
            send(app.clone(), Method::GET, "/api/v1/catalog/emotions/Calmo", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(calmo["color"], "#A8E6CF");
        let (status, _) =
            send(app.clone(), Method::GET, "/api/v1/catalog/emotions/Zangado", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, meals) = send(app.clone(), Method::GET, "/api/v1/catalog/meal-types", None).await;
        assert_eq!(meals[0], json!({"key": "breakfast", "label": "Café da manhã"}));
        assert_eq!(meals.as_array().unwrap().len(), 4);

        let (status, message) = send(
            app.clone(),
            Method::GET,
            "/api/v1/catalog/messages/random?kind=support",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(message["kind"], "support");

        let (_, content) = send(app.clone(), Method::GET, "/api/v1/catalog/content", None).await;
        assert_eq!(content[1]["duration_minutes"], 10);
        assert!(content[0].get("duration_minutes").is_none());

        let (_, prompts) = send(
            app.clone(),
            Method::GET,
            "/api/v1/catalog/reflection-prompts",
            None,
        )
        .await;
        assert_eq!(prompts.as_array().unwrap().len(), 5);

        let (_, scale) = send(app, Method::GET, "/api/v1/catalog/hunger-scale", None).await;
        assert_eq!(scale["max"], 10);
    }

    #[tokio::test]
    async fn test_home_lists_todays_entries() {
        let repo = Arc::new(MemoryRepository::with_rows(vec![
            entry_at("now", Utc::now()),
            entry_at("last-week", Utc::now() - Duration::days(7)),
        ]));
        let app = app_with(repo).await;
        let (status, body) = send(app, Method::GET, "/api/v1/home", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"]["kind"], "welcome");
        assert!(["Bom dia", "Boa tarde", "Boa noite"].contains(&body["greeting"].as_str().unwrap()));
        assert_eq!(body["todays_entries"].as_array().unwrap().len(), 1);
    }
}
