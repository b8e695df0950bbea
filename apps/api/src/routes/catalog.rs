use axum::{
    extract::{Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{
    find_emotion, level_scale, prompts::REFLECTION_PROMPTS, random_message, LevelScale,
    EDUCATIONAL_CONTENT, EMOTIONS, MESSAGES,
};
use crate::errors::AppError;
use crate::models::entry::MealType;
use crate::models::reference::{EducationalContent, Emotion, MessageKind, NutriMessage};

#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub kind: Option<MessageKind>,
}

/// GET /api/v1/catalog/emotions
pub async fn handle_emotions() -> Json<&'static [Emotion]> {
    Json(EMOTIONS)
}

/// GET /api/v1/catalog/emotions/:name
pub async fn handle_emotion(Path(name): Path<String>) -> Result<Json<&'static Emotion>, AppError> {
    find_emotion(&name)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Unknown emotion '{name}'")))
}

#[derive(Debug, Serialize)]
pub struct MealTypeOption {
    pub key: &'static str,
    pub label: &'static str,
}

/// GET /api/v1/catalog/meal-types
pub async fn handle_meal_types() -> Json<Vec<MealTypeOption>> {
    Json(
        MealType::ALL
            .iter()
            .map(|m| MealTypeOption {
                key: m.as_str(),
                label: m.label(),
            })
            .collect(),
    )
}

/// GET /api/v1/catalog/messages
pub async fn handle_messages() -> Json<&'static [NutriMessage]> {
    Json(MESSAGES)
}

/// GET /api/v1/catalog/messages/random
pub async fn handle_random_message(
    Query(params): Query<MessageQuery>,
) -> Result<Json<&'static NutriMessage>, AppError> {
    random_message(params.kind)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No message matches the requested kind".to_string()))
}

/// GET /api/v1/catalog/content
pub async fn handle_content() -> Json<&'static [EducationalContent]> {
    Json(EDUCATIONAL_CONTENT)
}

/// GET /api/v1/catalog/reflection-prompts
pub async fn handle_reflection_prompts() -> Json<&'static [&'static str]> {
    Json(REFLECTION_PROMPTS)
}

/// GET /api/v1/catalog/hunger-scale
pub async fn handle_hunger_scale() -> Json<LevelScale> {
    Json(level_scale())
}
