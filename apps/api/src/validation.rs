use serde::Deserialize;

use crate::catalog::{LEVEL_MAX, LEVEL_MIN};
use crate::errors::AppError;
use crate::models::entry::{EntryDraft, EntryPatch};

/// Foods as sent by a client: either a list or the raw comma-separated text
/// of the add form.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FoodsInput {
    List(Vec<String>),
    Text(String),
}

impl FoodsInput {
    /// Trimmed, non-empty food names in input order.
    pub fn normalize(self) -> Vec<String> {
        match self {
            FoodsInput::List(items) => clean_items(items.iter().map(String::as_str)),
            FoodsInput::Text(text) => parse_food_list(&text),
        }
    }
}

/// Splits `"Arroz, Feijão,  ,Salada"` into `["Arroz", "Feijão", "Salada"]`.
pub fn parse_food_list(text: &str) -> Vec<String> {
    clean_items(text.split(','))
}

fn clean_items<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    items
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn check_foods(foods: &[String]) -> Result<(), AppError> {
    if foods.is_empty() {
        return Err(AppError::Validation(
            "At least one food must be listed".to_string(),
        ));
    }
    Ok(())
}

fn check_level(field: &str, value: i32) -> Result<(), AppError> {
    if !(LEVEL_MIN..=LEVEL_MAX).contains(&value) {
        return Err(AppError::Validation(format!(
            "{field} must be between {LEVEL_MIN} and {LEVEL_MAX}, got {value}"
        )));
    }
    Ok(())
}

/// Checks a draft before it is handed to the store. `foods` is expected to
/// be normalized already.
pub fn validate_draft(draft: &EntryDraft) -> Result<(), AppError> {
    check_foods(&draft.foods)?;
    check_level("hunger_level", draft.hunger_level)?;
    check_level("satisfaction_level", draft.satisfaction_level)?;
    Ok(())
}

/// Normalizes and checks the fields present in a patch.
pub fn validate_patch(mut patch: EntryPatch) -> Result<EntryPatch, AppError> {
    if patch.is_empty() {
        return Err(AppError::Validation(
            "Patch must change at least one field".to_string(),
        ));
    }
    if let Some(foods) = patch.foods.take() {
        let foods = clean_items(foods.iter().map(String::as_str));
        check_foods(&foods)?;
        patch.foods = Some(foods);
    }
    if let Some(level) = patch.hunger_level {
        check_level("hunger_level", level)?;
    }
    if let Some(level) = patch.satisfaction_level {
        check_level("satisfaction_level", level)?;
    }
    Ok(patch)
}
