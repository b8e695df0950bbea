use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    /// Display label shown on entry cards and the add form.
    pub fn label(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Café da manhã",
            MealType::Lunch => "Almoço",
            MealType::Dinner => "Jantar",
            MealType::Snack => "Lanche",
        }
    }
}

/// One journaled meal together with the emotional context around it.
///
/// `hunger_level` and `satisfaction_level` are meant to be on a 1–10 scale,
/// but the type does not enforce it; see `validation`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiaryEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    pub meal_type: MealType,
    pub foods: Vec<String>,
    pub hunger_level: i32,
    pub satisfaction_level: i32,
    pub emotions_before: Vec<String>,
    pub emotions_after: Vec<String>,
    pub thoughts: String,
    pub context: String,
    pub location: String,
    pub companions: String,
    pub photo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Entry content before an id and timestamps have been assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntryDraft {
    pub date: DateTime<Utc>,
    pub meal_type: MealType,
    pub foods: Vec<String>,
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

impl EntryDraft {
    pub fn into_entry(
        self,
        id: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> DiaryEntry {
        DiaryEntry {
            id,
            date: self.date,
            meal_type: self.meal_type,
            foods: self.foods,
            hunger_level: self.hunger_level,
            satisfaction_level: self.satisfaction_level,
            emotions_before: self.emotions_before,
            emotions_after: self.emotions_after,
            thoughts: self.thoughts,
            context: self.context,
            location: self.location,
            companions: self.companions,
            photo: self.photo,
            created_at,
            updated_at,
        }
    }
}

/// Partial update of an entry. Absent fields are left untouched.
///
/// `photo` distinguishes "leave as is" (`None`) from "remove the photo"
/// (`Some(None)`, sent as an explicit `null`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EntryPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foods: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hunger_level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub satisfaction_level: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotions_before: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotions_after: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thoughts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub companions: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub photo: Option<Option<String>>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        *self == EntryPatch::default()
    }
}

/// Keeps an explicit `null` distinct from a missing field.
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
