use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EmotionCategory {
    Positive,
    Neutral,
    Challenging,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Emotion {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub category: EmotionCategory,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Welcome,
    Encouragement,
    Reflection,
    Support,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NutriMessage {
    pub id: &'static str,
    pub message: &'static str,
    pub kind: MessageKind,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Article,
    Meditation,
    Exercise,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EducationalContent {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: ContentKind,
    pub body: &'static str,
    /// Length in minutes, for meditations and exercises.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    pub tags: &'static [&'static str],
}
