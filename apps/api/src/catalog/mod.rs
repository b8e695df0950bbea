//! Reference Data Catalog. Static, read-only vocabularies shared by the
//! whole process: emotions, supportive messages and educational content.
//!
//! Everything here is `'static` and never mutated.

pub mod prompts;

use rand::seq::SliceRandom;
use serde::Serialize;

use crate::models::reference::{
    ContentKind, EducationalContent, Emotion, EmotionCategory, MessageKind, NutriMessage,
};

pub const EMOTIONS: &[Emotion] = &[
    emotion("1", "Calmo", "#A8E6CF", EmotionCategory::Positive),
    emotion("2", "Ansioso", "#FFB6C1", EmotionCategory::Challenging),
    emotion("3", "Feliz", "#87CEEB", EmotionCategory::Positive),
    emotion("4", "Triste", "#DDA0DD", EmotionCategory::Challenging),
    emotion("5", "Grato", "#F0E68C", EmotionCategory::Positive),
    emotion("6", "Estressado", "#FFA07A", EmotionCategory::Challenging),
    emotion("7", "Neutro", "#D3D3D3", EmotionCategory::Neutral),
    emotion("8", "Esperançoso", "#98FB98", EmotionCategory::Positive),
    emotion("9", "Confuso", "#F5DEB3", EmotionCategory::Neutral),
    emotion("10", "Culpado", "#FFDAB9", EmotionCategory::Challenging),
];

pub const MESSAGES: &[NutriMessage] = &[
    NutriMessage {
        id: "1",
        message: "Olá! Que bom ter você aqui hoje. Lembre-se: não há julgamento neste espaço, apenas acolhimento. 🌱",
        kind: MessageKind::Welcome,
    },
    NutriMessage {
        id: "2",
        message: "Você está sendo corajoso ao explorar sua relação com a comida. Isso é um grande passo! 💚",
        kind: MessageKind::Encouragement,
    },
    NutriMessage {
        id: "3",
        message: "Como você se sentiu ao registrar essa refeição? Há algo que gostaria de explorar mais?",
        kind: MessageKind::Reflection,
    },
    NutriMessage {
        id: "4",
        message: "Está tudo bem sentir o que você está sentindo. Você não está sozinho nesta jornada. 🤗",
        kind: MessageKind::Support,
    },
];

pub const EDUCATIONAL_CONTENT: &[EducationalContent] = &[
    EducationalContent {
        id: "1",
        title: "Alimentação Intuitiva: Reconectando com seu Corpo",
        kind: ContentKind::Article,
        body: "A alimentação intuitiva é uma abordagem que nos ensina a confiar nos sinais naturais do nosso corpo...",
        duration_minutes: None,
        tags: &["alimentação intuitiva", "autoconhecimento"],
    },
    EducationalContent {
        id: "2",
        title: "Meditação da Gratidão pelo Corpo",
        kind: ContentKind::Meditation,
        body: "Uma prática gentil para desenvolver uma relação mais amorosa com seu corpo...",
        duration_minutes: Some(10),
        tags: &["meditação", "body positivity"],
    },
    EducationalContent {
        id: "3",
        title: "Exercício: Identificando a Fome Física vs Emocional",
        kind: ContentKind::Exercise,
        body: "Este exercício ajuda a distinguir entre diferentes tipos de fome...",
        duration_minutes: Some(15),
        tags: &["fome emocional", "exercício prático"],
    },
];

const fn emotion(
    id: &'static str,
    name: &'static str,
    color: &'static str,
    category: EmotionCategory,
) -> Emotion {
    Emotion {
        id,
        name,
        color,
        category,
    }
}

pub fn find_emotion(name: &str) -> Option<&'static Emotion> {
    EMOTIONS.iter().find(|e| e.name == name)
}

/// Picks one message at random, optionally restricted to a kind.
/// Returns `None` only when no message of that kind exists.
pub fn random_message(kind: Option<MessageKind>) -> Option<&'static NutriMessage> {
    let candidates: Vec<&'static NutriMessage> = MESSAGES
        .iter()
        .filter(|m| kind.map_or(true, |k| m.kind == k))
        .collect();
    candidates.choose(&mut rand::thread_rng()).copied()
}

/// Greeting for the given local hour (0–23).
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        h if h < 12 => prompts::GREETING_MORNING,
        h if h < 18 => prompts::GREETING_AFTERNOON,
        _ => prompts::GREETING_EVENING,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScaleAnchor {
    pub value: i32,
    pub label: &'static str,
}

/// The 1–10 scale used for hunger and satisfaction, with its anchor labels.
#[derive(Debug, Clone, Serialize)]
pub struct LevelScale {
    pub min: i32,
    pub max: i32,
    pub anchors: [ScaleAnchor; 3],
}

pub const LEVEL_MIN: i32 = 1;
pub const LEVEL_MAX: i32 = 10;

pub fn level_scale() -> LevelScale {
    LevelScale {
        min: LEVEL_MIN,
        max: LEVEL_MAX,
        anchors: [
            ScaleAnchor {
                value: LEVEL_MIN,
                label: prompts::SCALE_LABEL_LOW,
            },
            ScaleAnchor {
                value: 5,
                label: prompts::SCALE_LABEL_MID,
            },
            ScaleAnchor {
                value: LEVEL_MAX,
                label: prompts::SCALE_LABEL_HIGH,
            },
        ],
    }
}
