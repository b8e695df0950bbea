// Fixed copy shown by the insights and home screens.

pub const REFLECTION_PROMPTS: &[&str] = &[
    "O que você notou sobre seus padrões alimentares esta semana?",
    "Como seu corpo tem se comunicado com você ultimamente?",
    "Quais emoções aparecem mais frequentemente nos seus registros?",
    "Em que momentos você se sente mais conectado(a) com sua fome e saciedade?",
    "Que pequena mudança você gostaria de experimentar na sua relação com a comida?",
];

pub const GREETING_MORNING: &str = "Bom dia";
pub const GREETING_AFTERNOON: &str = "Boa tarde";
pub const GREETING_EVENING: &str = "Boa noite";

pub const SCALE_LABEL_LOW: &str = "Muito baixo";
pub const SCALE_LABEL_MID: &str = "Moderado";
pub const SCALE_LABEL_HIGH: &str = "Muito alto";
