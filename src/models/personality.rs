use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Supported quiz languages. Anything that is not Spanish resolves to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Es,
}

impl Lang {
    pub fn parse(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("es") {
            Lang::Es
        } else {
            Lang::En
        }
    }
}

/// Map from trait name (e.g. "quantum_charisma") to integer magnitude.
pub type TraitEffects = BTreeMap<String, i32>;

/// One answer choice of a personality question. `value` ranks boldness from
/// 1 (most cautious) to 4 (most reckless).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedOption {
    pub text: String,
    pub emoji: Option<String>,
    pub value: i32,
    pub effect: TraitEffects,
    pub feedback: Option<String>,
}

/// A fully-formed quiz question. Every generation tier produces this exact
/// shape, so callers never know which tier answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedQuestion {
    pub question: String,
    pub scenario_description: String,
    pub context_image: String,
    pub options: Vec<GeneratedOption>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityStats {
    pub quantum_charisma: i64,
    pub absurdity_resistance: i64,
    pub sarcasm_level: i64,
    pub time_warping: i64,
    pub cosmic_luck: i64,
}

pub fn effects(pairs: &[(&str, i32)]) -> TraitEffects {
    pairs
        .iter()
        .map(|(name, magnitude)| (name.to_string(), *magnitude))
        .collect()
}
