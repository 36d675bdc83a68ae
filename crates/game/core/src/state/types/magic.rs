//! Enchantments, effects and keyword tags.

use super::FormId;

/// One entry of an enchantment or magic item effect list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    /// Base magic effect definition this entry instantiates.
    pub base_effect: FormId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub magnitude: f32,
    /// Duration in seconds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub duration: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub area: u32,
}

impl Effect {
    pub fn new(base_effect: FormId, magnitude: f32, duration: u32) -> Self {
        Self {
            base_effect,
            magnitude,
            duration,
            area: 0,
        }
    }
}

/// Base magic effect definition. Carries the keyword tags used for filtering.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MagicEffect {
    pub id: FormId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub editor_id: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_cost: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub keywords: Vec<FormId>,
}

impl MagicEffect {
    pub fn new(id: FormId, base_cost: f32, keywords: Vec<FormId>) -> Self {
        Self {
            id,
            editor_id: None,
            base_cost,
            keywords,
        }
    }

    #[inline]
    pub fn has_keyword(&self, keyword: FormId) -> bool {
        self.keywords.contains(&keyword)
    }
}

/// Immutable enchantment definition with an ordered effect list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enchantment {
    pub id: FormId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub editor_id: Option<String>,
    pub effects: Vec<Effect>,
}

impl Enchantment {
    pub fn new(id: FormId, effects: Vec<Effect>) -> Self {
        Self {
            id,
            editor_id: None,
            effects,
        }
    }
}

/// Classification label attached to magic effects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Keyword {
    pub id: FormId,
    pub editor_id: String,
}

impl Keyword {
    pub fn new(id: FormId, editor_id: impl Into<String>) -> Self {
        Self {
            id,
            editor_id: editor_id.into(),
        }
    }
}
