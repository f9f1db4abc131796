//! Mood definition model.
//!
//! # Responsibility
//! - Define the styled mood category attached to every entry.
//! - Validate user-entered custom moods before they reach the store.
//!
//! # Invariants
//! - Built-in moods are fixed and listed before custom moods.
//! - The store itself never rejects a custom mood; validation is opt-in
//!   through `MoodDefinition::new`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static HEX_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").expect("valid hex color regex")
});

const BUILTIN_MOODS: &[(&str, &str, &str)] = &[
    ("Happy", "😄", "#FFD700"),
    ("Sad", "😢", "#4169E1"),
    ("Calm", "😊", "#4ade80"),
    ("Neutral", "😐", "#9ca3af"),
    ("Excited", "🎉", "#FF1493"),
    ("Relaxed", "🤭", "#98FB98"),
    ("Angry", "😠", "#FF4500"),
];

/// Named, styled mood category selectable when creating an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoodDefinition {
    /// Display key shown in pickers and summaries.
    pub label: String,
    pub emoji: String,
    /// CSS-style hex color, e.g. `#FFD700`.
    pub color: String,
}

/// Validation error for user-entered mood definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoodValidationError {
    EmptyLabel,
    EmptyEmoji,
    InvalidColor(String),
}

impl Display for MoodValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "mood label cannot be empty"),
            Self::EmptyEmoji => write!(f, "mood emoji cannot be empty"),
            Self::InvalidColor(value) => {
                write!(f, "invalid mood color `{value}`; expected #rgb or #rrggbb")
            }
        }
    }
}

impl Error for MoodValidationError {}

impl MoodDefinition {
    /// Creates a validated mood definition from user input.
    ///
    /// Label and emoji are trimmed; color must be `#rgb` or `#rrggbb`.
    pub fn new(
        label: impl AsRef<str>,
        emoji: impl AsRef<str>,
        color: impl AsRef<str>,
    ) -> Result<Self, MoodValidationError> {
        let mood = Self {
            label: label.as_ref().trim().to_string(),
            emoji: emoji.as_ref().trim().to_string(),
            color: color.as_ref().trim().to_string(),
        };
        mood.validate()?;
        Ok(mood)
    }

    /// Checks label, emoji and color shape.
    pub fn validate(&self) -> Result<(), MoodValidationError> {
        if self.label.trim().is_empty() {
            return Err(MoodValidationError::EmptyLabel);
        }
        if self.emoji.trim().is_empty() {
            return Err(MoodValidationError::EmptyEmoji);
        }
        if !HEX_COLOR_RE.is_match(&self.color) {
            return Err(MoodValidationError::InvalidColor(self.color.clone()));
        }
        Ok(())
    }

    fn builtin(label: &str, emoji: &str, color: &str) -> Self {
        Self {
            label: label.to_string(),
            emoji: emoji.to_string(),
            color: color.to_string(),
        }
    }
}

/// Returns the fixed built-in moods in display order.
pub fn builtin_moods() -> Vec<MoodDefinition> {
    BUILTIN_MOODS
        .iter()
        .map(|(label, emoji, color)| MoodDefinition::builtin(label, emoji, color))
        .collect()
}

/// Looks up a built-in mood by exact label.
pub fn builtin_mood(label: &str) -> Option<MoodDefinition> {
    BUILTIN_MOODS
        .iter()
        .find(|(builtin_label, _, _)| *builtin_label == label)
        .map(|(label, emoji, color)| MoodDefinition::builtin(label, emoji, color))
}
