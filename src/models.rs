// src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Length range offered by the command line and the interactive menu.
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 32;

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_symbols: bool,
    pub include_numbers: bool,
    pub include_uppercase: bool,
    /// Replaces the class-based pool entirely when non-empty.
    pub custom_set: Option<String>,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_symbols: true,
            include_numbers: true,
            include_uppercase: true,
            custom_set: None,
        }
    }
}

/// Colour tag attached to each discrete strength level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthColor {
    Red,
    Orange,
    Yellow,
    Lime,
    Green,
    Emerald,
}

impl StrengthColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthColor::Red => "red",
            StrengthColor::Orange => "orange",
            StrengthColor::Yellow => "yellow",
            StrengthColor::Lime => "lime",
            StrengthColor::Green => "green",
            StrengthColor::Emerald => "emerald",
        }
    }
}

impl std::fmt::Display for StrengthColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the evaluator derives from a single password string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthResult {
    /// Discrete score, 0..=5.
    pub score: u8,
    pub label: String,
    pub color: StrengthColor,
    /// Fill of the strength bar, 0..=100.
    pub bar_percent: u8,
    pub crack_time: String,
    /// Rule-based score, 0..=100. Computed independently of `score`.
    pub security_score: u8,
    pub tips: Vec<String>,
}

// One generation event as kept in the history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPassword {
    pub value: String,
    pub timestamp: DateTime<Utc>,
    pub strength: String,
    pub crack_time: String,
    pub security_score: u8,
}

impl StrengthResult {
    pub fn bar_width(&self) -> String {
        format!("{}%", self.bar_percent)
    }
}

impl GeneratedPassword {
    pub fn new(value: String, strength: &StrengthResult) -> Self {
        Self {
            value,
            timestamp: Utc::now(),
            strength: strength.label.clone(),
            crack_time: strength.crack_time.clone(),
            security_score: strength.security_score,
        }
    }
}
