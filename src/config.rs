//! Card Configuration
//!
//! Defaults for one card, optionally overridden by JSON embedded in the host page:
//!
//! ```html
//! <script type="application/json" id="birthday-card-config">
//!   { "recipient": "Sam", "age": 30, "date": "February 3rd" }
//! </script>
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

/// Element id of the optional JSON config block
pub const CONFIG_ELEMENT_ID: &str = "birthday-card-config";

/// Upper bounds keeping an embedded config from flooding the page
pub const MAX_CANDLES: usize = 50;
pub const MAX_BALLOONS: usize = 50;
pub const MAX_CONFETTI_PIECES: usize = 2000;

/// Overlay effect configuration passed to the confetti renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfettiConfig {
    pub particle_count: usize,
    pub colors: Vec<String>,
    /// Keep pieces falling forever instead of a single burst
    pub repeat: bool,
    /// Layout seed; the same seed gives the same burst
    pub seed: u64,
}

impl Default for ConfettiConfig {
    fn default() -> Self {
        Self {
            particle_count: 500,
            colors: ["#006400", "#2F4F4F", "#483D8B", "#FFA07A", "#BC8F8F", "#F7DC6F", "#BB8FCE"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            repeat: false,
            seed: 0x00B1_27D4,
        }
    }
}

/// Configuration for one birthday card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Name line under the title
    pub recipient: Option<String>,
    /// Age for the title ("Happy 48th Birthday!")
    pub age: Option<u32>,
    /// Free-form date line, e.g. "February 3rd"
    pub date: Option<String>,
    pub total_candles: usize,
    pub total_balloons: usize,
    /// Celebration sequencer tick, in milliseconds
    pub tick_interval_ms: u32,
    /// tracing level filter: trace, debug, info, warn, error
    pub log_level: String,
    pub confetti: ConfettiConfig,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            recipient: None,
            age: None,
            date: None,
            total_candles: 7,
            total_balloons: 5,
            tick_interval_ms: 300,
            log_level: "info".to_string(),
            confetti: ConfettiConfig::default(),
        }
    }
}

impl CardConfig {
    /// Parse and validate a JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: CardConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_CANDLES).contains(&self.total_candles) {
            return Err(ConfigError::Invalid(format!("total_candles must be 1..={}", MAX_CANDLES)));
        }
        if !(1..=MAX_BALLOONS).contains(&self.total_balloons) {
            return Err(ConfigError::Invalid(format!("total_balloons must be 1..={}", MAX_BALLOONS)));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid("tick_interval_ms must be positive".into()));
        }
        if self.confetti.particle_count > MAX_CONFETTI_PIECES {
            return Err(ConfigError::Invalid(format!(
                "confetti.particle_count must be at most {}",
                MAX_CONFETTI_PIECES
            )));
        }
        if self.confetti.colors.is_empty() {
            return Err(ConfigError::Invalid("confetti.colors must not be empty".into()));
        }
        self.level()?;
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.tick_interval_ms))
    }

    pub fn level(&self) -> Result<tracing::Level, ConfigError> {
        tracing::Level::from_str(&self.log_level)
            .map_err(|_| ConfigError::Invalid(format!("unknown log level '{}'", self.log_level)))
    }

    pub fn title(&self) -> String {
        match self.age {
            Some(age) => format!("Happy {}{} Birthday!", age, ordinal_suffix(age)),
            None => "Happy Birthday!".to_string(),
        }
    }

    /// Trimmed recipient name, if any
    pub fn recipient_line(&self) -> Option<String> {
        non_blank(self.recipient.as_deref())
    }

    /// Trimmed date line, if any
    pub fn date_line(&self) -> Option<String> {
        non_blank(self.date.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|v| !v.is_empty()).map(str::to_string)
}

/// English ordinal suffix: 1st, 2nd, 3rd, 4th, 11th, 12th, 13th, 21st...
fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The embedded JSON could not be parsed
    Parse(String),
    /// The JSON parsed but a value is out of range
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Config parse error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load the config embedded in the host page.
///
/// No config block means defaults; a bad block is an error for the caller to report.
pub fn load_from_page() -> Result<CardConfig, ConfigError> {
    let text = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match text {
        Some(text) => CardConfig::from_json(&text),
        None => Ok(CardConfig::default()),
    }
}
