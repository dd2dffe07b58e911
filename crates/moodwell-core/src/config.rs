//! Configuration for the response engine

use std::time::Duration;

/// Self-harm terms; broad on purpose, false positives are acceptable
const CRISIS_KEYWORDS: &[&str] = &[
    "suicide",
    "suicidal",
    "kill myself",
    "want to die",
    "end it all",
    "self harm",
    "hurt myself",
    "die",
    "death",
    "dead",
];

const ACKNOWLEDGED_MOODS: &[&str] = &["sad", "anxious", "stressed", "angry", "lonely", "tired"];

/// Engine configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Lower-case terms that route straight to the crisis replies
    pub crisis_keywords: Vec<String>,

    /// Moods the greeting acknowledges
    pub acknowledged_moods: Vec<String>,

    /// Pause before a bot reply is shown
    pub typing_delay_ms: u64,

    /// Cycle length used when history has no usable gaps
    pub default_cycle_length_days: i64,

    /// Start-to-start gaps at or above this are ignored
    pub max_cycle_gap_days: i64,
}

impl Config {
    pub fn new() -> Self {
        Self {
            crisis_keywords: CRISIS_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            acknowledged_moods: ACKNOWLEDGED_MOODS.iter().map(|s| s.to_string()).collect(),
            typing_delay_ms: 800,
            default_cycle_length_days: 28,
            max_cycle_gap_days: 60,
        }
    }

    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    /// `text` must already be lower-cased
    pub fn is_crisis(&self, text: &str) -> bool {
        self.crisis_keywords
            .iter()
            .any(|kw| !kw.is_empty() && text.contains(kw.as_str()))
    }

    pub fn needs_acknowledgment(&self, mood: &str) -> bool {
        let mood = mood.trim();
        self.acknowledged_moods
            .iter()
            .any(|m| m.eq_ignore_ascii_case(mood))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
