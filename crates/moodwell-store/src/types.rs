//! Persisted record types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A daily mood check-in; the qualifying event for streaks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodCheckIn {
    pub date: NaiveDate,
    pub mood: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// A private journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub date: NaiveDate,
    pub content: String,
}
