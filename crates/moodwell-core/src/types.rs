//! Conversation context and chat message types

use chrono::Timelike;
use serde::{Deserialize, Serialize};

/// Part of the day, fixed at session start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    /// Before noon
    Morning,
    /// Noon until 17:00
    Afternoon,
    /// 17:00 onwards
    Evening,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            TimeOfDay::Morning
        } else if hour < 17 {
            TimeOfDay::Afternoon
        } else {
            TimeOfDay::Evening
        }
    }

    pub fn now() -> Self {
        Self::from_hour(chrono::Local::now().hour())
    }

    /// The meal the greeting for this part of the day asks about
    pub fn meal(self) -> Meal {
        match self {
            TimeOfDay::Morning => Meal::Breakfast,
            TimeOfDay::Afternoon => Meal::Lunch,
            TimeOfDay::Evening => Meal::Dinner,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

impl Meal {
    pub fn as_str(self) -> &'static str {
        match self {
            Meal::Breakfast => "breakfast",
            Meal::Lunch => "lunch",
            Meal::Dinner => "dinner",
        }
    }
}

/// Single-slot memory of the yes/no question the bot is waiting on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingQuestion {
    #[default]
    Nothing,
    AwaitingMeal(Meal),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationContext {
    #[serde(default)]
    pub pending: PendingQuestion,
    #[serde(default)]
    pub current_mood: Option<String>,
    #[serde(default)]
    pub recent_journal_excerpt: Option<String>,
    pub time_of_day: TimeOfDay,
}

impl ConversationContext {
    pub fn new(time_of_day: TimeOfDay) -> Self {
        Self {
            pending: PendingQuestion::Nothing,
            current_mood: None,
            recent_journal_excerpt: None,
            time_of_day,
        }
    }

    /// Context for a session starting at the current local time
    pub fn starting_now() -> Self {
        Self::new(TimeOfDay::now())
    }

    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.current_mood = Some(mood.into());
        self
    }

    pub fn with_journal(mut self, excerpt: impl Into<String>) -> Self {
        self.recent_journal_excerpt = Some(excerpt.into());
        self
    }

    pub fn with_pending(mut self, pending: PendingQuestion) -> Self {
        self.pending = pending;
        self
    }

    pub fn has_journal(&self) -> bool {
        self.recent_journal_excerpt
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub text: String,
    pub is_from_bot: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_from_bot: false,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_from_bot: true,
        }
    }
}

/// Append-only message log for one chat session
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
