//! Reply templates and the topic keyword table

use crate::types::{Meal, TimeOfDay};
use serde::{Deserialize, Serialize};

pub const CRISIS_REPLIES: &[&str] = &[
    "I'm really sorry you're feeling this way. You don't have to go through this alone. Please reach out to someone you trust or a crisis line right now. I'm showing you emergency contacts.",
    "It sounds like you're in a lot of pain. Your life matters. Please contact a crisis helpline or emergency services now. I've opened your emergency contacts.",
    "Thank you for telling me. I'm worried about your safety. Please talk to a trained counselor right away; your emergency contacts are on screen.",
];

pub const DEFAULT_REPLIES: &[&str] = &[
    "Tell me more about that.",
    "I'm listening. How does that make you feel?",
    "Thanks for sharing. What's on your mind right now?",
    "I hear you. Would you like to talk more about it?",
];

pub const AFFIRMATIVE_TOKENS: &[&str] = &["yes", "yeah", "yep", "sure"];
pub const NEGATIVE_TOKENS: &[&str] = &["no", "nah", "nope"];

const ATE_BREAKFAST: &[&str] = &[
    "Great! A good breakfast is a strong start to the day.",
    "Nice, breakfast gives your mood and focus a real boost.",
];
const ATE_LUNCH: &[&str] = &[
    "Good to hear you had lunch! Keeping your energy up matters.",
    "Nice! A midday meal helps you get through the afternoon.",
];
const ATE_DINNER: &[&str] = &[
    "Lovely, I hope dinner was something you enjoyed.",
    "Great, a proper dinner helps you wind down for the night.",
];
const MISSED_BREAKFAST: &[&str] = &[
    "Try to grab something small, even a piece of fruit helps your mood.",
    "Skipping breakfast can leave you drained. Maybe have a quick snack?",
];
const MISSED_LUNCH: &[&str] = &[
    "Try to take a short break and eat something, your body will thank you.",
    "It's easy to forget lunch when busy. A small meal can lift your energy.",
];
const MISSED_DINNER: &[&str] = &[
    "Please try to eat something before bed, even something light.",
    "A light dinner can help you sleep better. Maybe make something simple?",
];

/// Replies for a meal question answered with yes
pub fn acknowledged(meal: Meal) -> &'static [&'static str] {
    match meal {
        Meal::Breakfast => ATE_BREAKFAST,
        Meal::Lunch => ATE_LUNCH,
        Meal::Dinner => ATE_DINNER,
    }
}

/// Replies for a meal question answered with no
pub fn missed(meal: Meal) -> &'static [&'static str] {
    match meal {
        Meal::Breakfast => MISSED_BREAKFAST,
        Meal::Lunch => MISSED_LUNCH,
        Meal::Dinner => MISSED_DINNER,
    }
}

/// Base greeting; each one asks about the meal for that part of the day
pub fn base_greeting(time_of_day: TimeOfDay) -> &'static str {
    match time_of_day {
        TimeOfDay::Morning => "Good morning! Have you had breakfast yet?",
        TimeOfDay::Afternoon => "Good afternoon! Did you have lunch today?",
        TimeOfDay::Evening => "Good evening! Have you had dinner yet?",
    }
}

pub fn mood_acknowledgment(mood: &str) -> String {
    format!(
        "I noticed you're feeling {} today, and I'm here for you. ",
        mood.trim().to_lowercase()
    )
}

pub const JOURNAL_ACKNOWLEDGMENT: &str = "Thank you for writing in your journal today. ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    FunFact,
    Sadness,
    Happiness,
    Stress,
    Anxiety,
    Sleep,
    Gratitude,
}

struct TopicKeywords {
    topic: Topic,
    keywords: &'static [&'static str],
}

/// Evaluated in order; the earliest matching topic wins
const TOPIC_KEYWORD_MAP: &[TopicKeywords] = &[
    TopicKeywords {
        topic: Topic::FunFact,
        keywords: &["fun fact", "fact", "tell me something"],
    },
    TopicKeywords {
        topic: Topic::Sadness,
        keywords: &["sad", "down", "depressed", "unhappy", "cry", "lonely"],
    },
    TopicKeywords {
        topic: Topic::Happiness,
        keywords: &["happy", "great", "good", "awesome", "excited", "joy"],
    },
    TopicKeywords {
        topic: Topic::Stress,
        keywords: &["stress", "overwhelm", "pressure", "too much"],
    },
    TopicKeywords {
        topic: Topic::Anxiety,
        keywords: &["anxious", "anxiety", "worried", "nervous", "panic"],
    },
    TopicKeywords {
        topic: Topic::Sleep,
        keywords: &["sleep", "tired", "insomnia", "exhausted"],
    },
    TopicKeywords {
        topic: Topic::Gratitude,
        keywords: &["thank", "grateful", "appreciate"],
    },
];

impl Topic {
    /// First topic whose keywords occur in `text` (already lower-cased)
    pub fn match_input(text: &str) -> Option<Topic> {
        TOPIC_KEYWORD_MAP
            .iter()
            .find(|entry| entry.keywords.iter().any(|kw| text.contains(kw)))
            .map(|entry| entry.topic)
    }

    pub fn all() -> impl Iterator<Item = Topic> {
        TOPIC_KEYWORD_MAP.iter().map(|entry| entry.topic)
    }

    pub fn replies(self) -> &'static [&'static str] {
        match self {
            Topic::FunFact => &[
                "Fun fact: laughing for a few minutes can relax your muscles for up to 45 minutes.",
                "Fun fact: spending just 20 minutes outdoors can noticeably lower stress hormones.",
                "Fun fact: writing down three good things each day is linked to better mood over time.",
                "Fun fact: a short walk can boost creativity by as much as 60 percent.",
            ],
            Topic::Sadness => &[
                "I'm sorry you're feeling down. Do you want to talk about what's going on?",
                "It's okay to feel sad sometimes. Be gentle with yourself today.",
                "That sounds hard. Would writing about it in your journal help?",
            ],
            Topic::Happiness => &[
                "That's wonderful to hear! What made today good?",
                "I love that! Hold on to that feeling.",
                "So glad you're doing well. Want to log this in a check-in?",
            ],
            Topic::Stress => &[
                "Stress can pile up quickly. Try a slow breath: in for four, hold for four, out for four.",
                "That sounds like a lot. What's one small thing you could set aside for now?",
            ],
            Topic::Anxiety => &[
                "Anxiety is tough. Try naming five things you can see around you right now.",
                "You're not alone in feeling anxious. Let's take a slow breath together.",
            ],
            Topic::Sleep => &[
                "Rest matters so much. A regular bedtime and less screen time can help.",
                "Feeling tired can color everything. Could you take a short break today?",
            ],
            Topic::Gratitude => &[
                "You're welcome! I'm always here to listen.",
                "Gratitude is powerful. Thanks for sharing that with me.",
            ],
        }
    }
}
