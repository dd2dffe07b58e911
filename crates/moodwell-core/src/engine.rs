//! Rule-based reply selection
//!
//! Precedence, first match wins:
//! 1. crisis keywords (sets `emergency`)
//! 2. yes/no answer to the pending meal question
//! 3. topic keywords, earliest table entry first
//! 4. default "tell me more" replies

use crate::config::Config;
use crate::picker::{pick, RandomPicker, ReplyPicker};
use crate::templates::{self, Topic};
use crate::types::{ConversationContext, Meal, PendingQuestion};
use serde::{Deserialize, Serialize};

/// Which rule produced a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Greeting,
    Crisis,
    MealAcknowledged(Meal),
    MealMissed(Meal),
    Topic(Topic),
    Fallback,
    Remote,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub reply: String,
    /// Context to use for the next turn
    pub context: ConversationContext,
    pub emergency: bool,
    pub route: Route,
}

impl Response {
    fn new(reply: impl Into<String>, context: ConversationContext, route: Route) -> Self {
        Self {
            reply: reply.into(),
            context,
            emergency: route == Route::Crisis,
            route,
        }
    }
}

pub struct RuleEngine {
    config: Config,
    picker: Box<dyn ReplyPicker>,
}

impl RuleEngine {
    pub fn new(config: Config) -> Self {
        Self::with_picker(config, Box::new(RandomPicker::new()))
    }

    pub fn with_picker(config: Config, picker: Box<dyn ReplyPicker>) -> Self {
        Self { config, picker }
    }

    /// Opening message. Sets the pending question to the meal for the time of day.
    pub fn greet(&mut self, context: &ConversationContext) -> Response {
        let mut reply = String::new();
        if context.has_journal() {
            reply.push_str(templates::JOURNAL_ACKNOWLEDGMENT);
        }
        if let Some(mood) = context
            .current_mood
            .as_deref()
            .filter(|m| self.config.needs_acknowledgment(m))
        {
            reply.push_str(&templates::mood_acknowledgment(mood));
        }
        reply.push_str(templates::base_greeting(context.time_of_day));

        let next = context
            .clone()
            .with_pending(PendingQuestion::AwaitingMeal(context.time_of_day.meal()));
        Response::new(reply, next, Route::Greeting)
    }

    /// Full rule pass. Total over all inputs.
    pub fn respond(&mut self, input: &str, context: &ConversationContext) -> Response {
        let response = self
            .crisis_response(input, context)
            .or_else(|| self.resolve_pending(input, context))
            .unwrap_or_else(|| self.general_response(input, context));

        tracing::debug!(route = ?response.route, "selected reply");
        response
    }

    /// Crisis replies when the input contains a crisis keyword
    pub fn crisis_response(
        &mut self,
        input: &str,
        context: &ConversationContext,
    ) -> Option<Response> {
        if !self.config.is_crisis(&input.to_lowercase()) {
            return None;
        }
        tracing::warn!("crisis keywords detected");
        let reply = pick(self.picker.as_mut(), templates::CRISIS_REPLIES);
        Some(Response::new(reply, context.clone(), Route::Crisis))
    }

    /// Answer to the pending meal question, if the input is a yes or a no.
    /// Anything else leaves the question pending.
    pub fn resolve_pending(
        &mut self,
        input: &str,
        context: &ConversationContext,
    ) -> Option<Response> {
        let PendingQuestion::AwaitingMeal(meal) = context.pending else {
            return None;
        };
        let text = input.to_lowercase();

        let (options, route) = if contains_word(&text, templates::AFFIRMATIVE_TOKENS) {
            (templates::acknowledged(meal), Route::MealAcknowledged(meal))
        } else if contains_word(&text, templates::NEGATIVE_TOKENS) {
            (templates::missed(meal), Route::MealMissed(meal))
        } else {
            return None;
        };

        let reply = pick(self.picker.as_mut(), options);
        let next = context.clone().with_pending(PendingQuestion::Nothing);
        Some(Response::new(reply, next, route))
    }

    /// Topic keywords, then the default set
    pub fn general_response(&mut self, input: &str, context: &ConversationContext) -> Response {
        let (options, route) = match Topic::match_input(&input.to_lowercase()) {
            Some(topic) => (topic.replies(), Route::Topic(topic)),
            None => (templates::DEFAULT_REPLIES, Route::Fallback),
        };
        let reply = pick(self.picker.as_mut(), options);
        Response::new(reply, context.clone(), route)
    }
}

/// Whole-word match, so "no" does not fire on "know" or "now"
fn contains_word(text: &str, tokens: &[&str]) -> bool {
    text.split(|c: char| !c.is_alphanumeric())
        .any(|word| tokens.contains(&word))
}
