//! Rule-based conversational response engine and chat session

mod config;
mod engine;
mod picker;
mod responder;
mod session;
pub mod templates;
mod types;

pub use config::Config;
pub use engine::{Response, Route, RuleEngine};
pub use picker::{pick, CyclingPicker, RandomPicker, ReplyPicker};
pub use responder::{Responder, ResponderChain};
pub use session::ChatSession;
pub use templates::Topic;
pub use types::{ChatMessage, ConversationContext, Meal, PendingQuestion, TimeOfDay, Transcript};
