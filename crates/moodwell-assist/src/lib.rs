//! Optional remote generative-text responder

mod client;
mod error;
mod prompt;

pub use client::{AssistConfig, RemoteResponder};
pub use error::AssistError;
pub use prompt::{build_system_prompt, extract_reply, truncate_input};
