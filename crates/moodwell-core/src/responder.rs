//! Responder capability and the remote-then-rules fallback chain

use crate::engine::{Response, RuleEngine};
use crate::types::ConversationContext;

/// Something that can answer a user message
pub trait Responder {
    /// Responder name (used in logs)
    fn name(&self) -> &str;

    /// Whether the responder can be tried at all (e.g. credentials present)
    fn is_available(&self) -> bool {
        true
    }

    fn respond(
        &mut self,
        input: &str,
        context: &ConversationContext,
    ) -> anyhow::Result<Response>;
}

impl Responder for RuleEngine {
    fn name(&self) -> &str {
        "rules"
    }

    fn respond(
        &mut self,
        input: &str,
        context: &ConversationContext,
    ) -> anyhow::Result<Response> {
        Ok(RuleEngine::respond(self, input, context))
    }
}

/// Rule engine with an optional remote responder in front of it.
///
/// Crisis detection and pending-question answers always come from the rules,
/// so the emergency path never waits on the remote backend. Other input goes
/// to the remote responder first; an error or an empty reply falls back to
/// topic matching.
pub struct ResponderChain {
    rules: RuleEngine,
    remote: Option<Box<dyn Responder>>,
}

impl ResponderChain {
    pub fn new(rules: RuleEngine) -> Self {
        Self {
            rules,
            remote: None,
        }
    }

    pub fn with_remote(mut self, remote: Box<dyn Responder>) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn has_remote(&self) -> bool {
        self.remote.as_ref().is_some_and(|r| r.is_available())
    }

    pub fn greet(&mut self, context: &ConversationContext) -> Response {
        self.rules.greet(context)
    }

    pub fn respond(&mut self, input: &str, context: &ConversationContext) -> Response {
        if let Some(response) = self.rules.crisis_response(input, context) {
            return response;
        }
        if let Some(response) = self.rules.resolve_pending(input, context) {
            return response;
        }

        if let Some(remote) = self.remote.as_mut().filter(|r| r.is_available()) {
            match remote.respond(input, context) {
                Ok(response) if !response.reply.trim().is_empty() => return response,
                Ok(_) => tracing::warn!(responder = remote.name(), "empty reply, using rules"),
                Err(err) => {
                    tracing::warn!(responder = remote.name(), %err, "responder failed, using rules")
                }
            }
        }

        self.rules.general_response(input, context)
    }
}
