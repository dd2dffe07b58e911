//! One open chat: context, transcript and the emergency action

use crate::engine::Response;
use crate::responder::ResponderChain;
use crate::types::{ChatMessage, ConversationContext, Transcript};

pub struct ChatSession {
    chain: ResponderChain,
    context: ConversationContext,
    transcript: Transcript,
    on_emergency: Box<dyn FnMut()>,
}

impl ChatSession {
    /// Start a session; the greeting becomes the first bot message
    pub fn open(
        mut chain: ResponderChain,
        context: ConversationContext,
        on_emergency: impl FnMut() + 'static,
    ) -> Self {
        let greeting = chain.greet(&context);
        let mut transcript = Transcript::new();
        transcript.push(ChatMessage::bot(greeting.reply));

        Self {
            chain,
            context: greeting.context,
            transcript,
            on_emergency: Box::new(on_emergency),
        }
    }

    /// Record the user's message and the reply. The emergency action runs
    /// before this returns.
    pub fn send(&mut self, text: &str) -> Response {
        self.transcript.push(ChatMessage::user(text));

        let response = self.chain.respond(text, &self.context);
        if response.emergency {
            (self.on_emergency)();
        }

        self.context = response.context.clone();
        self.transcript.push(ChatMessage::bot(response.reply.as_str()));
        response
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn greeting(&self) -> &str {
        self.transcript
            .messages()
            .first()
            .map(|m| m.text.as_str())
            .unwrap_or("")
    }
}
