use crate::error::AssistError;
use crate::prompt::{build_system_prompt, extract_reply, truncate_input};
use moodwell_core::{ConversationContext, Responder, Response, Route};
use std::env;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
const DEFAULT_MODEL: &str = "claude-3-haiku-20240307";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistConfig {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
    pub timeout: Duration,
}

impl AssistConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Read `MOODWELL_ASSIST_API_KEY` (required), `MOODWELL_ASSIST_ENDPOINT`
    /// and `MOODWELL_ASSIST_MODEL`. `None` when no key is set.
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("MOODWELL_ASSIST_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())?;

        let mut config = Self::new(api_key);
        if let Ok(endpoint) = env::var("MOODWELL_ASSIST_ENDPOINT") {
            config.endpoint = endpoint;
        }
        if let Ok(model) = env::var("MOODWELL_ASSIST_MODEL") {
            config.model = model;
        }
        Some(config)
    }
}

/// Single-shot requests against a messages-style endpoint. No retries.
pub struct RemoteResponder {
    config: AssistConfig,
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
}

impl RemoteResponder {
    pub fn new(config: AssistConfig) -> Result<Self, AssistError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self {
            config,
            client,
            runtime,
        })
    }

    pub fn from_env() -> Option<Result<Self, AssistError>> {
        AssistConfig::from_env().map(Self::new)
    }

    pub fn config(&self) -> &AssistConfig {
        &self.config
    }

    async fn request(
        client: &reqwest::Client,
        config: &AssistConfig,
        input: &str,
        context: &ConversationContext,
    ) -> Result<String, AssistError> {
        let response = client
            .post(&config.endpoint)
            .header("x-api-key", &config.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&serde_json::json!({
                "model": config.model,
                "max_tokens": 300,
                "system": build_system_prompt(context),
                "messages": [{"role": "user", "content": truncate_input(input)}]
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AssistError::Status(status.as_u16()));
        }

        let body: serde_json::Value = response.json().await?;
        extract_reply(&body).ok_or(AssistError::EmptyReply)
    }

    pub fn reply(
        &self,
        input: &str,
        context: &ConversationContext,
    ) -> Result<String, AssistError> {
        self.runtime
            .block_on(Self::request(&self.client, &self.config, input, context))
    }
}

impl Responder for RemoteResponder {
    fn name(&self) -> &str {
        "remote"
    }

    fn respond(
        &mut self,
        input: &str,
        context: &ConversationContext,
    ) -> anyhow::Result<Response> {
        let reply = self.reply(input, context)?;
        tracing::debug!(model = %self.config.model, "remote reply received");
        Ok(Response {
            reply,
            context: context.clone(),
            emergency: false,
            route: Route::Remote,
        })
    }
}
