use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned status {0}")]
    Status(u16),

    #[error("backend returned no text")]
    EmptyReply,

    #[error("could not start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
}
