use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Network Error: request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("Status Error: {url} answered with HTTP {status}")]
    Status { url: String, status: u16, body: String },

    #[error("Decode Error: {0}")]
    Decode(String),
}

impl FetchError {
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network { .. })
    }
}
