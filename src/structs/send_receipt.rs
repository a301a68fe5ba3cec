use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one simulated cause email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendReceipt {
    pub cause_id: Option<u64>,
    pub recipients: Vec<String>,
    pub delivered: bool,
    pub sent_at: DateTime<Utc>,
}
