use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "ConfigHelper::default_sender")]
    pub from: String,

    #[serde(default)]
    pub to: Vec<String>,

    /// Simulated delivery time of one email.
    #[serde(default = "ConfigHelper::default_email_pause_ms")]
    pub pause_ms: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            from: ConfigHelper::default_sender(),
            to: Vec::new(),
            pause_ms: ConfigHelper::default_email_pause_ms(),
        }
    }
}
