use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BatchConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "ConfigHelper::default_report_interval_secs")]
    pub report_interval_secs: u64,

    #[serde(default = "ConfigHelper::default_initial_delay_secs")]
    pub initial_delay_secs: u64,

    #[serde(default = "ConfigHelper::default_fixed_rate_secs")]
    pub fixed_rate_secs: u64,

    #[serde(default = "ConfigHelper::default_fixed_delay_secs")]
    pub fixed_delay_secs: u64,

    #[serde(default = "ConfigHelper::default_work_ms")]
    pub work_ms: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            report_interval_secs: ConfigHelper::default_report_interval_secs(),
            initial_delay_secs: ConfigHelper::default_initial_delay_secs(),
            fixed_rate_secs: ConfigHelper::default_fixed_rate_secs(),
            fixed_delay_secs: ConfigHelper::default_fixed_delay_secs(),
            work_ms: ConfigHelper::default_work_ms(),
        }
    }
}
