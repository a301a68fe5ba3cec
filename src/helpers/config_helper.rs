use crate::config::constants::{
    DEFAULT_BASE_URL, DEFAULT_EMAIL_PAUSE_MS, DEFAULT_HOST, DEFAULT_SERVER_PORT, DEFAULT_TIMEOUT_SECS,
};
use crate::enums::view_preset::ViewPreset;

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_base_url() -> String {
        DEFAULT_BASE_URL.to_string()
    }

    pub fn default_timeout_secs() -> u64 {
        DEFAULT_TIMEOUT_SECS
    }

    pub fn default_sender() -> String {
        "arca@localhost".to_string()
    }

    pub fn default_email_pause_ms() -> u64 {
        DEFAULT_EMAIL_PAUSE_MS
    }

    pub fn default_report_interval_secs() -> u64 {
        30
    }

    pub fn default_initial_delay_secs() -> u64 {
        5
    }

    pub fn default_fixed_rate_secs() -> u64 {
        15
    }

    pub fn default_fixed_delay_secs() -> u64 {
        15
    }

    pub fn default_work_ms() -> u64 {
        5000
    }

    pub fn default_view() -> String {
        ViewPreset::Arca.name().to_string()
    }

    pub fn default_title() -> String {
        "Causes".to_string()
    }
}
