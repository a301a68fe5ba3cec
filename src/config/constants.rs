use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_SERVER_PORT: u16 = 8080;
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_EMAIL_PAUSE_MS: u64 = 5000;
pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;

pub const CAUSES_PATH: &str = "api/causes";
pub const CONFIG_DIR_NAME: &str = "arca";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const CAUSE_ENTITY: &str = "Cause";

pub fn sleep_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
