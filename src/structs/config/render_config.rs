use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RenderConfig {
    #[serde(default = "ConfigHelper::default_view")]
    pub default_view: String,

    #[serde(default)]
    pub per_record: bool,

    #[serde(default = "ConfigHelper::default_title")]
    pub title: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            default_view: ConfigHelper::default_view(),
            per_record: false,
            title: ConfigHelper::default_title(),
        }
    }
}
