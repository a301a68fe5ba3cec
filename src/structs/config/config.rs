use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::structs::config::batch_config::BatchConfig;
use crate::structs::config::client_config::ClientConfig;
use crate::structs::config::email_config::EmailConfig;
use crate::structs::config::render_config::RenderConfig;
use crate::structs::config::server_config::ServerConfig;
use crate::structs::view_config::ViewConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub email: EmailConfig,

    #[serde(default)]
    pub batch: BatchConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub views: HashMap<String, ViewConfig>,
}
