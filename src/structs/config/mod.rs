pub mod batch_config;
pub mod client_config;
#[allow(clippy::module_inception)]
pub mod config;
pub mod email_config;
pub mod render_config;
pub mod server_config;
