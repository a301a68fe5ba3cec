pub mod batch_job;
pub mod commands;
pub mod fetch_error;
pub mod render_mode;
pub mod view_preset;
