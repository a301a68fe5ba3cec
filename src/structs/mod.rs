pub mod api_response;
pub mod batch_stats;
pub mod cause;
pub mod cause_record;
pub mod cli;
pub mod config;
pub mod field_binding;
pub mod render_summary;
pub mod send_receipt;
pub mod view_config;
