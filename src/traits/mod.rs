pub mod cause_source;
pub mod render_target;
