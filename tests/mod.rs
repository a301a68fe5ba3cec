mod render_properties;
mod support;
