use serde::{Deserialize, Serialize};
use crate::enums::render_mode::RenderMode;
use crate::structs::field_binding::FieldBinding;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ViewConfig {
    #[serde(default)]
    pub mode: RenderMode,

    #[serde(default)]
    pub bindings: Vec<FieldBinding>,
}

impl ViewConfig {
    pub fn new(bindings: Vec<FieldBinding>) -> Self {
        Self {
            mode: RenderMode::default(),
            bindings,
        }
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Distinct class names in binding order.
    pub fn class_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for binding in &self.bindings {
            let name = binding.class_name();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}
