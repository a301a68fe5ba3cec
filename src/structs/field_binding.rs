use serde::{Deserialize, Serialize};

/// Maps one record field onto the class of the node that receives it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldBinding {
    pub field: String,

    /// Fallback field names, tried in order when `field` is absent.
    #[serde(default)]
    pub aliases: Vec<String>,

    pub selector: String,
}

impl FieldBinding {
    pub fn new(field: &str, selector: &str) -> Self {
        Self::with_aliases(field, &[], selector)
    }

    pub fn with_aliases(field: &str, aliases: &[&str], selector: &str) -> Self {
        Self {
            field: field.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            selector: selector.to_string(),
        }
    }

    /// Class name without the leading `.` a CSS selector would carry.
    pub fn class_name(&self) -> &str {
        self.selector.trim().trim_start_matches('.')
    }
}
