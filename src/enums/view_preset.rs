use std::fmt;
use std::str::FromStr;
use crate::errors::ArcaError;
use crate::structs::field_binding::FieldBinding;
use crate::structs::view_config::ViewConfig;

pub const CAUSE_ID_SELECTOR: &str = "cause-id";
pub const CAUSE_NAME_SELECTOR: &str = "cause-name";
pub const CAUSE_FREQUENCY_SELECTOR: &str = "cause-frequency";
pub const CAUSE_TOTAL_SELECTOR: &str = "cause-total";
pub const CAUSE_DESCRIPTION_SELECTOR: &str = "cause-description";

/// The two built-in cause pages.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ViewPreset {
    /// Full cause listing: id, name, frequency, total and description.
    Arca,
    /// Pareto chart feed: id, label and frequency, labels read from `text`.
    Pareto,
}

impl ViewPreset {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Arca => "arca",
            Self::Pareto => "pareto",
        }
    }

    pub fn view(&self) -> ViewConfig {
        match self {
            Self::Arca => ViewConfig::new(vec![
                FieldBinding::new("id", CAUSE_ID_SELECTOR),
                FieldBinding::with_aliases("name", &["text"], CAUSE_NAME_SELECTOR),
                FieldBinding::new("frequency", CAUSE_FREQUENCY_SELECTOR),
                FieldBinding::new("total", CAUSE_TOTAL_SELECTOR),
                FieldBinding::new("description", CAUSE_DESCRIPTION_SELECTOR),
            ]),
            Self::Pareto => ViewConfig::new(vec![
                FieldBinding::new("id", CAUSE_ID_SELECTOR),
                FieldBinding::with_aliases("text", &["name"], CAUSE_NAME_SELECTOR),
                FieldBinding::new("frequency", CAUSE_FREQUENCY_SELECTOR),
            ]),
        }
    }

    pub fn all() -> [ViewPreset; 2] {
        [Self::Arca, Self::Pareto]
    }
}

impl fmt::Display for ViewPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ViewPreset {
    type Err = ArcaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "arca" => Ok(Self::Arca),
            "pareto" => Ok(Self::Pareto),
            other => Err(ArcaError::validation_error("view", other, "one of: arca, pareto")),
        }
    }
}
