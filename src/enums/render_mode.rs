use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, PartialEq, Default)]
pub enum RenderMode {
    /// Every record appends into the one shared node per selector.
    #[default]
    #[serde(rename = "accumulate")]
    Accumulate,
    /// Every record gets its own row of cells.
    #[serde(rename = "per_record")]
    PerRecord,
}
