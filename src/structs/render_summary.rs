use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RenderSummary {
    pub records: usize,
    pub appended: usize,
    pub rows: usize,
}

impl RenderSummary {
    pub fn is_empty(&self) -> bool {
        self.appended == 0 && self.rows == 0
    }
}
