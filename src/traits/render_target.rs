/// Something causes can be written into: a page, a document, a test double.
pub trait RenderTarget {
    /// Appends `text` to every node carrying `class_name`; returns how many nodes were touched.
    fn append_text(&mut self, class_name: &str, text: &str) -> usize;

    /// Adds one row of `(class_name, text)` cells. Targets without row
    /// support append each cell into the shared node instead.
    fn push_row(&mut self, cells: &[(String, String)]) -> bool {
        for (class_name, text) in cells {
            self.append_text(class_name, text);
        }
        false
    }
}
