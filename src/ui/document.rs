use crate::structs::view_config::ViewConfig;
use crate::traits::render_target::RenderTarget;

const PAGE_TEMPLATE: &str = include_str!("static/page.html");

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    class_name: String,
    text: String,
}

/// In-memory page made of class-addressed nodes, rendered to HTML on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<Node>,
    rows: Vec<Vec<(String, String)>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// One empty node per class the view writes to.
    pub fn for_view(view: &ViewConfig) -> Self {
        let mut document = Self::new();
        for class_name in view.class_names() {
            document.add_node(class_name);
        }
        document
    }

    pub fn add_node(&mut self, class_name: &str) {
        self.nodes.push(Node {
            class_name: class_name.to_string(),
            text: String::new(),
        });
    }

    /// Text of the first node carrying `class_name`.
    pub fn text_of(&self, class_name: &str) -> Option<&str> {
        self.nodes
            .iter()
            .find(|node| node.class_name == class_name)
            .map(|node| node.text.as_str())
    }

    pub fn rows(&self) -> &[Vec<(String, String)>] {
        &self.rows
    }

    pub fn is_blank(&self) -> bool {
        self.rows.is_empty() && self.nodes.iter().all(|node| node.text.is_empty())
    }

    pub fn to_html(&self, title: &str) -> String {
        let mut content = String::new();

        for node in &self.nodes {
            content.push_str(&format!(
                "    <div class=\"cause-field {}\">{}</div>\n",
                html_escape(&node.class_name),
                html_escape(&node.text)
            ));
        }

        if !self.rows.is_empty() {
            content.push_str("    <table class=\"causes\">\n");
            for row in &self.rows {
                content.push_str("        <tr class=\"cause-row\">");
                for (class_name, text) in row {
                    content.push_str(&format!(
                        "<td class=\"{}\">{}</td>",
                        html_escape(class_name),
                        html_escape(text)
                    ));
                }
                content.push_str("</tr>\n");
            }
            content.push_str("    </table>\n");
        }

        PAGE_TEMPLATE
            .replace("{{TITLE}}", &html_escape(title))
            .replace("{{CONTENT}}", content.trim_end())
    }
}

impl RenderTarget for Document {
    fn append_text(&mut self, class_name: &str, text: &str) -> usize {
        let mut touched = 0;
        for node in self.nodes.iter_mut().filter(|node| node.class_name == class_name) {
            node.text.push_str(text);
            touched += 1;
        }
        touched
    }

    fn push_row(&mut self, cells: &[(String, String)]) -> bool {
        self.rows.push(cells.to_vec());
        true
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_to_every_matching_node() {
        let mut document = Document::new();
        document.add_node("cause-id");
        document.add_node("cause-id");
        document.add_node("cause-name");

        assert_eq!(document.append_text("cause-id", "7"), 2);
        assert_eq!(document.append_text("cause-total", "9"), 0);
        assert_eq!(document.text_of("cause-id"), Some("7"));
        assert_eq!(document.text_of("cause-name"), Some(""));
        assert_eq!(document.text_of("cause-total"), None);
    }

    #[test]
    fn html_output_escapes_text() {
        let mut document = Document::new();
        document.add_node("cause-name");
        document.append_text("cause-name", "<b>Tom & \"Jerry\"</b>");
        document.push_row(&[("cause-id".to_string(), "1".to_string())]);

        let html = document.to_html("Q&A");
        assert!(html.contains("<title>Q&amp;A</title>"));
        assert!(html.contains("&lt;b&gt;Tom &amp; &quot;Jerry&quot;&lt;/b&gt;"));
        assert!(html.contains("<tr class=\"cause-row\"><td class=\"cause-id\">1</td></tr>"));
        assert!(!html.contains("{{CONTENT}}"));
    }
}
