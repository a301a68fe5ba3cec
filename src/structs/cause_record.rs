use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::structs::cause::Cause;
use crate::structs::field_binding::FieldBinding;

/// One element of a fetched cause list, kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CauseRecord(Map<String, Value>);

impl CauseRecord {
    /// Text appended for `field`; `None` when the field is missing, null or `false`.
    pub fn field_text(&self, field: &str) -> Option<String> {
        match self.0.get(field)? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    pub fn resolve(&self, binding: &FieldBinding) -> Option<String> {
        std::iter::once(&binding.field)
            .chain(binding.aliases.iter())
            .find_map(|field| self.field_text(field))
    }
}

impl From<&Cause> for CauseRecord {
    fn from(cause: &Cause) -> Self {
        match serde_json::to_value(cause) {
            Ok(Value::Object(fields)) => Self(fields),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> CauseRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn stringifies_scalars_and_skips_null() {
        let r = record(json!({"id": 1, "name": "A", "ratio": 0.5, "flag": true, "total": null}));
        assert_eq!(r.field_text("id").as_deref(), Some("1"));
        assert_eq!(r.field_text("name").as_deref(), Some("A"));
        assert_eq!(r.field_text("ratio").as_deref(), Some("0.5"));
        assert_eq!(r.field_text("flag").as_deref(), Some("true"));
        assert_eq!(r.field_text("total"), None);
        assert_eq!(r.field_text("missing"), None);
    }

    #[test]
    fn false_and_zero_are_treated_differently() {
        let r = record(json!({"closed": false, "frequency": 0}));
        assert_eq!(r.field_text("closed"), None);
        assert_eq!(r.field_text("frequency").as_deref(), Some("0"));
    }

    #[test]
    fn nested_values_render_as_json() {
        let r = record(json!({"tags": ["a", "b"]}));
        assert_eq!(r.field_text("tags").as_deref(), Some(r#"["a","b"]"#));
    }

    #[test]
    fn resolve_falls_back_to_aliases_in_order() {
        let binding = FieldBinding::with_aliases("text", &["name"], "cause-name");
        assert_eq!(record(json!({"name": "N"})).resolve(&binding).as_deref(), Some("N"));
        assert_eq!(record(json!({"text": "T", "name": "N"})).resolve(&binding).as_deref(), Some("T"));
        assert_eq!(record(json!({"text": null, "name": "N"})).resolve(&binding).as_deref(), Some("N"));
        assert_eq!(record(json!({"id": 1})).resolve(&binding), None);
    }
}
