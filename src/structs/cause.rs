use serde::{Deserialize, Serialize};

/// A counted cause as stored by the service.
///
/// Older pages read the label from `text`, newer ones from `name`; both keys
/// are written on the wire and either is accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "CauseWire", into = "CauseWire")]
pub struct Cause {
    pub id: Option<u64>,
    pub name: String,
    pub frequency: u64,
    pub total: Option<u64>,
    pub description: Option<String>,
}

impl Cause {
    pub fn new(name: &str, frequency: u64) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            frequency,
            total: None,
            description: None,
        }
    }

    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct CauseWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default)]
    frequency: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl From<CauseWire> for Cause {
    fn from(wire: CauseWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name.or(wire.text).unwrap_or_default(),
            frequency: wire.frequency,
            total: wire.total,
            description: wire.description,
        }
    }
}

impl From<Cause> for CauseWire {
    fn from(cause: Cause) -> Self {
        Self {
            id: cause.id,
            text: Some(cause.name.clone()),
            name: Some(cause.name),
            frequency: cause.frequency,
            total: cause.total,
            description: cause.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_text_as_label() {
        let cause: Cause = serde_json::from_value(json!({"id": 4, "text": "Late delivery", "frequency": 9})).unwrap();
        assert_eq!(cause.id, Some(4));
        assert_eq!(cause.name, "Late delivery");
        assert_eq!(cause.frequency, 9);
    }

    #[test]
    fn writes_both_label_keys_and_reads_them_back() {
        let cause = Cause::new("Broken part", 3).with_total(10);
        let value = serde_json::to_value(&cause).unwrap();
        assert_eq!(value["name"], "Broken part");
        assert_eq!(value["text"], "Broken part");
        assert!(value.get("id").is_none());
        assert!(value.get("description").is_none());

        let back: Cause = serde_json::from_value(value).unwrap();
        assert_eq!(back, cause);
    }
}
