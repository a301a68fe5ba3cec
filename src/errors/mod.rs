use std::fmt;
use std::error::Error as StdError;
use serde::{Deserialize, Serialize};
use crate::enums::fetch_error::FetchError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ArcaError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // Network/API errors
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // Parser errors
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },

    // Entity errors
    NotFound {
        entity: String,
        id: u64,
    },
    EntityExists {
        entity: String,
        id: u64,
    },

    // Validation errors
    ValidationError {
        field: String,
        value: String,
        constraint: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl ArcaError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn not_found(entity: &str, id: u64) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            id,
        }
    }

    pub fn entity_exists(entity: &str, id: u64) -> Self {
        Self::EntityExists {
            entity: entity.to_string(),
            id,
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::NetworkError { .. } => true,
            Self::ValidationError { .. } => true,
            Self::ConfigurationError { .. } => true,
            Self::EntityExists { .. } => true,
            Self::NotFound { .. } => false,
            Self::SystemError { .. } => false,
            _ => false,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::NetworkError { .. } => ErrorSeverity::Medium,
            Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::NotFound { .. } => ErrorSeverity::Low,
            Self::EntityExists { .. } => ErrorSeverity::Low,
            Self::ValidationError { .. } => ErrorSeverity::Low,
            Self::ConfigurationError { .. } => ErrorSeverity::Low,
        }
    }

    /// HTTP status the API answers with when a handler fails with this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::EntityExists { .. } => 409,
            Self::ValidationError { .. } | Self::ParseError { .. } => 400,
            _ => 500,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {}", message);
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {})", field));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {}", suggestion));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{}': {}\n💡 Check file permissions and syntax", path, reason)
            }
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {}: {}", operation, reason);
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {})", url));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {})", code));
                }
                msg.push_str("\n💡 Check that the cause service is running and reachable");
                msg
            }
            Self::ParseError { content_type, line_number, reason } => {
                let mut msg = format!("Parse error in {}: {}", content_type, reason);
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {})", line));
                }
                msg
            }
            Self::NotFound { entity, id } => {
                format!("{} with id {} was not found", entity, id)
            }
            Self::EntityExists { entity, id } => {
                format!("{} already carries id {}; the id attribute must be empty to create a new entity", entity, id)
            }
            Self::ValidationError { field, value, constraint } => {
                format!("Validation error for field '{}': value '{}' violates constraint '{}'", field, value, constraint)
            }
            Self::SystemError { operation, reason } => {
                format!("System error during {}: {}", operation, reason)
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

impl fmt::Display for ArcaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for ArcaError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for arca operations
pub type ArcaResult<T> = Result<T, ArcaError>;

pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message.
    pub fn handle_error(error: &ArcaError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());
        eprintln!("{} {}", severity.emoji(), error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 This error is recoverable - you can retry the operation");
        }
    }
}

impl From<std::io::Error> for ArcaError {
    fn from(error: std::io::Error) -> Self {
        ArcaError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ArcaError {
    fn from(error: serde_json::Error) -> Self {
        ArcaError::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for ArcaError {
    fn from(error: toml::de::Error) -> Self {
        ArcaError::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
        }
    }
}

impl From<toml::ser::Error> for ArcaError {
    fn from(error: toml::ser::Error) -> Self {
        ArcaError::system_error("TOML serialization", &error.to_string())
    }
}

impl From<reqwest::Error> for ArcaError {
    fn from(error: reqwest::Error) -> Self {
        ArcaError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(|u| u.to_string()),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}

impl From<FetchError> for ArcaError {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::Network { url, reason } => ArcaError::NetworkError {
                operation: "fetch causes".to_string(),
                url: Some(url),
                status_code: None,
                reason,
            },
            FetchError::Status { url, status, body } => ArcaError::NetworkError {
                operation: "fetch causes".to_string(),
                url: Some(url),
                status_code: Some(status),
                reason: if body.is_empty() { "unexpected status".to_string() } else { body },
            },
            FetchError::Decode(reason) => ArcaError::ParseError {
                content_type: "cause payload".to_string(),
                line_number: None,
                reason,
            },
        }
    }
}
