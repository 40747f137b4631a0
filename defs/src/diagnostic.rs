use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

/// A structured error surfaced to the orchestrating tool.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_error_serializes_lowercase_severity() {
        let diagnostic = Diagnostic::error("Unable to find resource", "Name: b1");
        assert!(diagnostic.is_error());
        assert_eq!(
            serde_json::to_value(&diagnostic).unwrap()["severity"],
            serde_json::json!("error")
        );
    }
}
