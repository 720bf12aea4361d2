//! Schema-level errors.

use thiserror::Error;

/// A stored bundle does not match the schema.
///
/// Resolution never guesses at the intent of a malformed field, so these
/// are surfaced at load time with the offending leaf path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BundleError {
    /// A field has the wrong shape, an unknown key, or an invalid overlay.
    #[error("malformed style bundle at `{}`: {message}", display_path(.path))]
    Malformed { path: String, message: String },

    /// The bundle could not be encoded to JSON.
    #[error("failed to encode style bundle: {message}")]
    Encoding { message: String },
}

impl BundleError {
    pub fn malformed(path: impl Into<String>, message: impl Into<String>) -> Self {
        BundleError::Malformed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// The offending field path, if the error has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            BundleError::Malformed { path, .. } => Some(path),
            BundleError::Encoding { .. } => None,
        }
    }

    /// Prepends a document-level prefix (e.g. `classes[2].styling`).
    pub fn with_prefix(self, prefix: &str) -> Self {
        match self {
            BundleError::Malformed { path, message } => {
                let path = match (prefix.is_empty(), path.is_empty()) {
                    (true, _) => path,
                    (false, true) => prefix.to_string(),
                    (false, false) if path.starts_with('[') => format!("{}{}", prefix, path),
                    (false, false) => format!("{}.{}", prefix, path),
                };
                BundleError::Malformed { path, message }
            }
            other => other,
        }
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "<root>"
    } else {
        path
    }
}

/// A name did not match any variant of a schema enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'. Available: {}", .available.join(", "))]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub available: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display_includes_path() {
        let err = BundleError::malformed("layout.margin.top", "invalid type: integer");
        let msg = err.to_string();
        assert!(msg.contains("layout.margin.top"));
        assert!(msg.contains("invalid type"));
    }

    #[test]
    fn test_root_path_display() {
        let err = BundleError::malformed("", "expected an object");
        assert!(err.to_string().contains("<root>"));
    }

    #[test]
    fn test_with_prefix() {
        let err = BundleError::malformed("layout.display", "bad").with_prefix("theme");
        assert_eq!(err.path(), Some("theme.layout.display"));

        let err = BundleError::malformed("[1].name", "bad").with_prefix("classes");
        assert_eq!(err.path(), Some("classes[1].name"));

        let err = BundleError::malformed("", "bad").with_prefix("element.styling");
        assert_eq!(err.path(), Some("element.styling"));
    }

    #[test]
    fn test_unknown_variant_lists_options() {
        let err = UnknownVariant {
            kind: "breakpoint",
            value: "watch".to_string(),
            available: vec!["desktop", "tablet", "mobile"],
        };
        assert_eq!(
            err.to_string(),
            "unknown breakpoint 'watch'. Available: desktop, tablet, mobile"
        );
    }
}
