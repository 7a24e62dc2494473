//! Error types for the locale and theme core.
//!
//! # Design
//! - Storage and document failures are recoverable; controllers log them and keep going.
//! - Preference errors are the only ones surfaced to callers (string entry points).

use thiserror::Error;

/// Failures raised by a [`crate::storage::KeyValueStore`] implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The backing store is not reachable in this execution context.
    #[error("key-value storage unavailable")]
    Unavailable {
        /// Adapter-specific detail.
        detail: String,
    },
    /// A read was attempted and rejected by the backing store.
    #[error("storage read failed")]
    Read {
        /// Key that was being read.
        key: String,
        /// Adapter-specific detail.
        detail: String,
    },
    /// A write was attempted and rejected by the backing store.
    #[error("storage write failed")]
    Write {
        /// Key that was being written.
        key: String,
        /// Adapter-specific detail.
        detail: String,
    },
}

/// Failures raised by a [`crate::surface::DocumentSurface`] implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The document (or its root/body element) is not available.
    #[error("document surface unavailable")]
    Unavailable,
    /// Setting an attribute on the document root failed.
    #[error("failed to set root attribute")]
    Attribute {
        /// Attribute name.
        name: &'static str,
        /// Adapter-specific detail.
        detail: String,
    },
    /// Adding or removing a class on the document root failed.
    #[error("failed to update root class")]
    Class {
        /// Class name.
        name: &'static str,
        /// Adapter-specific detail.
        detail: String,
    },
    /// Setting a style property on the document body failed.
    #[error("failed to set body style property")]
    Style {
        /// CSS property name.
        property: &'static str,
        /// Adapter-specific detail.
        detail: String,
    },
}

/// Errors returned to callers that pass preference values as strings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    /// The language code is not one of the supported languages.
    #[error("unsupported language code")]
    UnsupportedLanguage {
        /// Code provided by the caller.
        value: String,
    },
    /// The theme mode name is neither `light` nor `dark`.
    #[error("unsupported theme mode")]
    UnsupportedThemeMode {
        /// Mode provided by the caller.
        value: String,
    },
}

/// Errors raised while loading appearance configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document was not valid JSON for the expected shape.
    #[error("invalid appearance configuration")]
    Parse {
        /// Underlying serde error.
        source: serde_json::Error,
    },
    /// A field parsed but carried a value the core cannot use.
    #[error("invalid appearance configuration field")]
    InvalidField {
        /// Field name.
        field: &'static str,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
}

/// Convenience alias for preference results.
pub type CoreResult<T> = Result<T, PreferenceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn storage_error_messages_are_stable() {
        let cases = [
            (
                StorageError::Unavailable {
                    detail: "no window".into(),
                },
                "key-value storage unavailable",
            ),
            (
                StorageError::Read {
                    key: "mode".into(),
                    detail: "denied".into(),
                },
                "storage read failed",
            ),
            (
                StorageError::Write {
                    key: "mode".into(),
                    detail: "quota".into(),
                },
                "storage write failed",
            ),
        ];
        for (err, message) in cases {
            assert_eq!(err.to_string(), message);
        }
    }

    #[test]
    fn preference_errors_keep_offending_value() {
        let err = PreferenceError::UnsupportedLanguage { value: "xx".into() };
        assert_eq!(err.to_string(), "unsupported language code");
        assert!(matches!(err, PreferenceError::UnsupportedLanguage { ref value } if value == "xx"));
    }

    #[test]
    fn config_parse_error_exposes_source() {
        let source = match serde_json::from_str::<serde_json::Value>("{") {
            Ok(_) => unreachable!("truncated json must not parse"),
            Err(err) => err,
        };
        let err = ConfigError::Parse { source };
        assert_eq!(err.to_string(), "invalid appearance configuration");
        assert!(err.source().is_some());
    }
}
