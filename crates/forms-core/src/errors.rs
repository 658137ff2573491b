//! Cross-cutting error types for Forms.
//!
//! Storage failures are defined in `forms-db` as `DatabaseError`. A unified
//! error is deferred to `forms-cli` where all crate errors converge.

use thiserror::Error;

/// Errors that can be raised by any Forms crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Malformed or out-of-range editor action. Raised before any mutation.
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// The posted field list could not be decoded.
    #[error("Invalid field list: {0}")]
    InvalidField(String),

    /// A submission was made against a version that is no longer current.
    #[error(
        "Form {form_id} has changed: submitted version {submitted}, current version {current}"
    )]
    VersionMismatch {
        form_id: i64,
        submitted: String,
        current: String,
    },

    /// Entity lookup returned no result (or is not owned by the caller).
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },
}

impl CoreError {
    pub(crate) fn invalid_action(raw: &str, reason: &str) -> Self {
        Self::InvalidAction(format!("'{raw}': {reason}"))
    }

    /// Shorthand for a missing (or foreign) form.
    #[must_use]
    pub fn form_not_found(id: i64) -> Self {
        Self::NotFound {
            entity_type: "form".to_string(),
            id: id.to_string(),
        }
    }

    /// Whether the caller caused this error (bad input or stale version).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAction(_) | Self::InvalidField(_) | Self::VersionMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_mismatch_message_names_both_tokens() {
        let err = CoreError::VersionMismatch {
            form_id: 7,
            submitted: "a".into(),
            current: "b".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("submitted version a"));
        assert!(msg.contains("current version b"));
        assert!(err.is_client_error());
    }

    #[test]
    fn not_found_is_not_a_client_error() {
        let err = CoreError::form_not_found(3);
        assert_eq!(err.to_string(), "Entity not found: form 3");
        assert!(!err.is_client_error());
    }
}
