use thiserror::Error;

/// Why the layered configuration could not be turned into a usable [`crate::FormsConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML layer or `FORMS_*` variable failed to parse into the
    /// `database`, `general` or `session` sections.
    #[error("Failed to load forms configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A section parsed but one of its values cannot be served, e.g. an empty
    /// `database.path` or a zero `session.max_sessions`.
    #[error("Invalid forms setting '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn invalid_value_names_the_dotted_field() {
        let err = ConfigError::InvalidValue {
            field: "session.max_sessions".into(),
            reason: "must be at least 1".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid forms setting 'session.max_sessions': must be at least 1"
        );
    }
}
