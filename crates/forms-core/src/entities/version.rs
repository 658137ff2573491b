use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Snapshot of a form's title and captured labels at one version.
///
/// Unique per `(form_id, version)`; written by the first submission against
/// that version.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FormVersion {
    pub form_id: i64,
    pub version: String,
    pub title: String,
    /// Non-empty field labels in field order.
    pub labels: Vec<String>,
}
