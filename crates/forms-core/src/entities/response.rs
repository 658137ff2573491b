use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One submission. Immutable once stored.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Response {
    pub id: i64,
    pub form_id: i64,
    pub version: String,
    /// Positionally aligned with the owning [`FormVersion::labels`](super::FormVersion).
    pub values: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// All submissions made against one version of a form.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResponseSet {
    pub version: String,
    pub title: String,
    /// Column headers.
    pub labels: Vec<String>,
    pub responses: Vec<Response>,
}
