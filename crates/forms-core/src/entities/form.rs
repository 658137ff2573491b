use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::FieldDef;

/// Title given to a freshly created form.
pub const DEFAULT_FORM_TITLE: &str = "New Form";

/// A form owned by one user.
///
/// `version` changes on every save; respondents submit against the version
/// they loaded.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Form {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub fields: Vec<FieldDef>,
    pub version: String,
}

/// Row of the owner's form list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FormSummary {
    pub id: i64,
    pub title: String,
    pub version: String,
}
