//! CLI response types returned as JSON by `frm` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::edit_request::EditOutcome;
use crate::entities::{Form, ResponseSet};

/// Response from `frm form new`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FormCreateResponse {
    pub form: Form,
}

/// Response from `frm form edit`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FormEditResponse {
    pub form_id: i64,
    pub outcome: EditOutcome,
    /// New version token when the edit was committed.
    pub saved_version: Option<String>,
}

/// Response from `frm respond`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SubmitResponse {
    pub form_id: i64,
    pub version: String,
    pub response_id: i64,
    /// Whether this submission wrote the version snapshot.
    pub new_version: bool,
}

/// Response from `frm responses`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResponsesView {
    pub form_id: i64,
    pub sets: Vec<ResponseSet>,
}

/// Response from deletions (`frm form delete`, `frm responses --action delN`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub entity: String,
    pub id: String,
    pub deleted: bool,
}
