//! Field kinds, list operations, page modes, and redirects for Forms.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! `as_str()` returns the value used in SQL storage and on the wire.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// FieldKind
// ---------------------------------------------------------------------------

/// The input widget a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Checkbox,
    Select,
}

impl FieldKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Checkbox => "checkbox",
            Self::Select => "select",
        }
    }

    /// The three-letter action tag that retypes a field to this kind.
    #[must_use]
    pub const fn action_tag(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Checkbox => "cxb",
            Self::Select => "sel",
        }
    }

    /// Inverse of [`action_tag`](Self::action_tag).
    #[must_use]
    pub fn from_action_tag(tag: &str) -> Option<Self> {
        match tag {
            "txt" => Some(Self::Text),
            "cxb" => Some(Self::Checkbox),
            "sel" => Some(Self::Select),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "checkbox" => Ok(Self::Checkbox),
            "select" => Ok(Self::Select),
            other => Err(CoreError::InvalidField(format!(
                "invalid input type '{other}'"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// ListOp
// ---------------------------------------------------------------------------

/// Structural edit shared by the field list and every option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ListOp {
    /// Insert a blank entry after the target.
    Add,
    /// Remove the target; a sole entry is blanked instead.
    Delete,
    /// Swap with the previous entry.
    MoveUp,
    /// Swap with the next entry.
    MoveDown,
}

impl ListOp {
    /// Three-letter wire keyword.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Delete => "del",
            Self::MoveUp => "upp",
            Self::MoveDown => "dwn",
        }
    }

    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "add" => Some(Self::Add),
            "del" => Some(Self::Delete),
            "upp" => Some(Self::MoveUp),
            "dwn" => Some(Self::MoveDown),
            _ => None,
        }
    }
}

impl fmt::Display for ListOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

// ---------------------------------------------------------------------------
// PageMode
// ---------------------------------------------------------------------------

/// Which page the caller should render after a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PageMode {
    Edit,
    View,
}

impl PageMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::View => "view",
        }
    }
}

impl fmt::Display for PageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Redirect
// ---------------------------------------------------------------------------

/// Navigation away from the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Redirect {
    /// The owner's form list.
    Chooser,
    Login,
    Logout,
}

impl Redirect {
    /// Where an `auth` action leads: logout when signed in, login otherwise.
    #[must_use]
    pub const fn for_auth(signed_in: bool) -> Self {
        if signed_in { Self::Logout } else { Self::Login }
    }

    /// Route path of the target page.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Chooser => "/edit",
            Self::Login => "/login",
            Self::Logout => "/logout",
        }
    }
}
