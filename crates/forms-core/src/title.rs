//! Form title validation.
//!
//! A bad title is reported as feedback next to the editor, not as an error:
//! field edits still go through, only the commit is held back.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest accepted title, in Unicode scalar values.
pub const MAX_TITLE_CHARS: usize = 50;

/// Why a title was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TitleProblem {
    Empty,
    TooLong,
}

impl TitleProblem {
    /// User-facing feedback line.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Empty => "Title cannot be empty",
            Self::TooLong => "Title is too long",
        }
    }
}

impl fmt::Display for TitleProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A trimmed title and the problem with it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleCheck {
    pub title: String,
    pub problem: Option<TitleProblem>,
}

impl TitleCheck {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.problem.is_none()
    }
}

/// Trim `raw` and check it is non-empty and at most [`MAX_TITLE_CHARS`] long.
#[must_use]
pub fn validate_title(raw: &str) -> TitleCheck {
    let title = raw.trim().to_string();
    let problem = if title.is_empty() {
        Some(TitleProblem::Empty)
    } else if title.chars().count() > MAX_TITLE_CHARS {
        Some(TitleProblem::TooLong)
    } else {
        None
    };
    TitleCheck { title, problem }
}
