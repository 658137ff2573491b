//! Version tokens.
//!
//! A token is the UTC save time as RFC 3339 with microseconds and a `Z`
//! suffix, e.g. `2026-10-19T10:00:00.123456Z`. The fixed width makes string
//! order equal time order, which storage relies on when it sorts versions
//! and responses by token.

use chrono::{DateTime, SecondsFormat, Utc};

/// Token for a form saved at `at`.
#[must_use]
pub fn version_token(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Token for a form saved now.
#[must_use]
pub fn new_version_token() -> String {
    version_token(Utc::now())
}
