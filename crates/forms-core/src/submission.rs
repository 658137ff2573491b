//! Submission capture and the version-token guard.
//!
//! Respondents post one value per field, keyed by field index (`"0"`, `"1"`,
//! ...), plus the `version` token of the form they loaded. Only fields with a
//! non-empty label are recorded; label emptiness, not field kind, decides
//! whether a column exists.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::entities::FieldDef;
use crate::enums::FieldKind;
use crate::errors::CoreError;

/// Value stored for a ticked checkbox.
pub const CHECKED_MARKER: &str = "✅";

/// Value browsers post for a ticked checkbox.
const CHECKBOX_ON: &str = "on";

/// Column labels and the values aligned with them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedResponse {
    pub labels: Vec<String>,
    pub values: Vec<String>,
}

/// Build the recorded labels and values for one submission.
///
/// Each value is the trimmed posted value for the field's index, `""` when
/// nothing was posted. A ticked checkbox is stored as [`CHECKED_MARKER`].
#[must_use]
pub fn capture_submission(
    fields: &[FieldDef],
    posted: &HashMap<String, String>,
) -> CapturedResponse {
    let mut labels = Vec::new();
    let mut values = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        if !field.is_captured() {
            continue;
        }
        let value = posted
            .get(&index.to_string())
            .map_or("", |v| v.trim());
        let value = if field.kind == FieldKind::Checkbox && value == CHECKBOX_ON {
            CHECKED_MARKER
        } else {
            value
        };
        labels.push(field.label.clone());
        values.push(value.to_string());
    }

    CapturedResponse { labels, values }
}

/// Reject a submission made against a version other than the current one.
///
/// # Errors
///
/// Returns `CoreError::VersionMismatch` when the tokens differ.
pub fn check_version(form_id: i64, submitted: &str, current: &str) -> Result<(), CoreError> {
    if submitted == current {
        Ok(())
    } else {
        Err(CoreError::VersionMismatch {
            form_id,
            submitted: submitted.to_string(),
            current: current.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn posted(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn order_form() -> Vec<FieldDef> {
        vec![
            FieldDef::select("Qty", ["1", "2", "3"]),
            FieldDef::new("Chilli packs", FieldKind::Checkbox),
            FieldDef::new("", FieldKind::Text),
            FieldDef::new("Name", FieldKind::Text),
            FieldDef::new("Self collection", FieldKind::Checkbox),
        ]
    }

    #[test]
    fn skips_unlabelled_fields_and_aligns_values() {
        let captured = capture_submission(
            &order_form(),
            &posted(&[("0", "2"), ("1", "on"), ("2", "ignored"), ("3", "  Lam ")]),
        );
        assert_eq!(
            captured.labels,
            vec!["Qty", "Chilli packs", "Name", "Self collection"]
        );
        assert_eq!(captured.values, vec!["2", CHECKED_MARKER, "Lam", ""]);
    }

    #[test]
    fn on_only_becomes_marker_for_checkboxes() {
        let fields = vec![FieldDef::new("Comment", FieldKind::Text)];
        let captured = capture_submission(&fields, &posted(&[("0", "on")]));
        assert_eq!(captured.values, vec!["on"]);
    }

    #[test]
    fn unlabelled_checkbox_has_no_column() {
        let fields = vec![
            FieldDef::new("", FieldKind::Checkbox),
            FieldDef::new("Name", FieldKind::Text),
        ];
        let captured = capture_submission(&fields, &posted(&[("0", "on"), ("1", "x")]));
        assert_eq!(captured.labels, vec!["Name"]);
        assert_eq!(captured.values, vec!["x"]);
    }

    #[test]
    fn version_guard() {
        assert!(check_version(1, "v1", "v1").is_ok());
        let err = check_version(1, "v1", "v2").unwrap_err();
        assert!(matches!(
            err,
            CoreError::VersionMismatch { form_id: 1, ref submitted, ref current }
                if submitted == "v1" && current == "v2"
        ));
    }
}
