//! Decoding the editor's posted field list.
//!
//! The editor page posts the whole in-progress field list on every request as
//! parallel arrays: `label` and `type` repeated once per field, plus
//! `options<i>` repeated once per option of select field `i`.

use std::collections::BTreeMap;

use crate::entities::FieldDef;
use crate::enums::FieldKind;
use crate::errors::CoreError;

/// Raw field arrays as posted by the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostedFields {
    pub labels: Vec<String>,
    pub kinds: Vec<String>,
    /// Option values keyed by field index.
    pub options: BTreeMap<usize, Vec<String>>,
}

impl PostedFields {
    /// Rebuild the field list.
    ///
    /// Labels and options are trimmed. Options posted for non-select fields are
    /// ignored; a select field posted without options gets a single `""`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidField` if the label and type counts differ
    /// or a type is not `text`, `checkbox`, or `select`.
    pub fn into_fields(self) -> Result<Vec<FieldDef>, CoreError> {
        if self.labels.len() != self.kinds.len() {
            return Err(CoreError::InvalidField(format!(
                "number of labels ({}) and types ({}) not equal",
                self.labels.len(),
                self.kinds.len()
            )));
        }

        let mut options = self.options;
        self.labels
            .into_iter()
            .zip(self.kinds)
            .enumerate()
            .map(|(i, (label, kind))| {
                let kind: FieldKind = kind.parse().map_err(|_| {
                    CoreError::InvalidField(format!("[{label}] invalid input type: [{kind}]"))
                })?;
                let label = label.trim().to_string();
                Ok(match kind {
                    FieldKind::Select => {
                        let posted = options.remove(&i).unwrap_or_default();
                        FieldDef::select(label, posted.iter().map(|o| o.trim().to_string()))
                    }
                    FieldKind::Text | FieldKind::Checkbox => FieldDef::new(label, kind),
                })
            })
            .collect()
    }
}
