use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::FieldKind;

/// One question in a form.
///
/// `options` is `Some` only for [`FieldKind::Select`], and then never empty.
/// An empty `label` keeps the field on screen but excludes it from
/// submission capture.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FieldDef {
    pub label: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub options: Option<Vec<String>>,
}

impl FieldDef {
    /// The field inserted by `add` and left behind when the last field is deleted.
    #[must_use]
    pub const fn blank() -> Self {
        Self {
            label: String::new(),
            kind: FieldKind::Text,
            options: None,
        }
    }

    /// A field of any kind. A [`FieldKind::Select`] starts with a single empty
    /// option; text and checkbox fields carry none.
    #[must_use]
    pub fn new(label: impl Into<String>, kind: FieldKind) -> Self {
        let options = (kind == FieldKind::Select).then(|| vec![String::new()]);
        Self {
            label: label.into(),
            kind,
            options,
        }
    }

    /// A select field. An empty option list is replaced with `[""]`.
    #[must_use]
    pub fn select<I, S>(label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            options.push(String::new());
        }
        Self {
            label: label.into(),
            kind: FieldKind::Select,
            options: Some(options),
        }
    }

    /// Whether submissions record a value for this field.
    #[must_use]
    pub fn is_captured(&self) -> bool {
        !self.label.is_empty()
    }

    /// Option list length, zero for non-select fields.
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.as_ref().map_or(0, Vec::len)
    }
}

/// Fields a freshly created form starts with.
#[must_use]
pub fn default_field_set() -> Vec<FieldDef> {
    vec![
        FieldDef::new("Text box", FieldKind::Text),
        FieldDef::new("Check box", FieldKind::Checkbox),
        FieldDef::select("Drop down select", ["option1", "option2"]),
    ]
}
