//! Editor action grammar.
//!
//! Every editor request carries exactly one action string:
//!
//! ```text
//! add | edit | view | choose | auth
//! (add|del|upp|dwn|txt|cxb|sel)<n>
//! opt<n> (add|del|upp|dwn)<m>
//! ```
//!
//! `<n>` and `<m>` are unsigned decimal indexes with no separator. Parsing
//! happens in two steps: [`Action::parse`] checks the grammar only, and
//! [`Action::check_bounds`] checks the indexes against the current field list.
//! [`Action::parse_for`] does both, so a rejected action never reaches the
//! editors.

use std::fmt;
use std::str::FromStr;

use crate::entities::FieldDef;
use crate::enums::{FieldKind, ListOp};
use crate::errors::CoreError;

/// A decoded editor action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Bare `add`: create a new form (chooser page only).
    Create,
    /// Structural edit of the field at `index`.
    Field { op: ListOp, index: usize },
    /// `txt`/`cxb`/`sel`: change the kind of the field at `index`.
    Retype { kind: FieldKind, index: usize },
    /// Structural edit of option `index` of the select field `field`.
    Option {
        field: usize,
        op: ListOp,
        index: usize,
    },
    Edit,
    View,
    Choose,
    Auth,
}

impl Action {
    /// Decode an action string. Checks the grammar only; indexes are not
    /// bounded here.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidAction` for an unknown keyword, a missing or
    /// non-decimal index, or a malformed `opt` command.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        match raw {
            "add" => return Ok(Self::Create),
            "edit" => return Ok(Self::Edit),
            "view" => return Ok(Self::View),
            "choose" => return Ok(Self::Choose),
            "auth" => return Ok(Self::Auth),
            _ => {}
        }

        if let Some((outer, inner)) = raw.split_once(' ') {
            let (keyword, field) = split_indexed(raw, outer)?;
            if keyword != "opt" {
                return Err(CoreError::invalid_action(
                    raw,
                    "only 'opt' commands take a sub-command",
                ));
            }
            let (keyword, index) = split_indexed(raw, inner)?;
            let op = ListOp::from_keyword(keyword).ok_or_else(|| {
                CoreError::invalid_action(raw, "unknown option command")
            })?;
            return Ok(Self::Option { field, op, index });
        }

        let (keyword, index) = split_indexed(raw, raw)?;
        if let Some(op) = ListOp::from_keyword(keyword) {
            return Ok(Self::Field { op, index });
        }
        if let Some(kind) = FieldKind::from_action_tag(keyword) {
            return Ok(Self::Retype { kind, index });
        }
        if keyword == "opt" {
            return Err(CoreError::invalid_action(raw, "'opt' needs a sub-command"));
        }
        Err(CoreError::invalid_action(raw, "unknown keyword"))
    }

    /// Decode an action and check it against the current field list.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidAction` when [`parse`](Self::parse) or
    /// [`check_bounds`](Self::check_bounds) fails.
    pub fn parse_for(raw: &str, fields: &[FieldDef]) -> Result<Self, CoreError> {
        let action = Self::parse(raw)?;
        action.check_bounds(fields).map_err(|e| match e {
            CoreError::InvalidAction(reason) => {
                CoreError::InvalidAction(format!("'{raw}': {reason}"))
            }
            other => other,
        })?;
        Ok(action)
    }

    /// Check that every index in this action addresses an existing entry.
    ///
    /// The outer index is bounded by the field list, the inner index of an
    /// `opt` command by that field's option list. `Create` is not an editor
    /// action and is always rejected here.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidAction` on the first out-of-range index.
    pub fn check_bounds(&self, fields: &[FieldDef]) -> Result<(), CoreError> {
        match *self {
            Self::Create => Err(CoreError::InvalidAction(
                "'add' needs a field index".to_string(),
            )),
            Self::Field { index, .. } | Self::Retype { index, .. } => {
                ensure_index("field", index, fields.len())
            }
            Self::Option { field, index, .. } => {
                ensure_index("field", field, fields.len())?;
                ensure_index("option", index, fields[field].option_count())
            }
            Self::Edit | Self::View | Self::Choose | Self::Auth => Ok(()),
        }
    }

    /// Whether applying this action changes the field list.
    #[must_use]
    pub const fn mutates_fields(&self) -> bool {
        matches!(
            self,
            Self::Field { .. } | Self::Retype { .. } | Self::Option { .. }
        )
    }
}

impl FromStr for Action {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => f.write_str("add"),
            Self::Field { op, index } => write!(f, "{op}{index}"),
            Self::Retype { kind, index } => write!(f, "{}{index}", kind.action_tag()),
            Self::Option { field, op, index } => write!(f, "opt{field} {op}{index}"),
            Self::Edit => f.write_str("edit"),
            Self::View => f.write_str("view"),
            Self::Choose => f.write_str("choose"),
            Self::Auth => f.write_str("auth"),
        }
    }
}

/// Split `"del12"` into `("del", 12)`. The keyword is the leading run of ASCII
/// lowercase letters; the rest must be one or more ASCII digits.
fn split_indexed<'a>(raw: &str, token: &'a str) -> Result<(&'a str, usize), CoreError> {
    let split = token
        .find(|c: char| !c.is_ascii_lowercase())
        .unwrap_or(token.len());
    let (keyword, digits) = token.split_at(split);
    if keyword.is_empty() {
        return Err(CoreError::invalid_action(raw, "missing keyword"));
    }
    if digits.is_empty() {
        return Err(CoreError::invalid_action(raw, "missing index"));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::invalid_action(
            raw,
            "index is not a non-negative integer",
        ));
    }
    let index = digits
        .parse::<usize>()
        .map_err(|_| CoreError::invalid_action(raw, "index out of range"))?;
    Ok((keyword, index))
}

fn ensure_index(what: &str, index: usize, len: usize) -> Result<(), CoreError> {
    if index < len {
        Ok(())
    } else {
        Err(CoreError::InvalidAction(format!(
            "{what} index {index} out of range (len {len})"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn sample_fields() -> Vec<FieldDef> {
        vec![
            FieldDef::select("Order", ["Chicken", "Fish", "Pork"]),
            FieldDef::new("Contact", FieldKind::Text),
        ]
    }

    #[rstest]
    #[case("add", Action::Create)]
    #[case("edit", Action::Edit)]
    #[case("view", Action::View)]
    #[case("choose", Action::Choose)]
    #[case("auth", Action::Auth)]
    #[case("add0", Action::Field { op: ListOp::Add, index: 0 })]
    #[case("del2", Action::Field { op: ListOp::Delete, index: 2 })]
    #[case("upp10", Action::Field { op: ListOp::MoveUp, index: 10 })]
    #[case("dwn007", Action::Field { op: ListOp::MoveDown, index: 7 })]
    #[case("txt1", Action::Retype { kind: FieldKind::Text, index: 1 })]
    #[case("cxb3", Action::Retype { kind: FieldKind::Checkbox, index: 3 })]
    #[case("sel0", Action::Retype { kind: FieldKind::Select, index: 0 })]
    #[case("opt0 add1", Action::Option { field: 0, op: ListOp::Add, index: 1 })]
    #[case("opt4 del0", Action::Option { field: 4, op: ListOp::Delete, index: 0 })]
    #[case("opt1 upp2", Action::Option { field: 1, op: ListOp::MoveUp, index: 2 })]
    #[case("opt2 dwn9", Action::Option { field: 2, op: ListOp::MoveDown, index: 9 })]
    fn parses_grammar(#[case] raw: &str, #[case] expected: Action) {
        assert_eq!(Action::parse(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("del")]
    #[case("foo1")]
    #[case("del-1")]
    #[case("del+1")]
    #[case("del1a")]
    #[case("DEL1")]
    #[case(" del1")]
    #[case("del 1")]
    #[case("opt1")]
    #[case("opt1 txt0")]
    #[case("opt1 add")]
    #[case("opt add0")]
    #[case("add1 del0")]
    #[case("opt1  add0")]
    #[case("opt1 add0 dwn1")]
    #[case("edit1")]
    #[case("del99999999999999999999999")]
    fn rejects_malformed(#[case] raw: &str) {
        let err = Action::parse(raw).unwrap_err();
        assert!(
            matches!(err, CoreError::InvalidAction(_)),
            "'{raw}' should be InvalidAction, got {err:?}"
        );
    }

    #[test]
    fn display_roundtrips_to_wire_form() {
        for raw in ["add", "del2", "txt0", "sel5", "opt1 dwn3", "view", "auth"] {
            assert_eq!(Action::parse(raw).unwrap().to_string(), raw);
        }
    }

    #[test]
    fn bounds_accept_last_index() {
        let fields = sample_fields();
        assert!(Action::parse_for("del1", &fields).is_ok());
        assert!(Action::parse_for("opt0 dwn2", &fields).is_ok());
    }

    #[rstest]
    #[case("del2")]
    #[case("sel2")]
    #[case("opt2 add0")]
    #[case("opt0 del3")]
    #[case("opt1 add0")]
    #[case("add")]
    fn bounds_reject_out_of_range(#[case] raw: &str) {
        let err = Action::parse_for(raw, &sample_fields()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidAction(ref msg) if msg.contains(raw)));
    }

    #[test]
    fn page_keywords_need_no_bounds() {
        for raw in ["edit", "view", "choose", "auth"] {
            assert!(Action::parse_for(raw, &[]).is_ok());
        }
    }

    #[test]
    fn only_list_edits_mutate() {
        assert!(Action::parse("opt0 add0").unwrap().mutates_fields());
        assert!(Action::parse("cxb1").unwrap().mutates_fields());
        assert!(!Action::View.mutates_fields());
        assert!(!Action::Create.mutates_fields());
    }
}
