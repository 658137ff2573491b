//! Field-list and option-list editing.
//!
//! Both lists obey the same rules, so one generic [`apply_list_op`] serves the
//! field list and every select field's option list:
//!
//! - `Add` inserts a blank entry right after the target.
//! - `Delete` removes the target, except that the sole remaining entry is
//!   replaced with a blank one. A list never becomes empty.
//! - `MoveUp`/`MoveDown` swap with the neighbour and are no-ops at the edges.
//!
//! Every function checks its indexes before touching the list, so an error
//! always leaves the list unchanged.

use crate::action::Action;
use crate::entities::FieldDef;
use crate::enums::{FieldKind, ListOp};
use crate::errors::CoreError;

/// Apply one structural operation to `items` at `index`.
///
/// # Errors
///
/// Returns `CoreError::InvalidAction` if `index` is out of range.
pub fn apply_list_op<T>(
    items: &mut Vec<T>,
    op: ListOp,
    index: usize,
    blank: impl FnOnce() -> T,
) -> Result<(), CoreError> {
    if index >= items.len() {
        return Err(CoreError::InvalidAction(format!(
            "{op}{index}: index out of range (len {})",
            items.len()
        )));
    }

    match op {
        ListOp::Add => items.insert(index + 1, blank()),
        ListOp::Delete => {
            if items.len() == 1 {
                items[0] = blank();
            } else {
                items.remove(index);
            }
        }
        ListOp::MoveUp => {
            if index > 0 {
                items.swap(index - 1, index);
            }
        }
        ListOp::MoveDown => {
            if index + 1 < items.len() {
                items.swap(index, index + 1);
            }
        }
    }
    Ok(())
}

/// Apply a structural operation to the field list.
///
/// # Errors
///
/// Returns `CoreError::InvalidAction` if `index` is out of range.
pub fn edit_fields(fields: &mut Vec<FieldDef>, op: ListOp, index: usize) -> Result<(), CoreError> {
    apply_list_op(fields, op, index, FieldDef::blank)
}

/// Apply a structural operation to an option list. A deleted sole option
/// becomes `""`.
///
/// # Errors
///
/// Returns `CoreError::InvalidAction` if `index` is out of range.
pub fn edit_options(options: &mut Vec<String>, op: ListOp, index: usize) -> Result<(), CoreError> {
    apply_list_op(options, op, index, String::new)
}

/// Change a field's kind. Text and checkbox drop their options; select always
/// restarts from a single empty option.
pub fn retype(field: &mut FieldDef, kind: FieldKind) {
    field.kind = kind;
    field.options = match kind {
        FieldKind::Text | FieldKind::Checkbox => None,
        FieldKind::Select => Some(vec![String::new()]),
    };
}

/// Apply a decoded action to the field list.
///
/// Page actions (`edit`, `view`, `choose`, `auth`) leave the list untouched.
///
/// # Errors
///
/// Returns `CoreError::InvalidAction` if the action is out of range for
/// `fields` or is `Create`. The list is not modified in that case.
pub fn apply(fields: &mut Vec<FieldDef>, action: &Action) -> Result<(), CoreError> {
    action.check_bounds(fields)?;

    match *action {
        Action::Field { op, index } => edit_fields(fields, op, index),
        Action::Retype { kind, index } => {
            retype(&mut fields[index], kind);
            Ok(())
        }
        Action::Option { field, op, index } => {
            let options = fields[field].options.get_or_insert_with(Vec::new);
            edit_options(options, op, index)
        }
        Action::Create | Action::Edit | Action::View | Action::Choose | Action::Auth => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(label: &str) -> FieldDef {
        FieldDef::new(label, FieldKind::Text)
    }

    fn labels(fields: &[FieldDef]) -> Vec<&str> {
        fields.iter().map(|f| f.label.as_str()).collect()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn run(fields: &mut Vec<FieldDef>, raw: &str) {
        let action = Action::parse_for(raw, fields).unwrap();
        apply(fields, &action).unwrap();
    }

    #[test]
    fn add_inserts_blank_after_target() {
        let mut fields = vec![text("Order"), text("Contact")];
        run(&mut fields, "add0");
        assert_eq!(fields, vec![text("Order"), FieldDef::blank(), text("Contact")]);
    }

    #[test]
    fn add_at_last_index_appends() {
        let mut fields = vec![text("a"), text("b")];
        run(&mut fields, "add1");
        assert_eq!(labels(&fields), vec!["a", "b", ""]);
    }

    #[test]
    fn delete_removes_target() {
        let mut fields = vec![text("a"), text("b"), text("c")];
        run(&mut fields, "del1");
        assert_eq!(labels(&fields), vec!["a", "c"]);
    }

    #[test]
    fn delete_last_field_leaves_blank() {
        let mut fields = vec![FieldDef::select("Only", ["x", "y"])];
        run(&mut fields, "del0");
        assert_eq!(fields, vec![FieldDef::blank()]);
    }

    #[test]
    fn delete_never_empties_any_list() {
        for len in 1..6 {
            for index in 0..len {
                let mut fields: Vec<FieldDef> = (0..len).map(|i| text(&i.to_string())).collect();
                edit_fields(&mut fields, ListOp::Delete, index).unwrap();
                assert!(!fields.is_empty());
                assert_eq!(fields.len(), (len - 1).max(1));

                let mut options: Vec<String> = (0..len).map(|i| i.to_string()).collect();
                edit_options(&mut options, ListOp::Delete, index).unwrap();
                assert!(!options.is_empty());
            }
        }
    }

    #[test]
    fn move_up_then_down_restores_order() {
        let original = vec![text("a"), text("b"), text("c")];
        let mut fields = original.clone();
        run(&mut fields, "upp1");
        assert_eq!(labels(&fields), vec!["b", "a", "c"]);
        run(&mut fields, "dwn0");
        assert_eq!(fields, original);

        run(&mut fields, "dwn1");
        assert_eq!(labels(&fields), vec!["a", "c", "b"]);
        run(&mut fields, "upp2");
        assert_eq!(fields, original);
    }

    #[test]
    fn moves_at_edges_are_noops() {
        let original = vec![text("a"), text("b")];
        let mut fields = original.clone();
        run(&mut fields, "upp0");
        assert_eq!(fields, original);
        run(&mut fields, "dwn1");
        assert_eq!(fields, original);
    }

    #[test]
    fn add_then_delete_next_is_identity() {
        let original = vec![
            text("a"),
            FieldDef::new("b", FieldKind::Checkbox),
            FieldDef::select("c", ["1"]),
        ];
        for i in 0..original.len() {
            let mut fields = original.clone();
            edit_fields(&mut fields, ListOp::Add, i).unwrap();
            edit_fields(&mut fields, ListOp::Delete, i + 1).unwrap();
            assert_eq!(fields, original);
        }
    }

    #[test]
    fn select_resets_options() {
        let mut fields = vec![text("1")];
        run(&mut fields, "sel0");
        assert_eq!(fields, vec![FieldDef::select("1", [""])]);

        let mut fields = vec![FieldDef::select("Qty", ["1", "2"])];
        run(&mut fields, "sel0");
        assert_eq!(fields[0].options, Some(strings(&[""])));
    }

    #[test]
    fn text_and_checkbox_clear_options() {
        let mut fields = vec![FieldDef::select("a", ["1"]), FieldDef::select("b", ["2"])];
        run(&mut fields, "txt0");
        run(&mut fields, "cxb1");
        assert_eq!(fields[0], text("a"));
        assert_eq!(fields[1], FieldDef::new("b", FieldKind::Checkbox));
    }

    #[test]
    fn option_delete_removes_middle() {
        let mut fields = vec![FieldDef::select("n", ["1", "2", "3"])];
        run(&mut fields, "opt0 del1");
        assert_eq!(fields[0].options, Some(strings(&["1", "3"])));
    }

    #[test]
    fn option_add_and_moves() {
        let mut fields = vec![text("x"), FieldDef::select("n", ["a", "b"])];
        run(&mut fields, "opt1 add0");
        assert_eq!(fields[1].options, Some(strings(&["a", "", "b"])));
        run(&mut fields, "opt1 dwn0");
        assert_eq!(fields[1].options, Some(strings(&["", "a", "b"])));
        run(&mut fields, "opt1 upp0");
        assert_eq!(fields[1].options, Some(strings(&["", "a", "b"])));
    }

    #[test]
    fn option_delete_sole_entry_blanks_it() {
        let mut fields = vec![FieldDef::select("n", ["only"])];
        run(&mut fields, "opt0 del0");
        assert_eq!(fields[0].options, Some(strings(&[""])));
    }

    #[test]
    fn rejected_action_leaves_list_untouched() {
        let original = vec![text("a"), FieldDef::select("b", ["1"])];
        let mut fields = original.clone();
        for action in [
            Action::Field { op: ListOp::Delete, index: 2 },
            Action::Option { field: 0, op: ListOp::Add, index: 0 },
            Action::Option { field: 1, op: ListOp::Delete, index: 1 },
            Action::Create,
        ] {
            assert!(apply(&mut fields, &action).is_err());
            assert_eq!(fields, original);
        }
    }

    #[test]
    fn page_actions_do_not_mutate() {
        let original = vec![text("a")];
        let mut fields = original.clone();
        for action in [Action::Edit, Action::View, Action::Choose, Action::Auth] {
            apply(&mut fields, &action).unwrap();
        }
        assert_eq!(fields, original);
    }
}
