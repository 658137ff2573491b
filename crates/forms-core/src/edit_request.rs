//! One editor page request, decoded and applied.
//!
//! [`edit_form`] runs the title validator, the action parser, and the editors
//! in that order and tells the caller what to render and whether to persist.
//! Persisting itself is left to the storage layer.
//!
//! The chooser and responses pages accept a smaller action set; see
//! [`choose_action`] and [`responses_action`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::editor;
use crate::entities::FieldDef;
use crate::enums::{ListOp, PageMode, Redirect};
use crate::errors::CoreError;
use crate::title::{TitleProblem, validate_title};

/// Inputs of one editor request.
#[derive(Debug, Clone)]
pub struct EditRequest<'a> {
    /// Title as typed, untrimmed.
    pub title: &'a str,
    /// The in-progress field list the page posted.
    pub fields: Vec<FieldDef>,
    /// The `action` form value.
    pub action: &'a str,
    /// Whether the request carries a signed-in identity.
    pub signed_in: bool,
}

/// The editor page to render after a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EditPage {
    pub title: String,
    pub fields: Vec<FieldDef>,
    pub feedback: Option<TitleProblem>,
    pub mode: PageMode,
    /// The caller must save `title` and `fields` as the form's new state.
    pub commit: bool,
}

/// Result of an editor request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EditOutcome {
    Page(EditPage),
    Redirect { to: Redirect },
}

/// Apply one editor request.
///
/// - The title is always trimmed and validated; a problem is returned as
///   feedback and never aborts the request.
/// - `view` switches to the preview and sets `commit` when the title is valid
///   and the caller is signed in. With a bad title the page stays in edit mode.
/// - List commands return the edited list in edit mode.
/// - `choose` and `auth` redirect.
///
/// An empty posted list is treated as a single blank field.
///
/// # Errors
///
/// Returns `CoreError::InvalidAction` for a malformed or out-of-range action.
/// No edit is applied in that case.
pub fn edit_form(request: EditRequest<'_>) -> Result<EditOutcome, CoreError> {
    let EditRequest {
        title,
        mut fields,
        action: raw,
        signed_in,
    } = request;

    let check = validate_title(title);
    if fields.is_empty() {
        fields.push(FieldDef::blank());
    }

    let action = Action::parse_for(raw, &fields)?;
    if action.mutates_fields() {
        editor::apply(&mut fields, &action)?;
    }

    let mut mode = PageMode::Edit;
    let mut commit = false;

    match action {
        Action::View if check.is_valid() => {
            mode = PageMode::View;
            commit = signed_in;
        }
        Action::Field { .. }
        | Action::Retype { .. }
        | Action::Option { .. }
        | Action::Edit
        | Action::View => {}
        Action::Choose => {
            return Ok(EditOutcome::Redirect {
                to: Redirect::Chooser,
            });
        }
        Action::Auth => {
            return Ok(EditOutcome::Redirect {
                to: Redirect::for_auth(signed_in),
            });
        }
        Action::Create => {
            return Err(CoreError::invalid_action(
                raw,
                "new forms are created from the chooser",
            ));
        }
    }

    Ok(EditOutcome::Page(EditPage {
        title: check.title,
        fields,
        feedback: check.problem,
        mode,
        commit,
    }))
}

/// Actions accepted by the owner's form chooser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChooserAction {
    /// `add`: create a form with the default field set.
    NewForm,
    /// `del<id>`: delete the form with this id.
    DeleteForm { form_id: i64 },
    Redirect { to: Redirect },
}

/// Decode a chooser page action.
///
/// # Errors
///
/// Returns `CoreError::InvalidAction` for anything but `add`, `del<id>`, and
/// `auth`.
pub fn choose_action(raw: &str, signed_in: bool) -> Result<ChooserAction, CoreError> {
    match Action::parse(raw)? {
        Action::Create => Ok(ChooserAction::NewForm),
        Action::Field {
            op: ListOp::Delete,
            index,
        } => {
            let form_id = i64::try_from(index)
                .map_err(|_| CoreError::invalid_action(raw, "form id out of range"))?;
            Ok(ChooserAction::DeleteForm { form_id })
        }
        Action::Auth => Ok(ChooserAction::Redirect {
            to: Redirect::for_auth(signed_in),
        }),
        _ => Err(CoreError::invalid_action(
            raw,
            "not available on the form chooser",
        )),
    }
}

/// Actions accepted by the responses page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponsesAction {
    /// `del<n>`: drop the `n`-th response set (0-based, aggregation order).
    DeleteSet { index: usize },
    Redirect { to: Redirect },
}

/// Decode a responses page action.
///
/// # Errors
///
/// Returns `CoreError::InvalidAction` for anything but `del<n>`, `choose`, and
/// `auth`.
pub fn responses_action(raw: &str, signed_in: bool) -> Result<ResponsesAction, CoreError> {
    match Action::parse(raw)? {
        Action::Field {
            op: ListOp::Delete,
            index,
        } => Ok(ResponsesAction::DeleteSet { index }),
        Action::Choose => Ok(ResponsesAction::Redirect {
            to: Redirect::Chooser,
        }),
        Action::Auth => Ok(ResponsesAction::Redirect {
            to: Redirect::for_auth(signed_in),
        }),
        _ => Err(CoreError::invalid_action(
            raw,
            "not available on the responses page",
        )),
    }
}
