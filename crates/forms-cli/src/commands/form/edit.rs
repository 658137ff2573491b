use forms_core::edit_request::{EditOutcome, EditRequest, edit_form};
use forms_core::entities::FieldDef;
use forms_core::responses::FormEditResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// One page request's worth of state carried between actions.
struct Draft {
    title: String,
    fields: Vec<FieldDef>,
}

pub async fn run(
    id: i64,
    actions: &[String],
    title: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user_id = ctx.require_user()?;
    let form = ctx.service.load_form(id, user_id).await?;
    let mut draft = Draft {
        title: title.map_or(form.title, str::to_string),
        fields: form.fields,
    };

    let mut outcome = None;
    let mut saved_version = None;
    for action in actions {
        let next = step(&mut draft, action, ctx.identity.is_signed_in())?;
        if let EditOutcome::Page(page) = &next
            && page.commit
        {
            let version = ctx
                .service
                .save_form(id, user_id, &page.title, &page.fields)
                .await?;
            tracing::info!(form_id = id, %version, "form committed");
            saved_version = Some(version);
        }
        let redirected = matches!(next, EditOutcome::Redirect { .. });
        outcome = Some(next);
        if redirected {
            break;
        }
    }

    let Some(outcome) = outcome else {
        anyhow::bail!("no editor action given");
    };
    output(
        &FormEditResponse {
            form_id: id,
            outcome,
            saved_version,
        },
        flags.format,
    )
}

/// Apply one action to the draft, carrying the edited list forward.
fn step(draft: &mut Draft, action: &str, signed_in: bool) -> anyhow::Result<EditOutcome> {
    let outcome = edit_form(EditRequest {
        title: &draft.title,
        fields: draft.fields.clone(),
        action,
        signed_in,
    })?;
    if let EditOutcome::Page(page) = &outcome {
        draft.title.clone_from(&page.title);
        draft.fields.clone_from(&page.fields);
    }
    Ok(outcome)
}
