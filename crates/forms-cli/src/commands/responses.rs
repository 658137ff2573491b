use forms_core::edit_request::{ResponsesAction, responses_action};
use forms_core::errors::CoreError;
use forms_core::responses::{DeleteResponse, ResponsesView};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ResponsesArgs;
use crate::commands::choose::redirect;
use crate::context::AppContext;
use crate::output::output;

/// Handle `frm responses`.
pub async fn handle(
    args: &ResponsesArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Some(raw) = &args.action {
        return run_action(args.id, raw, ctx, flags).await;
    }

    let user_id = ctx.require_user()?;
    if !ctx.service.form_exists(args.id, user_id).await? {
        return Err(CoreError::form_not_found(args.id).into());
    }
    let sets = ctx.service.aggregate_responses(args.id).await?;
    output(
        &ResponsesView {
            form_id: args.id,
            sets,
        },
        flags.format,
    )
}

async fn run_action(
    form_id: i64,
    raw: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match responses_action(raw, ctx.identity.is_signed_in())? {
        ResponsesAction::DeleteSet { index } => {
            let user_id = ctx.require_user()?;
            let version = ctx
                .service
                .delete_response_set_at(form_id, user_id, index)
                .await?;
            output(
                &DeleteResponse {
                    entity: "response_set".to_string(),
                    id: version,
                    deleted: true,
                },
                flags.format,
            )
        }
        ResponsesAction::Redirect { to } => output(&redirect(to), flags.format),
    }
}
