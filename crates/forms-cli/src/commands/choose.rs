use serde::Serialize;

use forms_core::edit_request::{ChooserAction, choose_action};
use forms_core::enums::Redirect;
use forms_core::responses::FormCreateResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChooseArgs;
use crate::commands::form::delete::deleted_form;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RedirectResponse {
    redirect: Redirect,
    path: &'static str,
}

/// Handle `frm choose`.
pub async fn handle(args: &ChooseArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match choose_action(&args.action, ctx.identity.is_signed_in())? {
        ChooserAction::NewForm => {
            let user_id = ctx.require_user()?;
            let form = ctx.service.create_form(user_id).await?;
            output(&FormCreateResponse { form }, flags.format)
        }
        ChooserAction::DeleteForm { form_id } => {
            let user_id = ctx.require_user()?;
            ctx.service.delete_form(form_id, user_id).await?;
            output(&deleted_form(form_id), flags.format)
        }
        ChooserAction::Redirect { to } => output(&redirect(to), flags.format),
    }
}

pub(crate) const fn redirect(to: Redirect) -> impl Serialize {
    RedirectResponse {
        redirect: to,
        path: to.path(),
    }
}
