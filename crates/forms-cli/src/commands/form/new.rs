use forms_core::responses::FormCreateResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user_id = ctx.require_user()?;
    let form = ctx.service.create_form(user_id).await?;
    output(&FormCreateResponse { form }, flags.format)
}
