use forms_core::responses::DeleteResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user_id = ctx.require_user()?;
    ctx.service.delete_form(id, user_id).await?;
    output(&deleted_form(id), flags.format)
}

pub(crate) fn deleted_form(id: i64) -> DeleteResponse {
    DeleteResponse {
        entity: "form".to_string(),
        id: id.to_string(),
        deleted: true,
    }
}
