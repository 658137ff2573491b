use serde::Serialize;

use forms_core::entities::FormSummary;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct FormListResponse {
    forms: Vec<FormSummary>,
}

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user_id = ctx.require_user()?;
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let forms = ctx.service.list_forms(user_id, limit).await?;
    output(&FormListResponse { forms }, flags.format)
}
