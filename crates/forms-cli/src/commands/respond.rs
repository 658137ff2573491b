use std::collections::HashMap;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RespondArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `frm respond`. Open to anonymous respondents.
pub async fn handle(args: &RespondArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let posted: HashMap<String, String> = args.values.iter().cloned().collect();
    let submitted = ctx
        .service
        .submit_response(args.id, &args.version, &posted)
        .await?;
    tracing::info!(
        form_id = submitted.form_id,
        response_id = submitted.response_id,
        "response recorded"
    );
    output(&submitted, flags.format)
}
