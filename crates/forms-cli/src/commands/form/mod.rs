pub(crate) mod delete;
mod edit;
mod list;
mod new;
mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FormCommands;
use crate::context::AppContext;

/// Handle `frm form`.
pub async fn handle(
    action: &FormCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        FormCommands::New => new::run(ctx, flags).await,
        FormCommands::List => list::run(ctx, flags).await,
        FormCommands::Show { id } => show::run(*id, ctx, flags).await,
        FormCommands::Delete { id } => delete::run(*id, ctx, flags).await,
        FormCommands::Edit { id, actions, title } => {
            edit::run(*id, actions, title.as_deref(), ctx, flags).await
        }
    }
}
