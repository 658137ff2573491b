use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Form { action } => commands::form::handle(&action, ctx, flags).await,
        Commands::Choose(args) => commands::choose::handle(&args, ctx, flags).await,
        Commands::Respond(args) => commands::respond::handle(&args, ctx, flags).await,
        Commands::Responses(args) => commands::responses::handle(&args, ctx, flags).await,
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
