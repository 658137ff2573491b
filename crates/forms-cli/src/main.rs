use anyhow::Context;
use clap::Parser;
use forms_core::errors::CoreError;
use forms_db::error::DatabaseError;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;

/// Exit status for rejected input (bad action, stale version).
const EXIT_CLIENT_ERROR: i32 = 2;
/// Exit status for an unknown or foreign form.
const EXIT_NOT_FOUND: i32 = 4;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("frm error: {error:#}");
        std::process::exit(exit_code(&error));
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();

    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, &flags);
    }

    let config = bootstrap::load_config()?;
    context::warn_unconfigured();

    let ctx = context::AppContext::init(config, &flags)
        .await
        .context("failed to initialize forms application context")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("FORMS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Map the first domain error in the chain to a process exit status.
fn exit_code(error: &anyhow::Error) -> i32 {
    let core = error.chain().find_map(|cause| {
        cause
            .downcast_ref::<CoreError>()
            .or_else(|| cause.downcast_ref::<DatabaseError>()?.as_core())
    });
    match core {
        Some(CoreError::NotFound { .. }) => EXIT_NOT_FOUND,
        Some(e) if e.is_client_error() => EXIT_CLIENT_ERROR,
        _ => 1,
    }
}
