use clap::Subcommand;

/// Form definition commands (owner only).
#[derive(Clone, Debug, Subcommand)]
pub enum FormCommands {
    /// Create a form with the default title and fields.
    New,
    /// List your forms.
    List,
    /// Show a form with its fields and current version.
    Show { id: i64 },
    /// Delete a form and all of its responses.
    Delete { id: i64 },
    /// Apply editor actions in order, saving on a committing `view`.
    Edit {
        id: i64,
        /// Editor action, e.g. `add0`, `sel1`, `opt1 add0`, `view`. Repeatable.
        #[arg(long = "action", required = true)]
        actions: Vec<String>,
        /// Replace the title before applying the actions.
        #[arg(long)]
        title: Option<String>,
    },
}
