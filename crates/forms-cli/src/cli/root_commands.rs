use clap::{Args, Subcommand, ValueEnum};

use crate::cli::subcommands::FormCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Form definitions.
    Form {
        #[command(subcommand)]
        action: FormCommands,
    },
    /// Run a form chooser action (`add`, `del<id>`, `auth`).
    Choose(ChooseArgs),
    /// Submit a response to a form.
    Respond(RespondArgs),
    /// Show responses grouped by version, or run a responses page action.
    Responses(ResponsesArgs),
    /// Print the JSON Schema of a core entity.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ChooseArgs {
    pub action: String,
}

#[derive(Clone, Debug, Args)]
pub struct RespondArgs {
    pub id: i64,
    /// Version token of the form as the respondent loaded it.
    #[arg(long)]
    pub version: String,
    /// Posted value as `<field index>=<value>`. Repeatable.
    #[arg(long = "value", value_parser = parse_posted_value)]
    pub values: Vec<(String, String)>,
}

#[derive(Clone, Debug, Args)]
pub struct ResponsesArgs {
    pub id: i64,
    /// Responses page action (`del<n>`, `choose`, `auth`).
    #[arg(long)]
    pub action: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Form,
    Field,
    ResponseSet,
}

fn parse_posted_value(raw: &str) -> Result<(String, String), String> {
    let (index, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected <index>=<value>, got '{raw}'"))?;
    if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("field index must be a number, got '{index}'"));
    }
    Ok((index.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::cli::Cli;

    #[test]
    fn respond_collects_values() {
        let cli = Cli::try_parse_from([
            "frm", "respond", "4", "--version", "v1", "--value", "0=Ann", "--value", "2=on",
        ])
        .expect("cli should parse");
        let Commands::Respond(args) = cli.command else {
            panic!("expected respond");
        };
        assert_eq!(args.id, 4);
        assert_eq!(args.version, "v1");
        assert_eq!(
            args.values,
            vec![
                ("0".to_string(), "Ann".to_string()),
                ("2".to_string(), "on".to_string())
            ]
        );
    }

    #[test]
    fn value_may_contain_equals() {
        assert_eq!(
            parse_posted_value("1=a=b").unwrap(),
            ("1".to_string(), "a=b".to_string())
        );
    }

    #[rstest]
    #[case("novalue")]
    #[case("x=1")]
    #[case("=1")]
    fn bad_posted_values_are_rejected(#[case] raw: &str) {
        assert!(parse_posted_value(raw).is_err());
    }

    #[test]
    fn edit_requires_an_action() {
        assert!(Cli::try_parse_from(["frm", "form", "edit", "1"]).is_err());
        let cli = Cli::try_parse_from([
            "frm", "form", "edit", "1", "--action", "opt2 add0", "--action", "view",
        ])
        .expect("cli should parse");
        let Commands::Form {
            action: FormCommands::Edit { actions, title, .. },
        } = cli.command
        else {
            panic!("expected form edit");
        };
        assert_eq!(actions, vec!["opt2 add0".to_string(), "view".to_string()]);
        assert_eq!(title, None);
    }

    #[test]
    fn schema_type_uses_kebab_case() {
        let cli = Cli::try_parse_from(["frm", "schema", "response-set"]).expect("cli should parse");
        let Commands::Schema(args) = cli.command else {
            panic!("expected schema");
        };
        assert_eq!(args.type_name, SchemaType::ResponseSet);
    }
}
