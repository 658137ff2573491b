use schemars::schema_for;

use forms_core::entities::{FieldDef, Form, ResponseSet};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};
use crate::output::output;

/// Handle `frm schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name {
        SchemaType::Form => schema_for!(Form),
        SchemaType::Field => schema_for!(FieldDef),
        SchemaType::ResponseSet => schema_for!(ResponseSet),
    };
    output(&schema, flags.format)
}
