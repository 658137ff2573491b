//! Entity structs for all Forms domain objects.
//!
//! Forms, versions, and responses map to tables in the libSQL database; the
//! field list is stored as a JSON column on the form row. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod field;
mod form;
mod response;
mod version;

pub use field::{FieldDef, default_field_set};
pub use form::{DEFAULT_FORM_TITLE, Form, FormSummary};
pub use response::{Response, ResponseSet};
pub use version::FormVersion;
