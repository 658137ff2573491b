//! Repository methods on [`crate::service::FormService`].
//!
//! - [`forms`]: form lifecycle (create, list, load, save, delete)
//! - [`responses`]: version headers, responses, recording and aggregation

pub mod forms;
pub mod responses;
