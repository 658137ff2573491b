//! # forms-core
//!
//! Core types and pure request logic for Forms.
//!
//! This crate provides everything that does not touch storage:
//! - Entity structs (forms, field definitions, versions, responses)
//! - The editor action grammar (`add0`, `opt1 del2`, `view`, ...)
//! - Field-list and option-list editing
//! - Title validation
//! - Submission capture and version-token checks
//! - Grouping of stored responses into per-version result sets
//! - Cross-cutting error types
//! - CLI response types

pub mod action;
pub mod aggregate;
pub mod edit_request;
pub mod editor;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod posted;
pub mod responses;
pub mod submission;
pub mod title;
pub mod version;
