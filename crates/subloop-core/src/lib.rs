//! Core contracts and helpers for subloop.
//!
//! This crate defines the canonical options model for a WordPress sub-loop
//! snippet, the shared token classification used by every filter clause,
//! and the validation helpers shared by the generator and the CLI.

pub mod error;
pub mod options;
pub mod tokens;
pub mod validation;

pub use error::{Error, Result};
pub use options::{
    CANONICAL_DISPLAY_ORDER, DisplayItem, MetaCompare, PostType, SnippetOptions, SortKey,
    SortOrder,
};
pub use tokens::{is_numeric_token, non_blank, split_tokens};
pub use validation::{
    IssueSeverity, ValidationIssue, ValidationReport, options_json_schema, validate_options,
    validate_options_json,
};

/// Current contract version for options documents.
pub const OPTIONS_VERSION: &str = "0.1";
