use jsonschema::JSONSchema;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::options::{DisplayItem, PostType, SnippetOptions, SortKey};
use crate::tokens::non_blank;

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// Structured validation issue with location and hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub code: String,
    pub path: String,
    pub message: String,
    pub hint: Option<String>,
}

impl ValidationIssue {
    /// Create a new validation issue.
    pub fn new(
        severity: IssueSeverity,
        code: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
        hint: Option<String>,
    ) -> Self {
        Self {
            severity,
            code: code.into(),
            path: path.into(),
            message: message.into(),
            hint,
        }
    }
}

/// Aggregated validation report with errors and warnings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Returns true when there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add an error issue.
    pub fn push_error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
    }

    /// Add a warning issue.
    pub fn push_warning(&mut self, issue: ValidationIssue) {
        self.warnings.push(issue);
    }
}

/// JSON Schema for the options document, generated from the model.
pub fn options_json_schema() -> Result<Value> {
    let schema = schemars::schema_for!(SnippetOptions);
    Ok(serde_json::to_value(schema)?)
}

/// Validate a raw options JSON document against the options JSON Schema.
pub fn validate_options_json(options_json: &Value) -> Result<ValidationReport> {
    let schema = options_json_schema()?;
    let compiled = JSONSchema::compile(&schema).map_err(|err| Error::Schema(err.to_string()))?;

    let mut report = ValidationReport::default();

    if let Err(errors) = compiled.validate(options_json) {
        for error in errors {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "schema_violation",
                error.instance_path.to_string(),
                error.to_string(),
                None,
            ));
        }
    }

    Ok(report)
}

/// Validate an options record before generation.
///
/// Errors cover required-field rules; warnings cover combinations the
/// generator accepts but degrades to clause omission.
pub fn validate_options(options: &SnippetOptions) -> ValidationReport {
    let mut report = ValidationReport::default();

    if options.post_type == Some(PostType::Custom)
        && non_blank(options.custom_post_type.as_deref()).is_none()
    {
        report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "custom_post_type_required",
            "/custom_post_type",
            "post_type is 'custom' but no custom post type name was given",
            Some("set custom_post_type to the registered post type name".to_string()),
        ));
    }

    if options.orderby == SortKey::MetaValue && non_blank(options.meta_key.as_deref()).is_none() {
        report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "meta_key_required",
            "/meta_key",
            "orderby is 'meta_value' but no meta_key was given",
            Some("set meta_key to the custom field to sort by".to_string()),
        ));
    }

    if options.posts_per_page == 0 {
        report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "posts_per_page_invalid",
            "/posts_per_page",
            "posts_per_page must be at least 1",
            None,
        ));
    }

    if options.excerpt_length == 0 && options.displays(DisplayItem::Excerpt) {
        report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "excerpt_length_invalid",
            "/excerpt_length",
            "excerpt_length must be at least 1 when the excerpt is displayed",
            None,
        ));
    }

    let meta_key = non_blank(options.meta_query_key.as_deref());
    let meta_value = non_blank(options.meta_query_value.as_deref());
    if meta_key.is_some() && meta_value.is_none() && !options.meta_query_compare.is_existence() {
        report.push_warning(ValidationIssue::new(
            IssueSeverity::Warning,
            "meta_query_incomplete",
            "/meta_query_value",
            format!(
                "meta_query_key is set but compare '{}' needs a value; the clause will be omitted",
                options.meta_query_compare.as_str()
            ),
            Some("set meta_query_value, or use an EXISTS compare".to_string()),
        ));
    }
    if meta_value.is_some() && meta_key.is_none() {
        report.push_warning(ValidationIssue::new(
            IssueSeverity::Warning,
            "meta_query_value_ignored",
            "/meta_query_key",
            "meta_query_value is set without meta_query_key; the clause will be omitted",
            None,
        ));
    }

    let taxonomy = non_blank(options.taxonomy.as_deref());
    let terms = non_blank(options.taxonomy_terms.as_deref());
    if taxonomy.is_some() != terms.is_some() {
        report.push_warning(ValidationIssue::new(
            IssueSeverity::Warning,
            "taxonomy_incomplete",
            "/taxonomy_terms",
            "taxonomy and taxonomy_terms must both be set; the clause will be omitted",
            None,
        ));
    }

    if options.displays(DisplayItem::Permalink)
        && !options.displays(DisplayItem::Title)
        && !options.displays(DisplayItem::Thumbnail)
    {
        report.push_warning(ValidationIssue::new(
            IssueSeverity::Warning,
            "permalink_inert",
            "/display_items",
            "permalink only links the title and thumbnail; neither is selected",
            None,
        ));
    }

    report
}
