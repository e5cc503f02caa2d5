use serde::{Deserialize, Serialize};

/// Structured note about a clause the generator silently left out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnippetIssue {
    pub code: String,
    pub message: String,
}

/// Summary of one generation run.
///
/// Observability only: the report never changes the emitted snippet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnippetReport {
    /// Query-argument clauses, in emission order.
    pub clauses: Vec<String>,
    /// Display fragments rendered, in canonical order.
    pub display_items: Vec<String>,
    /// Degenerate option combinations that degraded to clause omission.
    pub omitted: Vec<SnippetIssue>,
}

impl SnippetReport {
    pub fn record_clause(&mut self, name: &str) {
        self.clauses.push(name.to_string());
    }

    pub fn record_display(&mut self, name: &str) {
        self.display_items.push(name.to_string());
    }

    pub fn record_omission(&mut self, code: &str, message: impl Into<String>) {
        self.omitted.push(SnippetIssue {
            code: code.to_string(),
            message: message.into(),
        });
    }
}
