use tracing::debug;

use subloop_core::SnippetOptions;

use crate::model::SnippetReport;
use crate::query::build_query_args;
use crate::render::build_render_block;

/// Generate a sub-loop snippet for the given options.
///
/// Total and deterministic: degenerate input degrades to clause omission,
/// never to failure. Identical options yield an identical snippet.
pub fn generate(options: &SnippetOptions) -> String {
    generate_with_report(options).0
}

/// Generate a snippet along with a report of what was emitted and what was
/// silently left out.
pub fn generate_with_report(options: &SnippetOptions) -> (String, SnippetReport) {
    let mut report = SnippetReport::default();

    let mut code = build_query_args(options, &mut report);
    code.push_str(&build_render_block(options, &mut report));

    debug!(
        clauses = report.clauses.len(),
        display_items = report.display_items.len(),
        omitted = report.omitted.len(),
        "snippet generated"
    );

    (code, report)
}
