use subloop_core::{
    PostType, SnippetOptions, SortKey, is_numeric_token, non_blank, split_tokens,
};

use crate::model::SnippetReport;

/// Emit the configuration block: the `$args` array handed to `WP_Query`.
///
/// Clause order is fixed; optional clauses are omitted silently when their
/// fields are blank or their combination is degenerate.
pub(crate) fn build_query_args(options: &SnippetOptions, report: &mut SnippetReport) -> String {
    let mut code = String::from(
        "<?php

// WP_Queryの引数を設定
$args = array(",
    );

    push_post_type(&mut code, options, report);

    code.push_str(&format!(
        "\n    'posts_per_page' => {},",
        options.posts_per_page
    ));
    code.push_str("\n    'post_status' => 'publish',");
    code.push_str(&format!("\n    'order' => '{}',", options.order.as_str()));
    code.push_str(&format!(
        "\n    'orderby' => '{}',",
        options.orderby.as_str()
    ));
    report.record_clause("posts_per_page");
    report.record_clause("post_status");
    report.record_clause("order");
    report.record_clause("orderby");

    push_meta_key(&mut code, options, report);
    push_category(&mut code, options, report);
    push_tag(&mut code, options, report);
    push_tax_query(&mut code, options, report);
    push_meta_query(&mut code, options, report);
    push_excluded_category_ids(&mut code, options, report);
    push_excluded_posts(&mut code, options, report);

    code.push_str("\n);");
    code
}

fn push_post_type(code: &mut String, options: &SnippetOptions, report: &mut SnippetReport) {
    match options.post_type {
        Some(PostType::Custom) => {
            if let Some(name) = non_blank(options.custom_post_type.as_deref()) {
                code.push_str(&format!("\n    'post_type' => '{name}',"));
                report.record_clause("post_type");
            } else {
                report.record_omission(
                    "custom_post_type_missing",
                    "post_type is 'custom' but no name was given; the post-type clause was omitted",
                );
            }
        }
        Some(other) => {
            if let Some(name) = other.wp_name() {
                code.push_str(&format!("\n    'post_type' => '{name}',"));
                report.record_clause("post_type");
            }
        }
        None => {}
    }
}

fn push_meta_key(code: &mut String, options: &SnippetOptions, report: &mut SnippetReport) {
    if options.orderby != SortKey::MetaValue {
        return;
    }
    if let Some(key) = non_blank(options.meta_key.as_deref()) {
        code.push_str(&format!("\n    'meta_key' => '{key}',"));
        report.record_clause("meta_key");
    } else {
        report.record_omission(
            "meta_key_missing",
            "orderby is 'meta_value' without a meta_key; the meta-key clause was omitted",
        );
    }
}

/// A single token emits `cat` (bare id or quoted slug); several tokens
/// emit one comma-joined `category_name` clause even when every token is
/// numeric.
fn push_category(code: &mut String, options: &SnippetOptions, report: &mut SnippetReport) {
    let Some(category) = non_blank(options.category.as_deref()) else {
        return;
    };
    let tokens = split_tokens(category);
    if let [token] = tokens.as_slice() {
        if is_numeric_token(token) {
            code.push_str(&format!("\n    'cat' => {token},"));
        } else {
            code.push_str(&format!("\n    'cat' => '{token}',"));
        }
        report.record_clause("cat");
    } else {
        code.push_str(&format!("\n    'category_name' => '{}',", tokens.join(",")));
        report.record_clause("category_name");
    }
}

fn push_tag(code: &mut String, options: &SnippetOptions, report: &mut SnippetReport) {
    let Some(tag) = non_blank(options.tag.as_deref()) else {
        return;
    };
    let tokens = split_tokens(tag);
    code.push_str(&format!("\n    'tag' => '{}',", tokens.join(",")));
    report.record_clause("tag");
}

/// Collect taxonomy-combinator fragments: the custom-taxonomy filter and
/// the slug half of the excluded categories. Two or more fragments get an
/// explicit AND relation.
fn push_tax_query(code: &mut String, options: &SnippetOptions, report: &mut SnippetReport) {
    let mut fragments: Vec<String> = Vec::new();

    if let (Some(taxonomy), Some(terms)) = (
        non_blank(options.taxonomy.as_deref()),
        non_blank(options.taxonomy_terms.as_deref()),
    ) {
        let terms = split_tokens(terms);
        // The list is classified as a whole: one non-numeric term makes
        // every term a quoted slug.
        let all_numeric = terms.iter().all(|term| is_numeric_token(term));
        let field = if all_numeric { "term_id" } else { "slug" };
        let terms_array = if all_numeric {
            terms.join(", ")
        } else {
            format!("'{}'", terms.join("', '"))
        };
        fragments.push(format!(
            "        array(
            'taxonomy' => '{taxonomy}',
            'field'    => '{field}',
            'terms'    => array({terms_array}),
        )"
        ));
    }

    if let Some(excluded) = non_blank(options.exclude_categories.as_deref()) {
        let slugs: Vec<&str> = split_tokens(excluded)
            .into_iter()
            .filter(|token| !token.is_empty() && !is_numeric_token(token))
            .collect();
        if !slugs.is_empty() {
            fragments.push(format!(
                "        array(
            'taxonomy' => 'category',
            'field'    => 'slug',
            'terms'    => array('{}'),
            'operator' => 'NOT IN',
        )",
                slugs.join("', '")
            ));
        }
    }

    if fragments.is_empty() {
        return;
    }

    code.push_str("\n    'tax_query' => array(");
    if fragments.len() > 1 {
        code.push_str("\n        'relation' => 'AND',");
    }
    code.push_str(&format!("\n{}\n    ),", fragments.join(",\n")));
    report.record_clause("tax_query");
}

fn push_meta_query(code: &mut String, options: &SnippetOptions, report: &mut SnippetReport) {
    let key = non_blank(options.meta_query_key.as_deref());
    let value = non_blank(options.meta_query_value.as_deref());
    let compare = options.meta_query_compare;

    match (key, value) {
        (Some(key), Some(value)) => {
            code.push_str(&format!(
                "\n    'meta_query' => array(
        array(
            'key'     => '{key}',
            'value'   => '{value}',
            'compare' => '{}',
        ),
    ),",
                compare.as_str()
            ));
            report.record_clause("meta_query");
        }
        (Some(key), None) if compare.is_existence() => {
            code.push_str(&format!(
                "\n    'meta_query' => array(
        array(
            'key'     => '{key}',
            'compare' => '{}',
        ),
    ),",
                compare.as_str()
            ));
            report.record_clause("meta_query");
        }
        (Some(_), None) => {
            report.record_omission(
                "meta_query_incomplete",
                format!(
                    "meta_query_key without a value and compare '{}' needs one; the meta-query clause was omitted",
                    compare.as_str()
                ),
            );
        }
        (None, Some(_)) => {
            report.record_omission(
                "meta_query_value_ignored",
                "meta_query_value without meta_query_key; the meta-query clause was omitted",
            );
        }
        (None, None) => {}
    }
}

/// The id half of the excluded categories; the slug half went into the
/// taxonomy combinator. Both clauses can fire from the same field.
fn push_excluded_category_ids(
    code: &mut String,
    options: &SnippetOptions,
    report: &mut SnippetReport,
) {
    let Some(excluded) = non_blank(options.exclude_categories.as_deref()) else {
        return;
    };
    let ids: Vec<&str> = split_tokens(excluded)
        .into_iter()
        .filter(|token| is_numeric_token(token))
        .collect();
    if ids.is_empty() {
        return;
    }
    code.push_str(&format!(
        "\n    'category__not_in' => array({}),",
        ids.join(", ")
    ));
    report.record_clause("category__not_in");
}

fn push_excluded_posts(code: &mut String, options: &SnippetOptions, report: &mut SnippetReport) {
    let Some(excluded) = non_blank(options.exclude_posts.as_deref()) else {
        return;
    };
    let ids: Vec<&str> = split_tokens(excluded)
        .into_iter()
        .filter(|token| is_numeric_token(token))
        .collect();
    if ids.is_empty() {
        return;
    }
    code.push_str(&format!(
        "\n    'post__not_in' => array({}),",
        ids.join(", ")
    ));
    report.record_clause("post__not_in");
}
