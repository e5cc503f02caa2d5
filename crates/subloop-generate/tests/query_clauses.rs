use subloop_core::{SnippetOptions, SortKey, SortOrder};
use subloop_generate::{generate, generate_with_report};

fn options() -> SnippetOptions {
    SnippetOptions::default()
}

#[test]
fn fixed_clauses_are_always_present() {
    let opts = SnippetOptions {
        posts_per_page: 12,
        order: SortOrder::Asc,
        orderby: SortKey::Title,
        ..options()
    };
    let snippet = generate(&opts);
    assert!(snippet.contains("\n    'posts_per_page' => 12,"));
    assert!(snippet.contains("\n    'post_status' => 'publish',"));
    assert!(snippet.contains("\n    'order' => 'ASC',"));
    assert!(snippet.contains("\n    'orderby' => 'title',"));
}

#[test]
fn meta_value_ordering_emits_the_meta_key_clause() {
    let opts = SnippetOptions {
        orderby: SortKey::MetaValue,
        meta_key: Some("price".to_string()),
        ..options()
    };
    let snippet = generate(&opts);
    assert!(snippet.contains("\n    'orderby' => 'meta_value',"));
    assert!(snippet.contains("\n    'meta_key' => 'price',"));
}

#[test]
fn meta_value_ordering_without_a_key_omits_the_clause() {
    let opts = SnippetOptions {
        orderby: SortKey::MetaValue,
        ..options()
    };
    let (snippet, report) = generate_with_report(&opts);
    assert!(snippet.contains("\n    'orderby' => 'meta_value',"));
    assert!(!snippet.contains("'meta_key'"));
    assert_eq!(report.omitted[0].code, "meta_key_missing");
}

#[test]
fn meta_key_is_ignored_for_other_sort_keys() {
    let opts = SnippetOptions {
        orderby: SortKey::Date,
        meta_key: Some("price".to_string()),
        ..options()
    };
    assert!(!generate(&opts).contains("'meta_key'"));
}

#[test]
fn tag_tokens_are_trimmed_and_rejoined() {
    let opts = SnippetOptions {
        tag: Some(" featured , pickup ".to_string()),
        ..options()
    };
    assert!(generate(&opts).contains("\n    'tag' => 'featured,pickup',"));
}

#[test]
fn category_tokens_are_trimmed_before_joining() {
    let opts = SnippetOptions {
        category: Some(" news , events ".to_string()),
        ..options()
    };
    assert!(generate(&opts).contains("\n    'category_name' => 'news,events',"));
}

#[test]
fn single_tax_query_fragment_has_no_relation() {
    let opts = SnippetOptions {
        taxonomy: Some("genre".to_string()),
        taxonomy_terms: Some("jazz,rock".to_string()),
        ..options()
    };
    let snippet = generate(&opts);
    assert!(snippet.contains("'tax_query' => array("));
    assert!(!snippet.contains("'relation'"));
}

#[test]
fn two_tax_query_fragments_get_an_and_relation() {
    let opts = SnippetOptions {
        taxonomy: Some("genre".to_string()),
        taxonomy_terms: Some("jazz".to_string()),
        exclude_categories: Some("news".to_string()),
        ..options()
    };
    let snippet = generate(&opts);
    assert!(snippet.contains("\n        'relation' => 'AND',"));

    let genre = snippet.find("'taxonomy' => 'genre',").expect("genre fragment");
    let not_in = snippet.find("'operator' => 'NOT IN',").expect("exclude fragment");
    assert!(genre < not_in);
}

#[test]
fn taxonomy_without_terms_emits_nothing() {
    let opts = SnippetOptions {
        taxonomy: Some("genre".to_string()),
        ..options()
    };
    assert!(!generate(&opts).contains("'tax_query'"));

    let opts = SnippetOptions {
        taxonomy_terms: Some("jazz".to_string()),
        ..options()
    };
    assert!(!generate(&opts).contains("'tax_query'"));
}

#[test]
fn all_numeric_exclusions_skip_the_tax_query() {
    let opts = SnippetOptions {
        exclude_categories: Some("5,6".to_string()),
        ..options()
    };
    let snippet = generate(&opts);
    assert!(!snippet.contains("'tax_query'"));
    assert!(snippet.contains("\n    'category__not_in' => array(5, 6),"));
}

#[test]
fn excluded_posts_keep_only_numeric_tokens() {
    let opts = SnippetOptions {
        exclude_posts: Some(" 10 , draft , 11 ".to_string()),
        ..options()
    };
    assert!(generate(&opts).contains("\n    'post__not_in' => array(10, 11),"));
}

#[test]
fn excluded_posts_with_no_numeric_tokens_emit_nothing() {
    let opts = SnippetOptions {
        exclude_posts: Some("draft,pending".to_string()),
        ..options()
    };
    assert!(!generate(&opts).contains("'post__not_in'"));
}

#[test]
fn blank_filter_fields_are_treated_as_absent() {
    let opts = SnippetOptions {
        category: Some("  ".to_string()),
        tag: Some(String::new()),
        exclude_posts: Some(" ".to_string()),
        ..options()
    };
    let snippet = generate(&opts);
    assert!(!snippet.contains("'cat'"));
    assert!(!snippet.contains("'category_name'"));
    assert!(!snippet.contains("'tag'"));
    assert!(!snippet.contains("'post__not_in'"));
}
