use subloop_core::{DisplayItem, SnippetOptions};
use subloop_generate::{generate, generate_with_report};

fn options_with(display_items: Vec<DisplayItem>) -> SnippetOptions {
    SnippetOptions {
        display_items,
        ..SnippetOptions::default()
    }
}

#[test]
fn container_and_item_classes_are_interpolated_verbatim() {
    let opts = SnippetOptions {
        container_class: "related posts--grid".to_string(),
        item_class: "related__item".to_string(),
        ..SnippetOptions::default()
    };
    let snippet = generate(&opts);
    assert!(snippet.contains("<div class=\"related posts--grid\">"));
    assert!(snippet.contains("<div class=\"related__item\">"));
}

#[test]
fn no_posts_message_lands_in_the_else_branch() {
    let opts = SnippetOptions {
        no_posts_message: "No matches <em>yet</em>".to_string(),
        ..SnippetOptions::default()
    };
    let snippet = generate(&opts);
    // Interpolated without escaping: the output is developer-facing source.
    assert!(snippet.contains("<p class=\"no-posts-message\">No matches <em>yet</em></p>"));
}

#[test]
fn thumbnail_fragment_uses_the_configured_size() {
    let opts = SnippetOptions {
        thumbnail_size: "large".to_string(),
        display_items: vec![DisplayItem::Thumbnail],
        ..SnippetOptions::default()
    };
    let snippet = generate(&opts);
    assert!(snippet.contains("<?php if (has_post_thumbnail()) : ?>"));
    assert!(snippet.contains("the_post_thumbnail('large');"));
    assert!(snippet.contains("<?php if (false) : ?>"));
}

#[test]
fn thumbnail_links_when_permalink_is_selected() {
    let snippet = generate(&options_with(vec![
        DisplayItem::Thumbnail,
        DisplayItem::Permalink,
    ]));
    assert!(snippet.contains("<?php if (true) : ?>"));
    assert!(snippet.contains("<a href=\"<?php the_permalink(); ?>\">"));
}

#[test]
fn permalink_alone_renders_no_fragment() {
    let (snippet, report) = generate_with_report(&options_with(vec![DisplayItem::Permalink]));
    assert!(report.display_items.is_empty());
    assert!(!snippet.contains("post-title"));
    assert!(!snippet.contains("the_permalink"));
}

#[test]
fn author_fragment_carries_its_label() {
    let snippet = generate(&options_with(vec![DisplayItem::Author]));
    assert!(snippet.contains("投稿者: <?php the_author(); ?>"));
}

#[test]
fn category_and_tag_lists_render_linked_names() {
    let snippet = generate(&options_with(vec![
        DisplayItem::Categories,
        DisplayItem::Tags,
    ]));
    assert!(snippet.contains("$categories = get_the_category();"));
    assert!(snippet.contains("echo 'カテゴリー: ';"));
    assert!(snippet.contains("get_category_link($category->term_id)"));
    assert!(snippet.contains("$tags = get_the_tags();"));
    assert!(snippet.contains("echo 'タグ: ';"));
    assert!(snippet.contains("get_tag_link($tag->term_id)"));
}

#[test]
fn duplicate_selections_render_once() {
    let (snippet, report) = generate_with_report(&options_with(vec![
        DisplayItem::Date,
        DisplayItem::Date,
    ]));
    assert_eq!(report.display_items, vec!["date"]);
    assert_eq!(snippet.matches("<div class=\"post-date\">").count(), 1);
}

#[test]
fn content_fragment_renders_the_full_content() {
    let (snippet, report) = generate_with_report(&options_with(vec![DisplayItem::Content]));
    assert!(snippet.contains("<div class=\"post-content\">"));
    assert!(snippet.contains("<?php the_content(); ?>"));
    assert_eq!(report.display_items, vec!["content"]);
}

#[test]
fn loop_scaffolding_wraps_every_selection() {
    let snippet = generate(&options_with(vec![DisplayItem::Title]));
    let start = snippet
        .find("<?php while ($subloop_query->have_posts()) : $subloop_query->the_post(); ?>")
        .expect("loop start");
    let title = snippet.find("<h3 class=\"post-title\">").expect("title");
    let end = snippet.find("<?php endwhile; ?>").expect("loop end");
    assert!(start < title);
    assert!(title < end);
    assert!(snippet.ends_with("wp_reset_postdata();\n?>"));
}
