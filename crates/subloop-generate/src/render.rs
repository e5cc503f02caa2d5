use subloop_core::{CANONICAL_DISPLAY_ORDER, DisplayItem, SnippetOptions};

use crate::model::SnippetReport;

const CONTENT_FRAGMENT: &str = r#"
                <div class="post-content">
                    <?php the_content(); ?>
                </div>"#;

const DATE_FRAGMENT: &str = r#"
                <div class="post-date">
                    <time datetime="<?php echo get_the_date('Y-m-d'); ?>">
                        <?php echo get_the_date(); ?>
                    </time>
                </div>"#;

const AUTHOR_FRAGMENT: &str = r#"
                <div class="post-author">
                    投稿者: <?php the_author(); ?>
                </div>"#;

const CATEGORIES_FRAGMENT: &str = r#"
                <div class="post-categories">
                    <?php
                    $categories = get_the_category();
                    if (!empty($categories)) {
                        echo 'カテゴリー: ';
                        $cat_links = array();
                        foreach ($categories as $category) {
                            $cat_links[] = '<a href="' . get_category_link($category->term_id) . '">' . $category->name . '</a>';
                        }
                        echo implode(', ', $cat_links);
                    }
                    ?>
                </div>"#;

const TAGS_FRAGMENT: &str = r#"
                <div class="post-tags">
                    <?php
                    $tags = get_the_tags();
                    if (!empty($tags)) {
                        echo 'タグ: ';
                        $tag_links = array();
                        foreach ($tags as $tag) {
                            $tag_links[] = '<a href="' . get_tag_link($tag->term_id) . '">' . $tag->name . '</a>';
                        }
                        echo implode(', ', $tag_links);
                    }
                    ?>
                </div>"#;

/// Emit the render block: query execution, existence test, iteration over
/// the results, and the selected display fragments in canonical order.
pub(crate) fn build_render_block(options: &SnippetOptions, report: &mut SnippetReport) -> String {
    let mut code = String::new();

    code.push_str(&format!(
        r#"

// サブクエリを実行
$subloop_query = new WP_Query($args);

// 結果を表示
if ($subloop_query->have_posts()) : ?>
    <div class="{}">"#,
        options.container_class
    ));

    code.push_str(&format!(
        r#"
        <?php while ($subloop_query->have_posts()) : $subloop_query->the_post(); ?>
            <div class="{}">"#,
        options.item_class
    ));

    // The permalink item never renders on its own; it turns the title and
    // thumbnail into links.
    let linked = options.displays(DisplayItem::Permalink);

    for item in CANONICAL_DISPLAY_ORDER {
        if !options.displays(item) {
            continue;
        }
        match item {
            DisplayItem::Title => code.push_str(&title_fragment(linked)),
            DisplayItem::Content => code.push_str(CONTENT_FRAGMENT),
            DisplayItem::Excerpt => code.push_str(&excerpt_fragment(options.excerpt_length)),
            DisplayItem::Date => code.push_str(DATE_FRAGMENT),
            DisplayItem::Author => code.push_str(AUTHOR_FRAGMENT),
            DisplayItem::Thumbnail => {
                code.push_str(&thumbnail_fragment(linked, &options.thumbnail_size));
            }
            DisplayItem::Categories => code.push_str(CATEGORIES_FRAGMENT),
            DisplayItem::Tags => code.push_str(TAGS_FRAGMENT),
            DisplayItem::Permalink => continue,
        }
        report.record_display(item.as_str());
    }

    code.push_str(&format!(
        r#"
            </div>
        <?php endwhile; ?>
    </div>

<?php else : ?>
    <p class="no-posts-message">{}</p>
<?php endif;

// グローバルな$postデータをリセット
wp_reset_postdata();
?>"#,
        options.no_posts_message
    ));

    code
}

fn title_fragment(linked: bool) -> String {
    format!(
        r#"
                <h3 class="post-title">
                    <?php if ({linked}) : ?>
                        <a href="<?php the_permalink(); ?>"><?php the_title(); ?></a>
                    <?php else : ?>
                        <?php the_title(); ?>
                    <?php endif; ?>
                </h3>"#
    )
}

fn excerpt_fragment(length: u32) -> String {
    format!(
        r#"
                <div class="post-excerpt">
                    <?php
                    $excerpt = get_the_excerpt();
                    if (mb_strlen($excerpt) > {length}) {{
                        $excerpt = mb_substr($excerpt, 0, {length}) . '...';
                    }}
                    echo $excerpt;
                    ?>
                </div>"#
    )
}

fn thumbnail_fragment(linked: bool, size: &str) -> String {
    format!(
        r#"
                <?php if (has_post_thumbnail()) : ?>
                    <div class="post-thumbnail">
                        <?php if ({linked}) : ?>
                            <a href="<?php the_permalink(); ?>">
                                <?php the_post_thumbnail('{size}'); ?>
                            </a>
                        <?php else : ?>
                            <?php the_post_thumbnail('{size}'); ?>
                        <?php endif; ?>
                    </div>
                <?php endif; ?>"#
    )
}
