use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Post type targeted by the sub-loop query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PostType {
    Post,
    Page,
    Attachment,
    /// Placeholder for a custom post type; the literal name comes from
    /// `custom_post_type`.
    Custom,
}

impl PostType {
    /// WordPress registration name for built-in post types.
    ///
    /// `Custom` has no name of its own and returns `None`.
    pub fn wp_name(&self) -> Option<&'static str> {
        match self {
            PostType::Post => Some("post"),
            PostType::Page => Some("page"),
            PostType::Attachment => Some("attachment"),
            PostType::Custom => None,
        }
    }
}

/// Sort direction for the query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Sort key accepted by `WP_Query`'s `orderby` argument.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Date,
    Title,
    Modified,
    Rand,
    CommentCount,
    MenuOrder,
    #[serde(rename = "ID")]
    Id,
    /// Sorts by a custom field; pairs with `meta_key`.
    MetaValue,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::Title => "title",
            SortKey::Modified => "modified",
            SortKey::Rand => "rand",
            SortKey::CommentCount => "comment_count",
            SortKey::MenuOrder => "menu_order",
            SortKey::Id => "ID",
            SortKey::MetaValue => "meta_value",
        }
    }
}

/// Comparison operator for the custom-field (`meta_query`) clause.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub enum MetaCompare {
    #[serde(rename = "=")]
    Equal,
    #[serde(rename = "!=")]
    NotEqual,
    #[serde(rename = ">")]
    GreaterThan,
    #[serde(rename = ">=")]
    GreaterThanOrEqual,
    #[serde(rename = "<")]
    LessThan,
    #[serde(rename = "<=")]
    LessThanOrEqual,
    #[serde(rename = "LIKE")]
    Like,
    #[serde(rename = "NOT LIKE")]
    NotLike,
    #[serde(rename = "EXISTS")]
    Exists,
    #[serde(rename = "NOT EXISTS")]
    NotExists,
}

impl MetaCompare {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaCompare::Equal => "=",
            MetaCompare::NotEqual => "!=",
            MetaCompare::GreaterThan => ">",
            MetaCompare::GreaterThanOrEqual => ">=",
            MetaCompare::LessThan => "<",
            MetaCompare::LessThanOrEqual => "<=",
            MetaCompare::Like => "LIKE",
            MetaCompare::NotLike => "NOT LIKE",
            MetaCompare::Exists => "EXISTS",
            MetaCompare::NotExists => "NOT EXISTS",
        }
    }

    /// `EXISTS` / `NOT EXISTS` compare without a value.
    pub fn is_existence(&self) -> bool {
        matches!(self, MetaCompare::Exists | MetaCompare::NotExists)
    }
}

/// Fields that can be rendered for each post inside the loop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DisplayItem {
    Title,
    Content,
    Excerpt,
    Date,
    Author,
    Thumbnail,
    Categories,
    Tags,
    /// Never rendered on its own; wraps the title and thumbnail in links.
    Permalink,
}

impl DisplayItem {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayItem::Title => "title",
            DisplayItem::Content => "content",
            DisplayItem::Excerpt => "excerpt",
            DisplayItem::Date => "date",
            DisplayItem::Author => "author",
            DisplayItem::Thumbnail => "thumbnail",
            DisplayItem::Categories => "categories",
            DisplayItem::Tags => "tags",
            DisplayItem::Permalink => "permalink",
        }
    }
}

/// Rendering order for display items, independent of selection order.
///
/// `Permalink` is deliberately absent: it only modifies how the title and
/// thumbnail fragments are emitted.
pub const CANONICAL_DISPLAY_ORDER: [DisplayItem; 8] = [
    DisplayItem::Title,
    DisplayItem::Content,
    DisplayItem::Excerpt,
    DisplayItem::Date,
    DisplayItem::Author,
    DisplayItem::Thumbnail,
    DisplayItem::Categories,
    DisplayItem::Tags,
];

/// One sub-loop request: everything needed to emit a snippet.
///
/// List-valued filters (`category`, `tag`, `taxonomy_terms`,
/// `exclude_categories`, `exclude_posts`) are comma-separated strings, the
/// way the options document carries them; tokenization happens at emission
/// time. Free-form presentation strings are interpolated into the snippet
/// verbatim, without escaping.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SnippetOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_type: Option<PostType>,
    /// Literal post type name used when `post_type` is `custom`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_post_type: Option<String>,
    pub posts_per_page: u32,
    pub order: SortOrder,
    pub orderby: SortKey,
    /// Custom field to sort by when `orderby` is `meta_value`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_key: Option<String>,
    /// Comma-separated category ids or slugs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Comma-separated tag slugs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<String>,
    /// Comma-separated terms for `taxonomy`; classified as a whole list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxonomy_terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_query_key: Option<String>,
    pub meta_query_compare: MetaCompare,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_query_value: Option<String>,
    /// Comma-separated category ids or slugs to exclude; each token is
    /// classified on its own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_categories: Option<String>,
    /// Comma-separated post ids to exclude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_posts: Option<String>,
    pub display_items: Vec<DisplayItem>,
    pub thumbnail_size: String,
    pub excerpt_length: u32,
    pub container_class: String,
    pub item_class: String,
    /// Shown verbatim when the query matches nothing.
    pub no_posts_message: String,
}

impl Default for SnippetOptions {
    fn default() -> Self {
        Self {
            post_type: None,
            custom_post_type: None,
            posts_per_page: 5,
            order: SortOrder::Desc,
            orderby: SortKey::Date,
            meta_key: None,
            category: None,
            tag: None,
            taxonomy: None,
            taxonomy_terms: None,
            meta_query_key: None,
            meta_query_compare: MetaCompare::Equal,
            meta_query_value: None,
            exclude_categories: None,
            exclude_posts: None,
            display_items: Vec::new(),
            thumbnail_size: "medium".to_string(),
            excerpt_length: 100,
            container_class: "subloop-container".to_string(),
            item_class: "subloop-item".to_string(),
            no_posts_message: "投稿が見つかりませんでした。".to_string(),
        }
    }
}

impl SnippetOptions {
    /// Returns true when `item` was selected, no matter its position.
    pub fn displays(&self, item: DisplayItem) -> bool {
        self.display_items.contains(&item)
    }
}
