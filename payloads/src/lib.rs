use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod cms_client;
pub mod responses;

pub use cms_client::{ClientError, CmsClient};
pub use responses::{
    AboutContent, BlogPost, EntryPage, HomepageContent, PortfolioEntry,
    PortfolioSection,
};

/// Listings never return more than this many items per page; larger
/// requested limits are clamped rather than rejected.
pub const ENTRY_LIMIT_MAX: u32 = 50;
pub const ENTRY_LIMIT_DEFAULT: u32 = 12;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct EntryId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct SectionId(pub Uuid);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct PostId(pub Uuid);

/// The named categories of fetchable CMS data.
///
/// Every cache key and hook-level error message is namespaced by one of
/// these, so the string forms must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Homepage,
    About,
    PortfolioEntries,
    PortfolioSections,
    BlogPosts,
    BlogPost,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Homepage => "homepage",
            ContentKind::About => "about",
            ContentKind::PortfolioEntries => "portfolio-entries",
            ContentKind::PortfolioSections => "portfolio-sections",
            ContentKind::BlogPosts => "blog-posts",
            ContentKind::BlogPost => "blog-post",
        }
    }

    /// Query Key for kinds that have exactly one document (homepage, about
    /// page, the section list).
    pub fn singleton_key(self) -> String {
        self.as_str().to_string()
    }

    /// Query Key for kinds addressed by slug (a single blog post).
    pub fn slug_key(self, slug: &str) -> String {
        format!("{}?slug={slug}", self.as_str())
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    PublishedAt,
    Title,
    SortIndex,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::PublishedAt => "published_at",
            SortField::Title => "title",
            SortField::SortIndex => "sort_index",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Filter and pagination parameters for listing content kinds.
///
/// Two filter values that compare equal must produce the same Query Key,
/// and the Query Key must not depend on incidental ordering (tags are
/// sorted before serialization).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFilters {
    pub category: Option<String>,
    pub tags: Vec<String>,
    /// 1-indexed page number.
    pub page: u32,
    pub limit: u32,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    /// Exclude drafts from results.
    pub published_only: bool,
}

impl Default for EntryFilters {
    fn default() -> Self {
        Self {
            category: None,
            tags: Vec::new(),
            page: 1,
            limit: ENTRY_LIMIT_DEFAULT,
            sort_by: SortField::PublishedAt,
            sort_order: SortOrder::Desc,
            published_only: true,
        }
    }
}

impl EntryFilters {
    pub fn for_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn clamped_limit(&self) -> u32 {
        self.limit.clamp(1, ENTRY_LIMIT_MAX)
    }

    /// Stable serialization of these filters for a given content kind.
    ///
    /// Every field is always emitted, in a fixed order, so that equal
    /// filters serialize identically regardless of how they were built.
    pub fn query_key(&self, kind: ContentKind) -> String {
        let mut tags = self.tags.clone();
        tags.sort();
        format!(
            "{}?category={}&tags={}&page={}&limit={}&sort={}.{}&published={}",
            kind.as_str(),
            self.category.as_deref().unwrap_or(""),
            tags.join(","),
            self.page,
            self.clamped_limit(),
            self.sort_by.as_str(),
            self.sort_order.as_str(),
            self.published_only,
        )
    }

    /// Query-string pairs understood by the CMS listing endpoints.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if !self.tags.is_empty() {
            let mut tags = self.tags.clone();
            tags.sort();
            pairs.push(("tags", tags.join(",")));
        }
        pairs.push(("page", self.page.to_string()));
        pairs.push(("limit", self.clamped_limit().to_string()));
        pairs.push(("sort", self.sort_by.as_str().to_string()));
        pairs.push(("order", self.sort_order.as_str().to_string()));
        pairs.push(("published", self.published_only.to_string()));
        pairs
    }
}

/// Derived pagination window for a listing response.
///
/// Never deserialized from the wire and never mutated in place; always
/// recomputed from `total` and `limit` after a successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl Pagination {
    pub fn from_counts(page: u32, limit: u32, total: u64) -> Self {
        let limit = limit.max(1);
        let page = page.max(1);
        let pages = total.div_ceil(limit as u64).max(1);
        Self {
            page,
            limit,
            total,
            has_next: (page as u64) < pages,
            has_previous: page > 1,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.limit as u64).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_key_is_deterministic_across_tag_order() {
        let a = EntryFilters {
            tags: vec!["web".into(), "print".into()],
            ..EntryFilters::default()
        };
        let b = EntryFilters {
            tags: vec!["print".into(), "web".into()],
            ..EntryFilters::default()
        };
        assert_eq!(
            a.query_key(ContentKind::PortfolioEntries),
            b.query_key(ContentKind::PortfolioEntries)
        );
    }

    #[test]
    fn query_key_distinguishes_kinds_and_fields() {
        let filters = EntryFilters::default();
        assert_ne!(
            filters.query_key(ContentKind::BlogPosts),
            filters.query_key(ContentKind::PortfolioEntries)
        );
        assert_ne!(
            filters.query_key(ContentKind::BlogPosts),
            filters.clone().with_page(2).query_key(ContentKind::BlogPosts)
        );
    }

    #[test]
    fn query_key_clamps_oversized_limits() {
        let oversized = EntryFilters {
            limit: 10_000,
            ..EntryFilters::default()
        };
        let clamped = EntryFilters {
            limit: ENTRY_LIMIT_MAX,
            ..EntryFilters::default()
        };
        assert_eq!(
            oversized.query_key(ContentKind::BlogPosts),
            clamped.query_key(ContentKind::BlogPosts)
        );
    }

    #[test]
    fn slug_key_includes_the_slug() {
        assert_eq!(
            ContentKind::BlogPost.slug_key("shipping-the-redesign"),
            "blog-post?slug=shipping-the-redesign"
        );
    }

    #[test]
    fn pagination_derives_window_flags() {
        let p = Pagination::from_counts(1, 10, 25);
        assert!(p.has_next);
        assert!(!p.has_previous);
        assert_eq!(p.total_pages(), 3);

        let p = Pagination::from_counts(3, 10, 25);
        assert!(!p.has_next);
        assert!(p.has_previous);
    }

    #[test]
    fn pagination_handles_empty_results() {
        let p = Pagination::from_counts(1, 10, 0);
        assert!(!p.has_next);
        assert!(!p.has_previous);
        assert_eq!(p.total_pages(), 1);
    }
}
