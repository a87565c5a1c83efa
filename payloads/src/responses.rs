use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{EntryId, Pagination, PostId, SectionId};

/// Hero and call-to-action content for the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomepageContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_image_url: Option<String>,
    pub cta_label: String,
    pub cta_href: String,
    /// Slugs of portfolio entries to feature below the hero, in order.
    pub featured_entry_slugs: Vec<String>,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub heading: String,
    /// Markdown body; rendered with raw HTML disabled.
    pub body: String,
    pub portrait_url: Option<String>,
    pub skills: Vec<String>,
    pub updated_at: Timestamp,
}

/// A named grouping of portfolio entries (e.g. "Branding", "Editorial").
///
/// Section slugs double as entry categories, so "entries of section X"
/// is an ordinary category-filtered listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSection {
    pub id: SectionId,
    pub slug: String,
    pub title: String,
    pub summary: Option<String>,
    pub sort_index: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioEntry {
    pub id: EntryId,
    pub slug: String,
    pub title: String,
    /// Markdown description; rendered with raw HTML disabled.
    pub description: String,
    /// Matches a section slug; uncategorized entries use "misc".
    pub category: String,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub published: bool,
    pub published_at: Timestamp,
    pub sort_index: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: PostId,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Markdown body; rendered with raw HTML disabled.
    pub body: String,
    pub category: String,
    pub tags: Vec<String>,
    pub cover_image_url: Option<String>,
    pub author: String,
    pub published: bool,
    pub published_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Raw listing payload as the CMS returns it.
///
/// The window flags are intentionally absent here; `EntryPage` recomputes
/// them from `total` and the requested limit so they can never drift from
/// the counts (see `Pagination`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntryPage<T> {
    pub items: Vec<T>,
    pub total: u64,
}

/// One page of a listing plus its derived pagination window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPage<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> EntryPage<T> {
    pub fn from_raw(raw: RawEntryPage<T>, page: u32, limit: u32) -> Self {
        Self {
            pagination: Pagination::from_counts(page, limit, raw.total),
            items: raw.items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
