use payloads::{
    ContentKind, EntryFilters, EntryPage, PortfolioEntry, SortField,
    SortOrder,
};
use yew::prelude::*;

use super::{ContentHookReturn, ContentOptions, use_content};
use crate::content::ContentRuntime;

/// Hook for a filtered, paginated page of portfolio entries.
///
/// Sections double as entry categories, so "entries of section X" is the
/// category filter; see `use_portfolio_entries_by_section`.
#[hook]
pub fn use_portfolio_entries(
    filters: EntryFilters,
    options: ContentOptions,
) -> ContentHookReturn<EntryPage<PortfolioEntry>> {
    let runtime = use_context::<ContentRuntime>()
        .expect("content hooks require a ContentRuntime context");

    let query_key = filters.query_key(ContentKind::PortfolioEntries);
    use_content(ContentKind::PortfolioEntries, query_key, options, move || {
        let runtime = runtime.clone();
        let filters = filters.clone();
        async move { runtime.client().list_portfolio_entries(&filters).await }
    })
}

/// Portfolio entries narrowed to one section, in curated order.
#[hook]
pub fn use_portfolio_entries_by_section(
    section_slug: String,
    options: ContentOptions,
) -> ContentHookReturn<EntryPage<PortfolioEntry>> {
    let filters = EntryFilters {
        sort_by: SortField::SortIndex,
        sort_order: SortOrder::Asc,
        ..EntryFilters::for_category(section_slug)
    };
    use_portfolio_entries(filters, options)
}
