use payloads::{EntryFilters, PortfolioEntry, SortField, SortOrder};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{ContentNotice, PaginationControls};
use crate::hooks::{
    ContentOptions, use_portfolio_entries, use_portfolio_sections,
};

/// All portfolio work, with section navigation and pagination.
#[function_component]
pub fn PortfolioPage() -> Html {
    let page = use_state(|| 1u32);
    let sections = use_portfolio_sections(ContentOptions::default());
    let entries = use_portfolio_entries(
        EntryFilters {
            sort_by: SortField::SortIndex,
            sort_order: SortOrder::Asc,
            ..EntryFilters::default()
        }
        .with_page(*page),
        ContentOptions::default(),
    );

    let section_nav = sections.data().map(|sections| {
        html! {
            <nav class="flex flex-wrap gap-3 mb-8">
                { for sections.iter().map(|section| html! {
                    <Link<Route>
                        to={Route::PortfolioSection {
                            section: section.slug.clone(),
                        }}
                        classes="px-3 py-1 rounded-full text-sm border \
                                 border-neutral-300 dark:border-neutral-600 \
                                 text-neutral-700 dark:text-neutral-300 \
                                 hover:border-neutral-500"
                    >
                        { &section.title }
                    </Link<Route>>
                }) }
            </nav>
        }
    });

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |next: u32| page.set(next))
    };

    html! {
        <div>
            <h1 class="text-3xl font-bold text-neutral-900 dark:text-white \
                       mb-8">
                {"Portfolio"}
            </h1>
            { section_nav }
            { entries.render("portfolio entries", |page_data, loading, error| {
                html! {
                    <div>
                        if let Some(error) = error {
                            <ContentNotice
                                message={error.clone()}
                                on_retry={entries.refresh.clone()}
                            />
                        }
                        <div class="grid gap-6 sm:grid-cols-2">
                            { for page_data.items.iter().map(entry_card) }
                        </div>
                        <PaginationControls
                            pagination={page_data.pagination}
                            on_page_change={on_page_change.clone()}
                            is_loading={loading}
                        />
                    </div>
                }
            }) }
        </div>
    }
}

pub(crate) fn entry_card(entry: &PortfolioEntry) -> Html {
    html! {
        <article class="p-6 rounded-lg border border-neutral-200 \
                        dark:border-neutral-700">
            <h2 class="font-medium text-neutral-900 dark:text-white">
                { &entry.title }
            </h2>
            <p class="mt-1 text-sm text-neutral-500 dark:text-neutral-400">
                { &entry.category }
            </p>
            if !entry.tags.is_empty() {
                <div class="mt-3 flex flex-wrap gap-2">
                    { for entry.tags.iter().map(|tag| html! {
                        <span class="text-xs text-neutral-500 \
                                     dark:text-neutral-400">
                            { format!("#{tag}") }
                        </span>
                    }) }
                </div>
            }
        </article>
    }
}
