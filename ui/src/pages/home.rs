use payloads::{EntryFilters, PortfolioEntry, SortField, SortOrder};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::ContentNotice;
use crate::content::{Composite, fallback};
use crate::hooks::{ContentOptions, use_homepage, use_portfolio_entries};

/// Landing page: hero document plus a strip of featured portfolio work.
///
/// Both content kinds gate the first paint together through a
/// `Composite`; once either has rendered, refresh failures degrade to a
/// notice instead of blanking the page.
#[function_component]
pub fn HomePage() -> Html {
    let homepage = use_homepage(ContentOptions::default());
    let featured = use_portfolio_entries(
        EntryFilters {
            limit: 3,
            sort_by: SortField::SortIndex,
            sort_order: SortOrder::Asc,
            ..EntryFilters::default()
        },
        ContentOptions::default(),
    );

    let composite = Composite::new(vec![homepage.part(), featured.part()]);

    if composite.loading() && homepage.data().is_none() {
        return html! {
            <div class="text-center py-24">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Loading..."}
                </p>
            </div>
        };
    }

    // CMS unreachable with nothing cached: serve the built-in copy
    let hero = homepage
        .envelope
        .data
        .clone()
        .unwrap_or_else(fallback::homepage);

    let notice = composite.first_error().map(|error| {
        let retry = {
            let composite = composite.clone();
            Callback::from(move |_: ()| spawn_local(composite.refresh_all()))
        };
        html! {
            <ContentNotice message={error.to_string()} on_retry={retry} />
        }
    });

    html! {
        <div>
            { notice }
            <section class="py-16 text-center bg-gradient-to-b \
                            from-neutral-50 dark:from-neutral-800 \
                            to-transparent rounded-lg">
                <h1 class="text-4xl sm:text-5xl font-bold tracking-tight \
                           text-neutral-900 dark:text-white">
                    { &hero.hero_title }
                </h1>
                <p class="mt-4 max-w-2xl mx-auto text-lg \
                          text-neutral-600 dark:text-neutral-300">
                    { &hero.hero_subtitle }
                </p>
                <a
                    href={hero.cta_href.clone()}
                    class="inline-block mt-8 px-6 py-3 rounded-md \
                           bg-neutral-900 dark:bg-white text-white \
                           dark:text-neutral-900 text-sm font-medium"
                >
                    { &hero.cta_label }
                </a>
            </section>

            if let Some(page) = featured.data() {
                if !page.is_empty() {
                    <section class="mt-16">
                        <h2 class="text-xl font-semibold text-neutral-900 \
                                   dark:text-white mb-6">
                            {"Selected work"}
                        </h2>
                        <div class="grid gap-6 sm:grid-cols-2 \
                                    lg:grid-cols-3">
                            { for page.items.iter().map(entry_card) }
                        </div>
                    </section>
                }
            }
        </div>
    }
}

fn entry_card(entry: &PortfolioEntry) -> Html {
    html! {
        <Link<Route>
            to={Route::PortfolioSection {
                section: entry.category.clone(),
            }}
            classes="block p-6 rounded-lg border border-neutral-200 \
                     dark:border-neutral-700 hover:border-neutral-400 \
                     dark:hover:border-neutral-500 transition-colors"
        >
            <h3 class="font-medium text-neutral-900 dark:text-white">
                { &entry.title }
            </h3>
            <p class="mt-1 text-sm text-neutral-500 dark:text-neutral-400">
                { &entry.category }
            </p>
        </Link<Route>>
    }
}
