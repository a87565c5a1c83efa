use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::ContentNotice;
use crate::hooks::{ContentOptions, use_portfolio_entries_by_section};
use crate::pages::portfolio::entry_card;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Section slug from the route.
    pub section: String,
}

/// One portfolio section's entries, in curated order.
#[function_component]
pub fn PortfolioSectionPage(props: &Props) -> Html {
    let entries = use_portfolio_entries_by_section(
        props.section.clone(),
        ContentOptions::default(),
    );

    html! {
        <div>
            <nav class="mb-6">
                <Link<Route>
                    to={Route::Portfolio}
                    classes="text-sm text-neutral-500 dark:text-neutral-400 \
                             hover:text-neutral-900 dark:hover:text-white"
                >
                    {"← All work"}
                </Link<Route>>
            </nav>
            <h1 class="text-3xl font-bold text-neutral-900 dark:text-white \
                       mb-8 capitalize">
                { props.section.replace('-', " ") }
            </h1>
            { entries.render("portfolio entries", |page_data, _loading, error| {
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
                    </div>
                }
            }) }
        </div>
    }
}
