pub mod use_about_page;
pub mod use_blog_post;
pub mod use_blog_posts;
pub mod use_content;
pub mod use_homepage;
pub mod use_portfolio_entries;
pub mod use_portfolio_sections;

pub use use_about_page::use_about_page;
pub use use_blog_post::use_blog_post;
pub use use_blog_posts::use_blog_posts;
pub use use_content::use_content;
pub use use_homepage::use_homepage;
pub use use_portfolio_entries::{
    use_portfolio_entries, use_portfolio_entries_by_section,
};
pub use use_portfolio_sections::use_portfolio_sections;

use yew::prelude::*;

use crate::content::{CompositePart, ContentEnvelope, Refresher};

/// Per-hook configuration beyond the filter parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentOptions {
    /// Re-fetch in the background on a fixed interval.
    pub auto_refresh: bool,
    /// Polling period in milliseconds; ignored unless `auto_refresh`.
    pub refresh_interval: u32,
}

impl Default for ContentOptions {
    fn default() -> Self {
        Self {
            auto_refresh: false,
            refresh_interval: 60_000,
        }
    }
}

impl ContentOptions {
    pub fn polling(interval_ms: u32) -> Self {
        Self {
            auto_refresh: true,
            refresh_interval: interval_ms,
        }
    }
}

/// Generic content hook return type
pub struct ContentHookReturn<T> {
    pub envelope: ContentEnvelope<T>,
    pub refresh: Callback<()>,
    pub(crate) refresher: Refresher,
}

impl<T: Clone> ContentHookReturn<T> {
    pub fn data(&self) -> Option<&T> {
        self.envelope.data.as_ref()
    }

    /// Returns true for the very first load, before any data or error.
    pub fn is_initial_loading(&self) -> bool {
        self.envelope.is_initial_loading()
    }

    /// This hook's contribution to a `Composite` page surface.
    pub fn part(&self) -> CompositePart {
        CompositePart {
            status: self.envelope.status(),
            refresher: self.refresher.clone(),
        }
    }

    /// Render based on envelope state with contextual loading/error
    /// markup.
    ///
    /// - No data + loading: spinner with "Loading {context}..."
    /// - No data + error: full error state with a retry action
    /// - Has data: calls the render function with (data, loading, error);
    ///   a refresh failure keeps prior data visible, so the function can
    ///   show a non-blocking notice instead of replacing content
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&T, bool, Option<&String>) -> Html,
    {
        match &self.envelope.data {
            None => {
                if self.envelope.loading {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("Loading {}...", context)}
                            </p>
                        </div>
                    }
                } else if let Some(error) = &self.envelope.error {
                    let retry = self.refresh.clone();
                    html! {
                        <div class="p-4 rounded-md bg-red-50 \
                                   dark:bg-red-900/20 border \
                                   border-red-200 dark:border-red-800">
                            <p class="text-sm text-red-700 \
                                      dark:text-red-400">
                                {error.clone()}
                            </p>
                            <button
                                onclick={move |_: MouseEvent| retry.emit(())}
                                class="mt-2 text-sm font-medium underline \
                                       text-red-700 dark:text-red-400"
                            >
                                {"Try again"}
                            </button>
                        </div>
                    }
                } else {
                    html! {
                        <div class="text-center py-12">
                            <p class="text-neutral-600 dark:text-neutral-400">
                                {format!("No {} found", context)}
                            </p>
                        </div>
                    }
                }
            }
            Some(data) => render_fn(
                data,
                self.envelope.loading,
                self.envelope.error.as_ref(),
            ),
        }
    }
}
