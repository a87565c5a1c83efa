use payloads::Pagination;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Derived window for the current listing page.
    pub pagination: Pagination,
    /// Callback when the page changes (1-indexed).
    pub on_page_change: Callback<u32>,
    /// Whether currently loading (to disable buttons)
    #[prop_or(false)]
    pub is_loading: bool,
}

#[function_component]
pub fn PaginationControls(props: &Props) -> Html {
    let Props {
        pagination,
        is_loading,
        ..
    } = *props;

    // Nothing to page through
    if pagination.total <= pagination.limit as u64 {
        return html! {};
    }

    let on_previous = {
        let on_page_change = props.on_page_change.clone();
        let page = pagination.page;
        Callback::from(move |_: MouseEvent| {
            on_page_change.emit(page.saturating_sub(1).max(1));
        })
    };

    let on_next = {
        let on_page_change = props.on_page_change.clone();
        let page = pagination.page;
        Callback::from(move |_: MouseEvent| {
            on_page_change.emit(page + 1);
        })
    };

    let prev_disabled = !pagination.has_previous || is_loading;
    let next_disabled = !pagination.has_next || is_loading;

    let button_class = |disabled: bool| {
        if disabled {
            "px-4 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-400 \
             dark:text-neutral-500 bg-neutral-100 dark:bg-neutral-800 \
             cursor-not-allowed"
        } else {
            "px-4 py-2 border border-neutral-300 dark:border-neutral-600 \
             rounded-md text-sm font-medium text-neutral-700 \
             dark:text-neutral-300 bg-white dark:bg-neutral-700 \
             hover:bg-neutral-50 dark:hover:bg-neutral-600 \
             transition-colors duration-200"
        }
    };

    html! {
        <div class="flex items-center justify-between mt-4 pt-4 \
                    border-t border-neutral-200 dark:border-neutral-700">
            <button
                onclick={on_previous}
                disabled={prev_disabled}
                class={button_class(prev_disabled)}
            >
                {"Previous"}
            </button>
            <span class="text-sm text-neutral-600 dark:text-neutral-400">
                {format!(
                    "Page {} of {}",
                    pagination.page,
                    pagination.total_pages()
                )}
            </span>
            <button
                onclick={on_next}
                disabled={next_disabled}
                class={button_class(next_disabled)}
            >
                {"Next"}
            </button>
        </div>
    }
}
