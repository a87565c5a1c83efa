use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// The hook-level error text to surface.
    pub message: AttrValue,
    /// Bound to the owning hook's `refresh`.
    pub on_retry: Callback<()>,
}

/// Non-blocking notice shown above stale content when a refresh fails.
///
/// The previously loaded content stays interactive below; this only tells
/// the visitor it may be out of date and offers a manual retry.
#[function_component]
pub fn ContentNotice(props: &Props) -> Html {
    let on_retry = {
        let on_retry = props.on_retry.clone();
        Callback::from(move |_: MouseEvent| on_retry.emit(()))
    };

    html! {
        <div class="mb-4 flex items-center justify-between p-3 rounded-md \
                    bg-amber-50 dark:bg-amber-900/20 border \
                    border-amber-200 dark:border-amber-800">
            <p class="text-sm text-amber-800 dark:text-amber-300">
                {format!(
                    "Showing previously loaded content. {}",
                    props.message
                )}
            </p>
            <button
                onclick={on_retry}
                class="ml-4 text-sm font-medium underline text-amber-800 \
                       dark:text-amber-300"
            >
                {"Retry"}
            </button>
        </div>
    }
}
