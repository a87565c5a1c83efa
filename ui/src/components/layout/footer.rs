use yew::prelude::*;

#[function_component]
pub fn Footer() -> Html {
    html! {
        <footer class="border-t border-neutral-200 dark:border-neutral-800 \
                       mt-16">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8 \
                        text-sm text-neutral-500 dark:text-neutral-400">
                {"© Studio Meridian. All work shown by permission of the \
                  respective clients."}
            </div>
        </footer>
    }
}
