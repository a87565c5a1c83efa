use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component]
pub fn Header() -> Html {
    let link_class = "text-sm font-medium text-neutral-600 \
                      dark:text-neutral-300 hover:text-neutral-900 \
                      dark:hover:text-white transition-colors";

    html! {
        <header class="border-b border-neutral-200 dark:border-neutral-800">
            <nav class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-4 \
                        flex items-center justify-between">
                <Link<Route>
                    to={Route::Home}
                    classes="text-lg font-semibold text-neutral-900 \
                             dark:text-white"
                >
                    {"Studio Meridian"}
                </Link<Route>>
                <div class="flex items-center gap-6">
                    <Link<Route> to={Route::Portfolio} classes={link_class}>
                        {"Portfolio"}
                    </Link<Route>>
                    <Link<Route> to={Route::Blog} classes={link_class}>
                        {"Journal"}
                    </Link<Route>>
                    <Link<Route> to={Route::About} classes={link_class}>
                        {"About"}
                    </Link<Route>>
                </div>
            </nav>
        </header>
    }
}
