use yew::prelude::*;

use crate::components::{ContentNotice, MarkdownText};
use crate::content::fallback;
use crate::hooks::{ContentOptions, use_about_page};

#[function_component]
pub fn AboutPage() -> Html {
    let about = use_about_page(ContentOptions::default());

    if about.is_initial_loading() {
        return html! {
            <div class="text-center py-24">
                <p class="text-neutral-600 dark:text-neutral-400">
                    {"Loading about page..."}
                </p>
            </div>
        };
    }

    let content = about.envelope.data.clone().unwrap_or_else(fallback::about);

    let notice = about.envelope.error.as_ref().map(|error| {
        html! {
            <ContentNotice
                message={error.clone()}
                on_retry={about.refresh.clone()}
            />
        }
    });

    html! {
        <div class="max-w-3xl">
            { notice }
            <h1 class="text-3xl font-bold text-neutral-900 dark:text-white">
                { &content.heading }
            </h1>
            <MarkdownText text={content.body.clone()} class="mt-6" />
            if !content.skills.is_empty() {
                <div class="mt-8 flex flex-wrap gap-2">
                    { for content.skills.iter().map(|skill| html! {
                        <span class="px-3 py-1 rounded-full text-sm \
                                     bg-neutral-100 dark:bg-neutral-800 \
                                     text-neutral-700 \
                                     dark:text-neutral-300">
                            { skill }
                        </span>
                    }) }
                </div>
            }
        </div>
    }
}
