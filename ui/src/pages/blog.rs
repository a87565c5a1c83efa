use payloads::{BlogPost, EntryFilters};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{ContentNotice, PaginationControls};
use crate::hooks::{ContentOptions, use_blog_posts};
use crate::utils::time::format_published;

/// Interval for picking up newly published posts without a reload.
const JOURNAL_POLL_MS: u32 = 120_000;

#[function_component]
pub fn BlogPage() -> Html {
    let page = use_state(|| 1u32);
    let posts = use_blog_posts(
        EntryFilters::default().with_page(*page),
        ContentOptions::polling(JOURNAL_POLL_MS),
    );

    let on_page_change = {
        let page = page.clone();
        Callback::from(move |next: u32| page.set(next))
    };

    html! {
        <div class="max-w-3xl">
            <h1 class="text-3xl font-bold text-neutral-900 dark:text-white \
                       mb-8">
                {"Journal"}
            </h1>
            { posts.render("journal entries", |page_data, loading, error| {
                html! {
                    <div>
                        if let Some(error) = error {
                            <ContentNotice
                                message={error.clone()}
                                on_retry={posts.refresh.clone()}
                            />
                        }
                        <div class="space-y-8">
                            { for page_data.items.iter().map(post_preview) }
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

fn post_preview(post: &BlogPost) -> Html {
    html! {
        <article>
            <Link<Route>
                to={Route::BlogPost { slug: post.slug.clone() }}
                classes="text-xl font-semibold text-neutral-900 \
                         dark:text-white hover:underline"
            >
                { &post.title }
            </Link<Route>>
            <p class="mt-1 text-sm text-neutral-500 dark:text-neutral-400">
                { format!(
                    "{} · {}",
                    format_published(post.published_at),
                    post.category
                ) }
            </p>
            <p class="mt-2 text-neutral-600 dark:text-neutral-300">
                { &post.excerpt }
            </p>
        </article>
    }
}
