use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::{ContentNotice, MarkdownText};
use crate::hooks::{ContentOptions, use_blog_post};
use crate::utils::time::format_published;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Post slug from the route.
    pub slug: String,
}

#[function_component]
pub fn BlogPostPage(props: &Props) -> Html {
    let post = use_blog_post(props.slug.clone(), ContentOptions::default());

    html! {
        <div class="max-w-3xl">
            <nav class="mb-6">
                <Link<Route>
                    to={Route::Blog}
                    classes="text-sm text-neutral-500 dark:text-neutral-400 \
                             hover:text-neutral-900 dark:hover:text-white"
                >
                    {"← Journal"}
                </Link<Route>>
            </nav>
            { post.render("journal entry", |post_data, _loading, error| {
                html! {
                    <article>
                        if let Some(error) = error {
                            <ContentNotice
                                message={error.clone()}
                                on_retry={post.refresh.clone()}
                            />
                        }
                        <h1 class="text-3xl font-bold text-neutral-900 \
                                   dark:text-white">
                            { &post_data.title }
                        </h1>
                        <p class="mt-2 text-sm text-neutral-500 \
                                  dark:text-neutral-400">
                            { format!(
                                "{} · {}",
                                format_published(post_data.published_at),
                                post_data.author
                            ) }
                        </p>
                        <MarkdownText
                            text={post_data.body.clone()}
                            class="mt-8"
                        />
                    </article>
                }
            }) }
        </div>
    }
}
