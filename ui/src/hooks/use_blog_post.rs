use payloads::{BlogPost, ContentKind};
use yew::prelude::*;

use super::{ContentHookReturn, ContentOptions, use_content};
use crate::content::ContentRuntime;

/// Hook for a single blog post addressed by slug.
///
/// An unknown slug settles as a not-found error with no data; the post
/// page renders its own missing-content state from that.
#[hook]
pub fn use_blog_post(
    slug: String,
    options: ContentOptions,
) -> ContentHookReturn<BlogPost> {
    let runtime = use_context::<ContentRuntime>()
        .expect("content hooks require a ContentRuntime context");

    let query_key = ContentKind::BlogPost.slug_key(&slug);
    use_content(ContentKind::BlogPost, query_key, options, move || {
        let runtime = runtime.clone();
        let slug = slug.clone();
        async move { runtime.client().get_blog_post(&slug).await }
    })
}
