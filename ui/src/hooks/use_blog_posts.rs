use payloads::{BlogPost, ContentKind, EntryFilters, EntryPage};
use yew::prelude::*;

use super::{ContentHookReturn, ContentOptions, use_content};
use crate::content::ContentRuntime;

/// Hook for a filtered, paginated page of blog posts.
#[hook]
pub fn use_blog_posts(
    filters: EntryFilters,
    options: ContentOptions,
) -> ContentHookReturn<EntryPage<BlogPost>> {
    let runtime = use_context::<ContentRuntime>()
        .expect("content hooks require a ContentRuntime context");

    let query_key = filters.query_key(ContentKind::BlogPosts);
    use_content(ContentKind::BlogPosts, query_key, options, move || {
        let runtime = runtime.clone();
        let filters = filters.clone();
        async move { runtime.client().list_blog_posts(&filters).await }
    })
}
