use payloads::{ContentKind, HomepageContent};
use yew::prelude::*;

use super::{ContentHookReturn, ContentOptions, use_content};
use crate::content::ContentRuntime;

/// Hook for the landing page hero and call-to-action document.
#[hook]
pub fn use_homepage(
    options: ContentOptions,
) -> ContentHookReturn<HomepageContent> {
    let runtime = use_context::<ContentRuntime>()
        .expect("content hooks require a ContentRuntime context");

    use_content(
        ContentKind::Homepage,
        ContentKind::Homepage.singleton_key(),
        options,
        move || {
            let runtime = runtime.clone();
            async move { runtime.client().get_homepage().await }
        },
    )
}
