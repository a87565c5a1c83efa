use payloads::{AboutContent, ContentKind};
use yew::prelude::*;

use super::{ContentHookReturn, ContentOptions, use_content};
use crate::content::ContentRuntime;

/// Hook for the about page document.
#[hook]
pub fn use_about_page(
    options: ContentOptions,
) -> ContentHookReturn<AboutContent> {
    let runtime = use_context::<ContentRuntime>()
        .expect("content hooks require a ContentRuntime context");

    use_content(
        ContentKind::About,
        ContentKind::About.singleton_key(),
        options,
        move || {
            let runtime = runtime.clone();
            async move { runtime.client().get_about().await }
        },
    )
}
