use payloads::{ContentKind, PortfolioSection};
use yew::prelude::*;

use super::{ContentHookReturn, ContentOptions, use_content};
use crate::content::ContentRuntime;

/// Hook for the list of portfolio sections, ordered by sort index.
#[hook]
pub fn use_portfolio_sections(
    options: ContentOptions,
) -> ContentHookReturn<Vec<PortfolioSection>> {
    let runtime = use_context::<ContentRuntime>()
        .expect("content hooks require a ContentRuntime context");

    use_content(
        ContentKind::PortfolioSections,
        ContentKind::PortfolioSections.singleton_key(),
        options,
        move || {
            let runtime = runtime.clone();
            async move { runtime.client().list_portfolio_sections().await }
        },
    )
}
