use std::future::Future;
use std::rc::Rc;

use futures::FutureExt;
use payloads::{ClientError, ContentKind};
use serde::Serialize;
use serde::de::DeserializeOwned;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::{ContentHookReturn, ContentOptions};
use crate::content::{
    AutoRefresh, ContentRuntime, ContentSession, FetchFn, Refresher,
};

/// Generic content hook composer.
///
/// One call wires a `ContentSession` into Yew state: the session is keyed
/// by the Query Key, so changing any filter parameter closes the old
/// session (voiding its in-flight request) and mounts a fresh one. The
/// fetch closure captures its parameters; `query_key` is the coordination
/// and caching identity and must change whenever they do.
///
/// # Example
///
/// ```rust,ignore
/// #[hook]
/// pub fn use_sections(
///     options: ContentOptions,
/// ) -> ContentHookReturn<Vec<PortfolioSection>> {
///     let runtime = use_context::<ContentRuntime>().unwrap();
///     use_content(
///         ContentKind::PortfolioSections,
///         ContentKind::PortfolioSections.singleton_key(),
///         options,
///         move || {
///             let runtime = runtime.clone();
///             async move { runtime.client().list_portfolio_sections().await }
///         },
///     )
/// }
/// ```
#[hook]
pub fn use_content<T, F, Fut>(
    kind: ContentKind,
    query_key: String,
    options: ContentOptions,
    fetch_fn: F,
) -> ContentHookReturn<T>
where
    T: Clone + PartialEq + Serialize + DeserializeOwned + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ClientError>> + 'static,
{
    let runtime = use_context::<ContentRuntime>()
        .expect("content hooks require a ContentRuntime context");

    // One session per logical query; recreated only when the key changes.
    let session = {
        let runtime = runtime.clone();
        let key = query_key.clone();
        use_memo(query_key.clone(), move |_| {
            let fetch: FetchFn<T> = Rc::new(move || fetch_fn().boxed_local());
            ContentSession::new(
                kind,
                key,
                runtime.cache(),
                runtime.time(),
                fetch,
            )
        })
    };

    let envelope = use_state(|| session.snapshot());

    // Subscribe and start the initial fetch; the cleanup voids anything
    // still in flight so nothing writes state after unmount.
    {
        let session = session.clone();
        let envelope = envelope.clone();
        use_effect_with(query_key.clone(), move |_| {
            let session = (*session).clone();
            {
                let envelope = envelope.clone();
                session.subscribe(Rc::new(move |snapshot| {
                    envelope.set(snapshot);
                }));
            }
            envelope.set(session.snapshot());
            if let Some(initial_fetch) = session.mount() {
                spawn_local(initial_fetch);
            }
            move || session.close()
        });
    }

    // Optional background polling. Keyed by the Query Key as well, so a
    // parameter change retires the timer along with its session.
    {
        let session = session.clone();
        use_effect_with(
            (query_key, options.auto_refresh, options.refresh_interval),
            move |(_, enabled, interval_ms)| {
                let timer = enabled.then(|| {
                    AutoRefresh::start(
                        (*session).clone(),
                        *interval_ms,
                        |refresh| spawn_local(refresh),
                    )
                });
                move || drop(timer)
            },
        );
    }

    let refresher: Refresher = {
        let session = session.clone();
        Rc::new(move || session.refresh())
    };
    let refresh = {
        let refresher = refresher.clone();
        Callback::from(move |_: ()| spawn_local(refresher()))
    };

    ContentHookReturn {
        envelope: (*envelope).clone(),
        refresh,
        refresher,
    }
}
