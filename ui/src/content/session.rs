use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use payloads::{ClientError, ContentKind};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::cache::CacheStore;
use super::coordinator::{RequestCoordinator, RequestTicket};
use super::envelope::ContentEnvelope;
use super::time::TimeSource;

pub type FetchFuture<T> = LocalBoxFuture<'static, Result<T, ClientError>>;

/// One remote call per invocation; the session owns all retry/cancellation
/// policy, the closure owns none.
pub type FetchFn<T> = Rc<dyn Fn() -> FetchFuture<T>>;

pub type Listener<T> = Rc<dyn Fn(ContentEnvelope<T>)>;

/// The engine behind a content hook instance.
///
/// Composes the request coordinator, the shared cache store, and a fetch
/// closure behind the `ContentEnvelope` contract. One session serves one
/// Query Key; a parameter change is a new logical query and therefore a
/// new session (the old one is closed, voiding its outstanding request).
///
/// Construction primes the envelope from the cache: any-age entries are
/// adopted as provisional data so previously-viewed content renders
/// immediately, and a still-fresh entry settles the session outright.
pub struct ContentSession<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for ContentSession<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Sessions compare by identity; two sessions are never "equal" just
/// because they currently hold the same envelope.
impl<T> PartialEq for ContentSession<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

struct Inner<T> {
    kind: ContentKind,
    query_key: String,
    cache: Rc<dyn CacheStore>,
    time: TimeSource,
    fetch: FetchFn<T>,
    coordinator: RequestCoordinator,
    envelope: RefCell<ContentEnvelope<T>>,
    listener: RefCell<Option<Listener<T>>>,
    settled: Cell<bool>,
}

impl<T> ContentSession<T>
where
    T: Clone + Serialize + DeserializeOwned + 'static,
{
    pub fn new(
        kind: ContentKind,
        query_key: String,
        cache: Rc<dyn CacheStore>,
        time: TimeSource,
        fetch: FetchFn<T>,
    ) -> Self {
        let session = Self {
            inner: Rc::new(Inner {
                kind,
                query_key,
                cache,
                time,
                fetch,
                coordinator: RequestCoordinator::default(),
                envelope: RefCell::new(ContentEnvelope::default()),
                listener: RefCell::new(None),
                settled: Cell::new(false),
            }),
        };
        session.prime_from_cache();
        session
    }

    fn prime_from_cache(&self) {
        let inner = &self.inner;
        let Some(entry) = inner.cache.peek(&inner.query_key) else {
            return;
        };
        // The fresh-path read also performs the lazy eviction of expired
        // entries; the peeked copy above stays usable either way.
        let fresh =
            inner.cache.read(&inner.query_key, inner.time.now()).is_some();
        match serde_json::from_value::<T>(entry.payload) {
            Ok(data) => {
                let mut envelope = inner.envelope.borrow_mut();
                envelope.data = Some(data);
                envelope.last_fetched = Some(entry.written_at);
                if fresh {
                    inner.settled.set(true);
                }
            }
            Err(err) => {
                tracing::warn!(
                    key = %inner.query_key,
                    %err,
                    "discarding unreadable cache entry"
                );
                inner.cache.evict(&inner.query_key);
            }
        }
    }

    /// Register the sole observer of envelope changes. Snapshots are
    /// delivered on every state transition until `close`.
    pub fn subscribe(&self, listener: Listener<T>) {
        *self.inner.listener.borrow_mut() = Some(listener);
    }

    /// Detach the observer and void any outstanding request. Nothing may
    /// mutate observable state after this returns.
    pub fn close(&self) {
        self.inner.listener.borrow_mut().take();
        self.inner.coordinator.cancel_all();
    }

    pub fn snapshot(&self) -> ContentEnvelope<T> {
        self.inner.envelope.borrow().clone()
    }

    pub fn has_settled(&self) -> bool {
        self.inner.settled.get()
    }

    pub fn query_key(&self) -> &str {
        &self.inner.query_key
    }

    /// Start the initial fetch, unless a fresh cache entry already
    /// satisfied this query. Returns the future for the caller to spawn.
    pub fn mount(&self) -> Option<LocalBoxFuture<'static, ()>> {
        if self.inner.settled.get() {
            return None;
        }
        Some(self.run_fetch(true))
    }

    /// Force a new fetch cycle, bypassing cache freshness. Always passes
    /// through `loading = true`; existing data stays visible throughout.
    pub fn refresh(&self) -> LocalBoxFuture<'static, ()> {
        self.run_fetch(true)
    }

    /// The scheduler's fetch path: same cycle as `refresh` but `loading`
    /// is never raised, so rendered content does not flicker. Inert until
    /// the first settlement.
    pub fn background_refresh(&self) -> Option<LocalBoxFuture<'static, ()>> {
        if !self.inner.settled.get() {
            return None;
        }
        Some(self.run_fetch(false))
    }

    fn run_fetch(&self, show_loading: bool) -> LocalBoxFuture<'static, ()> {
        let ticket = self.inner.coordinator.begin();
        if show_loading {
            {
                let mut envelope = self.inner.envelope.borrow_mut();
                envelope.loading = true;
                envelope.error = None;
            }
            self.publish();
        }
        let session = self.clone();
        let request = (self.inner.fetch)();
        Box::pin(async move {
            let result = request.await;
            session.settle(&ticket, result);
        })
    }

    fn settle(&self, ticket: &RequestTicket, result: Result<T, ClientError>) {
        let inner = &self.inner;
        if !inner.coordinator.is_current(ticket) {
            tracing::debug!(
                key = %inner.query_key,
                "discarding settlement of a superseded request"
            );
            return;
        }
        let now = inner.time.now();
        inner.settled.set(true);
        match result {
            Ok(data) => {
                match serde_json::to_value(&data) {
                    Ok(value) => {
                        inner.cache.write(&inner.query_key, value, now)
                    }
                    Err(err) => tracing::warn!(
                        key = %inner.query_key,
                        %err,
                        "payload not cacheable"
                    ),
                }
                let mut envelope = inner.envelope.borrow_mut();
                envelope.data = Some(data);
                envelope.loading = false;
                envelope.error = None;
                envelope.last_fetched = Some(now);
            }
            Err(err @ ClientError::NotFound) => {
                // The entity no longer exists; a cached copy would resurrect
                // deleted content.
                inner.cache.evict(&inner.query_key);
                let mut envelope = inner.envelope.borrow_mut();
                envelope.data = None;
                envelope.loading = false;
                envelope.error = Some(describe_error(inner.kind, &err));
            }
            Err(err) => {
                tracing::warn!(key = %inner.query_key, %err, "fetch failed");
                let fallback = if inner.envelope.borrow().data.is_some() {
                    None
                } else {
                    inner
                        .cache
                        .peek(&inner.query_key)
                        .and_then(|entry| {
                            serde_json::from_value(entry.payload).ok()
                        })
                };
                let mut envelope = inner.envelope.borrow_mut();
                if let Some(data) = fallback {
                    envelope.data = Some(data);
                }
                envelope.loading = false;
                envelope.error = Some(describe_error(inner.kind, &err));
            }
        }
        self.publish();
    }

    fn publish(&self) {
        let listener = self.inner.listener.borrow().clone();
        if let Some(listener) = listener {
            listener(self.snapshot());
        }
    }
}

/// User-facing error text: names the content kind and the cause category,
/// never the raw transport failure.
fn describe_error(kind: ContentKind, err: &ClientError) -> String {
    match err {
        ClientError::Network(_) => {
            format!("failed to load {kind}: network error")
        }
        ClientError::NotFound => format!("{kind} content was not found"),
        ClientError::MalformedResponse(_) => format!(
            "failed to load {kind}: unexpected response from the content \
             service"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::cache::MemoryStore;
    use futures::FutureExt;
    use futures::channel::oneshot;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use jiff::{SignedDuration, Timestamp};
    use serde::Deserialize;
    use serde_json::json;
    use std::collections::VecDeque;

    const TTL: SignedDuration = SignedDuration::from_secs(5 * 60);
    const KEY: &str = "blog-posts?category=tutorials&page=1&limit=2";

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Doc {
        title: String,
    }

    fn doc(title: &str) -> Doc {
        Doc {
            title: title.into(),
        }
    }

    type PendingRequests =
        Rc<RefCell<VecDeque<oneshot::Sender<Result<Doc, ClientError>>>>>;

    /// Fetch closure whose settlement the test controls explicitly.
    fn manual_remote() -> (FetchFn<Doc>, PendingRequests) {
        let pending: PendingRequests = Rc::new(RefCell::new(VecDeque::new()));
        let fetch: FetchFn<Doc> = {
            let pending = pending.clone();
            Rc::new(move || {
                let (tx, rx) = oneshot::channel();
                pending.borrow_mut().push_back(tx);
                async move { rx.await.expect("request dropped unsettled") }
                    .boxed_local()
            })
        };
        (fetch, pending)
    }

    fn respond(pending: &PendingRequests, result: Result<Doc, ClientError>) {
        pending
            .borrow_mut()
            .pop_front()
            .expect("no request in flight")
            .send(result)
            .expect("session dropped the response channel");
    }

    struct Harness {
        pool: LocalPool,
        session: ContentSession<Doc>,
        pending: PendingRequests,
        cache: Rc<MemoryStore>,
        time: TimeSource,
        log: Rc<RefCell<Vec<ContentEnvelope<Doc>>>>,
    }

    fn harness_with_cache(
        prepare: impl FnOnce(&MemoryStore, &TimeSource),
    ) -> Harness {
        let time = TimeSource::fixed(Timestamp::UNIX_EPOCH);
        let cache = Rc::new(MemoryStore::new(TTL));
        prepare(&cache, &time);
        let (fetch, pending) = manual_remote();
        let session = ContentSession::new(
            ContentKind::BlogPosts,
            KEY.to_string(),
            cache.clone(),
            time.clone(),
            fetch,
        );
        let log: Rc<RefCell<Vec<ContentEnvelope<Doc>>>> =
            Rc::new(RefCell::new(Vec::new()));
        {
            let sink = log.clone();
            session.subscribe(Rc::new(move |env| sink.borrow_mut().push(env)));
        }
        Harness {
            pool: LocalPool::new(),
            session,
            pending,
            cache,
            time,
            log,
        }
    }

    fn harness() -> Harness {
        harness_with_cache(|_, _| {})
    }

    impl Harness {
        fn spawn(&self, future: LocalBoxFuture<'static, ()>) {
            self.pool.spawner().spawn_local(future).unwrap();
        }

        fn drive(&mut self) {
            self.pool.run_until_stalled();
        }
    }

    #[test]
    fn mount_fetches_then_settles_and_caches() {
        let mut h = harness();

        let fetch = h.session.mount().expect("cold mount must fetch");
        assert!(h.session.snapshot().loading);
        h.spawn(fetch);
        h.drive();

        respond(&h.pending, Ok(doc("hello")));
        h.drive();

        let env = h.session.snapshot();
        assert_eq!(env.data, Some(doc("hello")));
        assert!(!env.loading);
        assert!(env.error.is_none());
        assert_eq!(env.last_fetched, Some(h.time.now()));
        assert!(h.cache.read(KEY, h.time.now()).is_some());
        assert!(h.session.has_settled());
    }

    #[test]
    fn fresh_cache_satisfies_mount_without_a_request() {
        let mut h = harness_with_cache(|cache, time| {
            cache.write(KEY, json!({"title": "cached"}), time.now());
        });

        assert!(h.session.mount().is_none());
        h.drive();

        let env = h.session.snapshot();
        assert_eq!(env.data, Some(doc("cached")));
        assert!(!env.loading);
        assert!(h.session.has_settled());
        assert!(h.pending.borrow().is_empty());
    }

    #[test]
    fn expired_cache_is_provisional_and_triggers_a_fetch() {
        // entry written 10 minutes before mount, ttl 5 minutes
        let mut h = harness_with_cache(|cache, time| {
            cache.write(KEY, json!({"title": "stale"}), time.now());
            time.advance(SignedDuration::from_secs(10 * 60));
        });

        // stale payload is visible immediately, but the query is not
        // settled and a fetch goes out
        let env = h.session.snapshot();
        assert_eq!(env.data, Some(doc("stale")));
        assert!(!h.session.has_settled());

        let fetch = h.session.mount().expect("expired cache must refetch");
        h.spawn(fetch);
        h.drive();
        respond(&h.pending, Ok(doc("current")));
        h.drive();

        assert_eq!(h.session.snapshot().data, Some(doc("current")));
        let entry = h.cache.read(KEY, h.time.now()).unwrap();
        assert_eq!(entry.written_at, h.time.now());

        // an identical query mounted now is served from cache alone
        let (fetch_fn, pending) = manual_remote();
        let second = ContentSession::<Doc>::new(
            ContentKind::BlogPosts,
            KEY.to_string(),
            h.cache.clone(),
            h.time.clone(),
            fetch_fn,
        );
        assert!(second.mount().is_none());
        assert_eq!(second.snapshot().data, Some(doc("current")));
        assert!(pending.borrow().is_empty());
    }

    #[test]
    fn failure_with_cached_data_reports_error_beside_the_data() {
        let mut h = harness_with_cache(|cache, time| {
            cache.write(KEY, json!({"title": "cached"}), time.now());
        });
        assert!(h.session.mount().is_none());

        let refresh = h.session.refresh();
        h.spawn(refresh);
        h.drive();
        respond(&h.pending, Err(ClientError::Network("offline".into())));
        h.drive();

        let env = h.session.snapshot();
        assert_eq!(env.data, Some(doc("cached")));
        assert!(env.error.as_deref().unwrap().contains("blog-posts"));
        assert!(env.error.as_deref().unwrap().contains("network"));
        assert!(!env.loading);
    }

    #[test]
    fn failure_without_any_data_sets_error_only() {
        let mut h = harness();

        let fetch = h.session.mount().unwrap();
        h.spawn(fetch);
        h.drive();
        respond(&h.pending, Err(ClientError::Network("offline".into())));
        h.drive();

        let env = h.session.snapshot();
        assert!(env.data.is_none());
        assert!(env.error.is_some());
        assert!(!env.loading);
    }

    #[test]
    fn only_the_last_issued_request_writes_state() {
        let mut h = harness();

        let first = h.session.mount().unwrap();
        h.spawn(first);
        h.drive();

        let second = h.session.refresh();
        h.spawn(second);
        h.drive();

        // the newer request settles first ...
        let stale_response = h.pending.borrow_mut().pop_front().unwrap();
        respond(&h.pending, Ok(doc("newer")));
        h.drive();
        assert_eq!(h.session.snapshot().data, Some(doc("newer")));

        // ... and the superseded one, arriving later, is discarded
        stale_response.send(Ok(doc("older"))).unwrap();
        h.drive();
        assert_eq!(h.session.snapshot().data, Some(doc("newer")));
        assert!(
            h.log
                .borrow()
                .iter()
                .all(|env| env.data != Some(doc("older")))
        );
    }

    #[test]
    fn rapid_refreshes_collapse_to_one_settlement() {
        let mut h = harness();
        let fetch = h.session.mount().unwrap();
        h.spawn(fetch);
        h.drive();
        respond(&h.pending, Ok(doc("initial")));
        h.drive();

        let r1 = h.session.refresh();
        let r2 = h.session.refresh();
        h.spawn(r1);
        h.spawn(r2);
        h.drive();

        respond(&h.pending, Ok(doc("from-first")));
        respond(&h.pending, Ok(doc("from-second")));
        h.drive();

        assert_eq!(h.session.snapshot().data, Some(doc("from-second")));
        let settled: Vec<_> = h
            .log
            .borrow()
            .iter()
            .filter(|env| !env.loading && env.data.is_some())
            .map(|env| env.data.clone().unwrap())
            .collect();
        // initial mount settlement plus exactly one refresh settlement
        assert_eq!(settled, vec![doc("initial"), doc("from-second")]);
    }

    #[test]
    fn refresh_passes_through_loading() {
        let mut h = harness_with_cache(|cache, time| {
            cache.write(KEY, json!({"title": "cached"}), time.now());
        });

        let refresh = h.session.refresh();
        assert!(h.session.snapshot().loading);
        // data stays visible while the refresh is in flight
        assert_eq!(h.session.snapshot().data, Some(doc("cached")));

        h.spawn(refresh);
        h.drive();
        respond(&h.pending, Ok(doc("fresh")));
        h.drive();
        assert!(!h.session.snapshot().loading);
    }

    #[test]
    fn background_refresh_never_raises_loading() {
        let mut h = harness();
        let fetch = h.session.mount().unwrap();
        h.spawn(fetch);
        h.drive();
        respond(&h.pending, Ok(doc("initial")));
        h.drive();

        let log_len_before = h.log.borrow().len();
        let background = h.session.background_refresh().unwrap();
        assert!(!h.session.snapshot().loading);
        h.spawn(background);
        h.drive();
        assert!(!h.session.snapshot().loading);

        respond(&h.pending, Ok(doc("updated")));
        h.drive();

        let env = h.session.snapshot();
        assert_eq!(env.data, Some(doc("updated")));
        assert!(!env.loading);
        assert!(
            h.log.borrow()[log_len_before..]
                .iter()
                .all(|env| !env.loading)
        );
    }

    #[test]
    fn background_refresh_is_inert_until_first_settlement() {
        let mut h = harness();
        assert!(h.session.background_refresh().is_none());

        let fetch = h.session.mount().unwrap();
        // still unsettled while the initial request is in flight
        assert!(h.session.background_refresh().is_none());

        h.spawn(fetch);
        h.drive();
        respond(&h.pending, Ok(doc("initial")));
        h.drive();
        assert!(h.session.background_refresh().is_some());
    }

    #[test]
    fn close_discards_the_in_flight_settlement() {
        let mut h = harness();
        let fetch = h.session.mount().unwrap();
        h.spawn(fetch);
        h.drive();

        let published_before = h.log.borrow().len();
        h.session.close();
        respond(&h.pending, Ok(doc("late")));
        h.drive();

        // no publication, no envelope write, no cache write
        assert_eq!(h.log.borrow().len(), published_before);
        assert!(h.session.snapshot().data.is_none());
        assert!(h.cache.peek(KEY).is_none());
    }

    #[test]
    fn not_found_evicts_the_cache_entry() {
        let mut h = harness_with_cache(|cache, time| {
            cache.write(KEY, json!({"title": "cached"}), time.now());
        });

        let refresh = h.session.refresh();
        h.spawn(refresh);
        h.drive();
        respond(&h.pending, Err(ClientError::NotFound));
        h.drive();

        let env = h.session.snapshot();
        assert!(env.data.is_none());
        assert!(env.error.as_deref().unwrap().contains("not found"));
        assert!(h.cache.peek(KEY).is_none());
    }

    #[test]
    fn unreadable_cached_payload_is_discarded_on_construction() {
        let h = harness_with_cache(|cache, time| {
            // wrong shape for Doc
            cache.write(KEY, json!({"unexpected": true}), time.now());
        });

        assert!(h.session.snapshot().data.is_none());
        assert!(h.cache.peek(KEY).is_none());
        assert!(!h.session.has_settled());
    }
}
