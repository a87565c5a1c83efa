use std::rc::Rc;

use payloads::CmsClient;

use super::cache::CacheStore;
use super::time::TimeSource;

/// Everything the content hooks need, bundled for context injection.
///
/// Built once at app start and passed down instead of living in module
/// globals, so the store and clock are swappable (in-memory and fixed for
/// tests, localStorage and system clock in the browser).
#[derive(Clone)]
pub struct ContentRuntime {
    inner: Rc<RuntimeInner>,
}

struct RuntimeInner {
    client: CmsClient,
    cache: Rc<dyn CacheStore>,
    time: TimeSource,
}

impl ContentRuntime {
    pub fn new(
        client: CmsClient,
        cache: Rc<dyn CacheStore>,
        time: TimeSource,
    ) -> Self {
        Self {
            inner: Rc::new(RuntimeInner {
                client,
                cache,
                time,
            }),
        }
    }

    pub fn client(&self) -> &CmsClient {
        &self.inner.client
    }

    pub fn cache(&self) -> Rc<dyn CacheStore> {
        self.inner.cache.clone()
    }

    pub fn time(&self) -> TimeSource {
        self.inner.time.clone()
    }
}

impl PartialEq for ContentRuntime {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}
