use futures::future::LocalBoxFuture;
use gloo_timers::callback::Interval;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::session::ContentSession;

/// Background polling for one content session.
///
/// Dropping the guard stops the timer, so tying it to an effect cleanup
/// guarantees no interval outlives its hook instance. Ticks go through
/// `ContentSession::background_refresh`, which drops them until the first
/// settlement and never raises the loading flag.
pub struct AutoRefresh {
    _interval: Interval,
}

impl AutoRefresh {
    pub fn start<T, S>(
        session: ContentSession<T>,
        interval_ms: u32,
        spawn: S,
    ) -> Self
    where
        T: Clone + Serialize + DeserializeOwned + 'static,
        S: Fn(LocalBoxFuture<'static, ()>) + 'static,
    {
        let interval = Interval::new(interval_ms, move || {
            if let Some(refresh) = session.background_refresh() {
                spawn(refresh);
            }
        });
        Self {
            _interval: interval,
        }
    }
}
