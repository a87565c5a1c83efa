//! The content synchronization and caching layer.
//!
//! Every page-level hook composes the same pieces: a fetch closure over
//! the CMS client, a per-instance request coordinator (last request wins),
//! and the shared TTL cache store, all behind the `ContentEnvelope` state
//! contract. The pieces here are framework-free; the Yew wiring lives in
//! `crate::hooks`.

pub mod aggregate;
pub mod cache;
pub mod coordinator;
pub mod envelope;
pub mod fallback;
pub mod runtime;
pub mod scheduler;
pub mod session;
pub mod time;

pub use aggregate::{Composite, CompositePart, Refresher};
pub use cache::{CacheStore, DEFAULT_TTL, LocalStore, MemoryStore};
pub use envelope::{ContentEnvelope, EnvelopeStatus};
pub use runtime::ContentRuntime;
pub use scheduler::AutoRefresh;
pub use session::{ContentSession, FetchFn};
pub use time::TimeSource;
