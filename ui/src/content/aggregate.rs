use std::rc::Rc;

use futures::future::{LocalBoxFuture, join_all};

use super::envelope::EnvelopeStatus;

pub type Refresher = Rc<dyn Fn() -> LocalBoxFuture<'static, ()>>;

/// One member of a composite page: a hook's status plus its refresher.
#[derive(Clone)]
pub struct CompositePart {
    pub status: EnvelopeStatus,
    pub refresher: Refresher,
}

/// Combines several content hooks into one loading/error surface, for
/// pages that need multiple content kinds ready before first paint.
///
/// Member order is fixed by the caller and determines which error wins.
#[derive(Clone)]
pub struct Composite {
    parts: Vec<CompositePart>,
}

impl Composite {
    pub fn new(parts: Vec<CompositePart>) -> Self {
        Self { parts }
    }

    /// True while any member is loading.
    pub fn loading(&self) -> bool {
        self.parts.iter().any(|part| part.status.loading)
    }

    /// The first member error, in member order.
    pub fn first_error(&self) -> Option<&str> {
        self.parts
            .iter()
            .find_map(|part| part.status.error.as_deref())
    }

    /// Refresh every member in parallel; resolves once all settle.
    pub fn refresh_all(&self) -> LocalBoxFuture<'static, ()> {
        let refreshes: Vec<_> =
            self.parts.iter().map(|part| (part.refresher)()).collect();
        Box::pin(async move {
            join_all(refreshes).await;
        })
    }
}
