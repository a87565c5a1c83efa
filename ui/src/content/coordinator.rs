use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Cancellation handle for one issued request.
///
/// Cancelling voids the request's right to write state; it does not abort
/// the underlying transfer (transports that can abort may observe it).
#[derive(Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Proof that a specific request was issued: its generation number plus
/// the token the coordinator holds for it.
pub struct RequestTicket {
    generation: u64,
    token: CancelToken,
}

impl RequestTicket {
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }
}

/// Per hook instance: enforces at-most-one-active-request.
///
/// Issuing a new ticket cancels the previous one, and only the most
/// recently issued ticket passes `is_current`, so settlement order never
/// matters: earlier requests are void regardless of when they arrive.
#[derive(Default)]
pub struct RequestCoordinator {
    generation: Cell<u64>,
    active: RefCell<Option<CancelToken>>,
}

impl RequestCoordinator {
    pub fn begin(&self) -> RequestTicket {
        if let Some(previous) = self.active.borrow_mut().take() {
            previous.cancel();
        }
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        let token = CancelToken::default();
        *self.active.borrow_mut() = Some(token.clone());
        RequestTicket { generation, token }
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        ticket.generation == self.generation.get()
            && !ticket.token.is_cancelled()
    }

    /// Void everything outstanding; used when the owning hook unmounts.
    pub fn cancel_all(&self) {
        if let Some(active) = self.active.borrow_mut().take() {
            active.cancel();
        }
        self.generation.set(self.generation.get() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ticket_supersedes_the_previous_one() {
        let coordinator = RequestCoordinator::default();

        let first = coordinator.begin();
        assert!(coordinator.is_current(&first));

        let second = coordinator.begin();
        assert!(!coordinator.is_current(&first));
        assert!(first.token().is_cancelled());
        assert!(coordinator.is_current(&second));
    }

    #[test]
    fn cancel_all_voids_the_active_ticket() {
        let coordinator = RequestCoordinator::default();
        let ticket = coordinator.begin();

        coordinator.cancel_all();
        assert!(!coordinator.is_current(&ticket));
        assert!(ticket.token().is_cancelled());
    }

    #[test]
    fn tickets_stay_void_after_later_activity() {
        let coordinator = RequestCoordinator::default();
        let stale = coordinator.begin();
        coordinator.cancel_all();

        let fresh = coordinator.begin();
        assert!(!coordinator.is_current(&stale));
        assert!(coordinator.is_current(&fresh));
    }
}
