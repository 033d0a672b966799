use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Per-component request counter used to drop superseded responses.
///
/// Each fetch takes a ticket with [`RequestSequence::issue`]; when the
/// response arrives it is applied only if [`RequestSequence::is_current`]
/// still holds for that ticket. Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

/// Ticket for one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

impl PartialEq for RequestSequence {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.latest, &other.latest)
    }
}
