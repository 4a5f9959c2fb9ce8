use std::sync::atomic::{AtomicU64, Ordering};

/// Guards against stale responses when the same endpoint is hit in quick
/// succession (fast filter or page changes).
///
/// Issue a ticket before each fetch; apply the response only if the
/// ticket is still current when it arrives. A superseded response is
/// dropped instead of overwriting newer data.
#[derive(Debug, Default)]
pub struct FetchSequence {
    latest: AtomicU64,
}

/// Ticket for one fetch; see [`FetchSequence::issue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new fetch, superseding all earlier tickets.
    #[must_use]
    pub fn issue(&self) -> FetchTicket {
        FetchTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether the ticket still belongs to the most recent fetch.
    #[must_use]
    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }
}
