//! Ticket identity for in-flight acquisitions.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::signal::Signal;

/// Identity of a single granted acquisition.
///
/// Ids are drawn from a process-global monotone counter, so a `TicketId` is
/// never reused for the lifetime of the process, across every mutex and
/// registry. Two acquisitions always carry distinct ids, even when they
/// lock the same mutex back to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TicketId(u64);

impl TicketId {
    pub(crate) fn next() -> TicketId {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        TicketId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// One outstanding acquisition: its identity plus the completion signal
/// waiters park on until the holder releases.
pub(crate) struct Ticket {
    pub(crate) id: TicketId,
    pub(crate) signal: Arc<Signal>,
}

impl Ticket {
    pub(crate) fn new() -> Ticket {
        Ticket {
            id: TicketId::next(),
            signal: Arc::new(Signal::new()),
        }
    }
}
