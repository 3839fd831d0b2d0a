//! One-shot release capability.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::mutex::Mutex;
use crate::ticket::TicketId;

/// A one-shot capability that ends a single acquisition.
///
/// Bound to exactly one ticket of exactly one [`Mutex`]. Invoking
/// [`release`](Releaser::release) fires the ticket's completion signal,
/// waking every task parked on it, and removes the ticket from the mutex.
///
/// Dropping a `Releaser` without invoking it does *not* release the lock:
/// the mutex stays held forever and every later acquirer suspends
/// indefinitely. That is a caller bug, not a recoverable state.
#[must_use = "dropping a Releaser without calling release() leaves the mutex held forever"]
pub struct Releaser {
    mutex: Arc<Mutex>,
    ticket: TicketId,
    released: AtomicBool,
}

impl Releaser {
    pub(crate) fn new(mutex: Arc<Mutex>, ticket: TicketId) -> Releaser {
        Releaser {
            mutex,
            ticket,
            released: AtomicBool::new(false),
        }
    }

    /// Ends the acquisition this capability is bound to.
    ///
    /// Idempotent: the second and later calls are silent no-ops, with no
    /// double-wake and no error.
    pub fn release(&self) {
        if self.released.swap(true, Ordering::AcqRel) {
            return;
        }
        self.mutex.finish(self.ticket);
    }

    /// Identity of the ticket this capability is bound to.
    pub fn ticket(&self) -> TicketId {
        self.ticket
    }

    /// Whether [`release`](Releaser::release) has been invoked.
    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::Acquire)
    }
}

impl fmt::Debug for Releaser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Releaser")
            .field("ticket", &self.ticket)
            .field("released", &self.is_released())
            .finish()
    }
}
