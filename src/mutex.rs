//! Task-aware mutex with a LIFO ticket stack.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex as PlMutex;

use crate::error::TryAcquireError;
use crate::release::Releaser;
use crate::stream::AcquireStream;
use crate::ticket::{Ticket, TicketId};
use crate::yield_now::yield_now;

/// A mutual-exclusion primitive for cooperative task runtimes.
///
/// Unlike an OS-level mutex, `Mutex` never blocks a thread: a task that
/// cannot acquire the lock is suspended at an await point and woken when
/// the holder releases. Instances are usually obtained through a
/// [`MutexRegistry`](crate::MutexRegistry), which hands out the same
/// `Arc<Mutex>` for equal handles.
///
/// Each grant is recorded as a ticket with a unique [`TicketId`]; the
/// returned [`Releaser`] is the only way to end a grant. At most one
/// unreleased ticket exists at a time, so acquisitions are serialized.
///
/// # Ordering
///
/// Waiters always park on the *most recently* inserted ticket and re-check
/// after one scheduler yield. Ordering among waiters is therefore
/// best-effort with a LIFO bias, not FIFO: a late acquirer can barge ahead
/// of a task that has been waiting longer, and a waiter can in principle be
/// starved while other acquirers keep re-entering. This is deliberate
/// behavior, not a defect.
///
/// # Hazards
///
/// The lock is not reentrant: a holder that acquires the same mutex again
/// deadlocks. A [`Releaser`] that is dropped without being invoked leaves
/// the mutex held forever.
pub struct Mutex {
    /// Outstanding tickets, newest last.
    ///
    /// The grant step checks emptiness and inserts under a single lock
    /// hold, so two acquirers can never both observe an empty stack.
    tickets: PlMutex<Vec<Ticket>>,
}

impl Mutex {
    /// Creates an unlocked mutex with no outstanding tickets.
    pub fn new() -> Mutex {
        Mutex {
            tickets: PlMutex::new(Vec::new()),
        }
    }

    /// Acquires the mutex, suspending the calling task until it is safe to
    /// proceed.
    ///
    /// Resolves to a one-shot [`Releaser`] that must be invoked when the
    /// caller is done with the protected resource. While any ticket is
    /// outstanding, the caller parks on the newest ticket's completion
    /// signal, yields to the scheduler once after it fires, and re-checks;
    /// once the stack is empty a new ticket is created and inserted in the
    /// same non-suspending step.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use keyed_mutex::Mutex;
    ///
    /// # async fn demo() {
    /// let mutex = Arc::new(Mutex::new());
    /// let releaser = mutex.clone().acquire().await;
    /// // ... exclusive section ...
    /// releaser.release();
    /// # }
    /// ```
    pub async fn acquire(self: Arc<Self>) -> Releaser {
        loop {
            let outstanding = {
                let mut tickets = self.tickets.lock();
                match tickets.last() {
                    Some(ticket) => Arc::clone(&ticket.signal),
                    None => {
                        let ticket = Ticket::new();
                        let id = ticket.id;
                        tickets.push(ticket);
                        return Releaser::new(Arc::clone(&self), id);
                    }
                }
            };
            outstanding.wait().await;
            yield_now().await;
        }
    }

    /// Acquires the mutex without suspending.
    ///
    /// Grants immediately when no ticket is outstanding; otherwise fails
    /// with [`TryAcquireError::Held`] and leaves the mutex untouched.
    pub fn try_acquire(self: Arc<Self>) -> Result<Releaser, TryAcquireError> {
        let id = {
            let mut tickets = self.tickets.lock();
            if !tickets.is_empty() {
                return Err(TryAcquireError::Held);
            }
            let ticket = Ticket::new();
            let id = ticket.id;
            tickets.push(ticket);
            id
        };
        Ok(Releaser::new(self, id))
    }

    /// Returns an infinite stream of successive acquisitions.
    ///
    /// Each element yields to the scheduler once, performs a full
    /// [`acquire`](Mutex::acquire), and produces the resulting
    /// [`Releaser`]. The stream never terminates on its own; consumers
    /// stop it by dropping it, and restart by calling `acquire_stream`
    /// again for a fresh instance.
    pub fn acquire_stream(self: Arc<Self>) -> AcquireStream {
        AcquireStream::new(self)
    }

    /// Whether any ticket is currently outstanding.
    pub fn is_locked(&self) -> bool {
        !self.tickets.lock().is_empty()
    }

    /// Number of outstanding tickets.
    pub fn outstanding(&self) -> usize {
        self.tickets.lock().len()
    }

    /// Removes `id`'s ticket and fires its completion signal, waking every
    /// parked waiter. The only route by which a ticket leaves the stack;
    /// removal of an already-removed ticket is a no-op.
    pub(crate) fn finish(&self, id: TicketId) {
        let signal = {
            let mut tickets = self.tickets.lock();
            match tickets.iter().position(|ticket| ticket.id == id) {
                Some(index) => tickets.remove(index).signal,
                None => return,
            }
        };
        signal.fire();
    }
}

impl Default for Mutex {
    fn default() -> Mutex {
        Mutex::new()
    }
}

impl fmt::Debug for Mutex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mutex")
            .field("outstanding", &self.outstanding())
            .finish()
    }
}
