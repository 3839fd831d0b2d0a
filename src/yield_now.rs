//! Cooperative yield used between lock re-checks.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// A future that suspends exactly once before completing.
///
/// The first poll reschedules the task and returns `Pending`; the second
/// completes. One instance corresponds to one scheduler suspension, never
/// a busy-poll.
pub(crate) struct YieldOnce {
    yielded: bool,
}

impl YieldOnce {
    pub(crate) fn new() -> YieldOnce {
        YieldOnce { yielded: false }
    }
}

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if !self.yielded {
            self.yielded = true;
            cx.waker().wake_by_ref();
            return Poll::Pending;
        }
        Poll::Ready(())
    }
}

/// Hands control back to the scheduler exactly once.
pub(crate) async fn yield_now() {
    YieldOnce::new().await
}
