//! Single-fire completion signal.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, Waker};

use parking_lot::Mutex as PlMutex;

/// A one-shot event tied to a ticket's release.
///
/// Waiters park on the signal through [`Signal::wait`]; the first call to
/// [`Signal::fire`] wakes all of them at once. Later fires are no-ops and a
/// wait that starts after the fire resolves immediately.
pub(crate) struct Signal {
    state: PlMutex<SignalState>,
}

struct SignalState {
    fired: bool,
    wakers: Vec<Waker>,
}

impl Signal {
    pub(crate) fn new() -> Signal {
        Signal {
            state: PlMutex::new(SignalState {
                fired: false,
                wakers: Vec::new(),
            }),
        }
    }

    /// Fires the signal, waking every parked waiter exactly once.
    pub(crate) fn fire(&self) {
        let wakers = {
            let mut state = self.state.lock();
            if state.fired {
                return;
            }
            state.fired = true;
            std::mem::take(&mut state.wakers)
        };
        for waker in wakers {
            waker.wake();
        }
    }

    /// Returns a future that resolves once the signal has fired.
    pub(crate) fn wait(&self) -> Wait<'_> {
        Wait { signal: self }
    }

    #[cfg(test)]
    pub(crate) fn is_fired(&self) -> bool {
        self.state.lock().fired
    }
}

pub(crate) struct Wait<'a> {
    signal: &'a Signal,
}

impl Future for Wait<'_> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let mut state = self.signal.state.lock();
        if state.fired {
            return Poll::Ready(());
        }
        // Re-polls from the same task must not pile up duplicate wakers.
        if !state.wakers.iter().any(|waker| waker.will_wake(cx.waker())) {
            state.wakers.push(cx.waker().clone());
        }
        Poll::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::task::Wake;

    struct CountingWake(AtomicUsize);

    impl Wake for CountingWake {
        fn wake(self: Arc<Self>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn counting_waker() -> (Arc<CountingWake>, Waker) {
        let wake = Arc::new(CountingWake(AtomicUsize::new(0)));
        let waker = Waker::from(Arc::clone(&wake));
        (wake, waker)
    }

    #[test]
    fn wait_after_fire_is_immediately_ready() {
        let signal = Signal::new();
        signal.fire();

        let (_, waker) = counting_waker();
        let mut cx = Context::from_waker(&waker);
        let mut wait = signal.wait();
        assert_eq!(Pin::new(&mut wait).poll(&mut cx), Poll::Ready(()));
    }

    #[test]
    fn fire_wakes_every_parked_waiter_once() {
        let signal = Signal::new();

        let (wake_a, waker_a) = counting_waker();
        let (wake_b, waker_b) = counting_waker();
        let mut cx_a = Context::from_waker(&waker_a);
        let mut cx_b = Context::from_waker(&waker_b);

        let mut wait_a = signal.wait();
        let mut wait_b = signal.wait();
        assert_eq!(Pin::new(&mut wait_a).poll(&mut cx_a), Poll::Pending);
        assert_eq!(Pin::new(&mut wait_b).poll(&mut cx_b), Poll::Pending);
        // Spurious re-poll from the same task registers nothing new.
        assert_eq!(Pin::new(&mut wait_a).poll(&mut cx_a), Poll::Pending);

        signal.fire();
        signal.fire();

        assert_eq!(wake_a.0.load(Ordering::SeqCst), 1);
        assert_eq!(wake_b.0.load(Ordering::SeqCst), 1);
        assert!(signal.is_fired());
        assert_eq!(Pin::new(&mut wait_a).poll(&mut cx_a), Poll::Ready(()));
    }
}
