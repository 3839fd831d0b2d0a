//! Perpetual acquisition stream.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{ready, Context, Poll};

use futures_core::Stream;

use crate::mutex::Mutex;
use crate::release::Releaser;
use crate::yield_now::YieldOnce;

/// An infinite stream of successive acquisitions of one [`Mutex`].
///
/// Each element corresponds to one full lock cycle: the stream yields to
/// the scheduler once, performs an [`acquire`](Mutex::acquire), and
/// produces the resulting [`Releaser`]. It never produces `None`;
/// iteration ends only when the consumer drops the stream, which tears
/// nothing down on the mutex itself. A dropped stream is not resumable —
/// call [`Mutex::acquire_stream`] again for a fresh one.
///
/// Created by [`Mutex::acquire_stream`].
pub struct AcquireStream {
    mutex: Arc<Mutex>,
    state: State,
}

enum State {
    Idle,
    Yielding(YieldOnce),
    Acquiring(Pin<Box<dyn Future<Output = Releaser> + Send>>),
}

impl AcquireStream {
    pub(crate) fn new(mutex: Arc<Mutex>) -> AcquireStream {
        AcquireStream {
            mutex,
            state: State::Idle,
        }
    }
}

impl Stream for AcquireStream {
    type Item = Releaser;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Releaser>> {
        let this = self.get_mut();
        loop {
            match &mut this.state {
                State::Idle => {
                    this.state = State::Yielding(YieldOnce::new());
                }
                State::Yielding(yield_once) => {
                    ready!(Pin::new(yield_once).poll(cx));
                    let acquire = Arc::clone(&this.mutex).acquire();
                    this.state = State::Acquiring(Box::pin(acquire));
                }
                State::Acquiring(acquire) => {
                    let releaser = ready!(acquire.as_mut().poll(cx));
                    this.state = State::Idle;
                    return Poll::Ready(Some(releaser));
                }
            }
        }
    }
}

impl fmt::Debug for AcquireStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.state {
            State::Idle => "idle",
            State::Yielding(_) => "yielding",
            State::Acquiring(_) => "acquiring",
        };
        f.debug_struct("AcquireStream").field("state", &state).finish()
    }
}
