//! Handle-keyed cooperative mutex
//!
//! This crate provides a mutual-exclusion primitive for cooperative task
//! runtimes, where concurrency is the interleaving of tasks at suspension
//! points rather than parallel OS threads:
//! - A [`MutexRegistry`] mapping caller-supplied handles to mutex instances
//! - A [`Mutex`] whose [`acquire`](Mutex::acquire) suspends the task until
//!   the resource is free
//! - A one-shot [`Releaser`] capability that ends an acquisition
//! - An infinite [`AcquireStream`] for repeated acquire/release loops
//!
//! Waiting never blocks a thread; tasks park on standard [`std::task::Waker`]s
//! and are woken when the holder releases.
//!
//! # Example
//!
//! ```
//! use keyed_mutex::MutexRegistry;
//!
//! # async fn demo() {
//! let registry = MutexRegistry::new();
//! let mutex = registry.mutex_for("db-row-5");
//!
//! let releaser = mutex.acquire().await;
//! // ... exclusive access to the resource behind "db-row-5" ...
//! releaser.release();
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

mod error;
mod mutex;
mod registry;
mod release;
mod signal;
mod stream;
mod ticket;
mod yield_now;

pub use error::TryAcquireError;
pub use mutex::Mutex;
pub use registry::MutexRegistry;
pub use release::Releaser;
pub use stream::AcquireStream;
pub use ticket::TicketId;
