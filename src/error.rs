//! Error types for non-suspending acquisition.

/// Errors that can occur when acquiring without suspending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TryAcquireError {
    /// The mutex already has an outstanding, unreleased ticket.
    #[error("mutex is held by an outstanding ticket")]
    Held,
}
