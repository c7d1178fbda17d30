use thiserror::Error;

/// Returned by a frame awaitable whose cancellation token fired.
///
/// Once observed, the awaitable has stopped: no further condition checks,
/// no further samples, and no final sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("operation cancelled")]
pub struct Cancelled;

/// Result of a frame awaitable.
pub type AwaitResult = Result<(), Cancelled>;
