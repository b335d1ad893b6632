//! Compile-time handler failure policy selection.
//!
//! This module provides marker types for choosing how `notify` reacts when a
//! handler returns an error: stop immediately (fail-fast) or keep going and
//! report every failure at the end.
//!
//! # Example
//!
//! ```ignore
//! // Default: fail-fast, later handlers are skipped
//! let dispatcher = EventDispatcher::new();
//!
//! // Opt-in: every handler runs, failures are collected
//! let dispatcher = EventDispatcher::new().collecting_errors();
//! ```

/// Stop at the first failing handler.
///
/// This is the default policy for
/// [`EventDispatcher`](crate::dispatcher::EventDispatcher). Handlers after
/// the failing one are not invoked, and `notify` returns
/// [`NotifyError::Handler`](crate::error::NotifyError::Handler).
#[derive(Debug, Clone, Copy, Default)]
pub struct FailFast;

/// Invoke every handler and collect the failures.
///
/// `notify` returns
/// [`NotifyError::Collected`](crate::error::NotifyError::Collected) listing
/// each failure in registration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectErrors;

/// Sealed trait for failure policy markers.
///
/// This trait cannot be implemented outside this crate, ensuring only
/// [`FailFast`] and [`CollectErrors`] can be used as policies.
pub trait FailurePolicy: private::Sealed + Default + Send + Sync {
    /// Whether dispatch stops at the first failing handler.
    const STOP_ON_FAILURE: bool;
}

impl FailurePolicy for FailFast {
    const STOP_ON_FAILURE: bool = true;
}

impl FailurePolicy for CollectErrors {
    const STOP_ON_FAILURE: bool = false;
}

mod private {
    pub trait Sealed {}
    impl Sealed for super::FailFast {}
    impl Sealed for super::CollectErrors {}
}
