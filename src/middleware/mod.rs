//! Interceptors that observe or re-route dispatched actions.
//!
//! Every middleware runs once per dispatched action, in configured
//! order, before the root reducer, against the state as it was before
//! the current action is applied. A middleware that only cares about
//! one tag must no-op for all others.

mod async_increment;
mod log;

pub use async_increment::{async_increment_middleware, DEFAULT_ASYNC_DELAY};
pub use log::log_middleware;

use std::sync::Arc;

use crate::action::Action;

/// Callback handed to each middleware for enqueueing further actions.
///
/// Each invocation triggers a fresh, independent top-level dispatch
/// cycle, synchronously or after an arbitrary delay. Calling it after
/// the owning store has been dropped is a no-op.
pub type Dispatcher = Arc<dyn Fn(Action) + Send + Sync>;

/// An interceptor over a state type `S`.
///
/// Receives a pre-action state snapshot, the action, and a dispatcher.
/// Must not assume any timing relationship between its own invocation
/// and when the resulting next state becomes visible.
pub type Middleware<S> = Box<dyn Fn(&S, &Action, Dispatcher) + Send + Sync>;
