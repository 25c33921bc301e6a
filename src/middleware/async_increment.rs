use std::time::Duration;

use crate::action::Action;
use crate::middleware::{Dispatcher, Middleware};
use crate::state::State;

/// Delay for stores that don't configure their own; pass this to
/// [`async_increment_middleware`] to get the stock one-second deferral.
pub const DEFAULT_ASYNC_DELAY: Duration = Duration::from_secs(1);

/// Middleware expressing the deferred increment.
///
/// Recognizes only [`Action::IncrementAsync`]: on match it schedules a
/// single follow-up [`Action::Increment`] dispatch on the tokio timer
/// after `delay`, returning immediately without blocking the current
/// cycle. Every other tag is ignored.
///
/// The scheduled dispatch is never cancelled; if the store has been
/// dropped by the time the timer fires, the dispatch is a no-op.
/// Dispatching `IncrementAsync` requires a tokio runtime context.
pub fn async_increment_middleware<S: State>(delay: Duration) -> Middleware<S> {
    Box::new(move |_state: &S, action: &Action, dispatch: Dispatcher| {
        if !matches!(action, Action::IncrementAsync) {
            return;
        }
        tracing::debug!(delay_ms = delay.as_millis() as u64, "deferring increment");
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            dispatch(Action::Increment);
        });
    })
}
