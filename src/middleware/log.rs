use crate::action::Action;
use crate::middleware::{Dispatcher, Middleware};
use crate::state::State;

/// Middleware that records every dispatched action.
///
/// Side effect only: never calls the dispatcher and never affects the
/// resulting state.
pub fn log_middleware<S: State>() -> Middleware<S> {
    Box::new(|_state: &S, action: &Action, _dispatch: Dispatcher| {
        tracing::info!(?action, "action dispatched");
    })
}
