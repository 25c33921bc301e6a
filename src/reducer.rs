//! Pure state-transition functions.

use crate::action::Action;
use crate::state::{AppState, CounterState, TaskState};

/// A pure state transition: `(state, action) -> state`.
///
/// Contract: returns the input state unchanged for unrecognized
/// actions, performs no I/O, and never fails. Given the same state and
/// action it always returns the same result.
pub type Reducer<S> = fn(S, &Action) -> S;

/// Counter slice reducer.
pub fn counter_reducer(state: CounterState, action: &Action) -> CounterState {
    match action {
        Action::Increment => CounterState {
            counter: state.counter + 1,
        },
        Action::Decrement => CounterState {
            counter: state.counter - 1,
        },
        Action::Add { value } => CounterState {
            counter: state.counter + value,
        },
        _ => state,
    }
}

/// Task slice reducer. Identity for every action defined today.
pub fn task_reducer(state: TaskState, _action: &Action) -> TaskState {
    state
}

/// Root reducer: recomputes every feature slice on every action and
/// reassembles the full state. Each feature reducer reads only its own
/// slice, so composition order is unobservable in the result.
pub fn app_reducer(state: AppState, action: &Action) -> AppState {
    AppState {
        counter: counter_reducer(state.counter, action),
        tasks: task_reducer(state.tasks, action),
    }
}
