//! Unidirectional state-management container.
//!
//! A single state tree updated only through pure reducers, with a
//! middleware chain that observes or re-routes every dispatched action
//! before it reaches the reducer.
//!
//! # Architecture
//!
//! ```text
//! dispatch(Action) ──→ Middlewares ──→ Root reducer ──→ State ──→ Observers
//!        ↑                  │
//!        └──── dispatcher ──┘  (sync, or delayed via timer)
//! ```
//!
//! - **State**: immutable value tree, replaced wholesale on every dispatch
//! - **Action**: tagged message describing an event or intent
//! - **Reducer**: pure function `(state, action) -> state`
//! - **Middleware**: interceptor able to observe state/action and trigger
//!   further dispatches, used to express side effects and deferred work
//! - **Store**: owner of the live state and the single dispatch entry point
//!
//! # Example
//!
//! ```
//! use uniflow::{app_reducer, log_middleware, Action, AppState, Store};
//!
//! let store = Store::new(app_reducer, AppState::default(), vec![log_middleware()]);
//! store.dispatch(Action::Increment);
//! store.dispatch(Action::Add { value: 4 });
//! assert_eq!(store.state().counter.counter, 5);
//! ```

pub mod action;
pub mod logging;
pub mod middleware;
pub mod reducer;
pub mod state;
pub mod store;

pub use action::Action;
pub use middleware::{
    async_increment_middleware, log_middleware, Dispatcher, Middleware, DEFAULT_ASYNC_DELAY,
};
pub use reducer::{app_reducer, counter_reducer, task_reducer, Reducer};
pub use state::{AppState, CounterState, State, Task, TaskState};
pub use store::{Store, Subscription};
