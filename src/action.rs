//! Actions dispatched through the store.

/// A tagged message describing an event or intent.
///
/// Actions represent:
/// - User actions (button clicks, key presses)
/// - System events (timers, completed background work)
///
/// Actions are inert data: dispatching one only has effect through a
/// reducer or middleware that recognizes its tag. Reducers treat tags
/// outside their recognized set as identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Increment the counter by one.
    Increment,
    /// Decrement the counter by one.
    Decrement,
    /// Increment after a delay. Never handled by a reducer; the
    /// async-increment middleware recognizes this tag and re-dispatches
    /// a concrete [`Action::Increment`] once the delay elapses.
    IncrementAsync,
    /// Add an arbitrary amount to the counter.
    Add { value: i64 },
}
