//! Application state tree.

/// Marker trait for state values owned by a store.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render a view)
/// - Comparable (PartialEq for detecting changes)
pub trait State: Clone + PartialEq + Default + Send + Sync + 'static {}

/// Root state: the union of independently-evolving feature slices.
///
/// Only the root reducer produces new values of this type; consumers
/// receive snapshots and never mutate the live value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub counter: CounterState,
    pub tasks: TaskState,
}

impl State for AppState {}

/// Counter feature slice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CounterState {
    pub counter: i64,
}

impl State for CounterState {}

/// Task-list feature slice. No mutating actions are defined for it
/// today; the slot exists for extension.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskState {
    pub tasks: Vec<Task>,
}

impl State for TaskState {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub title: String,
}
