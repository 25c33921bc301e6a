//! The store: sole owner of the live state and the single entry point
//! through which state changes flow.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::action::Action;
use crate::middleware::{Dispatcher, Middleware};
use crate::reducer::Reducer;
use crate::state::State;

type Observer<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Owns the live state, a fixed root reducer, and an ordered middleware
/// list. Created once at application start and held for the lifetime of
/// the application.
pub struct Store<S: State> {
    inner: Arc<StoreInner<S>>,
}

struct StoreInner<S: State> {
    state: RwLock<S>,
    reducer: Reducer<S>,
    middlewares: Vec<Middleware<S>>,
    subscribers: RwLock<Vec<(u64, Observer<S>)>>,
    next_subscriber_id: AtomicU64,
}

impl<S: State> Store<S> {
    /// Pure construction; cannot fail.
    pub fn new(reducer: Reducer<S>, state: S, middlewares: Vec<Middleware<S>>) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(state),
                reducer,
                middlewares,
                subscribers: RwLock::new(Vec::new()),
                next_subscriber_id: AtomicU64::new(0),
            }),
        }
    }

    /// Run one dispatch cycle: every middleware in order against the
    /// pre-action snapshot, then the root reducer, then a wholesale
    /// state replacement, then observer notification.
    pub fn dispatch(&self, action: Action) {
        self.inner.dispatch(action);
    }

    /// Snapshot of the latest committed state.
    pub fn state(&self) -> S {
        self.inner.state.read().clone()
    }

    /// Register an observer invoked after every completed dispatch
    /// cycle with the committed state. Returns an unsubscribe handle.
    pub fn subscribe(&self, observer: impl Fn(&S) + Send + Sync + 'static) -> Subscription<S> {
        let id = self.inner.next_subscriber_id.fetch_add(1, Ordering::Relaxed);
        self.inner.subscribers.write().push((id, Arc::new(observer)));
        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// A dispatch callback for collaborators that outlive their access
    /// to the store handle. Holds the store weakly: invocations after
    /// the store is dropped are no-ops.
    pub fn dispatcher(&self) -> Dispatcher {
        StoreInner::dispatcher(&self.inner)
    }
}

impl<S: State> StoreInner<S> {
    fn dispatch(self: &Arc<Self>, action: Action) {
        tracing::trace!(?action, "dispatch cycle");

        // Middlewares see the state as it was before this action.
        let snapshot = self.state.read().clone();
        let dispatcher = Self::dispatcher(self);
        for middleware in &self.middlewares {
            middleware(&snapshot, &action, Arc::clone(&dispatcher));
        }

        // Commit against the live state, which a nested synchronous
        // dispatch may have advanced past `snapshot`. The write lock
        // serializes commits across cycles.
        let next = {
            let mut live = self.state.write();
            let next = (self.reducer)(live.clone(), &action);
            *live = next.clone();
            next
        };

        // Observers run outside the locks so they may subscribe,
        // unsubscribe, or dispatch.
        let observers: Vec<Observer<S>> = self
            .subscribers
            .read()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in &observers {
            observer(&next);
        }
    }

    fn dispatcher(this: &Arc<Self>) -> Dispatcher {
        let weak = Arc::downgrade(this);
        Arc::new(move |action| match weak.upgrade() {
            Some(inner) => inner.dispatch(action),
            None => tracing::trace!(?action, "dispatch after store teardown ignored"),
        })
    }
}

/// Unsubscribe handle returned by [`Store::subscribe`].
pub struct Subscription<S: State> {
    id: u64,
    inner: Weak<StoreInner<S>>,
}

impl<S: State> Subscription<S> {
    /// Deregister the observer. No-op if the store is already gone.
    pub fn unsubscribe(self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.subscribers.write().retain(|(id, _)| *id != self.id);
        }
    }
}
