use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use uniflow::{app_reducer, async_increment_middleware, Action, AppState, Store};

const SHORT_DELAY: Duration = Duration::from_millis(50);
const SETTLE: Duration = Duration::from_millis(300);

fn async_store() -> Store<AppState> {
    Store::new(
        app_reducer,
        AppState::default(),
        vec![async_increment_middleware(SHORT_DELAY)],
    )
}

#[tokio::test]
async fn increment_async_defers_the_state_change() {
    let store = async_store();

    store.dispatch(Action::IncrementAsync);
    // The reducer treats the async tag as identity, so nothing has
    // changed by the time dispatch returns.
    assert_eq!(store.state().counter.counter, 0);

    tokio::time::sleep(SETTLE).await;
    assert_eq!(store.state().counter.counter, 1);
}

#[tokio::test]
async fn exactly_one_follow_up_dispatch_occurs() {
    let store = async_store();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _subscription = store.subscribe(move |state: &AppState| {
        sink.lock().push(state.counter.counter);
    });

    store.dispatch(Action::IncrementAsync);
    tokio::time::sleep(SETTLE).await;

    // One cycle for IncrementAsync (identity) and one for the deferred
    // Increment, nothing more.
    assert_eq!(*seen.lock(), vec![0, 1]);
}

#[tokio::test]
async fn other_tags_are_ignored() {
    let store = async_store();

    store.dispatch(Action::Add { value: 2 });
    store.dispatch(Action::Decrement);
    tokio::time::sleep(SETTLE).await;

    // No deferred increment was scheduled for unrecognized tags.
    assert_eq!(store.state().counter.counter, 1);
}

#[tokio::test]
async fn delayed_dispatch_after_store_drop_is_a_noop() {
    let store = async_store();
    store.dispatch(Action::IncrementAsync);
    drop(store);

    // The timer still fires; the dispatch lands on a defunct handle.
    tokio::time::sleep(SETTLE).await;
}
