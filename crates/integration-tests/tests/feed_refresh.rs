//! The pull-to-refresh simulation over the seeded fixtures, run under
//! paused tokio time so no test waits on the real 800 ms delay.

use std::sync::{Arc, Mutex};

use ll_core::TokioDelay;
use ll_state::{FeedStore, REFRESH_DELAY};

fn feed() -> Arc<FeedStore> {
    FeedStore::new(
        ll_fixtures::posts(),
        ll_fixtures::alternate_posts(),
        Arc::new(TokioDelay),
    )
}

#[tokio::test(start_paused = true)]
async fn refresh_swaps_between_the_two_fixture_sets() {
    let feed = feed();
    assert_eq!(feed.posts()[0].id, "p-1");

    feed.refresh().finished().await;
    assert_eq!(feed.posts()[0].id, "p-5");

    feed.refresh().finished().await;
    assert_eq!(feed.posts()[0].id, "p-1");
}

#[tokio::test(start_paused = true)]
async fn subscriber_sees_initial_feed_then_each_swap() {
    let feed = feed();
    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let _sub = feed.subscribe(move |posts| {
        sink.lock().unwrap().push(posts[0].id.clone());
    });

    feed.refresh().finished().await;
    feed.refresh().finished().await;
    assert_eq!(*seen.lock().unwrap(), vec!["p-1", "p-5", "p-1"]);
}

#[tokio::test(start_paused = true)]
async fn cancelling_one_of_two_pending_refreshes_leaves_one_swap() {
    let feed = feed();
    let keep = feed.refresh();
    let cancel = feed.refresh();
    cancel.cancel();
    cancel.finished().await;
    keep.finished().await;
    tokio::time::advance(REFRESH_DELAY * 2).await;
    assert_eq!(feed.posts()[0].id, "p-5");
}
