//! # FeedStore
//!
//! The observable feed list plus the pull-to-refresh simulation: a timed
//! task that stands in for a backend fetch by swapping between two fixed
//! post sets after a short delay. Overlapping refreshes are allowed; the
//! swap is a deterministic toggle, so two completions simply land back
//! where they started.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use ll_core::{Delay, Post};
use tokio::task::JoinHandle;

use crate::store::{ObservableStore, Subscription};

/// Simulated network latency before the swapped feed arrives.
pub const REFRESH_DELAY: Duration = Duration::from_millis(800);

pub struct FeedStore {
    store: ObservableStore<Vec<Post>>,
    primary: Vec<Post>,
    alternate: Vec<Post>,
    showing_alternate: Mutex<bool>,
    delay: Arc<dyn Delay>,
}

impl FeedStore {
    pub fn new(primary: Vec<Post>, alternate: Vec<Post>, delay: Arc<dyn Delay>) -> Arc<Self> {
        Arc::new(Self {
            store: ObservableStore::new(primary.clone()),
            primary,
            alternate,
            showing_alternate: Mutex::new(false),
            delay,
        })
    }

    /// Current feed contents.
    pub fn posts(&self) -> Vec<Post> {
        self.store.get()
    }

    pub fn subscribe(
        &self,
        listener: impl Fn(&Vec<Post>) + Send + Sync + 'static,
    ) -> Subscription {
        self.store.subscribe(listener)
    }

    /// Starts a refresh: after [`REFRESH_DELAY`] the feed swaps to the other
    /// fixed set and broadcasts. Pending refreshes are not deduplicated.
    pub fn refresh(self: &Arc<Self>) -> RefreshHandle {
        tracing::debug!("feed refresh started");
        let feed = Arc::clone(self);
        let task = tokio::spawn(async move {
            feed.delay.wait(REFRESH_DELAY).await;
            feed.swap();
        });
        RefreshHandle { task }
    }

    fn swap(&self) {
        let next = {
            let mut flag = self
                .showing_alternate
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *flag = !*flag;
            if *flag {
                self.alternate.clone()
            } else {
                self.primary.clone()
            }
        };
        tracing::debug!(posts = next.len(), "feed refresh completed");
        self.store.set(next);
    }
}

/// Handle to a pending refresh. Cancelling aborts the swap if it has not
/// fired yet; awaiting [`RefreshHandle::finished`] observes completion.
pub struct RefreshHandle {
    task: JoinHandle<()>,
}

impl RefreshHandle {
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub async fn finished(self) {
        // Cancelled tasks resolve with a JoinError; either way the refresh
        // is no longer pending.
        let _ = self.task.await;
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use ll_core::{TokioDelay, User};

    use super::*;

    fn post(id: &str, title: &str) -> Post {
        Post {
            id: id.into(),
            author: User {
                id: "u-1".into(),
                username: "streetframe".into(),
                display_name: "Maya Ortiz".into(),
                avatar_url: None,
                bio: None,
                location: None,
                styles: vec![],
            },
            title: title.into(),
            description: None,
            images: vec![],
            tags: vec![],
            gear: vec![],
            exif: None,
            location: None,
            created_at: Utc::now(),
            appreciations_count: 0,
            comments_count: 0,
        }
    }

    fn feed() -> Arc<FeedStore> {
        FeedStore::new(
            vec![post("p-1", "Crossing at dusk")],
            vec![post("p-5", "Fog on the pier")],
            Arc::new(TokioDelay),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_swaps_to_the_alternate_set_after_the_delay() {
        let feed = feed();
        let handle = feed.refresh();
        assert_eq!(feed.posts()[0].id, "p-1", "swap waits for the delay");
        handle.finished().await;
        assert_eq!(feed.posts()[0].id, "p-5");
    }

    #[tokio::test(start_paused = true)]
    async fn second_refresh_swaps_back() {
        let feed = feed();
        feed.refresh().finished().await;
        feed.refresh().finished().await;
        assert_eq!(feed.posts()[0].id, "p-1");
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_refreshes_both_complete() {
        let feed = feed();
        let first = feed.refresh();
        let second = feed.refresh();
        first.finished().await;
        second.finished().await;
        // Two swaps: alternate, then back to primary.
        assert_eq!(feed.posts()[0].id, "p-1");
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_refresh_never_swaps() {
        let feed = feed();
        let handle = feed.refresh();
        handle.cancel();
        handle.finished().await;
        tokio::time::advance(REFRESH_DELAY * 2).await;
        assert_eq!(feed.posts()[0].id, "p-1");
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_broadcasts_to_subscribers() {
        use std::sync::Mutex;
        let feed = feed();
        let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _sub = feed.subscribe(move |posts: &Vec<Post>| {
            sink.lock().unwrap().push(posts[0].id.clone());
        });
        feed.refresh().finished().await;
        assert_eq!(*seen.lock().unwrap(), vec!["p-1", "p-5"]);
    }
}
