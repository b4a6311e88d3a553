//! # LiteLens Binary
//!
//! Demo entry point: assembles the interaction core over the seeded
//! fixtures, replays a short scripted session the way the screens would
//! drive it, and dumps the resulting activity feed.

use std::sync::Arc;
use std::time::{Duration, Instant};

use ll_core::{SystemClock, TokioDelay, UuidIds};
use ll_state::{ActionDispatcher, ActivityLog, FeedStore, FollowState, ReactionState};
use tracing_subscriber::EnvFilter;

/// Presentation-layer debounce: two activation signals inside the window
/// collapse into a single like that only ever sets `liked = true`. The
/// store itself knows nothing about tap timing.
struct DoubleTapGate {
    window: Duration,
    last_tap: Option<Instant>,
}

impl DoubleTapGate {
    fn new(window: Duration) -> Self {
        Self {
            window,
            last_tap: None,
        }
    }

    /// Returns true when this tap completes a double tap.
    fn tap(&mut self) -> bool {
        let now = Instant::now();
        let double = self
            .last_tap
            .is_some_and(|last| now.duration_since(last) < self.window);
        self.last_tap = Some(now);
        double
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1. Shared ports
    let clock = Arc::new(SystemClock);
    let ids = Arc::new(UuidIds);

    // 2. Stateful components over the seeded fixtures
    let reactions = Arc::new(ReactionState::new(
        clock.clone(),
        ids.clone(),
        ll_fixtures::seed_comments(),
    ));
    let follows = Arc::new(FollowState::new());
    let activity = Arc::new(ActivityLog::new(
        clock,
        ids,
        ll_fixtures::seed_notifications(),
    ));
    let feed = FeedStore::new(
        ll_fixtures::posts(),
        ll_fixtures::alternate_posts(),
        Arc::new(TokioDelay),
    );

    // 3. The dispatcher façade screens talk to
    let dispatcher = ActionDispatcher::new(
        reactions,
        follows,
        activity,
        Arc::new(ll_fixtures::catalog()),
        ll_fixtures::current_user(),
    );

    // 4. A screen watching the activity feed, as a mounted observer would
    let _feed_sub = dispatcher.activity().subscribe(|list| {
        tracing::info!(entries = list.len(), "activity feed updated");
    });

    tracing::info!("replaying a scripted session");
    let p1 = ll_fixtures::posts()[0].clone();

    // Double tap on the hero image: collapses to a single like.
    let mut gate = DoubleTapGate::new(Duration::from_millis(300));
    for _ in 0..2 {
        if gate.tap() && !dispatcher.reactions().overlay(&p1.id).liked {
            dispatcher.toggle_like(&p1.id);
        }
    }

    dispatcher.add_comment(&p1.id, "Great light!")?;
    dispatcher.toggle_save(&p1.id);
    dispatcher.toggle_repost(&p1.id);

    // Open the author's profile and follow them.
    dispatcher.view_profile(&p1.author.id);
    dispatcher.toggle_follow(&p1.author.id, &p1.author.display_name);

    // Pull to refresh: the feed swaps after the simulated delay.
    feed.refresh().finished().await;
    tracing::info!(
        first_post = %feed.posts()[0].title,
        "feed after refresh"
    );

    println!(
        "{}",
        serde_json::to_string_pretty(&dispatcher.activity().list())?
    );
    Ok(())
}
