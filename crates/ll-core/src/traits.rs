//! # Core Traits (Ports)
//!
//! Injectable seams for the stateful components: wall clock, id generation,
//! and the timed delay behind the feed-refresh simulation. Tests swap these
//! for deterministic fakes instead of relying on real time or randomness.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of "now" for generated comments and notifications.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Source of fresh identifiers. Ids are domain strings ("c-…", "n-…");
/// the prefix tells records apart at a glance in dumps and logs.
pub trait IdSource: Send + Sync {
    fn next_id(&self, prefix: &str) -> String;
}

/// Abstract timed wait used by the refresh simulation, so tests can inject
/// a fake scheduler instead of sleeping on real time.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// Wall-clock implementation of [`Clock`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// UUID v7 implementation of [`IdSource`]: time-ordered, globally unique.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, Uuid::now_v7())
    }
}

/// Tokio sleep implementation of [`Delay`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Deterministic port implementations for tests.
#[cfg(any(test, feature = "testing"))]
pub mod fakes {
    use std::sync::atomic::{AtomicU64, Ordering};

    use chrono::{DateTime, TimeZone, Utc};

    use super::{Clock, IdSource};

    /// Clock pinned to a fixed instant.
    pub struct FixedClock(pub DateTime<Utc>);

    impl FixedClock {
        pub fn at_epoch() -> Self {
            Self(Utc.timestamp_opt(1_700_000_000, 0).unwrap())
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    /// Monotonic counter ids: "c-1", "c-2", …
    #[derive(Default)]
    pub struct SequenceIds {
        next: AtomicU64,
    }

    impl IdSource for SequenceIds {
        fn next_id(&self, prefix: &str) -> String {
            let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
            format!("{prefix}-{n}")
        }
    }
}
