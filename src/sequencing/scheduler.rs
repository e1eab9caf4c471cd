//! Timer abstraction for the sequencer.

use std::time::Duration;

use async_trait::async_trait;

/// Source of delays between ticks.
///
/// The sequencer never calls the runtime clock directly; it goes through
/// this trait so tests can swap in an instrumented scheduler or drive the
/// tokio clock with `start_paused`.
#[async_trait]
pub trait Scheduler: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Production scheduler backed by the tokio timer wheel.
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
