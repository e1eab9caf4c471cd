//! Burst capture orchestration.
//!
//! The sequencer walks an explicit lifecycle (awaiting permission,
//! configuring, idle, capturing) and runs time-boxed photo bursts: one
//! capture per interval until the total duration is used up, every tick
//! accounted for in a [`BurstReport`].

pub mod burst;
pub mod report;
pub mod scheduler;
pub mod sequencer;
pub mod state;

pub use burst::{BurstPhase, BurstPlan, BurstProgress};
pub use report::{BurstReport, TickRecord, TickStatus};
pub use scheduler::{Scheduler, TokioScheduler};
pub use sequencer::CaptureSequencer;
pub use state::SequencerState;
