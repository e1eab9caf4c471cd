//! Top-level wiring of the capture pipeline.
//!
//! The controller turns a validated [`AppConfig`](crate::configuration::AppConfig)
//! into concrete backends, hands them to the sequencer, and exposes the
//! operations the CLI runs.

pub mod controller_handler;

pub use controller_handler::CaptureController;
