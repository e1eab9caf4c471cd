//! Timed photo-burst capture with insert-only secret storage.
//!
//! snapvault opens a camera behind an access gate, takes one photo per
//! interval until a duration budget is spent, and files each shot into a
//! credential-store-like backend under a fixed `(service, account)` key.
//! The store never overwrites: the first photo of a burst wins and every
//! later save is reported as a failed tick.

pub mod archive;
pub mod camera;
pub mod configuration;
pub mod controller;
pub mod error_handling;
pub mod secret_store;
pub mod sequencing;

pub use configuration::AppConfig;
pub use controller::CaptureController;
pub use sequencing::{BurstReport, CaptureSequencer, SequencerState};
