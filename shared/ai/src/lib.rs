//! Checkpoint-following bot for the Vendee Globe sailing simulation.
//!
//! [CourseTracker] holds the ordered checkpoints and decides, once per tick,
//! where to steer and how much sail to carry. [CourseBot] wraps it behind the
//! host's [vendee_api::Bot] interface.

pub mod bot;
pub mod config;
pub mod course;
pub mod route;

pub use bot::CourseBot;
pub use config::{CheckpointConfig, CourseConfig};
pub use course::{Advance, Checkpoint, Course, CourseTracker};

pub use vendee_api::prelude;
