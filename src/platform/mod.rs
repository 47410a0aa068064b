//! Platform layer
//!
//! Owns the game state between frames and feeds it queued input. The native
//! binary drives it from a line-based command script on stdin.

pub mod driver;
pub mod queue;
pub mod script;

pub use driver::FrameDriver;
pub use queue::InputQueue;
pub use script::{Command, ScriptError, parse_line, run_script};
