//! Visual effects layered over the application
//!
//! Currently a single effect: the confetti particle system rendered on a
//! full-window Canvas.

pub mod confetti;
