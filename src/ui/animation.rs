//! Animation system for the celebration overlay
//!
//! Two kinds of time-based animation live here:
//!
//! - `CountUp`: a hand-rolled eased count-up driven by the frame subscription
//! - `DialogTransition`: enter/exit dialog presentation using `iced_anim`

mod counter;
mod transition;

pub use counter::{CountUp, ease_out_expo};
pub use transition::{DialogTransition, Phase};
