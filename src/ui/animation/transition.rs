//! Dialog enter/exit transition using iced_anim
//!
//! Drives opacity, vertical offset and scale for the celebration dialog.
//! Entrance decelerates over 500ms; exit is a quick 200ms fade-and-shrink.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Entrance duration (decelerating ease-out)
const ENTER_DURATION: Duration = Duration::from_millis(500);
/// Exit duration (quick fade)
const EXIT_DURATION: Duration = Duration::from_millis(200);

/// Discrete presentation phase of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    Entering,
    Open,
    Exiting,
}

fn enter_easing() -> Easing {
    Easing::EASE_OUT.with_duration(ENTER_DURATION)
}

fn exit_easing() -> Easing {
    Easing::EASE.with_duration(EXIT_DURATION)
}

/// Enter/exit animation state for a modal dialog.
///
/// The underlying `Animated` is rebuilt on every direction change so each
/// direction gets its own easing and duration, starting from the current
/// interpolated value rather than snapping.
#[derive(Debug)]
pub struct DialogTransition {
    animation: Animated<f32>,
    open: bool,
}

impl Default for DialogTransition {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogTransition {
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, enter_easing()),
            open: false,
        }
    }

    /// Begin the entrance transition from the current presentation value.
    pub fn start(&mut self) {
        self.open = true;
        let current = *self.animation.value();
        self.animation = Animated::transition(current, enter_easing());
        self.animation.update(1.0.into());
    }

    /// Begin the exit transition from the current presentation value.
    pub fn dismiss(&mut self) {
        self.open = false;
        let current = *self.animation.value();
        self.animation = Animated::transition(current, exit_easing());
        self.animation.update(0.0.into());
    }

    /// Tick the animation forward in time.
    /// Must be called on each animation frame to update the value.
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }

    /// Presentation progress (0.0 hidden, 1.0 fully presented).
    pub fn progress(&self) -> f32 {
        *self.animation.value()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True while the dialog should stay in the widget tree
    /// (open, or still fading out).
    pub fn is_visible(&self) -> bool {
        self.open || self.progress() > 0.01
    }

    pub fn phase(&self) -> Phase {
        match (self.open, self.is_animating()) {
            (true, true) => Phase::Entering,
            (true, false) => Phase::Open,
            (false, true) => Phase::Exiting,
            (false, false) => Phase::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_hidden() {
        let transition = DialogTransition::new();
        assert_eq!(transition.phase(), Phase::Closed);
        assert_eq!(transition.progress(), 0.0);
        assert!(!transition.is_visible());
    }

    #[test]
    fn start_opens_and_presents() {
        let mut transition = DialogTransition::new();
        transition.start();
        assert!(transition.is_open());
        assert!(transition.is_visible());
        assert!(matches!(transition.phase(), Phase::Entering | Phase::Open));
    }

    #[test]
    fn dismiss_leaves_open_state() {
        let mut transition = DialogTransition::new();
        transition.start();
        transition.dismiss();
        assert!(!transition.is_open());
        assert!(matches!(transition.phase(), Phase::Exiting | Phase::Closed));
    }

    #[test]
    fn progress_stays_in_unit_interval() {
        let mut transition = DialogTransition::new();
        transition.start();
        let t0 = Instant::now();
        for ms in [0u64, 100, 300, 600, 1000] {
            transition.tick(t0 + std::time::Duration::from_millis(ms));
            let p = transition.progress();
            assert!((0.0..=1.0).contains(&p), "progress {p} out of range");
        }
    }
}
