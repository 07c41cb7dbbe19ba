// src/app/state.rs
//! Application state definitions

use std::sync::Arc;

use iced::time::Instant;

use crate::features::{Settings, SharePlatform, SystemShare};
use crate::ui::animation::{CountUp, DialogTransition};
use crate::ui::effects::confetti::ConfettiSystem;
use crate::ui::widgets::Toast;

/// Main application state
pub struct App {
    /// Core infrastructure (settings, injected platform capabilities)
    pub core: CoreState,
    /// UI state (modal, animations, toast)
    pub ui: UiState,
}

/// Core infrastructure and services
pub struct CoreState {
    pub settings: Settings,
    /// Injected share capability; swapped for a fake in tests
    pub share: Arc<dyn SharePlatform>,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            share: Arc::new(SystemShare),
        }
    }
}

/// UI view state
pub struct UiState {
    pub modal: ModalState,
    pub confetti: ConfettiSystem,
    pub counter: CountUp,
    pub toast: Option<Toast>,
    pub toast_visible: bool,
}

impl UiState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            modal: ModalState::new(),
            confetti: ConfettiSystem::new(),
            counter: CountUp::new(
                settings.milestone.start_amount,
                settings.milestone.goal_amount,
            )
            .duration_secs(settings.milestone.count_duration_secs)
            .prefix("$"),
            toast: None,
            toast_visible: false,
        }
    }

    /// Check if anything needs per-frame updates right now
    pub fn has_active_animations(&self, now: Instant) -> bool {
        self.modal.transition.is_animating()
            || (self.modal.open && self.counter.is_running(now))
            || self.confetti.has_particles()
    }
}

/// Celebration dialog state
pub struct ModalState {
    /// Visibility flag; all changes flow through the owning update handlers
    pub open: bool,
    /// Confetti trigger token. Monotonically non-decreasing while the modal
    /// is open; reset to zero on close.
    pub confetti_trigger: u64,
    /// Bumped on every open so arm tasks from a previous open are dropped
    pub open_generation: u64,
    pub transition: DialogTransition,
}

impl ModalState {
    pub fn new() -> Self {
        Self {
            open: false,
            confetti_trigger: 0,
            open_generation: 0,
            transition: DialogTransition::new(),
        }
    }
}

impl Default for ModalState {
    fn default() -> Self {
        Self::new()
    }
}
