//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::Message;
pub use state::{App, CoreState, ModalState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = crate::features::Settings::load();
        let ui = UiState::new(&settings);
        let core = CoreState::new(settings);
        let app = Self { core, ui };

        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(1100.0, 720.0),
            exit_on_close_request: false,
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        // The celebration is the point of the app: present it on launch.
        let init_task = Task::batch([
            open_window.discard(),
            Task::done(Message::OpenCelebration),
        ]);

        (app, init_task)
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        "Jubilee - $2 Million Raised".to_string()
    }

    /// Subscriptions for animations, confetti scheduling, keyboard events,
    /// and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;
        use iced::time::Instant;

        let now = Instant::now();

        // 1. Per-frame animation updates, only while something is moving
        let animation_sub = if self.ui.has_active_animations(now) {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 2. Confetti scheduler (400ms). Dropping this subscription when the
        //    sequence ends IS the timer cancellation; at most one exists.
        let confetti_sub = if self.ui.confetti.is_scheduled() {
            iced::time::every(crate::ui::effects::confetti::BURST_INTERVAL)
                .map(|_| Message::ConfettiTick)
        } else {
            iced::Subscription::none()
        };

        // 3. Keyboard events (Escape dismisses the dialog)
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // 4. Window close
        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);

        iced::Subscription::batch([
            animation_sub,
            confetti_sub,
            keyboard_sub,
            close_request_sub,
        ])
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_frame_subscription(
        transition_animating: bool,
        counter_running: bool,
        has_particles: bool,
    ) -> bool {
        transition_animating || counter_running || has_particles
    }

    pub fn needs_burst_subscription(schedule_active: bool) -> bool {
        schedule_active
    }

    pub fn subscription_decisions(
        transition_animating: bool,
        counter_running: bool,
        has_particles: bool,
        schedule_active: bool,
    ) -> (bool, bool) {
        (
            needs_frame_subscription(transition_animating, counter_running, has_particles),
            needs_burst_subscription(schedule_active),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::features::share::{ShareError, SharePlatform, ShareRequest};
    use crate::features::Settings;

    /// Share capability stand-in driving the three outcome paths.
    struct FakeShare {
        available: bool,
        fail: bool,
    }

    impl SharePlatform for FakeShare {
        fn is_available(&self) -> bool {
            self.available
        }

        fn share(&self, _request: &ShareRequest) -> Result<(), ShareError> {
            if self.fail {
                Err(ShareError::Failed("user cancelled".to_string()))
            } else {
                Ok(())
            }
        }
    }

    fn test_app() -> App {
        let settings = Settings::default();
        let ui = UiState::new(&settings);
        let core = CoreState::new(settings);
        App { core, ui }
    }

    fn test_app_with_share(available: bool, fail: bool) -> App {
        let mut app = test_app();
        app.core.share = Arc::new(FakeShare { available, fail });
        app
    }

    fn current_arm(app: &App) -> Message {
        Message::ConfettiArmed(app.ui.modal.open_generation)
    }

    mod property_trigger_token {
        use super::*;

        #[test]
        fn open_does_not_trigger_before_the_arm() {
            let mut app = test_app();
            let _ = app.update(Message::OpenCelebration);
            assert!(app.ui.modal.open);
            assert_eq!(app.ui.modal.confetti_trigger, 0);
            assert!(!app.ui.confetti.is_scheduled());
        }

        #[test]
        fn arm_increments_the_token_exactly_once() {
            let mut app = test_app();
            let _ = app.update(Message::OpenCelebration);
            let arm = current_arm(&app);
            let _ = app.update(arm);
            assert_eq!(app.ui.modal.confetti_trigger, 1);
            assert!(app.ui.confetti.is_scheduled());
            assert!(app.ui.confetti.has_particles());
        }

        #[test]
        fn stale_arm_from_a_previous_open_is_dropped() {
            let mut app = test_app();
            let _ = app.update(Message::OpenCelebration);
            let stale = current_arm(&app);
            let _ = app.update(Message::CloseCelebration);
            let _ = app.update(Message::OpenCelebration);

            let _ = app.update(stale);
            assert_eq!(app.ui.modal.confetti_trigger, 0);
            assert!(!app.ui.confetti.is_scheduled());

            let fresh = current_arm(&app);
            let _ = app.update(fresh);
            assert_eq!(app.ui.modal.confetti_trigger, 1);
        }

        #[test]
        fn arm_after_close_is_dropped() {
            let mut app = test_app();
            let _ = app.update(Message::OpenCelebration);
            let arm = current_arm(&app);
            let _ = app.update(Message::CloseCelebration);
            let _ = app.update(arm);
            assert_eq!(app.ui.modal.confetti_trigger, 0);
            assert!(!app.ui.confetti.is_scheduled());
        }

        #[test]
        fn close_resets_the_token_and_cancels_the_schedule() {
            let mut app = test_app();
            let _ = app.update(Message::OpenCelebration);
            let arm = current_arm(&app);
            let _ = app.update(arm);
            assert_eq!(app.ui.modal.confetti_trigger, 1);

            let _ = app.update(Message::CloseCelebration);
            assert!(!app.ui.modal.open);
            assert_eq!(app.ui.modal.confetti_trigger, 0);
            assert!(!app.ui.confetti.is_scheduled());
        }

        #[test]
        fn replay_increments_the_token_each_time() {
            let mut app = test_app();
            let _ = app.update(Message::OpenCelebration);
            let arm = current_arm(&app);
            let _ = app.update(arm);

            let _ = app.update(Message::ReplayConfetti);
            let _ = app.update(Message::ReplayConfetti);
            assert_eq!(app.ui.modal.confetti_trigger, 3);
            assert!(app.ui.confetti.is_scheduled());
        }

        #[test]
        fn replay_is_ignored_while_closed() {
            let mut app = test_app();
            let _ = app.update(Message::ReplayConfetti);
            assert_eq!(app.ui.modal.confetti_trigger, 0);
            assert!(!app.ui.confetti.is_scheduled());
        }

        #[test]
        fn token_is_monotonic_while_open() {
            let mut app = test_app();
            let _ = app.update(Message::OpenCelebration);
            let arm = current_arm(&app);
            let _ = app.update(arm);

            let mut last = app.ui.modal.confetti_trigger;
            for _ in 0..5 {
                let _ = app.update(Message::ReplayConfetti);
                assert!(app.ui.modal.confetti_trigger > last);
                last = app.ui.modal.confetti_trigger;
            }
        }
    }

    mod property_modal_state {
        use super::*;
        use crate::ui::animation::Phase;

        #[test]
        fn open_and_close_drive_the_transition() {
            let mut app = test_app();
            assert_eq!(app.ui.modal.transition.phase(), Phase::Closed);

            let _ = app.update(Message::OpenCelebration);
            assert!(app.ui.modal.transition.is_open());
            assert!(app.ui.modal.transition.is_visible());

            let _ = app.update(Message::CloseCelebration);
            assert!(!app.ui.modal.transition.is_open());
        }

        #[test]
        fn reopening_bumps_the_generation() {
            let mut app = test_app();
            let _ = app.update(Message::OpenCelebration);
            let first = app.ui.modal.open_generation;
            let _ = app.update(Message::CloseCelebration);
            let _ = app.update(Message::OpenCelebration);
            assert!(app.ui.modal.open_generation > first);
        }

        #[test]
        fn duplicate_open_is_a_no_op() {
            let mut app = test_app();
            let _ = app.update(Message::OpenCelebration);
            let generation = app.ui.modal.open_generation;
            let _ = app.update(Message::OpenCelebration);
            assert_eq!(app.ui.modal.open_generation, generation);
        }
    }

    mod property_reduced_motion {
        use super::*;

        #[test]
        fn reduced_motion_suppresses_bursts_but_not_the_protocol() {
            let mut app = test_app();
            app.core.settings.display.reduced_motion = true;

            let _ = app.update(Message::OpenCelebration);
            let arm = current_arm(&app);
            let _ = app.update(arm);

            // The token still advances; only the visual layer is skipped.
            assert_eq!(app.ui.modal.confetti_trigger, 1);
            assert!(!app.ui.confetti.is_scheduled());
            assert!(!app.ui.confetti.has_particles());
        }
    }

    mod property_share_fallback {
        use super::*;

        #[test]
        fn unavailable_share_shows_the_acknowledgment_toast() {
            let mut app = test_app_with_share(false, false);
            let _ = app.update(Message::Share);
            assert!(app.ui.toast_visible);
            let toast = app.ui.toast.as_ref().unwrap();
            assert!(toast.message.contains("Thanks"));
        }

        #[test]
        fn available_share_shows_no_toast() {
            let mut app = test_app_with_share(true, false);
            let _ = app.update(Message::Share);
            assert!(!app.ui.toast_visible);
            assert!(app.ui.toast.is_none());
        }

        #[test]
        fn share_failure_is_swallowed() {
            let mut app = test_app_with_share(true, true);
            let _ = app.update(Message::Share);
            let _ = app.update(Message::ShareCompleted(Err("user cancelled".to_string())));
            // No user-visible error surface: no toast, modal state untouched.
            assert!(!app.ui.toast_visible);
        }

        #[test]
        fn hide_toast_clears_visibility() {
            let mut app = test_app_with_share(false, false);
            let _ = app.update(Message::Share);
            let _ = app.update(Message::HideToast);
            assert!(!app.ui.toast_visible);
        }
    }

    mod property_subscription_gating {
        use super::subscription_logic::*;
        use super::*;

        #[test]
        fn idle_app_needs_no_timers() {
            let (frames, bursts) = subscription_decisions(false, false, false, false);
            assert!(!frames, "no frame subscription while idle");
            assert!(!bursts, "no burst subscription while idle");
        }

        #[test]
        fn any_animation_source_keeps_frames_alive() {
            for (transition, counter, particles) in [
                (true, false, false),
                (false, true, false),
                (false, false, true),
                (true, true, true),
            ] {
                let (frames, _) = subscription_decisions(transition, counter, particles, false);
                assert!(frames, "frames required for ({transition}, {counter}, {particles})");
            }
        }

        #[test]
        fn burst_subscription_follows_the_schedule_only() {
            for (transition, counter, particles) in [
                (false, false, false),
                (true, true, true),
            ] {
                let (_, bursts) = subscription_decisions(transition, counter, particles, true);
                assert!(bursts);
                let (_, bursts) = subscription_decisions(transition, counter, particles, false);
                assert!(!bursts);
            }
        }

        #[test]
        fn fresh_app_state_is_idle() {
            let app = test_app();
            let now = iced::time::Instant::now();
            assert!(!app.ui.has_active_animations(now));
            assert!(!app.ui.confetti.is_scheduled());
        }

        #[test]
        fn open_modal_needs_frames() {
            let mut app = test_app();
            let _ = app.update(Message::OpenCelebration);
            let now = iced::time::Instant::now();
            assert!(app.ui.has_active_animations(now));
        }
    }
}
