// src/app/update/modal.rs
//! Celebration dialog message handlers

use std::time::Duration;

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;

/// Entrance delay before the confetti sequence starts.
pub const CONFETTI_DELAY: Duration = Duration::from_millis(300);

impl App {
    /// Handle modal open/close/replay messages
    pub fn handle_modal(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::OpenCelebration => {
                if self.ui.modal.open {
                    return Some(Task::none());
                }
                self.ui.modal.open = true;
                self.ui.modal.open_generation += 1;
                self.ui.modal.transition.start();
                self.ui.counter.restart();
                tracing::info!("celebration opened");

                // Confetti fires strictly after the entrance delay; the
                // generation lets a close-then-reopen drop the stale arm.
                let generation = self.ui.modal.open_generation;
                Some(Task::perform(
                    async move {
                        tokio::time::sleep(CONFETTI_DELAY).await;
                        generation
                    },
                    Message::ConfettiArmed,
                ))
            }

            Message::CloseCelebration => {
                if !self.ui.modal.open {
                    return Some(Task::none());
                }
                self.ui.modal.open = false;
                self.ui.modal.confetti_trigger = 0;
                self.ui.modal.transition.dismiss();
                self.ui.confetti.cancel_schedule();
                tracing::info!("celebration closed");
                Some(Task::none())
            }

            Message::ReplayConfetti => {
                if !self.ui.modal.open {
                    return Some(Task::none());
                }
                self.ui.modal.confetti_trigger += 1;
                self.start_confetti(Instant::now());
                Some(Task::none())
            }

            Message::Noop => Some(Task::none()),

            _ => None,
        }
    }

    /// Fire a burst sequence unless reduced motion suppresses it.
    pub(crate) fn start_confetti(&mut self, now: Instant) {
        if self.core.settings.display.reduced_motion {
            tracing::debug!("reduced motion enabled, skipping confetti bursts");
            return;
        }
        self.ui.confetti.trigger(now);
    }
}
