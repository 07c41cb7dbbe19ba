// src/app/update/confetti.rs
//! Confetti trigger and scheduler tick handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle confetti-related messages
    pub fn handle_confetti(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ConfettiArmed(generation) => {
                // Only the arm from the current open counts; one from a
                // previous open (or after a close) is dropped.
                if self.ui.modal.open && *generation == self.ui.modal.open_generation {
                    self.ui.modal.confetti_trigger += 1;
                    self.start_confetti(Instant::now());
                } else {
                    tracing::debug!(generation = *generation, "dropping stale confetti arm");
                }
                Some(Task::none())
            }

            Message::ConfettiTick => {
                self.ui.confetti.burst_tick(Instant::now());
                Some(Task::none())
            }

            _ => None,
        }
    }
}
