// src/app/update/animation.rs
//! Per-frame animation handler

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Advance every time-based animation by one frame
    pub fn handle_animation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick => {
                let now = Instant::now();
                self.ui.modal.transition.tick(now);
                if self.ui.modal.open {
                    self.ui.counter.tick(now);
                }
                self.ui.confetti.step(now);
                Some(Task::none())
            }

            _ => None,
        }
    }
}
