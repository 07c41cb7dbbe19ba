// src/app/update/settings.rs
//! Settings message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle settings messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::UpdateDarkMode(on) => {
                self.core.settings.display.dark_mode = *on;
                self.save_settings();
                Some(Task::none())
            }

            Message::UpdateReducedMotion(on) => {
                self.core.settings.display.reduced_motion = *on;
                self.save_settings();
                Some(Task::none())
            }

            _ => None,
        }
    }

    fn save_settings(&self) {
        if let Err(e) = self.core.settings.save() {
            tracing::warn!("failed to save settings: {e}");
        }
    }
}
