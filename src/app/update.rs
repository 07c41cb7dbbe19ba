//! Message update handlers - thin dispatcher delegating to submodules

mod animation;
mod confetti;
mod modal;
mod settings;
mod share;
mod window;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_modal(&message) {
            return task;
        }
        if let Some(task) = self.handle_confetti(&message) {
            return task;
        }
        if let Some(task) = self.handle_share(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }
        if let Some(task) = self.handle_animation(&message) {
            return task;
        }

        Task::none()
    }
}
