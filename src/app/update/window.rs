// src/app/update/window.rs
//! Window and keyboard message handlers

use iced::Task;
use iced::keyboard::{Key, key::Named};

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::RequestClose => Some(iced::exit()),

            Message::KeyPressed(key, _modifiers) => {
                if matches!(key, Key::Named(Named::Escape)) && self.ui.modal.open {
                    return Some(Task::done(Message::CloseCelebration));
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
