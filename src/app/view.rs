// src/app/view.rs
//! Application view rendering

use iced::time::Instant;
use iced::widget::{Space, container, stack};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::{components, effects, pages, widgets};

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let now = Instant::now();

        let page = pages::home::view(&self.core.settings);

        // Celebration dialog overlay (empty space if not visible)
        let modal_overlay: Element<'_, Message> = if self.ui.modal.transition.is_visible() {
            components::celebration_modal::view(
                self.ui.counter.label(now),
                self.ui.modal.transition.progress(),
            )
        } else {
            Space::new().width(0).height(0).into()
        };

        // Confetti canvas sits above everything; it never captures input
        let confetti_overlay: Element<'_, Message> = if self.ui.confetti.has_particles() {
            effects::confetti::view(&self.ui.confetti)
        } else {
            Space::new().width(0).height(0).into()
        };

        let toast_overlay: Element<'_, Message> = if self.ui.toast_visible {
            if let Some(toast) = &self.ui.toast {
                container(widgets::view_toast(toast))
                    .width(Fill)
                    .padding(20)
                    .align_x(Alignment::Center)
                    .into()
            } else {
                Space::new().width(0).height(0).into()
            }
        } else {
            Space::new().width(0).height(0).into()
        };

        // Consistent stack structure regardless of which overlays are live
        stack![page, modal_overlay, confetti_overlay, toast_overlay]
            .width(Fill)
            .height(Fill)
            .into()
    }
}
