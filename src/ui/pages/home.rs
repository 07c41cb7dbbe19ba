//! Landing page
//!
//! Owns the celebration's visibility: the modal itself only requests a
//! close, and reopening always flows through this page's button.

use iced::widget::{Space, button, checkbox, column, container, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::features::Settings;
use crate::ui::theme;
use crate::utils::format_grouped;

/// Build the landing page view.
pub fn view<'a>(settings: &Settings) -> Element<'a, Message> {
    let goal = format_grouped(settings.milestone.goal_amount as i64);

    let headline = text("We did it!")
        .size(44)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let subline = text(format!("${goal} raised for charity."))
        .size(20)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let open_btn = button(
        text("Relive the celebration")
            .size(16)
            .font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            }),
    )
    .padding([14, 28])
    .style(theme::primary_button)
    .on_press(Message::OpenCelebration);

    let dark_mode = checkbox(settings.display.dark_mode)
        .label("Dark mode")
        .on_toggle(Message::UpdateDarkMode)
        .text_size(14)
        .spacing(8);

    let reduced_motion = checkbox(settings.display.reduced_motion)
        .label("Reduce motion")
        .on_toggle(Message::UpdateReducedMotion)
        .text_size(14)
        .spacing(8);

    let content = column![
        headline,
        Space::new().height(10),
        subline,
        Space::new().height(28),
        open_btn,
        Space::new().height(40),
        dark_mode,
        Space::new().height(8),
        reduced_motion,
    ]
    .align_x(Alignment::Center);

    container(content)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(theme::main_background)
        .into()
}
