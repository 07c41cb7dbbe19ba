//! Toast notification widget
//!
//! Minimalist floating notification: dark surface, thin accent bar, icon.

use iced::widget::{Space, container, row, text};
use iced::{Alignment, Element, Padding};

use crate::ui::theme;

/// Toast notification style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Success,
    Info,
}

impl ToastStyle {
    /// Accent color for this style (icon and indicator only)
    pub fn accent_color(&self) -> iced::Color {
        match self {
            ToastStyle::Success => theme::ACCENT_GREEN,
            ToastStyle::Info => theme::ACCENT_BLUE,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastStyle::Success => "✓",
            ToastStyle::Info => "ℹ",
        }
    }
}

/// Toast notification data
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub style: ToastStyle,
    pub visible: bool,
}

impl Toast {
    pub fn new(message: impl Into<String>, style: ToastStyle) -> Self {
        Self {
            message: message.into(),
            style,
            visible: true,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Success)
    }

    #[allow(dead_code)]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Info)
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// Build a toast notification widget
pub fn view_toast<'a, Message: 'a>(toast: &Toast) -> Element<'a, Message> {
    if !toast.visible {
        return Space::new().width(0).height(0).into();
    }

    let accent_color = toast.style.accent_color();
    let icon = toast.style.icon();
    let message = toast.message.clone();

    // Thin vertical accent bar on the left
    let accent_bar = container(Space::new().width(3).height(20)).style(move |_theme| {
        iced::widget::container::Style {
            background: Some(iced::Background::Color(accent_color)),
            border: iced::Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    let icon_widget = text(icon).size(14).color(accent_color);

    let message_widget = text(message).size(13).style(|theme| text::Style {
        color: Some(theme::text_primary(theme)),
    });

    let content = row![
        accent_bar,
        Space::new().width(12),
        icon_widget,
        Space::new().width(10),
        message_widget,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(14.0).left(12.0).right(20.0));

    container(content)
        .style(|theme| iced::widget::container::Style {
            background: Some(iced::Background::Color(theme::surface_elevated(theme))),
            border: iced::Border {
                radius: 8.0.into(),
                width: 1.0,
                color: theme::border_color(theme),
            },
            shadow: iced::Shadow {
                color: theme::shadow_color(theme),
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            ..Default::default()
        })
        .into()
}
