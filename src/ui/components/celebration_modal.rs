//! Milestone celebration dialog
//!
//! Backdrop plus two-panel dialog: the community panel on the left and the
//! animated total with the action row on the right. The whole overlay fades
//! and rises with the dialog transition progress supplied by the caller.

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, text};
use iced::{Alignment, Color, Element, Fill};

use crate::app::Message;
use crate::ui::theme;

const DIALOG_WIDTH: f32 = 920.0;
const DIALOG_HEIGHT: f32 = 540.0;
const LEFT_PANEL_WIDTH: f32 = 360.0;
/// Entrance slide distance in logical pixels.
const RISE_DISTANCE: f32 = 40.0;

/// Build the celebration dialog overlay.
///
/// `animation_progress` is the dialog transition value: 0.0 hidden,
/// 1.0 fully presented.
pub fn view(counter_label: String, animation_progress: f32) -> Element<'static, Message> {
    if animation_progress < 0.01 {
        return Space::new().height(0).into();
    }

    let opacity = animation_progress;
    let rise = RISE_DISTANCE * (1.0 - animation_progress);

    let dialog = container(
        row![left_panel(opacity), right_panel(counter_label, opacity)]
            .width(Fill)
            .height(Fill),
    )
    .width(DIALOG_WIDTH)
    .height(DIALOG_HEIGHT)
    .style(move |theme| container::Style {
        background: Some(iced::Background::Color(theme::faded(
            theme::surface(theme),
            opacity,
        ))),
        border: iced::Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        shadow: iced::Shadow {
            color: theme::shadow_color(theme),
            offset: iced::Vector::new(0.0, 12.0),
            blur_radius: 40.0,
        },
        ..Default::default()
    });

    // A press inside the dialog must never read as a backdrop press.
    let dialog = mouse_area(dialog).on_press(Message::Noop);

    // Entrance slide: the dialog rises into place as it fades in.
    let positioned = column![Space::new().height(rise), dialog].align_x(Alignment::Center);

    let backdrop = container(positioned)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(move |_theme| container::Style {
            background: Some(iced::Background::Color(Color::from_rgba(
                0.0,
                0.0,
                0.0,
                0.55 * opacity,
            ))),
            ..Default::default()
        });

    // Clicking the backdrop dismisses; opaque blocks events from reaching
    // the page underneath.
    let event_blocker = mouse_area(backdrop)
        .interaction(Interaction::Idle)
        .on_press(Message::CloseCelebration);

    opaque(event_blocker).into()
}

/// Community panel: heart, headline, avatar cluster, closing copy.
fn left_panel(opacity: f32) -> Element<'static, Message> {
    let heart = text("♥")
        .size(44)
        .color(theme::faded(Color::WHITE, opacity));

    let headline = text("Thank you,\nTabbers!")
        .size(38)
        .color(theme::faded(Color::WHITE, opacity))
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        });

    let copy = text(
        "You joined a community of people dedicated to making the world \
         better, one tab at a time.",
    )
    .size(17)
    .color(theme::faded(Color::from_rgb(0.92, 0.96, 1.0), opacity));

    let content = column![
        heart,
        Space::new().height(12),
        headline,
        Space::new().height(28),
        avatar_cluster(opacity),
        Space::new().height(28),
        copy,
    ]
    .padding(36);

    container(content)
        .width(LEFT_PANEL_WIDTH)
        .height(Fill)
        .style(move |_theme| container::Style {
            background: Some(iced::Background::Color(theme::faded(
                theme::ACCENT_BLUE,
                opacity,
            ))),
            border: iced::Border {
                radius: iced::border::Radius {
                    top_left: 16.0,
                    top_right: 0.0,
                    bottom_right: 0.0,
                    bottom_left: 16.0,
                },
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

/// Overlapping rows of colored community dots standing in for member
/// avatars.
fn avatar_cluster(opacity: f32) -> Element<'static, Message> {
    let mut rows = column![].spacing(4);
    for row_index in 0..3u32 {
        let mut dots = row![].spacing(6);
        for dot_index in 0..9u32 {
            let palette = theme::CONFETTI_PALETTE;
            let color = palette[((row_index * 9 + dot_index) % palette.len() as u32) as usize];
            let dot = container(Space::new().width(22).height(22)).style(move |_theme| {
                container::Style {
                    background: Some(iced::Background::Color(theme::faded(color, opacity))),
                    border: iced::Border {
                        radius: 11.0.into(),
                        width: 2.0,
                        color: theme::faded(Color::WHITE, opacity),
                    },
                    ..Default::default()
                }
            });
            dots = dots.push(dot);
        }
        rows = rows.push(dots);
    }
    rows.into()
}

/// Stats panel: label, animated total, impact copy and the action row.
fn right_panel(counter_label: String, opacity: f32) -> Element<'static, Message> {
    let close_btn = button(text("✕").size(20).style(|theme| text::Style {
        color: Some(theme::text_muted(theme)),
    }))
    .padding([6, 10])
    .style(|theme, status| {
        let bg = match status {
            button::Status::Hovered => theme::hover_bg(theme),
            _ => Color::TRANSPARENT,
        };
        button::Style {
            background: Some(iced::Background::Color(bg)),
            border: iced::Border {
                radius: 16.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    })
    .on_press(Message::CloseCelebration);

    let heading = text("Total raised for charity")
        .size(19)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let total = text(counter_label)
        .size(64)
        .color(theme::faded(theme::ACCENT_GREEN, opacity))
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        });

    let copy = text(
        "Every tab you opened helped! You fed children, expanded access to \
         healthcare, protected animals, and supported communities in \
         crisis. This is the power of millions of tiny actions added \
         together.",
    )
    .size(17)
    .style(|theme| text::Style {
        color: Some(theme::text_secondary(theme)),
    });

    let impact_btn = button(
        row![
            text("See Our Impact").size(16).color(Color::WHITE).font(iced::Font {
                weight: iced::font::Weight::Bold,
                ..Default::default()
            }),
            Space::new().width(8),
            text("→").size(16).color(Color::WHITE),
        ]
        .align_y(Alignment::Center),
    )
    .padding([14, 24])
    .style(theme::primary_button)
    .on_press(Message::OpenImpactPage);

    let share_btn = button(text("Share").size(16).font(iced::Font {
        weight: iced::font::Weight::Bold,
        ..Default::default()
    }))
    .padding([14, 24])
    .style(theme::secondary_button)
    .on_press(Message::Share);

    let replay_btn = button(text("🎉").size(20))
        .padding([12, 16])
        .style(|theme, status| {
            let bg = match status {
                button::Status::Hovered => theme::faded(theme::ACCENT_GREEN, 0.12),
                _ => Color::TRANSPARENT,
            };
            button::Style {
                background: Some(iced::Background::Color(bg)),
                border: iced::Border {
                    radius: 12.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .on_press(Message::ReplayConfetti);

    let actions = row![
        impact_btn,
        Space::new().width(14),
        share_btn,
        Space::new().width(14),
        replay_btn,
    ]
    .align_y(Alignment::Center);

    let content = column![
        row![Space::new().width(Fill), close_btn],
        heading,
        Space::new().height(6),
        total,
        Space::new().height(22),
        copy,
        Space::new().height(28),
        actions,
    ]
    .padding(36);

    container(content).width(Fill).into()
}
