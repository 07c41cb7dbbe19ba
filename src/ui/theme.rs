//! Theme system for the celebration overlay
//! Supports both dark and light modes with a consistent color palette

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x0e1116);
    pub const SURFACE: Color = color!(0x1a1f27);
    pub const SURFACE_ELEVATED: Color = color!(0x232a34);
    pub const BORDER: Color = color!(0x2e3643);
    pub const TEXT_MUTED: Color = color!(0x8b93a1);
    pub const TEXT_SECONDARY: Color = color!(0xb6bdc9);
    pub const TEXT_PRIMARY: Color = color!(0xf5f7fa);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xf1f5f9);
    pub const SURFACE: Color = color!(0xffffff);
    pub const SURFACE_ELEVATED: Color = color!(0xffffff);
    pub const BORDER: Color = color!(0xe2e8f0);
    pub const TEXT_MUTED: Color = color!(0x94a3b8);
    pub const TEXT_SECONDARY: Color = color!(0x475569);
    pub const TEXT_PRIMARY: Color = color!(0x1e293b);
}

// Brand accents, shared by both modes. The four confetti colors come from
// the campaign palette.
pub const ACCENT_BLUE: Color = color!(0x5094fb);
pub const ACCENT_GREEN: Color = color!(0x29be91);
pub const ACCENT_GREEN_DARK: Color = color!(0x22a07a);
pub const ACCENT_PINK: Color = color!(0xEC4899);
pub const ACCENT_AMBER: Color = color!(0xF59E0B);

/// Colors drawn by confetti bursts.
pub const CONFETTI_PALETTE: [Color; 4] = [ACCENT_BLUE, ACCENT_PINK, ACCENT_AMBER, ACCENT_GREEN];

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get elevated surface color (toasts, floating panels)
pub fn surface_elevated(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE_ELEVATED
    } else {
        light::SURFACE_ELEVATED
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Hover background (subtle overlay on interactive elements)
pub fn hover_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.08)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.05)
    }
}

/// Shadow color for floating surfaces
pub fn shadow_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.5)
    } else {
        Color::from_rgba(0.1, 0.12, 0.16, 0.2)
    }
}

/// Multiply a color's alpha, for widgets fading in with a dialog.
pub fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

// ============================================================================
// Container / button styles
// ============================================================================

/// Main window background style
pub fn main_background(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        ..Default::default()
    }
}

/// Primary call-to-action button (filled, accent green)
pub fn primary_button(theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => ACCENT_GREEN_DARK,
        _ => ACCENT_GREEN,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: Color::WHITE,
        border: Border {
            radius: 12.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: shadow_color(theme),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Secondary button (outlined surface)
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => hover_bg(theme),
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: text_secondary(theme),
        border: Border {
            radius: 12.0.into(),
            width: 2.0,
            color: border_color(theme),
        },
        ..Default::default()
    }
}
