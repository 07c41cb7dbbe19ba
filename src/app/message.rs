//! Application messages

use iced::keyboard::{Key, Modifiers};

/// Application messages
#[derive(Clone)]
pub enum Message {
    /// No-op message for event interception (modal content clicks)
    Noop,

    // ============ Celebration modal ============
    /// Open the celebration dialog
    OpenCelebration,
    /// Close the celebration dialog (backdrop, close button, Escape)
    CloseCelebration,
    /// "Throw confetti again" pressed
    ReplayConfetti,
    /// The 300ms entrance delay elapsed for the given open generation
    ConfettiArmed(u64),

    // ============ Actions ============
    /// Share button pressed
    Share,
    /// Platform share invocation finished
    ShareCompleted(Result<(), String>),
    /// "See Our Impact" pressed
    OpenImpactPage,
    /// Hide the acknowledgment toast
    HideToast,

    // ============ Settings ============
    UpdateDarkMode(bool),
    UpdateReducedMotion(bool),

    // ============ Timers & input ============
    /// Per-frame animation update (vsync rate, only while animating)
    AnimationTick,
    /// 400ms confetti scheduler tick (only while a sequence is running)
    ConfettiTick,
    /// Keyboard input
    KeyPressed(Key, Modifiers),
    /// Window close requested
    RequestClose,
}

// Manual Debug implementation keeps high-frequency tick variants cheap to
// format.
impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => {
                write!(f, concat!($name, "({})"), format_args!($($arg)*))
            };
        }

        match self {
            Self::AnimationTick => simple!("AnimationTick"),
            Self::ConfettiTick => simple!("ConfettiTick"),
            Self::Noop => simple!("Noop"),

            Self::OpenCelebration => simple!("OpenCelebration"),
            Self::CloseCelebration => simple!("CloseCelebration"),
            Self::ReplayConfetti => simple!("ReplayConfetti"),
            Self::ConfettiArmed(generation) => simple!("ConfettiArmed", "{generation}"),

            Self::Share => simple!("Share"),
            Self::ShareCompleted(result) => simple!("ShareCompleted", "ok={}", result.is_ok()),
            Self::OpenImpactPage => simple!("OpenImpactPage"),
            Self::HideToast => simple!("HideToast"),

            Self::UpdateDarkMode(on) => simple!("UpdateDarkMode", "{on}"),
            Self::UpdateReducedMotion(on) => simple!("UpdateReducedMotion", "{on}"),

            Self::KeyPressed(key, _) => simple!("KeyPressed", "{key:?}"),
            Self::RequestClose => simple!("RequestClose"),
        }
    }
}
