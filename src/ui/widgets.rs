//! Reusable UI widgets - composable components without business logic
//!
//! Widgets must not import from `crate::app`; they use generic Message
//! types so components can reuse them freely.

mod toast;

pub use toast::{Toast, ToastStyle, view_toast};
