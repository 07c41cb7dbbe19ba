//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific
//! functionality. Features do not depend on UI components.

pub mod settings;
pub mod share;

pub use settings::Settings;
pub use share::{SharePlatform, ShareRequest, SystemShare};
