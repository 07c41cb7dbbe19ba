//! UI module for the celebration overlay
//!
//! # Architecture
//!
//! - **Widgets** (`widgets`): composable UI patterns without business logic
//! - **Components** (`components`): business-specific UI with Message handling
//! - **Effects** (`effects`): canvas layers drawn over the application
//! - **Animation** (`animation`): time-based animation state

pub mod animation;
pub mod components;
pub mod effects;
pub mod pages;
pub mod theme;
pub mod widgets;
