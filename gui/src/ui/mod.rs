//! User Interface handling functionality.
//!
//! This module contains all UI-related components organized by functionality:
//! - `app`: Application setup and initialization
//! - `theme`: Color theme and dynamic fonts
//! - `pages`: Login, signing and key creation screens

pub mod app;
pub mod pages;
pub mod theme;

// Re-export commonly used items
pub use app::setup_application_ui;
