//! Centralized configuration and constants for the application.

use std::time::Duration;

/// Dark color scheme applied to every page.
pub struct ColorScheme {
    pub background: &'static str,
    pub foreground: &'static str,
    pub entry_background: &'static str,
    pub button_background: &'static str,
    pub button_active: &'static str,
}

/// Default color scheme.
pub const COLORS: ColorScheme = ColorScheme {
    background: "black",
    foreground: "white",
    entry_background: "#2a2a2a",
    button_background: "black",
    button_active: "#2d2d2d",
};

/// Application information constants.
pub mod app_info {
    pub const NAME: &str = "GPGap";
    pub const ID: &str = "org.gpgap.GPGap";
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const TITLE: &str = "GPGap - Air-gapped GPG";
}

/// Font scaling parameters.
pub mod scaling {
    /// Text measured in the default font to derive the scale factor.
    pub const REFERENCE_TEXT: &str = "AA";
    /// Point size the reference text width is compared against.
    pub const REFERENCE_SIZE: f64 = 22.0;
    /// Window height (px) per font point before scaling.
    pub const HEIGHT_DIVISOR: f64 = 50.0;
    pub const MIN_FONT_SIZE: i32 = 10;
    /// Used when the display reports no monitor.
    pub const FALLBACK_SCREEN: (i32, i32) = (1920, 1080);
}

/// Quiet period after the last resize before fonts are recomputed.
pub const RESIZE_DELAY: Duration = Duration::from_millis(100);

/// Executable the signing workflow delegates to.
pub const GPG_BINARY: &str = "gpg";

/// Get color scheme for the UI.
pub fn colors() -> &'static ColorScheme {
    &COLORS
}
