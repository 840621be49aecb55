//! Dark theme and dynamically sized fonts, applied through GTK CSS.

use crate::config::ColorScheme;
use crate::core::scaling::{self, FontSizes};
use gtk4::gdk::Display;
use gtk4::CssProvider;
use log::{info, warn};
use std::cell::Cell;

/// CSS class for widgets that use the small font.
pub const SMALL_FONT_CLASS: &str = "small";

const NORMAL_FONT_SELECTOR: &str = "window, label, button, entry";

/// Stylesheet mapping the color scheme onto the generic, label, button and
/// entry style categories.
pub fn stylesheet(colors: &ColorScheme) -> String {
    format!(
        "window, window.background, stack, box {{
    background-color: {bg};
    color: {fg};
}}

label {{
    background-color: {bg};
    color: {fg};
}}

button {{
    background-image: none;
    background-color: {button_bg};
    color: {fg};
    border: none;
    border-radius: 0;
    box-shadow: none;
    outline-width: 0;
    outline-color: {bg};
}}

button:hover,
button:active {{
    background-color: {button_active};
}}

button:active {{
    box-shadow: inset 1px 1px 2px alpha(black, 0.6);
}}

entry {{
    background-image: none;
    background-color: {entry_bg};
    color: {fg};
    caret-color: {fg};
}}
",
        bg = colors.background,
        fg = colors.foreground,
        button_bg = colors.button_background,
        button_active = colors.button_active,
        entry_bg = colors.entry_background,
    )
}

fn font_css(selector: &str, size: i32) -> String {
    format!("{} {{ font-size: {}pt; }}\n", selector, size)
}

/// Install the color theme for the whole display.
pub fn apply_theme(display: &Display, colors: &ColorScheme) {
    info!("Setting up UI theme and styling");
    let provider = CssProvider::new();
    provider.load_from_data(&stylesheet(colors));
    gtk4::style_context_add_provider_for_display(
        display,
        &provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

/// Receives the point size of one font whenever it is reconfigured.
pub trait FontSink {
    fn apply(&self, size: i32);
}

/// Font size rule held in a display-wide CSS provider.
pub struct CssFont {
    selector: String,
    provider: CssProvider,
}

impl CssFont {
    fn new(display: Option<&Display>, selector: String) -> Self {
        let provider = CssProvider::new();
        match display {
            Some(display) => gtk4::style_context_add_provider_for_display(
                display,
                &provider,
                gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
            ),
            None => warn!("No default display found - font scaling disabled"),
        }
        Self { selector, provider }
    }
}

impl FontSink for CssFont {
    fn apply(&self, size: i32) {
        self.provider.load_from_data(&font_css(&self.selector, size));
    }
}

/// A font whose point size can be changed at runtime.
pub struct DynamicFont<S: FontSink = CssFont> {
    sink: S,
    size: Cell<Option<i32>>,
}

impl<S: FontSink> DynamicFont<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            size: Cell::new(None),
        }
    }

    /// Current point size, if one has been configured.
    pub fn size(&self) -> Option<i32> {
        self.size.get()
    }

    pub fn configure(&self, size: i32) {
        self.sink.apply(size);
        self.size.set(Some(size));
    }
}

fn small_font_selector() -> String {
    format!(".{}", SMALL_FONT_CLASS)
}

/// The normal and small fonts shared by every page.
pub struct DynamicFonts<S: FontSink = CssFont> {
    pub normal: DynamicFont<S>,
    pub small: DynamicFont<S>,
}

impl DynamicFonts<CssFont> {
    pub fn new(display: Option<&Display>) -> Self {
        Self::from_sinks(
            CssFont::new(display, NORMAL_FONT_SELECTOR.to_string()),
            CssFont::new(display, small_font_selector()),
        )
    }
}

impl<S: FontSink> DynamicFonts<S> {
    pub fn from_sinks(normal: S, small: S) -> Self {
        Self {
            normal: DynamicFont::new(normal),
            small: DynamicFont::new(small),
        }
    }

    /// Configure both fonts unconditionally.
    pub fn configure(&self, normal: i32, small: i32) {
        self.normal.configure(normal);
        self.small.configure(small);
    }

    /// Startup sizing: the small font is three quarters of `font_size`,
    /// without the minimum applied by later updates.
    pub fn configure_initial(&self, font_size: i32) {
        self.configure(font_size, scaling::three_quarters(font_size));
    }

    /// Apply `sizes` unless the normal font already has that size.
    ///
    /// Returns whether the fonts changed.
    pub fn update(&self, sizes: FontSizes) -> bool {
        if self.normal.size() == Some(sizes.normal) {
            return false;
        }
        info!(
            "Updating font sizes: normal {}pt, small {}pt",
            sizes.normal, sizes.small
        );
        self.configure(sizes.normal, sizes.small);
        true
    }
}
