//! Application setup and initialization functionality.

use crate::config::{self, app_info, scaling as scale_config, RESIZE_DELAY};
use crate::core::debounce::{Debouncer, GlibScheduler};
use crate::core::scaling::{self, FontSizes, WindowGeometry};
use crate::core::{system, Controller};
use crate::ui::pages::{self, LoginPage};
use crate::ui::theme::{self, DynamicFonts};
use gtk4::gdk::{Display, Monitor};
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, Stack, StackTransitionType};
use log::{info, warn};
use std::rc::Rc;

/// Window properties that change when the user or window manager resizes it.
const RESIZE_PROPERTIES: [&str; 4] = [
    "default-width",
    "default-height",
    "maximized",
    "fullscreened",
];

/// Initialize and set up main application UI.
pub fn setup_application_ui(app: &Application) {
    info!("Initializing application components");

    let display = Display::default();
    match &display {
        Some(display) => theme::apply_theme(display, config::colors()),
        None => warn!("No default display found - UI theming may not work properly"),
    }

    let (screen_width, screen_height) = screen_size(display.as_ref());
    let geometry = WindowGeometry::for_screen(screen_width, screen_height);
    info!(
        "Screen {}x{}, window {}x{} (minimum {}x{})",
        screen_width,
        screen_height,
        geometry.width,
        geometry.height,
        geometry.min_width,
        geometry.min_height
    );

    let stack = Stack::new();
    stack.set_transition_type(StackTransitionType::None);
    stack.set_hexpand(true);
    stack.set_vexpand(true);

    let window = create_main_window(app, &geometry, &stack);

    // Measured before any font size override is installed.
    let font_scale = measure_font_scale(&window);
    info!("Font scale factor: {:.2}", font_scale);
    let fonts = Rc::new(DynamicFonts::new(display.as_ref()));

    let controller = Controller::new(window.clone(), stack);
    pages::build_pages(&controller).expect("Failed to build pages");
    info!("Pages ready: {}", controller.page_names().join(", "));

    info!("Setting initial view to login page");
    controller
        .show_frame(LoginPage::NAME)
        .expect("Login page must be registered");

    let font_size = scaling::font_size_for_height(window.height(), font_scale);
    fonts.configure_initial(font_size);

    setup_resize_handling(&window, font_scale, fonts);
    setup_close_handler(&window, &controller);

    window.present();

    info!("Performing system environment checks");
    system::check_gpg_availability();
    info!("{} application startup complete", app_info::NAME);
}

/// Create main application window.
fn create_main_window(
    app: &Application,
    geometry: &WindowGeometry,
    stack: &Stack,
) -> ApplicationWindow {
    let window = ApplicationWindow::builder()
        .application(app)
        .title(app_info::TITLE)
        .default_width(geometry.width)
        .default_height(geometry.height)
        .child(stack)
        .build();
    window.set_size_request(geometry.min_width, geometry.min_height);
    window
}

/// Size of the first monitor, or a common default when none is reported.
fn screen_size(display: Option<&Display>) -> (i32, i32) {
    display
        .and_then(|display| display.monitors().item(0))
        .and_downcast::<Monitor>()
        .map(|monitor| {
            let area = monitor.geometry();
            (area.width(), area.height())
        })
        .unwrap_or_else(|| {
            warn!("No monitor reported - assuming a 1920x1080 screen");
            scale_config::FALLBACK_SCREEN
        })
}

/// Pixel width of the reference text in the default font, as a scale factor.
fn measure_font_scale(window: &ApplicationWindow) -> f64 {
    let layout = window.create_pango_layout(Some(scale_config::REFERENCE_TEXT));
    let (width, _) = layout.pixel_size();
    scaling::font_scale(f64::from(width))
}

/// Recompute font sizes once resizing has settled.
fn setup_resize_handling(window: &ApplicationWindow, font_scale: f64, fonts: Rc<DynamicFonts>) {
    let debouncer = {
        let window = window.downgrade();
        Rc::new(Debouncer::new(GlibScheduler, RESIZE_DELAY, move || {
            let Some(window) = window.upgrade() else {
                return;
            };
            fonts.update(FontSizes::for_height(window.height(), font_scale));
        }))
    };

    // Only the window's own properties are watched, so child widgets resizing
    // never reach the debouncer.
    for property in RESIZE_PROPERTIES {
        let debouncer = Rc::clone(&debouncer);
        window.connect_notify_local(Some(property), move |_, _| debouncer.trigger());
    }

    // The first real height is known only once the window is mapped.
    window.connect_map(move |_| debouncer.trigger());
}

/// Forget the loaded key when the window closes.
///
/// The handler owns the controller, so pages stay reachable for as long as
/// the window exists.
fn setup_close_handler(window: &ApplicationWindow, controller: &Controller) {
    let controller = controller.clone();
    window.connect_close_request(move |_| {
        info!(
            "Main window closing on page '{}'",
            controller.visible_frame().unwrap_or("none")
        );
        if controller.key().clear().is_some() {
            info!("Loaded key released");
        }
        glib::Propagation::Proceed
    });
}
