use gtk4::prelude::*;
use gtk4::{glib, Application};
use log::{info, LevelFilter};

mod config;
mod core;
mod ui;

use config::app_info;

fn main() -> glib::ExitCode {
    // Initialize logger
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .expect("Failed to initialize logger");

    info!("Starting {} v{}", app_info::NAME, app_info::VERSION);
    info!("Application ID: {}", app_info::ID);

    if crate::core::system::configure_dpi() {
        info!("Process DPI awareness enabled");
    }

    let app = Application::builder()
        .application_id(app_info::ID)
        .build();

    app.connect_activate(ui::setup_application_ui);

    app.run()
}
