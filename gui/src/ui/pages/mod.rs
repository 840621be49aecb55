//! Application screens.
//!
//! - `login`: load an existing key or start creating one
//! - `sign_file`: pick the file to sign with the loaded key
//! - `new_key`: enter the identity for a new key

pub mod login;
pub mod new_key;
pub mod sign_file;

pub use login::LoginPage;
pub use new_key::NewKey;
pub use sign_file::SignFile;

use crate::core::{Controller, FrameError};
use crate::ui::theme::SMALL_FONT_CLASS;
use gtk4::prelude::*;
use gtk4::{
    Align, Box as GtkBox, FileChooserAction, FileChooserNative, FileFilter, Label, Orientation,
    ResponseType,
};
use log::info;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

/// Build every page and stack it in the controller, in navigation order.
pub fn build_pages(controller: &Controller) -> Result<(), FrameError> {
    let login = LoginPage::new(controller);
    let root = login.root();
    controller.add_frame(Box::new(login), &root)?;

    let sign_file = SignFile::new(controller);
    let root = sign_file.root();
    controller.add_frame(Box::new(sign_file), &root)?;

    let new_key = NewKey::new(controller);
    let root = new_key.root();
    controller.add_frame(Box::new(new_key), &root)?;

    Ok(())
}

/// Vertical page container centered in the window.
fn page_container() -> GtkBox {
    let container = GtkBox::new(Orientation::Vertical, 16);
    container.set_halign(Align::Center);
    container.set_valign(Align::Center);
    container.set_margin_top(24);
    container.set_margin_bottom(24);
    container.set_margin_start(24);
    container.set_margin_end(24);
    container
}

fn title_label(text: &str) -> Label {
    let label = Label::new(None);
    label.set_markup(&format!("<b>{}</b>", gtk4::glib::markup_escape_text(text)));
    label
}

/// Wrapping label in the small font.
fn small_label(text: &str) -> Label {
    let label = Label::new(Some(text));
    label.add_css_class(SMALL_FONT_CLASS);
    label.set_wrap(true);
    label.set_justify(gtk4::Justification::Center);
    label
}

/// Show a native open dialog and pass the chosen path to `on_chosen`.
fn choose_file(
    controller: &Controller,
    title: &str,
    accept_label: &str,
    filters: &[FileFilter],
    on_chosen: impl Fn(PathBuf) + 'static,
) {
    let dialog = FileChooserNative::new(
        Some(title),
        Some(controller.window()),
        FileChooserAction::Open,
        Some(accept_label),
        Some("_Cancel"),
    );
    dialog.set_modal(true);
    for filter in filters {
        dialog.add_filter(filter);
    }

    // Native dialogs are not owned by the window; keep this one alive until it answers.
    let holder = Rc::new(RefCell::new(Some(dialog.clone())));
    dialog.connect_response(move |dialog, response| {
        if response == ResponseType::Accept {
            match dialog.file().and_then(|file| file.path()) {
                Some(path) => on_chosen(path),
                None => info!("Selected file has no local path"),
            }
        }
        dialog.destroy();
        holder.borrow_mut().take();
    });

    dialog.show();
}

/// Filter for common OpenPGP key file extensions.
fn key_file_filter() -> FileFilter {
    let filter = FileFilter::new();
    filter.set_name(Some("OpenPGP keys"));
    for pattern in ["*.asc", "*.gpg", "*.pgp", "*.key"] {
        filter.add_pattern(pattern);
    }
    filter
}

fn any_file_filter() -> FileFilter {
    let filter = FileFilter::new();
    filter.set_name(Some("All files"));
    filter.add_pattern("*");
    filter
}
