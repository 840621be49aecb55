//! Signing screen: shows the loaded key and the file chosen for signing.

use super::{any_file_filter, choose_file, page_container, small_label, title_label};
use crate::core::{Controller, Frame, WeakController};
use crate::ui::pages::LoginPage;
use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Button, Label};
use log::info;
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub struct SignFile {
    ctx: WeakController,
    root: GtkBox,
    key_label: Label,
    file_label: Label,
    selected: Rc<RefCell<Option<PathBuf>>>,
}

impl SignFile {
    pub const NAME: &'static str = "SignFile";

    pub fn new(controller: &Controller) -> Self {
        let root = page_container();

        let title = title_label("Sign file");
        let key_label = Label::new(None);
        let file_label = small_label(NO_FILE);

        let choose_button = Button::with_label("Choose file…");
        let unload_button = Button::with_label("Unload key");

        root.append(&title);
        root.append(&key_label);
        root.append(&choose_button);
        root.append(&file_label);
        root.append(&unload_button);

        let selected = Rc::new(RefCell::new(None));

        {
            let ctx = controller.downgrade();
            let file_label = file_label.clone();
            let selected = Rc::clone(&selected);
            choose_button.connect_clicked(move |_| {
                info!("User clicked 'Choose file' button");
                let Some(controller) = ctx.upgrade() else {
                    return;
                };
                let file_label = file_label.clone();
                let selected = Rc::clone(&selected);
                choose_file(
                    &controller,
                    "Choose file to sign",
                    "_Select",
                    &[any_file_filter()],
                    move |path| {
                        info!("Selected '{}' for signing", path.display());
                        file_label.set_label(&file_description(&path));
                        *selected.borrow_mut() = Some(path);
                    },
                );
            });
        }

        {
            let ctx = controller.downgrade();
            unload_button.connect_clicked(move |_| {
                info!("User clicked 'Unload key' button - returning to login");
                if let Some(controller) = ctx.upgrade() {
                    controller.key().clear();
                }
                ctx.navigate(LoginPage::NAME);
            });
        }

        Self {
            ctx: controller.downgrade(),
            root,
            key_label,
            file_label,
            selected,
        }
    }

    pub fn root(&self) -> GtkBox {
        self.root.clone()
    }
}

const NO_FILE: &str = "No file selected";

fn file_description(path: &Path) -> String {
    match path.file_name() {
        Some(name) => format!("File: {}", name.to_string_lossy()),
        None => format!("File: {}", path.display()),
    }
}

fn key_description(loaded: Option<String>) -> String {
    match loaded {
        Some(name) => format!("Key: {}", name),
        None => "No key loaded".to_string(),
    }
}

impl Frame for SignFile {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn on_show(&self) {
        let loaded = self
            .ctx
            .upgrade()
            .and_then(|controller| controller.key().get())
            .map(|key| key.display_name());
        self.key_label.set_label(&key_description(loaded));
        self.file_label.set_label(NO_FILE);
        self.selected.borrow_mut().take();
    }
}
