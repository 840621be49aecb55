//! Identity form for a new key.

use super::{page_container, small_label, title_label};
use crate::core::key::UserId;
use crate::core::{Controller, Frame};
use crate::ui::pages::LoginPage;
use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Button, Entry, Label};
use log::info;

pub struct NewKey {
    root: GtkBox,
    name_entry: Entry,
    email_entry: Entry,
    preview: Label,
}

impl NewKey {
    pub const NAME: &'static str = "NewKey";

    pub fn new(controller: &Controller) -> Self {
        let root = page_container();

        let title = title_label("New key");
        let name_entry = Entry::new();
        name_entry.set_placeholder_text(Some("Name"));
        let email_entry = Entry::new();
        email_entry.set_placeholder_text(Some("Email"));
        let preview = small_label("");
        let back_button = Button::with_label("Back");

        root.append(&title);
        root.append(&name_entry);
        root.append(&email_entry);
        root.append(&preview);
        root.append(&back_button);

        for entry in [&name_entry, &email_entry] {
            let name_entry = name_entry.clone();
            let email_entry = email_entry.clone();
            let preview = preview.clone();
            entry.connect_changed(move |_| {
                preview.set_label(&user_id_preview(&name_entry.text(), &email_entry.text()));
            });
        }

        {
            let ctx = controller.downgrade();
            back_button.connect_clicked(move |_| {
                info!("User clicked 'Back' button - returning to login");
                ctx.navigate(LoginPage::NAME);
            });
        }

        Self {
            root,
            name_entry,
            email_entry,
            preview,
        }
    }

    pub fn root(&self) -> GtkBox {
        self.root.clone()
    }
}

/// Text shown under the form: the composed user ID or what is wrong.
fn user_id_preview(name: &str, email: &str) -> String {
    if name.trim().is_empty() && email.trim().is_empty() {
        return String::new();
    }
    match UserId::new(name, email) {
        Ok(user_id) => user_id.as_str().to_string(),
        Err(e) => e.to_string(),
    }
}

impl Frame for NewKey {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn on_show(&self) {
        self.name_entry.set_text("");
        self.email_entry.set_text("");
        self.preview.set_label("");
        self.name_entry.grab_focus();
    }
}
