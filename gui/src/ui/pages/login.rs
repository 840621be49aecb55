//! Entry screen: load a key or go create one.

use super::{any_file_filter, choose_file, key_file_filter, page_container, small_label, title_label};
use crate::config::app_info;
use crate::core::key::KeyMaterial;
use crate::core::{Controller, Frame, WeakController};
use crate::ui::pages::{NewKey, SignFile};
use gtk4::prelude::*;
use gtk4::{Box as GtkBox, Button, Label};
use log::{error, info, warn};
use std::path::Path;

pub struct LoginPage {
    root: GtkBox,
    status: Label,
}

impl LoginPage {
    pub const NAME: &'static str = "LoginPage";

    pub fn new(controller: &Controller) -> Self {
        let root = page_container();

        let title = title_label(app_info::NAME);
        let subtitle = small_label("Air-gapped key management and file signing");
        let status = small_label("");

        let load_button = Button::with_label("Load key…");
        let new_button = Button::with_label("New key");

        root.append(&title);
        root.append(&subtitle);
        root.append(&load_button);
        root.append(&new_button);
        root.append(&status);

        {
            let ctx = controller.downgrade();
            let status = status.clone();
            load_button.connect_clicked(move |_| {
                info!("User clicked 'Load key' button");
                let Some(controller) = ctx.upgrade() else {
                    return;
                };
                let ctx = ctx.clone();
                let status = status.clone();
                choose_file(
                    &controller,
                    "Load key",
                    "_Load",
                    &[key_file_filter(), any_file_filter()],
                    move |path| load_key(&ctx, &status, &path),
                );
            });
        }

        {
            let ctx = controller.downgrade();
            new_button.connect_clicked(move |_| {
                info!("User clicked 'New key' button - navigating to key creation");
                ctx.navigate(NewKey::NAME);
            });
        }

        Self { root, status }
    }

    pub fn root(&self) -> GtkBox {
        self.root.clone()
    }
}

impl Frame for LoginPage {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn on_show(&self) {
        self.status.set_label("");
    }
}

/// Put the key at `path` into the shared slot and continue to signing.
fn load_key(ctx: &WeakController, status: &Label, path: &Path) {
    let Some(controller) = ctx.upgrade() else {
        return;
    };

    match KeyMaterial::load(path) {
        Ok(key) => {
            if !key.is_armored() {
                warn!("Key file '{}' is not ASCII-armored", key.display_name());
            }
            info!(
                "Loaded {} byte key from '{}'",
                key.bytes().len(),
                key.source().display()
            );
            controller.key().set(key);
            ctx.navigate(SignFile::NAME);
        }
        Err(e) => {
            error!("Failed to load key: {}", e);
            status.set_label(&e.to_string());
        }
    }
}
