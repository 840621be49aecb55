//! Shared controller handed to every page.

use crate::core::frames::{Frame, FrameError, FrameRegistry};
use crate::core::key::KeySlot;
use gtk4::prelude::*;
use gtk4::{ApplicationWindow, Stack, Widget};
use log::{error, info};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

struct Inner {
    window: ApplicationWindow,
    stack: Stack,
    frames: RefCell<FrameRegistry<Stack>>,
    key: KeySlot,
}

/// Main application context: window, page registry and the shared key.
#[derive(Clone)]
pub struct Controller {
    inner: Rc<Inner>,
}

/// Non-owning controller handle kept by pages.
#[derive(Clone)]
pub struct WeakController {
    inner: Weak<Inner>,
}

impl Controller {
    /// Create a controller whose pages live in `stack`.
    pub fn new(window: ApplicationWindow, stack: Stack) -> Self {
        Self {
            inner: Rc::new(Inner {
                window,
                frames: RefCell::new(FrameRegistry::new(stack.clone())),
                stack,
                key: KeySlot::default(),
            }),
        }
    }

    pub fn downgrade(&self) -> WeakController {
        WeakController {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Stack `widget` under the frame's name and register the frame.
    pub fn add_frame(
        &self,
        frame: Box<dyn Frame>,
        widget: &impl IsA<Widget>,
    ) -> Result<(), FrameError> {
        let name = frame.name();
        self.inner.frames.borrow_mut().register(frame)?;
        self.inner.stack.add_named(widget, Some(name));
        info!("Registered page '{}'", name);
        Ok(())
    }

    /// Raise the named page and run its `on_show` hook.
    pub fn show_frame(&self, page_name: &str) -> Result<(), FrameError> {
        self.inner.frames.borrow().show(page_name)
    }

    /// Name of the page currently in front.
    pub fn visible_frame(&self) -> Option<&'static str> {
        self.inner.frames.borrow().visible()
    }

    pub fn page_names(&self) -> Vec<&'static str> {
        self.inner.frames.borrow().names().collect()
    }

    pub fn key(&self) -> &KeySlot {
        &self.inner.key
    }

    pub fn window(&self) -> &ApplicationWindow {
        &self.inner.window
    }
}

impl WeakController {
    pub fn upgrade(&self) -> Option<Controller> {
        self.inner.upgrade().map(|inner| Controller { inner })
    }

    /// Navigate to `page_name`, logging failures.
    pub fn navigate(&self, page_name: &str) {
        let Some(controller) = self.upgrade() else {
            return;
        };
        if let Err(e) = controller.show_frame(page_name) {
            error!("Navigation to '{}' failed: {}", page_name, e);
        }
    }
}
