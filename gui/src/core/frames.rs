//! Page registry and navigation.

use log::info;
use std::cell::Cell;
use thiserror::Error;

/// Errors raised while switching pages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("unknown page: {0}")]
    UnknownPage(String),
    #[error("page already registered: {0}")]
    DuplicatePage(String),
}

/// A full-window screen that can be brought to the front.
pub trait Frame {
    /// Name used for navigation and as the stack child name.
    fn name(&self) -> &'static str;

    /// Called every time the frame becomes visible.
    fn on_show(&self) {}
}

/// Container that stacks the frames and raises one of them.
pub trait FrameHost {
    fn raise(&self, name: &str);
}

impl FrameHost for gtk4::Stack {
    fn raise(&self, name: &str) {
        self.set_visible_child_name(name);
    }
}

/// Frames in registration order, exactly one of them raised at a time.
pub struct FrameRegistry<H: FrameHost> {
    host: H,
    frames: Vec<Box<dyn Frame>>,
    visible: Cell<Option<&'static str>>,
}

impl<H: FrameHost> FrameRegistry<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            frames: Vec::new(),
            visible: Cell::new(None),
        }
    }

    /// Add a frame. Frames are never removed.
    pub fn register(&mut self, frame: Box<dyn Frame>) -> Result<(), FrameError> {
        let name = frame.name();
        if self.contains(name) {
            return Err(FrameError::DuplicatePage(name.to_string()));
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.frames.iter().any(|frame| frame.name() == name)
    }

    /// Raise the named frame and run its `on_show` hook.
    pub fn show(&self, name: &str) -> Result<(), FrameError> {
        let frame = self
            .frames
            .iter()
            .find(|frame| frame.name() == name)
            .ok_or_else(|| FrameError::UnknownPage(name.to_string()))?;

        info!("Showing page '{}'", frame.name());
        self.host.raise(frame.name());
        self.visible.set(Some(frame.name()));
        frame.on_show();
        Ok(())
    }

    /// Name of the frame currently in front.
    pub fn visible(&self) -> Option<&'static str> {
        self.visible.get()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.frames.iter().map(|frame| frame.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingHost {
        raised: Rc<RefCell<Vec<String>>>,
    }

    impl FrameHost for RecordingHost {
        fn raise(&self, name: &str) {
            self.raised.borrow_mut().push(name.to_string());
        }
    }

    struct Counted {
        name: &'static str,
        shown: Rc<Cell<u32>>,
    }

    impl Frame for Counted {
        fn name(&self) -> &'static str {
            self.name
        }

        fn on_show(&self) {
            self.shown.set(self.shown.get() + 1);
        }
    }

    struct Silent(&'static str);

    impl Frame for Silent {
        fn name(&self) -> &'static str {
            self.0
        }
    }

    fn registry() -> (FrameRegistry<RecordingHost>, RecordingHost, Rc<Cell<u32>>) {
        let host = RecordingHost::default();
        let shown = Rc::new(Cell::new(0));
        let mut registry = FrameRegistry::new(host.clone());
        registry.register(Box::new(Silent("LoginPage"))).unwrap();
        registry.register(Box::new(Silent("SignFile"))).unwrap();
        registry
            .register(Box::new(Counted {
                name: "NewKey",
                shown: Rc::clone(&shown),
            }))
            .unwrap();
        (registry, host, shown)
    }

    #[test]
    fn show_raises_and_runs_hook_once_per_call() {
        let (registry, host, shown) = registry();

        registry.show("NewKey").unwrap();
        assert_eq!(registry.visible(), Some("NewKey"));
        assert_eq!(shown.get(), 1);

        registry.show("NewKey").unwrap();
        assert_eq!(shown.get(), 2);
        assert_eq!(*host.raised.borrow(), vec!["NewKey", "NewKey"]);
    }

    #[test]
    fn frames_without_hook_can_be_shown() {
        let (registry, host, shown) = registry();

        registry.show("LoginPage").unwrap();
        registry.show("SignFile").unwrap();
        assert_eq!(registry.visible(), Some("SignFile"));
        assert_eq!(shown.get(), 0);
        assert_eq!(*host.raised.borrow(), vec!["LoginPage", "SignFile"]);
    }

    #[test]
    fn unknown_page_fails_without_side_effects() {
        let (registry, host, _) = registry();
        registry.show("LoginPage").unwrap();

        let err = registry.show("Settings").unwrap_err();
        assert_eq!(err, FrameError::UnknownPage("Settings".to_string()));
        assert_eq!(err.to_string(), "unknown page: Settings");
        assert_eq!(registry.visible(), Some("LoginPage"));
        assert_eq!(host.raised.borrow().len(), 1);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let (mut registry, _, _) = registry();

        let err = registry.register(Box::new(Silent("SignFile"))).unwrap_err();
        assert_eq!(err, FrameError::DuplicatePage("SignFile".to_string()));
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["LoginPage", "SignFile", "NewKey"]
        );
    }

    #[test]
    fn nothing_visible_before_first_show() {
        let (registry, host, _) = registry();
        assert_eq!(registry.visible(), None);
        assert!(registry.contains("NewKey"));
        assert!(!registry.contains("newkey"));
        assert!(host.raised.borrow().is_empty());
    }
}
