//! Debounced execution on a single-threaded event loop.

use gtk4::glib;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Schedules one-shot callbacks on the current thread's event loop.
pub trait Scheduler {
    type Handle: 'static;

    /// Run `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// Cancel a callback that has not fired yet.
    fn cancel(&self, handle: Self::Handle);
}

/// Scheduler backed by the GLib main context.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlibScheduler;

impl Scheduler for GlibScheduler {
    type Handle = glib::SourceId;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> glib::SourceId {
        glib::timeout_add_local_once(delay, task)
    }

    fn cancel(&self, handle: glib::SourceId) {
        handle.remove();
    }
}

/// Coalesces bursts of triggers into a single delayed action.
///
/// At most one callback is pending at a time. Each trigger cancels the
/// pending callback and schedules a fresh one, so the action runs once the
/// triggers have been quiet for the full delay.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    pending: Rc<RefCell<Option<S::Handle>>>,
    action: Rc<dyn Fn()>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay: Duration, action: impl Fn() + 'static) -> Self {
        Self {
            scheduler,
            delay,
            pending: Rc::new(RefCell::new(None)),
            action: Rc::new(action),
        }
    }

    /// Restart the delay window.
    pub fn trigger(&self) {
        if let Some(handle) = self.pending.borrow_mut().take() {
            self.scheduler.cancel(handle);
        }

        let pending = Rc::clone(&self.pending);
        let action = Rc::clone(&self.action);
        let handle = self.scheduler.schedule(
            self.delay,
            Box::new(move || {
                // Fired sources must not be removed again.
                pending.borrow_mut().take();
                action();
            }),
        );

        *self.pending.borrow_mut() = Some(handle);
    }

    /// Whether a callback is currently scheduled.
    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}
