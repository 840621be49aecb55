//! Core functionality shared by the pages.

pub mod context;
pub mod debounce;
pub mod frames;
pub mod key;
pub mod scaling;
pub mod system;

// Re-export commonly used items
pub use context::{Controller, WeakController};
pub use frames::{Frame, FrameError};
