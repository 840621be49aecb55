//! Platform setup and environment checks.

use crate::config::GPG_BINARY;
use log::{info, warn};

/// Ask Windows for per-monitor DPI awareness so text renders sharply.
///
/// Failures are ignored. Returns whether the call succeeded.
pub fn configure_dpi() -> bool {
    #[cfg(windows)]
    {
        dpi::set_process_dpi_awareness()
    }
    #[cfg(not(windows))]
    {
        false
    }
}

#[cfg(windows)]
mod dpi {
    use std::ffi::c_void;

    type SetProcessDpiAwareness = unsafe extern "system" fn(i32) -> i32;

    const PROCESS_SYSTEM_DPI_AWARE: i32 = 1;

    #[link(name = "kernel32")]
    extern "system" {
        fn LoadLibraryW(name: *const u16) -> *mut c_void;
        fn GetProcAddress(module: *mut c_void, name: *const u8) -> *mut c_void;
    }

    pub fn set_process_dpi_awareness() -> bool {
        let library: Vec<u16> = "shcore.dll\0".encode_utf16().collect();
        // SAFETY: both strings are NUL terminated and the symbol, when
        // present, has the documented `HRESULT (PROCESS_DPI_AWARENESS)` shape.
        unsafe {
            let module = LoadLibraryW(library.as_ptr());
            if module.is_null() {
                return false;
            }
            let symbol = GetProcAddress(module, b"SetProcessDpiAwareness\0".as_ptr());
            if symbol.is_null() {
                return false;
            }
            let set_awareness: SetProcessDpiAwareness = std::mem::transmute(symbol);
            set_awareness(PROCESS_SYSTEM_DPI_AWARE) >= 0
        }
    }
}

/// Check for gpg availability.
pub fn check_gpg_availability() -> bool {
    match which::which(GPG_BINARY) {
        Ok(path) => {
            info!("gpg found at: {}", path.display());
            true
        }
        Err(e) => {
            warn!("gpg not found on PATH: {}", e);
            warn!("Key generation and signing need a local GnuPG installation");
            false
        }
    }
}
