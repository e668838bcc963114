/// UI-side end of the C ABI.
/// Owns one backend handle and wraps every returned pointer in an
/// `OwnedValue` before anything else can touch it.

use super::ffi;
use super::value::OwnedValue;
use super::Bridge;
use crate::services::Backend;
use std::ffi::CString;
use std::path::Path;
use std::ptr::NonNull;

pub struct FfiBridge {
    handle: NonNull<Backend>,
}

// SAFETY: the handle is owned exclusively by this bridge and the backend has
// no thread affinity; `&mut self` on every call keeps access serialized.
unsafe impl Send for FfiBridge {}

/// Borrowed input for one call, cut at the first NUL
fn c_text(text: &str) -> CString {
    let bytes = text.as_bytes();
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    CString::new(&bytes[..end]).unwrap_or_default()
}

fn owned(ptr: *mut std::ffi::c_char) -> OwnedValue {
    // SAFETY: every text-returning `ds_*` call hands back a fresh allocation
    // paired with `ds_release_value`, or null
    unsafe { OwnedValue::from_raw(ptr, ffi::ds_release_value) }
}

impl FfiBridge {
    /// Start a backend at `root`, or at the default shell root
    pub fn open(root: Option<&Path>) -> Result<Self, String> {
        let root = root.map(|r| c_text(&r.to_string_lossy()));
        let raw = root.as_ref().map_or(std::ptr::null(), |r| r.as_ptr());
        // SAFETY: `raw` is null or points into `root`, alive for the call
        let handle = unsafe { ffi::ds_backend_new(raw) };
        NonNull::new(handle)
            .map(|handle| Self { handle })
            .ok_or_else(|| "Failed to initialize backend".to_string())
    }

    fn raw(&mut self) -> *mut Backend {
        self.handle.as_ptr()
    }
}

impl Drop for FfiBridge {
    fn drop(&mut self) {
        // SAFETY: the handle came from `ds_backend_new` and is freed only here
        unsafe { ffi::ds_backend_free(self.handle.as_ptr()) }
    }
}

impl Bridge for FfiBridge {
    fn get_username(&mut self) -> OwnedValue {
        owned(unsafe { ffi::ds_get_username(self.raw()) })
    }

    fn set_username(&mut self, name: &str) {
        let name = c_text(name);
        unsafe { ffi::ds_set_username(self.raw(), name.as_ptr()) }
    }

    fn get_current_directory(&mut self) -> OwnedValue {
        owned(unsafe { ffi::ds_get_current_directory(self.raw()) })
    }

    fn execute_console_command(&mut self, command: &str) -> OwnedValue {
        let command = c_text(command);
        owned(unsafe { ffi::ds_execute_console_command(self.raw(), command.as_ptr()) })
    }

    fn get_file_list(&mut self) -> OwnedValue {
        owned(unsafe { ffi::ds_get_file_list(self.raw()) })
    }

    fn change_wallpaper(&mut self, path: &str) {
        let path = c_text(path);
        unsafe { ffi::ds_change_wallpaper(self.raw(), path.as_ptr()) }
    }

    fn get_wallpaper_path(&mut self) -> OwnedValue {
        owned(unsafe { ffi::ds_get_wallpaper_path(self.raw()) })
    }

    fn create_text_file(&mut self, name: &str, content: &str) -> OwnedValue {
        let (name, content) = (c_text(name), c_text(content));
        owned(unsafe { ffi::ds_create_text_file(self.raw(), name.as_ptr(), content.as_ptr()) })
    }

    fn read_text_file(&mut self, name: &str) -> OwnedValue {
        let name = c_text(name);
        owned(unsafe { ffi::ds_read_text_file(self.raw(), name.as_ptr()) })
    }
}
