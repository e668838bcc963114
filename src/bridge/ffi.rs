//! C ABI exported by the backend runtime.
//!
//! A UI runtime in any language drives the backend through these functions.
//! The rules are the same for every one of them:
//! - text results are freshly allocated and owned by the caller, who gives
//!   them back through `ds_release_value` exactly once
//! - `NULL` results mean "no value" and are never released
//! - text inputs are borrowed for the duration of the call only; `NULL`
//!   inputs read as empty text
//! - the backend handle comes from `ds_backend_new` and is destroyed with
//!   `ds_backend_free`

use crate::services::Backend;
use std::borrow::Cow;
use std::ffi::{c_char, CStr, CString};
use std::path::PathBuf;

/// Allocate `text` as a caller-owned C string, cut at the first NUL
pub(crate) fn into_raw_text(text: &str) -> *mut c_char {
    let bytes = text.as_bytes();
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    match CString::new(&bytes[..end]) {
        Ok(c) => c.into_raw(),
        // unreachable: the slice stops before the first NUL
        Err(_) => std::ptr::null_mut(),
    }
}

fn into_raw_optional(text: Option<String>) -> *mut c_char {
    text.map_or(std::ptr::null_mut(), |t| into_raw_text(&t))
}

/// # Safety
/// `ptr` is null or a NUL-terminated string valid for the call
unsafe fn borrowed<'a>(ptr: *const c_char) -> Cow<'a, str> {
    if ptr.is_null() {
        return Cow::Borrowed("");
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy()
}

/// # Safety
/// `backend` was returned by `ds_backend_new` and not yet freed
unsafe fn backend_mut<'a>(backend: *mut Backend) -> Option<&'a mut Backend> {
    unsafe { backend.as_mut() }
}

/// Create a backend rooted at `root` (`NULL` for the default root).
/// Returns `NULL` when the shell root cannot be prepared.
///
/// # Safety
/// `root` is null or a NUL-terminated string
#[no_mangle]
pub unsafe extern "C" fn ds_backend_new(root: *const c_char) -> *mut Backend {
    let root = (!root.is_null()).then(|| PathBuf::from(unsafe { borrowed(root) }.into_owned()));
    match Backend::open(root) {
        Ok(backend) => Box::into_raw(Box::new(backend)),
        Err(e) => {
            log::error!("Failed to initialize backend: {}", e);
            std::ptr::null_mut()
        }
    }
}

/// # Safety
/// `backend` was returned by `ds_backend_new` and is not used afterwards
#[no_mangle]
pub unsafe extern "C" fn ds_backend_free(backend: *mut Backend) {
    if !backend.is_null() {
        drop(unsafe { Box::from_raw(backend) });
    }
}

/// The single designated releaser for every text this module hands out.
/// `NULL` is ignored.
///
/// # Safety
/// `value` is null or came from this module and has not been released
#[no_mangle]
pub unsafe extern "C" fn ds_release_value(value: *mut c_char) {
    if !value.is_null() {
        drop(unsafe { CString::from_raw(value) });
    }
}

/// # Safety
/// `backend` is a live handle from `ds_backend_new`
#[no_mangle]
pub unsafe extern "C" fn ds_get_username(backend: *mut Backend) -> *mut c_char {
    let Some(backend) = (unsafe { backend_mut(backend) }) else {
        return std::ptr::null_mut();
    };
    into_raw_optional(backend.username())
}

/// # Safety
/// `backend` is a live handle; `name` is null or NUL-terminated
#[no_mangle]
pub unsafe extern "C" fn ds_set_username(backend: *mut Backend, name: *const c_char) {
    if let Some(backend) = unsafe { backend_mut(backend) } {
        backend.set_username(&unsafe { borrowed(name) });
    }
}

/// # Safety
/// `backend` is a live handle from `ds_backend_new`
#[no_mangle]
pub unsafe extern "C" fn ds_get_current_directory(backend: *mut Backend) -> *mut c_char {
    let Some(backend) = (unsafe { backend_mut(backend) }) else {
        return std::ptr::null_mut();
    };
    into_raw_text(&backend.current_directory())
}

/// # Safety
/// `backend` is a live handle; `command` is null or NUL-terminated
#[no_mangle]
pub unsafe extern "C" fn ds_execute_console_command(
    backend: *mut Backend,
    command: *const c_char,
) -> *mut c_char {
    let Some(backend) = (unsafe { backend_mut(backend) }) else {
        return std::ptr::null_mut();
    };
    into_raw_optional(backend.execute_console_command(&unsafe { borrowed(command) }))
}

/// # Safety
/// `backend` is a live handle from `ds_backend_new`
#[no_mangle]
pub unsafe extern "C" fn ds_get_file_list(backend: *mut Backend) -> *mut c_char {
    let Some(backend) = (unsafe { backend_mut(backend) }) else {
        return std::ptr::null_mut();
    };
    into_raw_text(&backend.file_list())
}

/// # Safety
/// `backend` is a live handle; `path` is null or NUL-terminated
#[no_mangle]
pub unsafe extern "C" fn ds_change_wallpaper(backend: *mut Backend, path: *const c_char) {
    if let Some(backend) = unsafe { backend_mut(backend) } {
        backend.change_wallpaper(&unsafe { borrowed(path) });
    }
}

/// # Safety
/// `backend` is a live handle from `ds_backend_new`
#[no_mangle]
pub unsafe extern "C" fn ds_get_wallpaper_path(backend: *mut Backend) -> *mut c_char {
    let Some(backend) = (unsafe { backend_mut(backend) }) else {
        return std::ptr::null_mut();
    };
    into_raw_optional(backend.wallpaper_path())
}

/// # Safety
/// `backend` is a live handle; `name` and `content` are null or NUL-terminated
#[no_mangle]
pub unsafe extern "C" fn ds_create_text_file(
    backend: *mut Backend,
    name: *const c_char,
    content: *const c_char,
) -> *mut c_char {
    let Some(backend) = (unsafe { backend_mut(backend) }) else {
        return std::ptr::null_mut();
    };
    let (name, content) = unsafe { (borrowed(name), borrowed(content)) };
    into_raw_text(&backend.create_text_file(&name, &content))
}

/// # Safety
/// `backend` is a live handle; `name` is null or NUL-terminated
#[no_mangle]
pub unsafe extern "C" fn ds_read_text_file(backend: *mut Backend, name: *const c_char) -> *mut c_char {
    let Some(backend) = (unsafe { backend_mut(backend) }) else {
        return std::ptr::null_mut();
    };
    into_raw_text(&backend.read_text_file(&unsafe { borrowed(name) }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outgoing_text_is_cut_at_nul() {
        let raw = into_raw_text("abc\0def");
        let text = unsafe { CStr::from_ptr(raw) }.to_str().unwrap().to_string();
        unsafe { ds_release_value(raw) };
        assert_eq!(text, "abc");
    }

    #[test]
    fn release_ignores_null() {
        unsafe { ds_release_value(std::ptr::null_mut()) };
    }

    #[test]
    fn null_handle_yields_null() {
        let handle = std::ptr::null_mut();
        unsafe {
            assert!(ds_get_username(handle).is_null());
            assert!(ds_get_file_list(handle).is_null());
            ds_set_username(handle, std::ptr::null());
        }
    }

    #[test]
    fn null_input_reads_as_empty() {
        assert_eq!(unsafe { borrowed(std::ptr::null()) }, "");
    }
}
