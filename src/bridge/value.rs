//! Owned values crossing the bridge.
//!
//! Every text-returning bridge operation hands the caller a freshly
//! allocated C string. `OwnedValue` takes that pointer over at the return
//! point and gives it back to its releaser exactly once, in `Drop`.
//!
//! # Safety Design
//!
//! `OwnedValue` is neither `Clone` nor `Copy`, and every accessor borrows
//! `self`, so:
//! 1. a second release would need a second owner, which cannot exist;
//! 2. a read after release would need a borrow outliving the value, which
//!    the borrow checker rejects.

use std::borrow::Cow;
use std::ffi::{c_char, CStr};
use std::fmt;
use std::ptr::NonNull;

/// The designated releaser for values of one producer
pub type Releaser = unsafe extern "C" fn(*mut c_char);

pub struct OwnedValue {
    ptr: Option<NonNull<c_char>>,
    len: usize,
    release: Releaser,
}

impl OwnedValue {
    /// Take ownership of a value returned across the bridge.
    ///
    /// # Safety
    /// - `ptr` is null or a NUL-terminated string nobody else owns
    /// - `release` is the releaser matching the allocator that produced `ptr`
    pub unsafe fn from_raw(ptr: *mut c_char, release: Releaser) -> Self {
        let ptr = NonNull::new(ptr);
        // SAFETY: caller guarantees a valid NUL-terminated string when non-null
        let len = ptr.map_or(0, |p| unsafe { CStr::from_ptr(p.as_ptr()) }.to_bytes().len());
        Self { ptr, len, release }
    }

    /// Allocate `text` the way the backend does and own it immediately
    pub fn from_text(text: &str) -> Self {
        // SAFETY: `into_raw_text` allocates a fresh string released by `ds_release_value`
        unsafe { Self::from_raw(super::ffi::into_raw_text(text), super::ffi::ds_release_value) }
    }

    /// The "no value" marker (backend-side null)
    pub fn absent() -> Self {
        Self {
            ptr: None,
            len: 0,
            release: super::ffi::ds_release_value,
        }
    }

    pub fn is_present(&self) -> bool {
        self.ptr.is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw bytes, without terminator. Empty when absent.
    pub fn as_bytes(&self) -> &[u8] {
        match self.ptr {
            // SAFETY: we own `p` until Drop and it holds `len` readable bytes
            Some(p) => unsafe { std::slice::from_raw_parts(p.as_ptr().cast::<u8>(), self.len) },
            None => &[],
        }
    }

    /// Text for rendering; absent renders blank
    pub fn to_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// Copy the text out and release the value
    pub fn into_string(self) -> Option<String> {
        self.is_present().then(|| self.to_text().into_owned())
    }
}

impl Drop for OwnedValue {
    fn drop(&mut self) {
        if let Some(p) = self.ptr.take() {
            // SAFETY: `p` came from the producer paired with `release` and is
            // released only here, once
            unsafe { (self.release)(p.as_ptr()) }
        }
    }
}

impl fmt::Debug for OwnedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_present() {
            f.debug_tuple("OwnedValue").field(&self.to_text()).finish()
        } else {
            f.write_str("OwnedValue(absent)")
        }
    }
}
