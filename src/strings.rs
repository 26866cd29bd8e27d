//! String passing between Rust and the foreign library

use std::ffi::{c_char, CStr, CString};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use gbind_core::{resource, AsHandle, Owned};
use gbind_sys as ffi;

use crate::error::Result;

resource! {
    /// String allocated by the foreign allocator and handed to the caller
    pub enum GStrKind: transferred(c_char) {
        free = ffi::g_free,
    }
}

/// Foreign-allocated string, released with `g_free`
pub type GStr = Owned<GStrKind>;

pub(crate) fn to_cstring(s: &str) -> Result<CString> {
    Ok(CString::new(s)?)
}

pub(crate) fn path_to_cstring(path: &Path) -> Result<CString> {
    Ok(CString::new(path.as_os_str().as_bytes())?)
}

/// Borrow a foreign string; null is `None`
///
/// # Safety
///
/// A non-null `ptr` must be a nul-terminated string that stays valid and
/// unmodified for `'a`.
pub(crate) unsafe fn borrow_str<'a>(ptr: *const c_char) -> Result<Option<&'a str>> {
    if ptr.is_null() {
        return Ok(None);
    }
    Ok(Some(CStr::from_ptr(ptr).to_str()?))
}

/// Take a string the foreign library transferred to the caller
///
/// The foreign allocation is freed whether or not it is valid UTF-8.
///
/// # Safety
///
/// `ptr` must be null or a nul-terminated string allocated with the
/// foreign allocator and owned by the caller.
pub(crate) unsafe fn take_string(ptr: *mut c_char) -> Result<Option<String>> {
    match Owned::<GStrKind>::try_adopt(ptr) {
        Err(_) => Ok(None),
        Ok(owned) => Ok(Some(gstr_to_str(&owned)?.to_owned())),
    }
}

pub fn gstr_to_str(s: &GStr) -> Result<&str> {
    Ok(unsafe { CStr::from_ptr(s.as_raw()) }.to_str()?)
}
