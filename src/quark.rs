//! Interned strings identifying error domains

use std::ffi::{CStr, CString};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use gbind_sys as ffi;

use crate::error::{Error, Result};

/// Non-zero identifier of a string interned by the foreign library
///
/// Interned strings are never freed, so a quark's name lives for the whole
/// process.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quark(NonZeroU32);

impl Quark {
    /// `None` for the zero quark
    pub fn from_raw(raw: ffi::GQuark) -> Option<Self> {
        NonZeroU32::new(raw).map(Quark)
    }

    pub fn into_raw(self) -> ffi::GQuark {
        self.0.get()
    }

    /// Intern `name`, creating the quark if needed
    pub fn intern(name: &str) -> Result<Self> {
        let name = CString::new(name)?;
        let raw = unsafe { ffi::g_quark_from_string(name.as_ptr()) };
        Quark::from_raw(raw).ok_or_else(|| gbind_core::HandleError::Null { kind: "Quark" }.into())
    }

    /// Look `name` up without interning it
    pub fn try_from_str(name: &str) -> Option<Self> {
        let name = CString::new(name).ok()?;
        Quark::from_raw(unsafe { ffi::g_quark_try_string(name.as_ptr()) })
    }

    pub fn as_cstr(self) -> &'static CStr {
        unsafe { CStr::from_ptr(ffi::g_quark_to_string(self.0.get())) }
    }

    pub fn as_str(self) -> Result<&'static str> {
        Ok(self.as_cstr().to_str()?)
    }

    /// Domain of file-system errors (`g-file-error-quark`)
    pub fn file_error() -> Self {
        // The domain function always returns an interned, non-zero quark.
        Quark(NonZeroU32::new(unsafe { ffi::g_file_error_quark() }).unwrap_or(NonZeroU32::MIN))
    }

    /// Domain of I/O channel errors
    pub fn io_channel_error() -> Self {
        Quark(
            NonZeroU32::new(unsafe { ffi::g_io_channel_error_quark() })
                .unwrap_or(NonZeroU32::MIN),
        )
    }
}

impl FromStr for Quark {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Quark::intern(name)
    }
}

impl fmt::Display for Quark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_cstr().to_string_lossy())
    }
}

impl fmt::Debug for Quark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Quark")
            .field(&self.0)
            .field(&self.as_cstr())
            .finish()
    }
}
