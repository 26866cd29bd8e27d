//! Foreign error reports (`GError`) as owned values

use std::ffi::CStr;

use gbind_core::{resource, AsHandle, Borrowed, Owned};
use gbind_sys::{self as ffi, GError};

use crate::error::Result;
use crate::quark::Quark;
use crate::strings::to_cstring;

resource! {
    /// `GError`: uniquely owned, freed with `g_error_free`
    pub enum ErrorReportKind: transferred(GError) {
        free = ffi::g_error_free,
    }
}

pub type ErrorReport = Owned<ErrorReportKind>;
pub type ErrorReportRef<'a> = Borrowed<'a, ErrorReportKind>;

/// Build a report the way a foreign function would
pub fn new(domain: Quark, code: i32, message: &str) -> Result<ErrorReport> {
    let message = to_cstring(message)?;
    let raw = unsafe { ffi::g_error_new_literal(domain.into_raw(), code, message.as_ptr()) };
    Ok(unsafe { ErrorReport::try_adopt(raw) }?)
}

pub trait ErrorReportExt: AsHandle<Kind = ErrorReportKind> {
    /// `None` only for a malformed report with a zero domain
    fn domain(&self) -> Option<Quark> {
        Quark::from_raw(unsafe { (*self.as_raw()).domain })
    }

    fn code(&self) -> i32 {
        unsafe { (*self.as_raw()).code }
    }

    fn message(&self) -> Result<&str> {
        Ok(self.message_cstr().to_str()?)
    }

    fn message_cstr(&self) -> &CStr {
        let msg = unsafe { (*self.as_raw()).message };
        if msg.is_null() {
            return c"";
        }
        unsafe { CStr::from_ptr(msg) }
    }

    fn message_lossy(&self) -> String {
        self.message_cstr().to_string_lossy().into_owned()
    }

    fn matches(&self, domain: Quark, code: i32) -> bool {
        unsafe { ffi::g_error_matches(self.as_raw(), domain.into_raw(), code) != ffi::GFALSE }
    }

    /// Deep copy into an independently owned report
    fn copy(&self) -> Result<ErrorReport> {
        Ok(unsafe { ErrorReport::try_adopt(ffi::g_error_copy(self.as_raw())) }?)
    }
}

impl<T: AsHandle<Kind = ErrorReportKind> + ?Sized> ErrorReportExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_and_copy() {
        let domain: Quark = "gbind-report-test".parse().unwrap();
        let report = new(domain, 3, "broken pipe").unwrap();
        assert_eq!(report.code(), 3);
        assert_eq!(report.domain(), Some(domain));
        assert_eq!(report.message().unwrap(), "broken pipe");
        assert!(report.matches(domain, 3));
        assert!(!report.matches(domain, 4));

        let copy = report.copy().unwrap();
        assert_ne!(copy.handle(), report.handle());
        drop(report);
        assert_eq!(copy.borrow().message().unwrap(), "broken pipe");
    }
}
