//! Error types and translation of foreign `GError` reports

use std::ffi::NulError;
use std::ptr::{self, NonNull};
use std::str::Utf8Error;

use gbind_core::{HandleError, Owned};
use gbind_sys::{self as ffi, GError};

use crate::error_report::{ErrorReportExt, ErrorReportKind};
use crate::quark::Quark;

/// Result type for every fallible binding
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the bindings
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The foreign library reported a failure through its error out-pointer
    #[error(transparent)]
    Foreign(#[from] ForeignError),

    #[error(transparent)]
    Handle(#[from] HandleError),

    #[error("string passed to the foreign library contains a nul byte: {0}")]
    InteriorNul(#[from] NulError),

    #[error("foreign string is not valid UTF-8: {0}")]
    Utf8(#[from] Utf8Error),

    /// The call signalled failure but left its error out-pointer empty
    #[error("{operation} failed without an error report")]
    Unreported { operation: &'static str },
}

impl Error {
    /// The foreign report, if this is one
    pub fn foreign(&self) -> Option<&ForeignError> {
        match self {
            Error::Foreign(err) => Some(err),
            _ => None,
        }
    }
}

/// Owned copy of a foreign error report
///
/// The foreign report is freed as soon as its fields are copied out.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} ({})", origin(.domain, .code))]
pub struct ForeignError {
    domain: Option<Quark>,
    code: i32,
    message: String,
}

impl ForeignError {
    pub fn new(domain: Quark, code: i32, message: impl Into<String>) -> Self {
        ForeignError {
            domain: Some(domain),
            code,
            message: message.into(),
        }
    }

    pub fn domain(&self) -> Option<Quark> {
        self.domain
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn matches(&self, domain: Quark, code: i32) -> bool {
        self.domain == Some(domain) && self.code == code
    }

    /// Decoded code when the report belongs to the file-error domain
    pub fn file_error(&self) -> Option<FileErrorCode> {
        if self.domain == Some(Quark::file_error()) {
            FileErrorCode::from_code(self.code)
        } else {
            None
        }
    }

    /// Copy the fields out of any live report
    pub fn from_report<R: ErrorReportExt + ?Sized>(report: &R) -> Self {
        ForeignError {
            domain: report.domain(),
            code: report.code(),
            message: report.message_lossy(),
        }
    }
}

fn origin(domain: &Option<Quark>, code: &i32) -> String {
    match domain {
        Some(domain) => format!("{domain}:{code}"),
        None => format!("code {code}"),
    }
}

/// Codes of the file-error domain
#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileErrorCode {
    Exist = ffi::G_FILE_ERROR_EXIST,
    IsDir = ffi::G_FILE_ERROR_ISDIR,
    Acces = ffi::G_FILE_ERROR_ACCES,
    NameTooLong = ffi::G_FILE_ERROR_NAMETOOLONG,
    NoEnt = ffi::G_FILE_ERROR_NOENT,
    NotDir = ffi::G_FILE_ERROR_NOTDIR,
    Nxio = ffi::G_FILE_ERROR_NXIO,
    NoDev = ffi::G_FILE_ERROR_NODEV,
    Rofs = ffi::G_FILE_ERROR_ROFS,
    TxtBsy = ffi::G_FILE_ERROR_TXTBSY,
    Fault = ffi::G_FILE_ERROR_FAULT,
    Loop = ffi::G_FILE_ERROR_LOOP,
    NoSpc = ffi::G_FILE_ERROR_NOSPC,
    NoMem = ffi::G_FILE_ERROR_NOMEM,
    MFile = ffi::G_FILE_ERROR_MFILE,
    NFile = ffi::G_FILE_ERROR_NFILE,
    BadF = ffi::G_FILE_ERROR_BADF,
    Inval = ffi::G_FILE_ERROR_INVAL,
    Pipe = ffi::G_FILE_ERROR_PIPE,
    Again = ffi::G_FILE_ERROR_AGAIN,
    Intr = ffi::G_FILE_ERROR_INTR,
    Io = ffi::G_FILE_ERROR_IO,
    Perm = ffi::G_FILE_ERROR_PERM,
    NoSys = ffi::G_FILE_ERROR_NOSYS,
    Failed = ffi::G_FILE_ERROR_FAILED,
}

impl FileErrorCode {
    const ALL: [FileErrorCode; 25] = [
        FileErrorCode::Exist,
        FileErrorCode::IsDir,
        FileErrorCode::Acces,
        FileErrorCode::NameTooLong,
        FileErrorCode::NoEnt,
        FileErrorCode::NotDir,
        FileErrorCode::Nxio,
        FileErrorCode::NoDev,
        FileErrorCode::Rofs,
        FileErrorCode::TxtBsy,
        FileErrorCode::Fault,
        FileErrorCode::Loop,
        FileErrorCode::NoSpc,
        FileErrorCode::NoMem,
        FileErrorCode::MFile,
        FileErrorCode::NFile,
        FileErrorCode::BadF,
        FileErrorCode::Inval,
        FileErrorCode::Pipe,
        FileErrorCode::Again,
        FileErrorCode::Intr,
        FileErrorCode::Io,
        FileErrorCode::Perm,
        FileErrorCode::NoSys,
        FileErrorCode::Failed,
    ];

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| *c as i32 == code)
    }

    /// Map an `errno` value the way the foreign library does
    pub fn from_errno(errno: i32) -> Self {
        let code = unsafe { ffi::g_file_error_from_errno(errno) };
        Self::from_code(code).unwrap_or(FileErrorCode::Failed)
    }
}

/// Translate an error out-pointer after a foreign call
///
/// A null pointer means success. A non-null report is adopted, copied into
/// [`ForeignError`] and freed exactly once.
///
/// # Safety
///
/// `err` must be null or a report the foreign call handed to the caller.
pub unsafe fn check(err: *mut GError) -> Result<()> {
    match NonNull::new(err) {
        None => Ok(()),
        Some(err) => {
            let report = Owned::<ErrorReportKind>::adopt(err);
            Err(ForeignError::from_report(&report).into())
        }
    }
}

/// Translate a pointer result together with its error out-pointer
///
/// Failure wins over the result; a null result without a report is an
/// absent value, not a failure.
///
/// # Safety
///
/// As [`check`].
pub unsafe fn check_result<T>(ptr: *mut T, err: *mut GError) -> Result<Option<NonNull<T>>> {
    check(err)?;
    Ok(NonNull::new(ptr))
}

/// Run `call` with a fresh error out-pointer and translate what it reports
pub(crate) fn with_error_out<R>(call: impl FnOnce(*mut *mut GError) -> R) -> Result<R> {
    let mut err = ptr::null_mut();
    let result = call(&mut err);
    // SAFETY: the out-pointer was null before the call, so anything in it now
    // was handed over by the callee.
    unsafe { check(err) }?;
    Ok(result)
}
