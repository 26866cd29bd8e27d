//! Buffered file channels (`GIOChannel`)

use std::path::Path;
use std::ptr;

use gbind_core::{resource, AsHandle, Borrowed, Owned};
use gbind_sys::{self as ffi, GIOStatus};

use crate::error::{with_error_out, Error, Result};
use crate::strings::{path_to_cstring, take_string, to_cstring};

resource! {
    pub enum IoChannelKind: refcounted(ffi::GIOChannel) {
        ref = ffi::g_io_channel_ref,
        unref = ffi::g_io_channel_unref,
    }
}

pub type IoChannel = Owned<IoChannelKind>;
pub type IoChannelRef<'a> = Borrowed<'a, IoChannelKind>;

/// Non-error outcome of a channel operation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IoStatus {
    Normal,
    Eof,
    Again,
}

impl IoStatus {
    /// Translate a status whose error report has already been checked
    fn from_raw(status: GIOStatus, operation: &'static str) -> Result<Self> {
        match status {
            ffi::G_IO_STATUS_NORMAL => Ok(IoStatus::Normal),
            ffi::G_IO_STATUS_EOF => Ok(IoStatus::Eof),
            ffi::G_IO_STATUS_AGAIN => Ok(IoStatus::Again),
            _ => Err(Error::Unreported { operation }),
        }
    }
}

/// Open `path` with an `fopen`-style mode (`r`, `w`, `a`, `r+`, `w+`, `a+`)
///
/// Any other mode is refused without an error report and surfaces as a
/// null-handle error.
pub fn new_file(path: impl AsRef<Path>, mode: &str) -> Result<IoChannel> {
    let c_path = path_to_cstring(path.as_ref())?;
    let c_mode = to_cstring(mode)?;
    let raw = with_error_out(|err| unsafe {
        ffi::g_io_channel_new_file(c_path.as_ptr(), c_mode.as_ptr(), err)
    })?;
    Ok(unsafe { IoChannel::try_adopt(raw) }?)
}

pub trait IoChannelExt: AsHandle<Kind = IoChannelKind> {
    /// Next line including its terminator; `None` with [`IoStatus::Eof`]
    fn read_line(&self) -> Result<(IoStatus, Option<String>)> {
        let mut line = ptr::null_mut();
        let status = with_error_out(|err| unsafe {
            ffi::g_io_channel_read_line(
                self.as_raw(),
                &mut line,
                ptr::null_mut(),
                ptr::null_mut(),
                err,
            )
        });
        // The line is ours even if the status is bad.
        let line = unsafe { take_string(line) }?;
        Ok((IoStatus::from_raw(status?, "g_io_channel_read_line")?, line))
    }

    /// Write all of `s`; returns the number of bytes written
    fn write_chars(&self, s: &str) -> Result<usize> {
        let mut written = 0;
        let count = isize::try_from(s.len()).unwrap_or(isize::MAX);
        let status = with_error_out(|err| unsafe {
            ffi::g_io_channel_write_chars(
                self.as_raw(),
                s.as_ptr().cast(),
                count,
                &mut written,
                err,
            )
        })?;
        IoStatus::from_raw(status, "g_io_channel_write_chars")?;
        Ok(written)
    }

    fn flush(&self) -> Result<IoStatus> {
        let status = with_error_out(|err| unsafe { ffi::g_io_channel_flush(self.as_raw(), err) })?;
        IoStatus::from_raw(status, "g_io_channel_flush")
    }

    /// Close the underlying file
    ///
    /// Reading or writing a shut-down channel is a caller error the library
    /// does not report.
    fn shutdown(&self, flush: bool) -> Result<IoStatus> {
        let flush = if flush { ffi::GTRUE } else { ffi::GFALSE };
        let status = with_error_out(|err| unsafe {
            ffi::g_io_channel_shutdown(self.as_raw(), flush, err)
        })?;
        IoStatus::from_raw(status, "g_io_channel_shutdown")
    }

    /// Read lines until end of file
    fn lines(&self) -> Lines<'_, Self> {
        Lines {
            channel: self,
            done: false,
        }
    }
}

impl<T: AsHandle<Kind = IoChannelKind> + ?Sized> IoChannelExt for T {}

/// Iterator over the remaining lines of a channel
pub struct Lines<'a, C: IoChannelExt + ?Sized> {
    channel: &'a C,
    done: bool,
}

impl<C: IoChannelExt + ?Sized> Iterator for Lines<'_, C> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Result<String>> {
        if self.done {
            return None;
        }
        match self.channel.read_line() {
            Ok((_, Some(line))) => Some(Ok(line)),
            Ok((_, None)) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
