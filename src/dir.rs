//! Directory listings (`GDir`)

use std::ffi::{CStr, OsStr, OsString};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use gbind_core::{resource, AsHandle, Borrowed, Owned};
use gbind_sys as ffi;

use crate::error::{with_error_out, Result};
use crate::strings::path_to_cstring;

resource! {
    pub enum DirKind: transferred(ffi::GDir) {
        free = ffi::g_dir_close,
    }
}

pub type Dir = Owned<DirKind>;
pub type DirRef<'a> = Borrowed<'a, DirKind>;

/// Open `path` for listing
///
/// Failures carry the file-error domain and the code mapped from `errno`.
pub fn open(path: impl AsRef<Path>) -> Result<Dir> {
    let c_path = path_to_cstring(path.as_ref())?;
    let raw = with_error_out(|err| unsafe { ffi::g_dir_open(c_path.as_ptr(), 0, err) })?;
    Ok(unsafe { Dir::try_adopt(raw) }?)
}

pub trait DirExt: AsHandle<Kind = DirKind> {
    /// Next entry name, skipping `.` and `..`; `None` at the end
    fn read_name(&self) -> Option<OsString> {
        let name = unsafe { ffi::g_dir_read_name(self.as_raw()) };
        if name.is_null() {
            return None;
        }
        // The name buffer is reused by the next read, so copy it out now.
        let bytes = unsafe { CStr::from_ptr(name) }.to_bytes();
        Some(OsStr::from_bytes(bytes).to_os_string())
    }

    /// Start the listing over
    fn rewind(&self) {
        unsafe { ffi::g_dir_rewind(self.as_raw()) }
    }

    /// Remaining entries as an iterator
    fn entries(&self) -> Entries<'_, Self> {
        Entries { dir: self }
    }
}

impl<T: AsHandle<Kind = DirKind> + ?Sized> DirExt for T {}

/// Iterator over the remaining names of a directory listing
pub struct Entries<'a, D: DirExt + ?Sized> {
    dir: &'a D,
}

impl<D: DirExt + ?Sized> Iterator for Entries<'_, D> {
    type Item = OsString;

    fn next(&mut self) -> Option<OsString> {
        self.dir.read_name()
    }
}
