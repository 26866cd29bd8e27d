//! Arena storage for many small strings (`GStringChunk`)

use std::ffi::CStr;

use gbind_core::{resource, AsHandle, Borrowed, Owned};
use gbind_sys as ffi;

use crate::error::Result;
use crate::strings::{borrow_str, to_cstring};

resource! {
    pub enum StringChunkKind: transferred(ffi::GStringChunk) {
        free = ffi::g_string_chunk_free,
    }
}

pub type StringChunk = Owned<StringChunkKind>;
pub type StringChunkRef<'a> = Borrowed<'a, StringChunkKind>;

/// Arena allocating blocks of at least `block_size` bytes
pub fn new(block_size: usize) -> Result<StringChunk> {
    Ok(unsafe { StringChunk::try_adopt(ffi::g_string_chunk_new(block_size)) }?)
}

/// Copied strings stay where they are until the arena is cleared or freed,
/// so they borrow from the arena, not from the call.
pub trait StringChunkExt: AsHandle<Kind = StringChunkKind> {
    /// Copy `s` into the arena
    fn insert(&self, s: &str) -> Result<&str> {
        let s = to_cstring(s)?;
        let copy = unsafe { ffi::g_string_chunk_insert(self.as_raw(), s.as_ptr()) };
        copied(copy)
    }

    /// Copy `s` unless an equal string was already added this way
    fn insert_const(&self, s: &str) -> Result<&str> {
        let s = to_cstring(s)?;
        let copy = unsafe { ffi::g_string_chunk_insert_const(self.as_raw(), s.as_ptr()) };
        copied(copy)
    }

    /// Copy raw bytes, which may contain nul; a nul terminator is appended
    fn insert_len(&self, bytes: &[u8]) -> &CStr {
        let len = isize::try_from(bytes.len()).unwrap_or(isize::MAX);
        unsafe {
            let copy = ffi::g_string_chunk_insert_len(self.as_raw(), bytes.as_ptr().cast(), len);
            CStr::from_ptr(copy)
        }
    }

    /// Free every string in the arena
    ///
    /// # Safety
    ///
    /// No string previously returned by this arena may be used afterwards.
    unsafe fn clear(&self) {
        ffi::g_string_chunk_clear(self.as_raw())
    }
}

impl<T: AsHandle<Kind = StringChunkKind> + ?Sized> StringChunkExt for T {}

fn copied<'a>(copy: *mut std::ffi::c_char) -> Result<&'a str> {
    // A UTF-8 input copied byte for byte is still UTF-8, and the arena never
    // returns null.
    unsafe { borrow_str(copy) }.map(Option::unwrap_or_default)
}
