//! Untyped foreign resource handle

use core::ffi::c_void;
use core::fmt;

/// Raw address of a foreign, externally allocated resource
///
/// The layout behind the address is never interpreted here. A handle is only
/// reinterpreted as a concrete pointer type right before it is passed to a
/// foreign call. Equality compares addresses, not resource contents.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Handle(*mut c_void);

impl Handle {
    /// The absent resource
    pub const fn null() -> Self {
        Handle(core::ptr::null_mut())
    }

    /// Erase the type of a foreign pointer
    pub fn from_ptr<T>(ptr: *mut T) -> Self {
        Handle(ptr.cast())
    }

    /// Erase the type of a foreign pointer handed out as `const`
    pub fn from_const_ptr<T>(ptr: *const T) -> Self {
        Handle(ptr.cast_mut().cast())
    }

    pub const fn as_ptr(self) -> *mut c_void {
        self.0
    }

    pub fn is_null(self) -> bool {
        self.0.is_null()
    }

    pub fn addr(self) -> usize {
        self.0 as usize
    }

    /// Reinterpret the address as a pointer to `T`
    ///
    /// No runtime check backs this cast: the foreign library hands out
    /// untyped addresses and the caller names the kind.
    ///
    /// # Safety
    ///
    /// The handle must be null or point to a live `T` allocated by the
    /// foreign library. Every call site must be able to name the foreign
    /// function whose contract guarantees that kind.
    pub unsafe fn reinterpret<T>(self) -> *mut T {
        self.0.cast()
    }
}

impl Default for Handle {
    fn default() -> Self {
        Handle::null()
    }
}

impl fmt::Pointer for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&self.0, f)
    }
}
