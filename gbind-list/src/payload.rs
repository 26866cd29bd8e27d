//! Conversions between list payloads and element types

use core::ffi::{c_void, CStr};
use core::ptr::NonNull;

use gbind_core::{AsHandle, Borrowed, Handle, Owned, RefCounted, Resource};
use gbind_sys::gpointer;

/// Element types that can be rebuilt from an untyped payload
///
/// Reconstruction is null-safe: a null payload yields `None`, and the list
/// walk skips that node.
///
/// # Safety
///
/// Implementors choose the lifetime their value claims; callers of
/// `from_payload` guarantee a non-null payload really is the element's
/// foreign type and outlives whatever the element borrows.
pub unsafe trait FromPayload: Sized {
    /// # Safety
    ///
    /// See the trait documentation.
    unsafe fn from_payload(data: gpointer) -> Option<Self>;
}

/// Element types that can be stored as an untyped payload
///
/// Storing never transfers ownership; the list keeps an address only.
pub trait ToPayload {
    fn to_payload(&self) -> gpointer;
}

unsafe impl FromPayload for Handle {
    unsafe fn from_payload(data: gpointer) -> Option<Self> {
        NonNull::new(data).map(|data| Handle::from_ptr(data.as_ptr()))
    }
}

unsafe impl<K: Resource> FromPayload for Borrowed<'_, K> {
    unsafe fn from_payload(data: gpointer) -> Option<Self> {
        Borrowed::from_ptr(data)
    }
}

/// Owners built from a payload take their own foreign reference
unsafe impl<K: RefCounted> FromPayload for Owned<K> {
    unsafe fn from_payload(data: gpointer) -> Option<Self> {
        Owned::try_retained(data.cast()).ok()
    }
}

unsafe impl FromPayload for &CStr {
    unsafe fn from_payload(data: gpointer) -> Option<Self> {
        NonNull::new(data).map(|data| CStr::from_ptr(data.as_ptr().cast()))
    }
}

impl ToPayload for Handle {
    fn to_payload(&self) -> gpointer {
        self.as_ptr()
    }
}

impl<K: Resource> ToPayload for Borrowed<'_, K> {
    fn to_payload(&self) -> gpointer {
        self.handle().as_ptr()
    }
}

impl ToPayload for &CStr {
    fn to_payload(&self) -> gpointer {
        self.as_ptr().cast_mut().cast::<c_void>()
    }
}
