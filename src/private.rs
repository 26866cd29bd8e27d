//! Thread-local keys (`GPrivate`)

use std::cell::UnsafeCell;
use std::ptr::NonNull;

use gbind_core::{resource, AsHandle, Borrowed, Handle, Owned, ThreadSafe};
use gbind_list::FromPayload;
use gbind_sys::{self as ffi, GDestroyNotify, GPrivate};

resource! {
    pub enum PrivateKind: uncounted(GPrivate)
}

unsafe impl ThreadSafe for PrivateKind {}

pub type Private = Owned<PrivateKind>;
pub type PrivateRef<'a> = Borrowed<'a, PrivateKind>;

/// Storage for a thread-local key; the foreign library requires it to be
/// `static`
pub struct PrivateStorage {
    raw: UnsafeCell<GPrivate>,
}

unsafe impl Send for PrivateStorage {}
unsafe impl Sync for PrivateStorage {}

impl PrivateStorage {
    pub const fn new() -> Self {
        // SAFETY: without a notify no stored value is ever dereferenced
        unsafe { Self::with_notify(None) }
    }

    /// `notify` runs on a replaced value and on each thread's value at exit
    ///
    /// # Safety
    ///
    /// Every non-null value stored through [`PrivateExt::set`] or
    /// [`PrivateExt::replace`] must be one `notify` can safely receive, and
    /// no value may be handed to it twice.
    pub const unsafe fn with_notify(notify: GDestroyNotify) -> Self {
        PrivateStorage {
            raw: UnsafeCell::new(GPrivate::new(notify)),
        }
    }

    pub fn as_private(&'static self) -> PrivateRef<'static> {
        unsafe { Borrowed::from_non_null(NonNull::new_unchecked(self.raw.get())) }
    }

    pub fn owned(&'static self) -> Private {
        unsafe { Private::adopt(NonNull::new_unchecked(self.raw.get())) }
    }
}

impl Default for PrivateStorage {
    fn default() -> Self {
        Self::new()
    }
}

pub trait PrivateExt: AsHandle<Kind = PrivateKind> {
    /// This thread's value; `None` when unset
    fn get(&self) -> Option<Handle> {
        unsafe { Handle::from_payload(ffi::g_private_get(self.as_raw())) }
    }

    /// Set this thread's value without notifying the old one
    fn set(&self, value: Option<Handle>) {
        let value = value.map_or(std::ptr::null_mut(), Handle::as_ptr);
        unsafe { ffi::g_private_set(self.as_raw(), value) }
    }

    /// Set this thread's value, passing a non-null old value to the notify
    fn replace(&self, value: Option<Handle>) {
        let value = value.map_or(std::ptr::null_mut(), Handle::as_ptr);
        unsafe { ffi::g_private_replace(self.as_raw(), value) }
    }
}

impl<T: AsHandle<Kind = PrivateKind> + ?Sized> PrivateExt for T {}
