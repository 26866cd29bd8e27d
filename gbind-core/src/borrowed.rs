//! Non-owning views over foreign resources

use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::capability::AsHandle;
use crate::handle::Handle;
use crate::owned::Owned;
use crate::resource::{RefCounted, Resource, ThreadSafe};

/// Non-owning view of a foreign resource of kind `K`
///
/// A view is an address and nothing else: building, copying and dropping one
/// never calls into the foreign library. The lifetime ties it to whichever
/// owner (or static allocation) really keeps the resource alive; views built
/// from raw pointers get an unbounded lifetime and the caller answers for it.
pub struct Borrowed<'a, K: Resource> {
    raw: NonNull<K::Raw>,
    _marker: PhantomData<&'a K::Raw>,
}

impl<'a, K: Resource> Borrowed<'a, K> {
    /// View a pointer of the kind's exact foreign type; `None` for null
    ///
    /// # Safety
    ///
    /// A non-null `raw` must point to a live resource of kind `K` that stays
    /// alive for `'a`.
    pub unsafe fn from_raw(raw: *mut K::Raw) -> Option<Self> {
        NonNull::new(raw).map(|raw| Self::from_non_null(raw))
    }

    /// # Safety
    ///
    /// `raw` must point to a live resource of kind `K` that stays alive for
    /// `'a`.
    pub unsafe fn from_non_null(raw: NonNull<K::Raw>) -> Self {
        Borrowed {
            raw,
            _marker: PhantomData,
        }
    }

    /// View a pointer of some other type the caller asserts is really `K`
    ///
    /// # Safety
    ///
    /// As [`from_raw`](Self::from_raw), and the pointee must be a `K::Raw`
    /// whatever `T` says.
    pub unsafe fn from_ptr<T>(ptr: *mut T) -> Option<Self> {
        Self::from_raw(ptr.cast())
    }

    /// View an untyped handle
    ///
    /// # Safety
    ///
    /// As [`from_raw`](Self::from_raw), for the address held by `handle`.
    pub unsafe fn from_handle(handle: Handle) -> Option<Self> {
        Self::from_raw(handle.reinterpret())
    }

    /// Re-wrap any value exposing the same kind; no allocation, no retain
    pub fn of<T: AsHandle<Kind = K> + ?Sized>(value: &'a T) -> Self {
        // SAFETY: AsHandle promises a live resource while `value` is borrowed,
        // and a live resource is never at address zero.
        unsafe { Self::from_non_null(NonNull::new_unchecked(value.as_raw())) }
    }

    pub fn as_non_null(self) -> NonNull<K::Raw> {
        self.raw
    }
}

impl<K: RefCounted> Borrowed<'_, K> {
    /// Take a foreign reference and return an owner holding it
    pub fn retain(self) -> Owned<K> {
        Owned::retain_from(&self)
    }
}

unsafe impl<K: Resource> AsHandle for Borrowed<'_, K> {
    type Kind = K;

    fn handle(&self) -> Handle {
        Handle::from_ptr(self.raw.as_ptr())
    }
}

impl<K: Resource> Clone for Borrowed<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Resource> Copy for Borrowed<'_, K> {}

impl<K: Resource> PartialEq for Borrowed<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<K: Resource> Eq for Borrowed<'_, K> {}

impl<K: Resource> fmt::Debug for Borrowed<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Borrowed")
            .field("kind", &K::NAME)
            .field("handle", &self.raw)
            .finish()
    }
}

unsafe impl<K: ThreadSafe> Send for Borrowed<'_, K> {}
unsafe impl<K: ThreadSafe> Sync for Borrowed<'_, K> {}
