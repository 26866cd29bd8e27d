//! Owning wrappers bound to a resource's release discipline

use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use tracing::trace;

use crate::borrowed::Borrowed;
use crate::capability::AsHandle;
use crate::error::HandleError;
use crate::handle::Handle;
use crate::resource::{Discipline, RefCounted, Resource, ThreadSafe};

/// Owner of one claim on a foreign resource of kind `K`
///
/// Dropping the owner releases its claim exactly once, the way `K`'s
/// discipline says: one decrement for ref-counted kinds, one free for
/// transferred kinds, nothing for uncounted kinds.
///
/// `Clone` exists only for [`RefCounted`] kinds, where it takes a foreign
/// reference. Other kinds cannot be duplicated; where the foreign library has
/// a deep-copy call it is exposed as an explicit method on the kind.
pub struct Owned<K: Resource> {
    raw: NonNull<K::Raw>,
    _marker: PhantomData<K::Raw>,
}

impl<K: Resource> Owned<K> {
    /// Take over a claim the caller already holds (transfer-in)
    ///
    /// No foreign call is made.
    ///
    /// # Safety
    ///
    /// `raw` must be a live resource of kind `K` and the caller must own one
    /// claim on it that nothing else will release. Adopting the same claim
    /// twice releases it twice.
    pub unsafe fn adopt(raw: NonNull<K::Raw>) -> Self {
        trace!(kind = K::NAME, discipline = %K::DISCIPLINE, handle = ?raw, "adopt");
        Owned {
            raw,
            _marker: PhantomData,
        }
    }

    /// [`adopt`](Self::adopt) the result of a foreign constructor
    ///
    /// # Safety
    ///
    /// As [`adopt`](Self::adopt) when `raw` is non-null.
    pub unsafe fn try_adopt(raw: *mut K::Raw) -> Result<Self, HandleError> {
        match NonNull::new(raw) {
            Some(raw) => Ok(Self::adopt(raw)),
            None => Err(HandleError::Null { kind: K::NAME }),
        }
    }

    pub fn borrow(&self) -> Borrowed<'_, K> {
        Borrowed::of(self)
    }

    pub fn discipline(&self) -> Discipline {
        K::DISCIPLINE
    }

    /// Give the claim back to the caller without releasing it
    pub fn into_raw(self) -> NonNull<K::Raw> {
        let raw = self.raw;
        mem::forget(self);
        raw
    }
}

impl<K: RefCounted> Owned<K> {
    /// Take a new foreign reference on a resource the caller does not own
    ///
    /// # Safety
    ///
    /// `raw` must be a live resource of kind `K`.
    pub unsafe fn retained(raw: NonNull<K::Raw>) -> Self {
        K::retain(raw.as_ptr());
        trace!(kind = K::NAME, handle = ?raw, "retain");
        Owned {
            raw,
            _marker: PhantomData,
        }
    }

    /// [`retained`](Self::retained) for a pointer that may be null
    ///
    /// # Safety
    ///
    /// As [`retained`](Self::retained) when `raw` is non-null.
    pub unsafe fn try_retained(raw: *mut K::Raw) -> Result<Self, HandleError> {
        match NonNull::new(raw) {
            Some(raw) => Ok(Self::retained(raw)),
            None => Err(HandleError::Null { kind: K::NAME }),
        }
    }

    /// Take a new foreign reference on the resource behind `value`
    pub fn retain_from<T: AsHandle<Kind = K> + ?Sized>(value: &T) -> Self {
        let raw = Borrowed::of(value).as_non_null();
        // SAFETY: `value` keeps the resource alive for the duration of the retain
        unsafe { Self::retained(raw) }
    }
}

unsafe impl<K: Resource> AsHandle for Owned<K> {
    type Kind = K;

    fn handle(&self) -> Handle {
        Handle::from_ptr(self.raw.as_ptr())
    }
}

impl<K: RefCounted> Clone for Owned<K> {
    fn clone(&self) -> Self {
        Self::retain_from(self)
    }
}

impl<K: Resource> Drop for Owned<K> {
    fn drop(&mut self) {
        trace!(kind = K::NAME, discipline = %K::DISCIPLINE, handle = ?self.raw, "release");
        // SAFETY: this owner holds exactly one claim, and drop runs once
        unsafe { K::release(self.raw.as_ptr()) }
    }
}

impl<K: Resource> PartialEq for Owned<K> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<K: Resource> Eq for Owned<K> {}

impl<K: Resource> fmt::Debug for Owned<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Owned")
            .field("kind", &K::NAME)
            .field("discipline", &K::DISCIPLINE)
            .field("handle", &self.raw)
            .finish()
    }
}

unsafe impl<K: ThreadSafe> Send for Owned<K> {}
unsafe impl<K: ThreadSafe> Sync for Owned<K> {}
