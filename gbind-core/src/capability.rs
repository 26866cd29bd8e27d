//! Capability trait shared by views and owners

use crate::handle::Handle;
use crate::resource::Resource;

/// Exposes a live foreign resource of one kind
///
/// Every per-kind operation set is an extension trait with default methods
/// written only against `handle`/`as_raw`, blanket-implemented for every
/// `AsHandle<Kind = K>`. Views and owners therefore share one body per
/// operation.
///
/// # Safety
///
/// For as long as `&self` is borrowed, `handle` must return the address of a
/// live resource of kind `Self::Kind`.
pub unsafe trait AsHandle {
    type Kind: Resource;

    fn handle(&self) -> Handle;

    /// The handle reinterpreted as the kind's foreign type
    fn as_raw(&self) -> *mut <Self::Kind as Resource>::Raw {
        // SAFETY: the trait contract fixes the kind of the handle
        unsafe { self.handle().reinterpret() }
    }
}

unsafe impl<T: AsHandle + ?Sized> AsHandle for &T {
    type Kind = T::Kind;

    fn handle(&self) -> Handle {
        (**self).handle()
    }
}
