//! Node shapes of the foreign lists

use gbind_sys::{gpointer, GList, GSList};
use static_assertions::const_assert_eq;

// The walk reads `data` and `next` through these offsets only.
const_assert_eq!(core::mem::offset_of!(GList, data), 0);
const_assert_eq!(core::mem::offset_of!(GSList, data), 0);
const_assert_eq!(
    core::mem::offset_of!(GList, next),
    core::mem::offset_of!(GSList, next)
);

/// A foreign list node: payload plus forward link
///
/// # Safety
///
/// Implementors must be `#[repr(C)]` mirrors of a foreign node, and the
/// accessors must only read the node.
pub unsafe trait Node: Sized {
    /// # Safety
    ///
    /// `node` must point to a live node.
    unsafe fn payload(node: *const Self) -> gpointer;

    /// # Safety
    ///
    /// `node` must point to a live node.
    unsafe fn next(node: *const Self) -> *mut Self;
}

/// Nodes that also link backwards
///
/// # Safety
///
/// As [`Node`].
pub unsafe trait DoublyLinked: Node {
    /// # Safety
    ///
    /// `node` must point to a live node.
    unsafe fn prev(node: *const Self) -> *mut Self;
}

unsafe impl Node for GList {
    unsafe fn payload(node: *const Self) -> gpointer {
        (*node).data
    }

    unsafe fn next(node: *const Self) -> *mut Self {
        (*node).next
    }
}

unsafe impl DoublyLinked for GList {
    unsafe fn prev(node: *const Self) -> *mut Self {
        (*node).prev
    }
}

unsafe impl Node for GSList {
    unsafe fn payload(node: *const Self) -> gpointer {
        (*node).data
    }

    unsafe fn next(node: *const Self) -> *mut Self {
        (*node).next
    }
}
