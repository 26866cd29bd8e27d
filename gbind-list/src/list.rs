//! Doubly linked lists (`GList`)

use core::fmt;
use core::marker::PhantomData;
use core::ptr;

use gbind_sys::{self as ffi, GList};

use crate::iter::Iter;
use crate::node::{DoublyLinked, Node};
use crate::payload::{FromPayload, ToPayload};

/// Borrowed view of a foreign-owned `GList`, positioned at one node
///
/// Copying the view copies the position only.
pub struct ListRef<'a, E> {
    node: *mut GList,
    _marker: PhantomData<(&'a GList, fn() -> E)>,
}

impl<'a, E> ListRef<'a, E> {
    /// # Safety
    ///
    /// Every node reachable from `node` in either direction must stay alive
    /// and unmodified for `'a`, and every non-null payload must be a valid
    /// `E` source.
    pub unsafe fn from_raw(node: *mut GList) -> Self {
        ListRef {
            node,
            _marker: PhantomData,
        }
    }

    pub fn as_ptr(self) -> *mut GList {
        self.node
    }

    pub fn is_empty(self) -> bool {
        self.node.is_null()
    }

    /// Nodes from this position to the end, null payloads included
    pub fn len(self) -> usize {
        unsafe { ffi::g_list_length(self.node) as usize }
    }

    pub fn next(self) -> Option<Self> {
        if self.node.is_null() {
            return None;
        }
        let next = unsafe { GList::next(self.node) };
        (!next.is_null()).then(|| unsafe { Self::from_raw(next) })
    }

    pub fn prev(self) -> Option<Self> {
        if self.node.is_null() {
            return None;
        }
        let prev = unsafe { GList::prev(self.node) };
        (!prev.is_null()).then(|| unsafe { Self::from_raw(prev) })
    }

    /// Rewind to the first node of the chain
    pub fn first(self) -> Self {
        unsafe { Self::from_raw(ffi::g_list_first(self.node)) }
    }
}

impl<'a, E: FromPayload> ListRef<'a, E> {
    /// Element at this node; `None` for a null payload or an empty view
    pub fn get(self) -> Option<E> {
        if self.node.is_null() {
            return None;
        }
        unsafe { E::from_payload(GList::payload(self.node)) }
    }

    pub fn iter(self) -> Iter<'a, GList, E> {
        unsafe { Iter::new(self.node) }
    }
}

impl<E> Clone for ListRef<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ListRef<'_, E> {}

impl<'a, E: FromPayload> IntoIterator for ListRef<'a, E> {
    type Item = E;
    type IntoIter = Iter<'a, GList, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> fmt::Debug for ListRef<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListRef").field("node", &self.node).finish()
    }
}

/// A `GList` whose nodes this value owns
///
/// Dropping the list frees every node with `g_list_free`. Payloads are
/// never freed: the list stores addresses, and `E` decides what they mean.
pub struct List<E> {
    head: *mut GList,
    _marker: PhantomData<E>,
}

impl<E> List<E> {
    pub fn new() -> Self {
        List {
            head: ptr::null_mut(),
            _marker: PhantomData,
        }
    }

    /// Take ownership of the nodes of a foreign list (transfer-container)
    ///
    /// # Safety
    ///
    /// `head` must be null or the first node of a list nobody else frees,
    /// and every non-null payload must stay a valid `E` source for as long as
    /// `E` claims.
    pub unsafe fn from_raw(head: *mut GList) -> Self {
        List {
            head,
            _marker: PhantomData,
        }
    }

    pub fn as_list_ref(&self) -> ListRef<'_, E> {
        unsafe { ListRef::from_raw(self.head) }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_null()
    }

    pub fn len(&self) -> usize {
        unsafe { ffi::g_list_length(self.head) as usize }
    }

    pub fn reverse(&mut self) {
        self.head = unsafe { ffi::g_list_reverse(self.head) };
    }

    /// Hand the nodes back without freeing them
    pub fn into_raw(self) -> *mut GList {
        let head = self.head;
        core::mem::forget(self);
        head
    }
}

impl<E: ToPayload> List<E> {
    pub fn push_back(&mut self, element: E) {
        self.head = unsafe { ffi::g_list_append(self.head, element.to_payload()) };
    }

    pub fn push_front(&mut self, element: E) {
        self.head = unsafe { ffi::g_list_prepend(self.head, element.to_payload()) };
    }

    /// Unlink the first node carrying `element`'s payload
    pub fn remove(&mut self, element: &E) -> bool {
        let before = self.len();
        self.head = unsafe { ffi::g_list_remove(self.head, element.to_payload()) };
        self.len() != before
    }
}

impl<E: FromPayload> List<E> {
    pub fn first(&self) -> Option<E> {
        self.as_list_ref().get()
    }

    pub fn last(&self) -> Option<E> {
        if self.head.is_null() {
            return None;
        }
        unsafe { E::from_payload(GList::payload(ffi::g_list_last(self.head))) }
    }

    /// Payload of the `n`th node; `None` past the end or for a null payload
    pub fn nth(&self, n: usize) -> Option<E> {
        let n = u32::try_from(n).ok()?;
        unsafe { E::from_payload(ffi::g_list_nth_data(self.head, n)) }
    }

    pub fn iter(&self) -> Iter<'_, GList, E> {
        unsafe { Iter::new(self.head) }
    }
}

impl<E> Default for List<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for List<E> {
    fn drop(&mut self) {
        if !self.head.is_null() {
            unsafe { ffi::g_list_free(self.head) }
        }
    }
}

impl<E: ToPayload> FromIterator<E> for List<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut list = List::new();
        for element in iter {
            list.push_front(element);
        }
        list.reverse();
        list
    }
}

impl<'a, E: FromPayload> IntoIterator for &'a List<E> {
    type Item = E;
    type IntoIter = Iter<'a, GList, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: FromPayload + fmt::Debug> fmt::Debug for List<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
