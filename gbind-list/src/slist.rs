//! Singly linked lists (`GSList`)

use core::fmt;
use core::marker::PhantomData;
use core::ptr;

use gbind_sys::{self as ffi, GSList};

use crate::iter::Iter;
use crate::node::Node;
use crate::payload::{FromPayload, ToPayload};

/// Borrowed view of a foreign-owned `GSList`, positioned at one node
pub struct SListRef<'a, E> {
    node: *mut GSList,
    _marker: PhantomData<(&'a GSList, fn() -> E)>,
}

impl<'a, E> SListRef<'a, E> {
    /// # Safety
    ///
    /// Every node reachable from `node` must stay alive and unmodified for
    /// `'a`, and every non-null payload must be a valid `E` source.
    pub unsafe fn from_raw(node: *mut GSList) -> Self {
        SListRef {
            node,
            _marker: PhantomData,
        }
    }

    pub fn as_ptr(self) -> *mut GSList {
        self.node
    }

    pub fn is_empty(self) -> bool {
        self.node.is_null()
    }

    pub fn len(self) -> usize {
        unsafe { ffi::g_slist_length(self.node) as usize }
    }

    pub fn next(self) -> Option<Self> {
        if self.node.is_null() {
            return None;
        }
        let next = unsafe { GSList::next(self.node) };
        (!next.is_null()).then(|| unsafe { Self::from_raw(next) })
    }
}

impl<'a, E: FromPayload> SListRef<'a, E> {
    pub fn get(self) -> Option<E> {
        if self.node.is_null() {
            return None;
        }
        unsafe { E::from_payload(GSList::payload(self.node)) }
    }

    pub fn iter(self) -> Iter<'a, GSList, E> {
        unsafe { Iter::new(self.node) }
    }
}

impl<E> Clone for SListRef<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for SListRef<'_, E> {}

impl<'a, E: FromPayload> IntoIterator for SListRef<'a, E> {
    type Item = E;
    type IntoIter = Iter<'a, GSList, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E> fmt::Debug for SListRef<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SListRef").field("node", &self.node).finish()
    }
}

/// A `GSList` whose nodes this value owns; freed with `g_slist_free`
pub struct SList<E> {
    head: *mut GSList,
    _marker: PhantomData<E>,
}

impl<E> SList<E> {
    pub fn new() -> Self {
        SList {
            head: ptr::null_mut(),
            _marker: PhantomData,
        }
    }

    /// # Safety
    ///
    /// As [`List::from_raw`](crate::List::from_raw).
    pub unsafe fn from_raw(head: *mut GSList) -> Self {
        SList {
            head,
            _marker: PhantomData,
        }
    }

    pub fn as_slist_ref(&self) -> SListRef<'_, E> {
        unsafe { SListRef::from_raw(self.head) }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_null()
    }

    pub fn len(&self) -> usize {
        unsafe { ffi::g_slist_length(self.head) as usize }
    }

    pub fn reverse(&mut self) {
        self.head = unsafe { ffi::g_slist_reverse(self.head) };
    }

    pub fn into_raw(self) -> *mut GSList {
        let head = self.head;
        core::mem::forget(self);
        head
    }
}

impl<E: ToPayload> SList<E> {
    pub fn push_back(&mut self, element: E) {
        self.head = unsafe { ffi::g_slist_append(self.head, element.to_payload()) };
    }

    pub fn push_front(&mut self, element: E) {
        self.head = unsafe { ffi::g_slist_prepend(self.head, element.to_payload()) };
    }

    pub fn remove(&mut self, element: &E) -> bool {
        let before = self.len();
        self.head = unsafe { ffi::g_slist_remove(self.head, element.to_payload()) };
        self.len() != before
    }
}

impl<E: FromPayload> SList<E> {
    pub fn first(&self) -> Option<E> {
        self.as_slist_ref().get()
    }

    pub fn last(&self) -> Option<E> {
        if self.head.is_null() {
            return None;
        }
        unsafe { E::from_payload(GSList::payload(ffi::g_slist_last(self.head))) }
    }

    pub fn nth(&self, n: usize) -> Option<E> {
        let n = u32::try_from(n).ok()?;
        unsafe { E::from_payload(ffi::g_slist_nth_data(self.head, n)) }
    }

    pub fn iter(&self) -> Iter<'_, GSList, E> {
        unsafe { Iter::new(self.head) }
    }
}

impl<E> Default for SList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Drop for SList<E> {
    fn drop(&mut self) {
        if !self.head.is_null() {
            unsafe { ffi::g_slist_free(self.head) }
        }
    }
}

impl<E: ToPayload> FromIterator<E> for SList<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut list = SList::new();
        for element in iter {
            list.push_front(element);
        }
        list.reverse();
        list
    }
}

impl<'a, E: FromPayload> IntoIterator for &'a SList<E> {
    type Item = E;
    type IntoIter = Iter<'a, GSList, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: FromPayload + fmt::Debug> fmt::Debug for SList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
