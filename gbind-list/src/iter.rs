//! Forward walk over a node chain

use core::iter::FusedIterator;
use core::marker::PhantomData;

use crate::node::Node;
use crate::payload::FromPayload;

/// Lazy, forward-only walk from a head node
///
/// The iterator owns nothing but its cursor. It cannot be rewound; build a
/// new one from the original head to walk the list again.
pub struct Iter<'a, N: Node, E> {
    node: *mut N,
    _marker: PhantomData<(&'a N, fn() -> E)>,
}

impl<'a, N: Node, E: FromPayload> Iter<'a, N, E> {
    /// Start at `head`; a null head is an empty list
    ///
    /// # Safety
    ///
    /// Every node reachable from `head` must stay alive and unmodified for
    /// `'a`, and every non-null payload must be a valid `E` source.
    pub unsafe fn new(head: *mut N) -> Self {
        Iter {
            node: head,
            _marker: PhantomData,
        }
    }
}

impl<N: Node, E: FromPayload> Iterator for Iter<'_, N, E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        while !self.node.is_null() {
            // SAFETY: the constructor guarantees every reachable node is live
            let (data, next) = unsafe { (N::payload(self.node), N::next(self.node)) };
            self.node = next;
            if let Some(element) = unsafe { E::from_payload(data) } {
                return Some(element);
            }
        }
        None
    }
}

impl<N: Node, E: FromPayload> FusedIterator for Iter<'_, N, E> {}

#[cfg(test)]
mod tests {
    use super::*;
    use gbind_core::Handle;
    use gbind_sys::GSList;

    #[test]
    fn test_sparse_chain() {
        let mut c = GSList {
            data: 3usize as _,
            next: core::ptr::null_mut(),
        };
        let mut b = GSList {
            data: core::ptr::null_mut(),
            next: &mut c,
        };
        let mut a = GSList {
            data: 1usize as _,
            next: &mut b,
        };
        let got: Vec<usize> = unsafe { Iter::<GSList, Handle>::new(&mut a) }
            .map(Handle::addr)
            .collect();
        assert_eq!(got, vec![1, 3]);
    }

    #[test]
    fn test_fused_after_end() {
        let mut iter = unsafe { Iter::<GSList, Handle>::new(core::ptr::null_mut()) };
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
