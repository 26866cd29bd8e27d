//! Layout verification for the `#[repr(C)]` mirrors in `gbind-sys`
//!
//! Compile-time checks live here; the tests compare against layouts the C
//! compiler reports for the public header definitions.

use core::mem::{align_of, size_of};

use gbind_sys::{GError, GList, GMutex, GPrivate, GRecMutex, GSList};
use static_assertions::{assert_eq_align, assert_eq_size, const_assert_eq};

/// Fail the build if a type's size differs from the expected value
#[macro_export]
macro_rules! verify_size {
    ($rust_type:ty, $expected_size:expr) => {
        const _: () = {
            const SIZE: usize = ::core::mem::size_of::<$rust_type>();
            assert!(SIZE == $expected_size, "size mismatch");
        };
    };
}

/// Fail the build if a field sits at an unexpected offset
#[macro_export]
macro_rules! verify_offset {
    ($type:ty, $field:ident, $expected_offset:expr) => {
        const _: () = {
            const OFFSET: usize = ::memoffset::offset_of!($type, $field);
            assert!(OFFSET == $expected_offset, "offset mismatch");
        };
    };
}

const PTR: usize = size_of::<*mut u8>();

// Node payload first, links after, on every target.
verify_offset!(GList, data, 0);
verify_offset!(GList, next, PTR);
verify_offset!(GList, prev, 2 * PTR);
verify_size!(GList, 3 * PTR);
verify_offset!(GSList, data, 0);
verify_offset!(GSList, next, PTR);
verify_size!(GSList, 2 * PTR);

verify_offset!(GError, domain, 0);
verify_offset!(GError, code, 4);
const_assert_eq!(memoffset::offset_of!(GError, message) % PTR, 0);

assert_eq_size!(GMutex, [u32; 2]);
assert_eq_align!(GMutex, usize);
verify_offset!(GRecMutex, i, PTR);
verify_size!(GPrivate, 4 * PTR);

/// Outcome of comparing one Rust mirror with its C definition
#[derive(Debug, PartialEq, Eq)]
pub struct LayoutReport {
    pub struct_name: &'static str,
    pub size_match: bool,
    pub align_match: bool,
}

impl LayoutReport {
    pub fn is_compatible(&self) -> bool {
        self.size_match && self.align_match
    }
}

/// Compare `T` against the size and alignment the C compiler reported
pub fn compare_layout<T>(name: &'static str, c_size: usize, c_align: usize) -> LayoutReport {
    LayoutReport {
        struct_name: name,
        size_match: size_of::<T>() == c_size,
        align_match: align_of::<T>() == c_align,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_flags() {
        let ok = compare_layout::<GSList>("GSList", 2 * PTR, PTR);
        assert!(ok.is_compatible());
        let bad = compare_layout::<GSList>("GSList", PTR, PTR);
        assert!(!bad.is_compatible());
        assert!(bad.align_match);
    }
}
