//! Compiled glob patterns (`GPatternSpec`) supporting `*` and `?`

use gbind_core::{resource, AsHandle, Borrowed, Owned};
use gbind_sys as ffi;

use crate::error::Result;
use crate::strings::to_cstring;

resource! {
    pub enum PatternSpecKind: transferred(ffi::GPatternSpec) {
        free = ffi::g_pattern_spec_free,
    }
}

pub type PatternSpec = Owned<PatternSpecKind>;
pub type PatternSpecRef<'a> = Borrowed<'a, PatternSpecKind>;

pub fn new(pattern: &str) -> Result<PatternSpec> {
    let pattern = to_cstring(pattern)?;
    Ok(unsafe { PatternSpec::try_adopt(ffi::g_pattern_spec_new(pattern.as_ptr())) }?)
}

pub trait PatternSpecExt: AsHandle<Kind = PatternSpecKind> {
    /// Whether the whole of `s` matches; `?` matches one character
    fn matches(&self, s: &str) -> Result<bool> {
        let s = to_cstring(s)?;
        Ok(unsafe { ffi::g_pattern_spec_match_string(self.as_raw(), s.as_ptr()) } != ffi::GFALSE)
    }

    fn equal<P: AsHandle<Kind = PatternSpecKind> + ?Sized>(&self, other: &P) -> bool {
        unsafe { ffi::g_pattern_spec_equal(self.as_raw(), other.as_raw()) != ffi::GFALSE }
    }

    fn copy(&self) -> Result<PatternSpec> {
        Ok(unsafe { PatternSpec::try_adopt(ffi::g_pattern_spec_copy(self.as_raw())) }?)
    }
}

impl<T: AsHandle<Kind = PatternSpecKind> + ?Sized> PatternSpecExt for T {}
