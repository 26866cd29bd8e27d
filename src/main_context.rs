//! Event dispatch contexts (`GMainContext`)

use gbind_core::{resource, AsHandle, Borrowed, Owned, ThreadSafe};
use gbind_sys as ffi;

use crate::error::Result;

resource! {
    pub enum MainContextKind: refcounted(ffi::GMainContext) {
        ref = ffi::g_main_context_ref,
        unref = ffi::g_main_context_unref,
    }
}

unsafe impl ThreadSafe for MainContextKind {}

pub type MainContext = Owned<MainContextKind>;
pub type MainContextRef<'a> = Borrowed<'a, MainContextKind>;

/// Fresh context with no sources
pub fn new() -> Result<MainContext> {
    Ok(unsafe { MainContext::try_adopt(ffi::g_main_context_new()) }?)
}

/// The process-wide default context, with a reference of its own
///
/// The library keeps the default context alive forever; the returned owner
/// only balances its own reference.
pub fn default() -> Result<MainContext> {
    Ok(unsafe { MainContext::try_retained(ffi::g_main_context_default()) }?)
}

pub trait MainContextExt: AsHandle<Kind = MainContextKind> {
    /// Run one round of dispatch; `true` if any source was dispatched
    ///
    /// With `may_block` the call waits for a ready source or a wakeup.
    fn iteration(&self, may_block: bool) -> bool {
        let may_block = if may_block { ffi::GTRUE } else { ffi::GFALSE };
        unsafe { ffi::g_main_context_iteration(self.as_raw(), may_block) != ffi::GFALSE }
    }

    fn pending(&self) -> bool {
        unsafe { ffi::g_main_context_pending(self.as_raw()) != ffi::GFALSE }
    }

    /// Make a blocked `iteration` return
    fn wakeup(&self) {
        unsafe { ffi::g_main_context_wakeup(self.as_raw()) }
    }
}

impl<T: AsHandle<Kind = MainContextKind> + ?Sized> MainContextExt for T {}
