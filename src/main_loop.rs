//! Main loops (`GMainLoop`) driving a context until told to quit

use std::ptr;

use gbind_core::{resource, AsHandle, Borrowed, Owned, ThreadSafe};
use gbind_sys as ffi;

use crate::error::Result;
use crate::main_context::MainContextRef;

resource! {
    pub enum MainLoopKind: refcounted(ffi::GMainLoop) {
        ref = ffi::g_main_loop_ref,
        unref = ffi::g_main_loop_unref,
    }
}

unsafe impl ThreadSafe for MainLoopKind {}

pub type MainLoop = Owned<MainLoopKind>;
pub type MainLoopRef<'a> = Borrowed<'a, MainLoopKind>;

/// Loop over `context`, or over the default context when `None`
///
/// The loop holds its own reference on the context.
pub fn new(context: Option<MainContextRef<'_>>, is_running: bool) -> Result<MainLoop> {
    let ctx = context.map_or(ptr::null_mut(), |c| c.as_raw());
    let running = if is_running { ffi::GTRUE } else { ffi::GFALSE };
    Ok(unsafe { MainLoop::try_adopt(ffi::g_main_loop_new(ctx, running)) }?)
}

pub trait MainLoopExt: AsHandle<Kind = MainLoopKind> {
    /// Dispatch until [`quit`](Self::quit) is called
    fn run(&self) {
        tracing::debug!(handle = ?self.handle(), "main loop run");
        unsafe { ffi::g_main_loop_run(self.as_raw()) }
    }

    fn quit(&self) {
        unsafe { ffi::g_main_loop_quit(self.as_raw()) }
    }

    fn is_running(&self) -> bool {
        unsafe { ffi::g_main_loop_is_running(self.as_raw()) != ffi::GFALSE }
    }

    /// The loop's context, borrowed from the loop
    fn context(&self) -> MainContextRef<'_> {
        let raw = unsafe { ffi::g_main_loop_get_context(self.as_raw()) };
        // SAFETY: a loop keeps a reference on its context for its whole life
        unsafe { Borrowed::from_non_null(ptr::NonNull::new_unchecked(raw)) }
    }
}

impl<T: AsHandle<Kind = MainLoopKind> + ?Sized> MainLoopExt for T {}
