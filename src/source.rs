//! Event sources (`GSource`) dispatched by a main context

use std::ops::ControlFlow;
use std::ptr;
use std::time::Duration;

use gbind_core::{resource, AsHandle, Borrowed, Owned};
use gbind_sys::{self as ffi, gboolean, gpointer};

use crate::error::Result;
use crate::main_context::MainContextRef;

resource! {
    pub enum SourceKind: refcounted(ffi::GSource) {
        ref = ffi::g_source_ref,
        unref = ffi::g_source_unref,
    }
}

pub type Source = Owned<SourceKind>;
pub type SourceRef<'a> = Borrowed<'a, SourceKind>;

/// Source that is ready on every iteration
pub fn idle() -> Result<Source> {
    Ok(unsafe { Source::try_adopt(ffi::g_idle_source_new()) }?)
}

/// Source that becomes ready every `interval`, at millisecond resolution
pub fn timeout(interval: Duration) -> Result<Source> {
    let ms = u32::try_from(interval.as_millis()).unwrap_or(u32::MAX);
    Ok(unsafe { Source::try_adopt(ffi::g_timeout_source_new(ms)) }?)
}

unsafe extern "C" fn dispatch<F>(data: gpointer) -> gboolean
where
    F: FnMut() -> ControlFlow<()>,
{
    let callback = &mut *data.cast::<F>();
    match callback() {
        ControlFlow::Continue(()) => ffi::G_SOURCE_CONTINUE,
        ControlFlow::Break(()) => ffi::G_SOURCE_REMOVE,
    }
}

unsafe extern "C" fn drop_callback<F>(data: gpointer) {
    drop(Box::from_raw(data.cast::<F>()));
}

pub trait SourceExt: AsHandle<Kind = SourceKind> {
    /// Install the dispatch callback, dropping any previous one
    ///
    /// `Continue` keeps the source attached, `Break` destroys it. The closure
    /// is dropped when the source is destroyed or finalized.
    fn set_callback<F>(&self, callback: F)
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let data = Box::into_raw(Box::new(callback));
        unsafe {
            ffi::g_source_set_callback(
                self.as_raw(),
                Some(dispatch::<F>),
                data.cast(),
                Some(drop_callback::<F>),
            )
        }
    }

    /// Attach to `context` (default context for `None`); returns the source id
    ///
    /// The context takes its own reference on the source.
    fn attach(&self, context: Option<MainContextRef<'_>>) -> u32 {
        let ctx = context.map_or(ptr::null_mut(), |c| c.as_raw());
        let id = unsafe { ffi::g_source_attach(self.as_raw(), ctx) };
        tracing::trace!(handle = ?self.handle(), id, "source attached");
        id
    }

    /// Detach from the context; the callback is dropped immediately
    fn destroy(&self) {
        unsafe { ffi::g_source_destroy(self.as_raw()) }
    }

    fn is_destroyed(&self) -> bool {
        unsafe { ffi::g_source_is_destroyed(self.as_raw()) != ffi::GFALSE }
    }

    /// Id assigned by `attach`
    ///
    /// Only meaningful once the source is attached; asking an unattached
    /// source is a caller error the library does not report.
    fn id(&self) -> u32 {
        unsafe { ffi::g_source_get_id(self.as_raw()) }
    }
}

impl<T: AsHandle<Kind = SourceKind> + ?Sized> SourceExt for T {}
