//! Stopwatch timers (`GTimer`)

use std::time::Duration;

use gbind_core::{resource, AsHandle, Borrowed, Owned};
use gbind_sys as ffi;

use crate::error::Result;

resource! {
    pub enum TimerKind: transferred(ffi::GTimer) {
        free = ffi::g_timer_destroy,
    }
}

pub type Timer = Owned<TimerKind>;
pub type TimerRef<'a> = Borrowed<'a, TimerKind>;

/// Timer that is already running
pub fn new() -> Result<Timer> {
    Ok(unsafe { Timer::try_adopt(ffi::g_timer_new()) }?)
}

pub trait TimerExt: AsHandle<Kind = TimerKind> {
    /// Restart from zero
    fn start(&self) {
        unsafe { ffi::g_timer_start(self.as_raw()) }
    }

    fn stop(&self) {
        unsafe { ffi::g_timer_stop(self.as_raw()) }
    }

    /// Resume a stopped timer without losing the time already counted
    fn resume(&self) {
        unsafe { ffi::g_timer_continue(self.as_raw()) }
    }

    fn reset(&self) {
        unsafe { ffi::g_timer_reset(self.as_raw()) }
    }

    fn elapsed(&self) -> Duration {
        let secs = unsafe { ffi::g_timer_elapsed(self.as_raw(), std::ptr::null_mut()) };
        Duration::try_from_secs_f64(secs).unwrap_or_default()
    }

    fn is_active(&self) -> bool {
        unsafe { ffi::g_timer_is_active(self.as_raw()) != ffi::GFALSE }
    }
}

impl<T: AsHandle<Kind = TimerKind> + ?Sized> TimerExt for T {}
