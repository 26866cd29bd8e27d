//! Foreign mutexes (`GMutex`, `GRecMutex`)
//!
//! Mutexes are plain storage owned by whoever embeds them, so their kinds
//! are uncounted: owners and views never release anything. The storage
//! types here provide that embedding for Rust code.

use std::cell::UnsafeCell;
use std::marker::PhantomData;
use std::ptr::NonNull;

use gbind_core::{resource, AsHandle, Borrowed, Owned, ThreadSafe};
use gbind_sys::{self as ffi, GMutex, GRecMutex};

resource! {
    pub enum MutexKind: uncounted(GMutex)
}

resource! {
    pub enum RecMutexKind: uncounted(GRecMutex)
}

unsafe impl ThreadSafe for MutexKind {}
unsafe impl ThreadSafe for RecMutexKind {}

pub type Mutex = Owned<MutexKind>;
pub type MutexRef<'a> = Borrowed<'a, MutexKind>;
pub type RecMutex = Owned<RecMutexKind>;
pub type RecMutexRef<'a> = Borrowed<'a, RecMutexKind>;

/// Rust-owned storage for a `GMutex`, usable in a `static`
pub struct MutexStorage {
    raw: UnsafeCell<GMutex>,
}

// The foreign mutex is built for concurrent use through shared references.
unsafe impl Send for MutexStorage {}
unsafe impl Sync for MutexStorage {}

impl MutexStorage {
    pub const fn new() -> Self {
        MutexStorage {
            raw: UnsafeCell::new(GMutex::zeroed()),
        }
    }

    pub fn as_mutex(&self) -> MutexRef<'_> {
        // SAFETY: UnsafeCell::get never returns null
        unsafe { Borrowed::from_non_null(NonNull::new_unchecked(self.raw.get())) }
    }

    /// Uncounted owner of static storage
    pub fn owned(&'static self) -> Mutex {
        unsafe { Mutex::adopt(NonNull::new_unchecked(self.raw.get())) }
    }

    /// Lock for as long as the guard borrows the storage
    pub fn guard(&self) -> MutexGuard<'_> {
        self.as_mutex().lock();
        MutexGuard {
            raw: self.raw.get(),
            _marker: PhantomData,
        }
    }

    pub fn try_guard(&self) -> Option<MutexGuard<'_>> {
        self.as_mutex().trylock().then(|| MutexGuard {
            raw: self.raw.get(),
            _marker: PhantomData,
        })
    }
}

impl Default for MutexStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MutexStorage {
    fn drop(&mut self) {
        unsafe { ffi::g_mutex_clear(self.raw.get()) }
    }
}

/// Rust-owned storage for a `GRecMutex`
pub struct RecMutexStorage {
    raw: UnsafeCell<GRecMutex>,
}

unsafe impl Send for RecMutexStorage {}
unsafe impl Sync for RecMutexStorage {}

impl RecMutexStorage {
    pub const fn new() -> Self {
        RecMutexStorage {
            raw: UnsafeCell::new(GRecMutex::zeroed()),
        }
    }

    pub fn as_rec_mutex(&self) -> RecMutexRef<'_> {
        unsafe { Borrowed::from_non_null(NonNull::new_unchecked(self.raw.get())) }
    }

    pub fn owned(&'static self) -> RecMutex {
        unsafe { RecMutex::adopt(NonNull::new_unchecked(self.raw.get())) }
    }

    pub fn guard(&self) -> RecMutexGuard<'_> {
        self.as_rec_mutex().lock();
        RecMutexGuard {
            raw: self.raw.get(),
            _marker: PhantomData,
        }
    }

    pub fn try_guard(&self) -> Option<RecMutexGuard<'_>> {
        self.as_rec_mutex().trylock().then(|| RecMutexGuard {
            raw: self.raw.get(),
            _marker: PhantomData,
        })
    }
}

impl Default for RecMutexStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RecMutexStorage {
    fn drop(&mut self) {
        unsafe { ffi::g_rec_mutex_clear(self.raw.get()) }
    }
}

pub trait MutexExt: AsHandle<Kind = MutexKind> {
    /// # Safety
    ///
    /// The mutex must not be locked or in use by another thread.
    unsafe fn init(&self) {
        ffi::g_mutex_init(self.as_raw())
    }

    /// # Safety
    ///
    /// The mutex must be unlocked and never used again without `init`.
    unsafe fn clear(&self) {
        ffi::g_mutex_clear(self.as_raw())
    }

    fn lock(&self) {
        unsafe { ffi::g_mutex_lock(self.as_raw()) }
    }

    /// # Safety
    ///
    /// The calling thread must hold the lock.
    unsafe fn unlock(&self) {
        ffi::g_mutex_unlock(self.as_raw())
    }

    fn trylock(&self) -> bool {
        unsafe { ffi::g_mutex_trylock(self.as_raw()) != ffi::GFALSE }
    }

    /// Lock until the guard is dropped
    fn guard(&self) -> MutexGuard<'_> {
        self.lock();
        MutexGuard {
            raw: self.as_raw(),
            _marker: PhantomData,
        }
    }

    fn try_guard(&self) -> Option<MutexGuard<'_>> {
        self.trylock().then(|| MutexGuard {
            raw: self.as_raw(),
            _marker: PhantomData,
        })
    }
}

impl<T: AsHandle<Kind = MutexKind> + ?Sized> MutexExt for T {}

pub trait RecMutexExt: AsHandle<Kind = RecMutexKind> {
    /// # Safety
    ///
    /// The mutex must not be locked or in use by another thread.
    unsafe fn init(&self) {
        ffi::g_rec_mutex_init(self.as_raw())
    }

    /// # Safety
    ///
    /// The mutex must be unlocked and never used again without `init`.
    unsafe fn clear(&self) {
        ffi::g_rec_mutex_clear(self.as_raw())
    }

    /// Lock, possibly again from the thread already holding it
    fn lock(&self) {
        unsafe { ffi::g_rec_mutex_lock(self.as_raw()) }
    }

    /// # Safety
    ///
    /// The calling thread must hold the lock at least once.
    unsafe fn unlock(&self) {
        ffi::g_rec_mutex_unlock(self.as_raw())
    }

    fn trylock(&self) -> bool {
        unsafe { ffi::g_rec_mutex_trylock(self.as_raw()) != ffi::GFALSE }
    }

    fn guard(&self) -> RecMutexGuard<'_> {
        self.lock();
        RecMutexGuard {
            raw: self.as_raw(),
            _marker: PhantomData,
        }
    }

    fn try_guard(&self) -> Option<RecMutexGuard<'_>> {
        self.trylock().then(|| RecMutexGuard {
            raw: self.as_raw(),
            _marker: PhantomData,
        })
    }
}

impl<T: AsHandle<Kind = RecMutexKind> + ?Sized> RecMutexExt for T {}

/// Held lock on a `GMutex`; unlocks on drop, on the locking thread
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct MutexGuard<'a> {
    raw: *mut GMutex,
    _marker: PhantomData<&'a GMutex>,
}

impl Drop for MutexGuard<'_> {
    fn drop(&mut self) {
        unsafe { ffi::g_mutex_unlock(self.raw) }
    }
}

/// Held lock on a `GRecMutex`
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct RecMutexGuard<'a> {
    raw: *mut GRecMutex,
    _marker: PhantomData<&'a GRecMutex>,
}

impl Drop for RecMutexGuard<'_> {
    fn drop(&mut self) {
        unsafe { ffi::g_rec_mutex_unlock(self.raw) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gbind_core::{Discipline, Resource};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    static SHARED: MutexStorage = MutexStorage::new();

    fn try_from_other_thread(storage: &MutexStorage) -> bool {
        std::thread::scope(|s| s.spawn(|| storage.try_guard().is_some()).join().unwrap())
    }

    #[test]
    fn test_guard_excludes_other_threads() {
        let storage = MutexStorage::new();
        let mutex = storage.as_mutex();
        let guard = mutex.guard();
        assert!(!try_from_other_thread(&storage));
        drop(guard);
        assert!(try_from_other_thread(&storage));
    }

    #[test]
    fn test_storage_guard_outlives_temporary_view() {
        let storage = MutexStorage::new();
        let guard = storage.guard();
        assert!(!try_from_other_thread(&storage));
        drop(guard);
        let again = storage.try_guard();
        assert!(again.is_some());
    }

    #[test]
    fn test_rec_mutex_reenters() {
        let storage = RecMutexStorage::new();
        let mutex = storage.as_rec_mutex();
        let outer = mutex.guard();
        let inner = mutex.try_guard();
        assert!(inner.is_some());
        drop(inner);
        drop(outer);
    }

    #[test]
    fn test_static_mutex_serialises_threads() {
        assert_eq!(MutexKind::DISCIPLINE, Discipline::Uncounted);
        let counter = Arc::new(AtomicUsize::new(0));
        let threads: Vec<_> = (0..4)
            .map(|_| {
                let counter = counter.clone();
                let mutex = SHARED.owned();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        let _held = mutex.guard();
                        let seen = counter.load(Ordering::Relaxed);
                        counter.store(seen + 1, Ordering::Relaxed);
                    }
                })
            })
            .collect();
        for t in threads {
            t.join().unwrap();
        }
        assert_eq!(counter.load(Ordering::SeqCst), 400);
    }
}
