//! Declaration macro for resource kinds

/// Declare a resource kind and bind it to its foreign release calls
///
/// ```ignore
/// resource! {
///     /// Shared hash table
///     pub enum HashTableKind: refcounted(ffi::GHashTable) {
///         ref = ffi::g_hash_table_ref,
///         unref = ffi::g_hash_table_unref,
///     }
/// }
///
/// resource! {
///     pub enum TimerKind: transferred(ffi::GTimer) {
///         free = ffi::g_timer_destroy,
///     }
/// }
///
/// resource! {
///     pub enum MutexKind: uncounted(ffi::GMutex)
/// }
/// ```
///
/// Thread safety is never implied; kinds that qualify get an explicit
/// `unsafe impl ThreadSafe`.
#[macro_export]
macro_rules! resource {
    (
        $(#[$meta:meta])*
        $vis:vis enum $kind:ident : refcounted($raw:ty) {
            ref = $retain:path,
            unref = $release:path $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $kind {}

        unsafe impl $crate::Resource for $kind {
            type Raw = $raw;
            const NAME: &'static str = stringify!($kind);
            const DISCIPLINE: $crate::Discipline = $crate::Discipline::RefCounted;

            unsafe fn release(raw: *mut $raw) {
                let _ = $release(raw.cast());
            }
        }

        unsafe impl $crate::RefCounted for $kind {
            unsafe fn retain(raw: *mut $raw) {
                let _ = $retain(raw.cast());
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $kind:ident : transferred($raw:ty) {
            free = $free:path $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $kind {}

        unsafe impl $crate::Resource for $kind {
            type Raw = $raw;
            const NAME: &'static str = stringify!($kind);
            const DISCIPLINE: $crate::Discipline = $crate::Discipline::Transferred;

            unsafe fn release(raw: *mut $raw) {
                let _ = $free(raw.cast());
            }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $kind:ident : uncounted($raw:ty)
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $kind {}

        unsafe impl $crate::Resource for $kind {
            type Raw = $raw;
            const NAME: &'static str = stringify!($kind);
            const DISCIPLINE: $crate::Discipline = $crate::Discipline::Uncounted;

            unsafe fn release(_raw: *mut $raw) {}
        }
    };
}
