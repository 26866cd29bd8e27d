//! Raw C ABI of the foreign utility library
//!
//! This crate declares the scalar aliases, `#[repr(C)]` structure mirrors,
//! opaque resource types and `extern "C"` entry points that the safe
//! bindings call into. Nothing here adds behaviour: every item is a direct
//! mirror of the library's public header.
//!
//! The build script links the system `glib-2.0`, or with the `test-double`
//! feature compiles the in-tree stand-in from `csrc/`.

#![allow(non_camel_case_types)]
#![allow(non_upper_case_globals)]

use core::ffi::{c_char, c_double, c_int, c_uint, c_ulong, c_void};
use core::marker::{PhantomData, PhantomPinned};

pub type gchar = c_char;
pub type gint = c_int;
pub type guint = c_uint;
pub type gboolean = c_int;
pub type gsize = usize;
pub type gssize = isize;
pub type gulong = c_ulong;
pub type gdouble = c_double;
pub type gint32 = i32;
pub type guint32 = u32;
pub type gpointer = *mut c_void;
pub type gconstpointer = *const c_void;
pub type GQuark = guint32;

pub const GFALSE: gboolean = 0;
pub const GTRUE: gboolean = 1;

pub type GDestroyNotify = Option<unsafe extern "C" fn(data: gpointer)>;
pub type GSourceFunc = Option<unsafe extern "C" fn(data: gpointer) -> gboolean>;
pub type GHashFunc = Option<unsafe extern "C" fn(key: gconstpointer) -> guint>;
pub type GEqualFunc = Option<unsafe extern "C" fn(a: gconstpointer, b: gconstpointer) -> gboolean>;

/// Doubly linked list node (`struct _GList`)
#[repr(C)]
#[derive(Debug)]
pub struct GList {
    pub data: gpointer,
    pub next: *mut GList,
    pub prev: *mut GList,
}

/// Singly linked list node (`struct _GSList`)
#[repr(C)]
#[derive(Debug)]
pub struct GSList {
    pub data: gpointer,
    pub next: *mut GSList,
}

/// Error report filled through `GError **` out-parameters
#[repr(C)]
#[derive(Debug)]
pub struct GError {
    pub domain: GQuark,
    pub code: gint,
    pub message: *mut gchar,
}

/// Non-recursive mutex storage; all-zero is a valid unlocked mutex
#[repr(C)]
#[derive(Copy, Clone)]
pub union GMutex {
    pub p: gpointer,
    pub i: [guint; 2],
}

/// Recursive mutex storage; all-zero is a valid unlocked mutex
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct GRecMutex {
    pub p: gpointer,
    pub i: [guint; 2],
}

/// Thread-local storage key; must live in static storage
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct GPrivate {
    pub p: gpointer,
    pub notify: GDestroyNotify,
    pub future: [gpointer; 2],
}

macro_rules! opaque {
    ($($name:ident),* $(,)?) => {
        $(
            #[repr(C)]
            pub struct $name {
                _data: [u8; 0],
                _marker: PhantomData<(*mut u8, PhantomPinned)>,
            }
        )*
    };
}

opaque!(
    GHashTable,
    GMainContext,
    GMainLoop,
    GSource,
    GTimer,
    GStringChunk,
    GPatternSpec,
    GRand,
    GDir,
    GIOChannel,
);

pub type GIOStatus = c_int;
pub const G_IO_STATUS_ERROR: GIOStatus = 0;
pub const G_IO_STATUS_NORMAL: GIOStatus = 1;
pub const G_IO_STATUS_EOF: GIOStatus = 2;
pub const G_IO_STATUS_AGAIN: GIOStatus = 3;

pub type GFileError = c_int;
pub const G_FILE_ERROR_EXIST: GFileError = 0;
pub const G_FILE_ERROR_ISDIR: GFileError = 1;
pub const G_FILE_ERROR_ACCES: GFileError = 2;
pub const G_FILE_ERROR_NAMETOOLONG: GFileError = 3;
pub const G_FILE_ERROR_NOENT: GFileError = 4;
pub const G_FILE_ERROR_NOTDIR: GFileError = 5;
pub const G_FILE_ERROR_NXIO: GFileError = 6;
pub const G_FILE_ERROR_NODEV: GFileError = 7;
pub const G_FILE_ERROR_ROFS: GFileError = 8;
pub const G_FILE_ERROR_TXTBSY: GFileError = 9;
pub const G_FILE_ERROR_FAULT: GFileError = 10;
pub const G_FILE_ERROR_LOOP: GFileError = 11;
pub const G_FILE_ERROR_NOSPC: GFileError = 12;
pub const G_FILE_ERROR_NOMEM: GFileError = 13;
pub const G_FILE_ERROR_MFILE: GFileError = 14;
pub const G_FILE_ERROR_NFILE: GFileError = 15;
pub const G_FILE_ERROR_BADF: GFileError = 16;
pub const G_FILE_ERROR_INVAL: GFileError = 17;
pub const G_FILE_ERROR_PIPE: GFileError = 18;
pub const G_FILE_ERROR_AGAIN: GFileError = 19;
pub const G_FILE_ERROR_INTR: GFileError = 20;
pub const G_FILE_ERROR_IO: GFileError = 21;
pub const G_FILE_ERROR_PERM: GFileError = 22;
pub const G_FILE_ERROR_NOSYS: GFileError = 23;
pub const G_FILE_ERROR_FAILED: GFileError = 24;

pub type GIOChannelError = c_int;
pub const G_IO_CHANNEL_ERROR_FBIG: GIOChannelError = 0;
pub const G_IO_CHANNEL_ERROR_INVAL: GIOChannelError = 1;
pub const G_IO_CHANNEL_ERROR_IO: GIOChannelError = 2;
pub const G_IO_CHANNEL_ERROR_ISDIR: GIOChannelError = 3;
pub const G_IO_CHANNEL_ERROR_NOSPC: GIOChannelError = 4;
pub const G_IO_CHANNEL_ERROR_NXIO: GIOChannelError = 5;
pub const G_IO_CHANNEL_ERROR_OVERFLOW: GIOChannelError = 6;
pub const G_IO_CHANNEL_ERROR_PIPE: GIOChannelError = 7;
pub const G_IO_CHANNEL_ERROR_FAILED: GIOChannelError = 8;

pub const G_SOURCE_REMOVE: gboolean = GFALSE;
pub const G_SOURCE_CONTINUE: gboolean = GTRUE;

extern "C" {
    // memory
    pub fn g_malloc(n_bytes: gsize) -> gpointer;
    pub fn g_malloc0(n_bytes: gsize) -> gpointer;
    pub fn g_free(mem: gpointer);
    pub fn g_strdup(s: *const gchar) -> *mut gchar;

    // quarks
    pub fn g_quark_from_string(s: *const gchar) -> GQuark;
    pub fn g_quark_try_string(s: *const gchar) -> GQuark;
    pub fn g_quark_to_string(quark: GQuark) -> *const gchar;

    // errors
    pub fn g_error_new_literal(domain: GQuark, code: gint, message: *const gchar) -> *mut GError;
    pub fn g_error_free(error: *mut GError);
    pub fn g_error_copy(error: *const GError) -> *mut GError;
    pub fn g_error_matches(error: *const GError, domain: GQuark, code: gint) -> gboolean;
    pub fn g_file_error_quark() -> GQuark;
    pub fn g_file_error_from_errno(err_no: gint) -> GFileError;
    pub fn g_io_channel_error_quark() -> GQuark;

    // doubly linked lists
    pub fn g_list_append(list: *mut GList, data: gpointer) -> *mut GList;
    pub fn g_list_prepend(list: *mut GList, data: gpointer) -> *mut GList;
    pub fn g_list_remove(list: *mut GList, data: gconstpointer) -> *mut GList;
    pub fn g_list_reverse(list: *mut GList) -> *mut GList;
    pub fn g_list_free(list: *mut GList);
    pub fn g_list_length(list: *mut GList) -> guint;
    pub fn g_list_first(list: *mut GList) -> *mut GList;
    pub fn g_list_last(list: *mut GList) -> *mut GList;
    pub fn g_list_nth_data(list: *mut GList, n: guint) -> gpointer;

    // singly linked lists
    pub fn g_slist_append(list: *mut GSList, data: gpointer) -> *mut GSList;
    pub fn g_slist_prepend(list: *mut GSList, data: gpointer) -> *mut GSList;
    pub fn g_slist_remove(list: *mut GSList, data: gconstpointer) -> *mut GSList;
    pub fn g_slist_reverse(list: *mut GSList) -> *mut GSList;
    pub fn g_slist_free(list: *mut GSList);
    pub fn g_slist_length(list: *mut GSList) -> guint;
    pub fn g_slist_last(list: *mut GSList) -> *mut GSList;
    pub fn g_slist_nth_data(list: *mut GSList, n: guint) -> gpointer;

    // hash tables
    pub fn g_str_hash(v: gconstpointer) -> guint;
    pub fn g_str_equal(v1: gconstpointer, v2: gconstpointer) -> gboolean;
    pub fn g_hash_table_new_full(
        hash_func: GHashFunc,
        key_equal_func: GEqualFunc,
        key_destroy_func: GDestroyNotify,
        value_destroy_func: GDestroyNotify,
    ) -> *mut GHashTable;
    pub fn g_hash_table_insert(table: *mut GHashTable, key: gpointer, value: gpointer) -> gboolean;
    pub fn g_hash_table_replace(table: *mut GHashTable, key: gpointer, value: gpointer) -> gboolean;
    pub fn g_hash_table_lookup(table: *mut GHashTable, key: gconstpointer) -> gpointer;
    pub fn g_hash_table_contains(table: *mut GHashTable, key: gconstpointer) -> gboolean;
    pub fn g_hash_table_remove(table: *mut GHashTable, key: gconstpointer) -> gboolean;
    pub fn g_hash_table_remove_all(table: *mut GHashTable);
    pub fn g_hash_table_size(table: *mut GHashTable) -> guint;
    pub fn g_hash_table_get_keys(table: *mut GHashTable) -> *mut GList;
    pub fn g_hash_table_get_values(table: *mut GHashTable) -> *mut GList;
    pub fn g_hash_table_ref(table: *mut GHashTable) -> *mut GHashTable;
    pub fn g_hash_table_unref(table: *mut GHashTable);

    // main contexts
    pub fn g_main_context_new() -> *mut GMainContext;
    pub fn g_main_context_default() -> *mut GMainContext;
    pub fn g_main_context_ref(context: *mut GMainContext) -> *mut GMainContext;
    pub fn g_main_context_unref(context: *mut GMainContext);
    pub fn g_main_context_iteration(context: *mut GMainContext, may_block: gboolean) -> gboolean;
    pub fn g_main_context_pending(context: *mut GMainContext) -> gboolean;
    pub fn g_main_context_wakeup(context: *mut GMainContext);

    // main loops
    pub fn g_main_loop_new(context: *mut GMainContext, is_running: gboolean) -> *mut GMainLoop;
    pub fn g_main_loop_ref(main_loop: *mut GMainLoop) -> *mut GMainLoop;
    pub fn g_main_loop_unref(main_loop: *mut GMainLoop);
    pub fn g_main_loop_run(main_loop: *mut GMainLoop);
    pub fn g_main_loop_quit(main_loop: *mut GMainLoop);
    pub fn g_main_loop_is_running(main_loop: *mut GMainLoop) -> gboolean;
    pub fn g_main_loop_get_context(main_loop: *mut GMainLoop) -> *mut GMainContext;

    // event sources
    pub fn g_idle_source_new() -> *mut GSource;
    pub fn g_timeout_source_new(interval: guint) -> *mut GSource;
    pub fn g_source_set_callback(
        source: *mut GSource,
        func: GSourceFunc,
        data: gpointer,
        notify: GDestroyNotify,
    );
    pub fn g_source_attach(source: *mut GSource, context: *mut GMainContext) -> guint;
    pub fn g_source_destroy(source: *mut GSource);
    pub fn g_source_is_destroyed(source: *mut GSource) -> gboolean;
    pub fn g_source_get_id(source: *mut GSource) -> guint;
    pub fn g_source_ref(source: *mut GSource) -> *mut GSource;
    pub fn g_source_unref(source: *mut GSource);

    // timers
    pub fn g_timer_new() -> *mut GTimer;
    pub fn g_timer_destroy(timer: *mut GTimer);
    pub fn g_timer_start(timer: *mut GTimer);
    pub fn g_timer_stop(timer: *mut GTimer);
    pub fn g_timer_continue(timer: *mut GTimer);
    pub fn g_timer_reset(timer: *mut GTimer);
    pub fn g_timer_elapsed(timer: *mut GTimer, microseconds: *mut gulong) -> gdouble;
    pub fn g_timer_is_active(timer: *mut GTimer) -> gboolean;

    // string chunks
    pub fn g_string_chunk_new(size: gsize) -> *mut GStringChunk;
    pub fn g_string_chunk_free(chunk: *mut GStringChunk);
    pub fn g_string_chunk_clear(chunk: *mut GStringChunk);
    pub fn g_string_chunk_insert(chunk: *mut GStringChunk, string: *const gchar) -> *mut gchar;
    pub fn g_string_chunk_insert_const(chunk: *mut GStringChunk, string: *const gchar)
        -> *mut gchar;
    pub fn g_string_chunk_insert_len(
        chunk: *mut GStringChunk,
        string: *const gchar,
        len: gssize,
    ) -> *mut gchar;

    // glob patterns
    pub fn g_pattern_spec_new(pattern: *const gchar) -> *mut GPatternSpec;
    pub fn g_pattern_spec_free(pspec: *mut GPatternSpec);
    pub fn g_pattern_spec_copy(pspec: *mut GPatternSpec) -> *mut GPatternSpec;
    pub fn g_pattern_spec_equal(pspec1: *mut GPatternSpec, pspec2: *mut GPatternSpec) -> gboolean;
    pub fn g_pattern_spec_match_string(pspec: *mut GPatternSpec, string: *const gchar) -> gboolean;

    // random numbers
    pub fn g_rand_new() -> *mut GRand;
    pub fn g_rand_new_with_seed(seed: guint32) -> *mut GRand;
    pub fn g_rand_copy(rand_: *mut GRand) -> *mut GRand;
    pub fn g_rand_free(rand_: *mut GRand);
    pub fn g_rand_set_seed(rand_: *mut GRand, seed: guint32);
    pub fn g_rand_int(rand_: *mut GRand) -> guint32;
    pub fn g_rand_int_range(rand_: *mut GRand, begin: gint32, end: gint32) -> gint32;
    pub fn g_rand_double(rand_: *mut GRand) -> gdouble;
    pub fn g_rand_double_range(rand_: *mut GRand, begin: gdouble, end: gdouble) -> gdouble;

    // mutexes
    pub fn g_mutex_init(mutex: *mut GMutex);
    pub fn g_mutex_clear(mutex: *mut GMutex);
    pub fn g_mutex_lock(mutex: *mut GMutex);
    pub fn g_mutex_unlock(mutex: *mut GMutex);
    pub fn g_mutex_trylock(mutex: *mut GMutex) -> gboolean;
    pub fn g_rec_mutex_init(rec_mutex: *mut GRecMutex);
    pub fn g_rec_mutex_clear(rec_mutex: *mut GRecMutex);
    pub fn g_rec_mutex_lock(rec_mutex: *mut GRecMutex);
    pub fn g_rec_mutex_unlock(rec_mutex: *mut GRecMutex);
    pub fn g_rec_mutex_trylock(rec_mutex: *mut GRecMutex) -> gboolean;

    // thread-local keys
    pub fn g_private_get(key: *mut GPrivate) -> gpointer;
    pub fn g_private_set(key: *mut GPrivate, value: gpointer);
    pub fn g_private_replace(key: *mut GPrivate, value: gpointer);

    // directories
    pub fn g_dir_open(path: *const gchar, flags: guint, error: *mut *mut GError) -> *mut GDir;
    pub fn g_dir_read_name(dir: *mut GDir) -> *const gchar;
    pub fn g_dir_rewind(dir: *mut GDir);
    pub fn g_dir_close(dir: *mut GDir);

    // I/O channels
    pub fn g_io_channel_new_file(
        filename: *const gchar,
        mode: *const gchar,
        error: *mut *mut GError,
    ) -> *mut GIOChannel;
    pub fn g_io_channel_ref(channel: *mut GIOChannel) -> *mut GIOChannel;
    pub fn g_io_channel_unref(channel: *mut GIOChannel);
    pub fn g_io_channel_read_line(
        channel: *mut GIOChannel,
        str_return: *mut *mut gchar,
        length: *mut gsize,
        terminator_pos: *mut gsize,
        error: *mut *mut GError,
    ) -> GIOStatus;
    pub fn g_io_channel_write_chars(
        channel: *mut GIOChannel,
        buf: *const gchar,
        count: gssize,
        bytes_written: *mut gsize,
        error: *mut *mut GError,
    ) -> GIOStatus;
    pub fn g_io_channel_flush(channel: *mut GIOChannel, error: *mut *mut GError) -> GIOStatus;
    pub fn g_io_channel_shutdown(
        channel: *mut GIOChannel,
        flush: gboolean,
        error: *mut *mut GError,
    ) -> GIOStatus;
}

impl GMutex {
    /// All-zero storage, equivalent to a statically initialised C `GMutex`
    pub const fn zeroed() -> Self {
        GMutex { i: [0; 2] }
    }
}

impl GRecMutex {
    pub const fn zeroed() -> Self {
        GRecMutex {
            p: core::ptr::null_mut(),
            i: [0; 2],
        }
    }
}

impl GPrivate {
    /// Equivalent of `G_PRIVATE_INIT(notify)`
    pub const fn new(notify: GDestroyNotify) -> Self {
        GPrivate {
            p: core::ptr::null_mut(),
            notify,
            future: [core::ptr::null_mut(); 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::{CStr, CString};

    #[test]
    fn test_quark_round_trip() {
        let name = CString::new("gbind-sys-test-quark").unwrap();
        unsafe {
            let q = g_quark_from_string(name.as_ptr());
            assert_ne!(q, 0);
            assert_eq!(g_quark_try_string(name.as_ptr()), q);
            let back = CStr::from_ptr(g_quark_to_string(q));
            assert_eq!(back, name.as_c_str());
        }
    }

    #[test]
    fn test_list_append_links_prev() {
        unsafe {
            let mut list = core::ptr::null_mut();
            list = g_list_append(list, 1usize as gpointer);
            list = g_list_append(list, 2usize as gpointer);
            assert_eq!(g_list_length(list), 2);
            let second = (*list).next;
            assert_eq!((*second).prev, list);
            assert_eq!(g_list_last(list), second);
            g_list_free(list);
        }
    }

    #[test]
    fn test_error_matches() {
        let msg = CString::new("boom").unwrap();
        unsafe {
            let domain = g_file_error_quark();
            let err = g_error_new_literal(domain, G_FILE_ERROR_NOENT, msg.as_ptr());
            assert_ne!(g_error_matches(err, domain, G_FILE_ERROR_NOENT), GFALSE);
            assert_eq!(g_error_matches(err, domain, G_FILE_ERROR_EXIST), GFALSE);
            g_error_free(err);
        }
    }
}
