//! Rust mirrors against layouts reported by the compiled C reference

use gbind_abi_test::compare_layout;
use gbind_sys::{
    GError, GList, GMutex, GPrivate, GRecMutex, GSList, G_FILE_ERROR_FAILED, G_FILE_ERROR_INVAL,
    G_FILE_ERROR_NOENT, G_IO_CHANNEL_ERROR_FAILED, G_IO_STATUS_EOF,
};

extern "C" {
    fn glist_size() -> usize;
    fn glist_align() -> usize;
    fn glist_data_offset() -> usize;
    fn glist_next_offset() -> usize;
    fn glist_prev_offset() -> usize;

    fn gslist_size() -> usize;
    fn gslist_align() -> usize;
    fn gslist_data_offset() -> usize;
    fn gslist_next_offset() -> usize;

    fn gerror_size() -> usize;
    fn gerror_align() -> usize;
    fn gerror_domain_offset() -> usize;
    fn gerror_code_offset() -> usize;
    fn gerror_message_offset() -> usize;

    fn gmutex_size() -> usize;
    fn gmutex_align() -> usize;

    fn grecmutex_size() -> usize;
    fn grecmutex_align() -> usize;
    fn grecmutex_i_offset() -> usize;

    fn gprivate_size() -> usize;
    fn gprivate_align() -> usize;
    fn gprivate_notify_offset() -> usize;
    fn gprivate_future_offset() -> usize;

    static VERIFY_G_FILE_ERROR_NOENT: libc::c_int;
    static VERIFY_G_FILE_ERROR_INVAL: libc::c_int;
    static VERIFY_G_FILE_ERROR_FAILED: libc::c_int;
    static VERIFY_G_IO_STATUS_EOF: libc::c_int;
    static VERIFY_G_IO_CHANNEL_ERROR_FAILED: libc::c_int;
}

#[test]
fn test_glist_vs_c() {
    unsafe {
        assert!(compare_layout::<GList>("GList", glist_size(), glist_align()).is_compatible());
        assert_eq!(memoffset::offset_of!(GList, data), glist_data_offset());
        assert_eq!(memoffset::offset_of!(GList, next), glist_next_offset());
        assert_eq!(memoffset::offset_of!(GList, prev), glist_prev_offset());
    }
}

#[test]
fn test_gslist_vs_c() {
    unsafe {
        assert!(compare_layout::<GSList>("GSList", gslist_size(), gslist_align()).is_compatible());
        assert_eq!(memoffset::offset_of!(GSList, data), gslist_data_offset());
        assert_eq!(memoffset::offset_of!(GSList, next), gslist_next_offset());
    }
}

#[test]
fn test_gerror_vs_c() {
    unsafe {
        assert!(compare_layout::<GError>("GError", gerror_size(), gerror_align()).is_compatible());
        assert_eq!(memoffset::offset_of!(GError, domain), gerror_domain_offset());
        assert_eq!(memoffset::offset_of!(GError, code), gerror_code_offset());
        assert_eq!(memoffset::offset_of!(GError, message), gerror_message_offset());
    }
}

#[test]
fn test_thread_primitives_vs_c() {
    unsafe {
        assert!(compare_layout::<GMutex>("GMutex", gmutex_size(), gmutex_align()).is_compatible());
        assert!(
            compare_layout::<GRecMutex>("GRecMutex", grecmutex_size(), grecmutex_align())
                .is_compatible()
        );
        assert_eq!(memoffset::offset_of!(GRecMutex, i), grecmutex_i_offset());
        assert!(
            compare_layout::<GPrivate>("GPrivate", gprivate_size(), gprivate_align())
                .is_compatible()
        );
        assert_eq!(memoffset::offset_of!(GPrivate, notify), gprivate_notify_offset());
        assert_eq!(memoffset::offset_of!(GPrivate, future), gprivate_future_offset());
    }
}

#[test]
fn test_enumerators_vs_c() {
    unsafe {
        assert_eq!(G_FILE_ERROR_NOENT, VERIFY_G_FILE_ERROR_NOENT);
        assert_eq!(G_FILE_ERROR_INVAL, VERIFY_G_FILE_ERROR_INVAL);
        assert_eq!(G_FILE_ERROR_FAILED, VERIFY_G_FILE_ERROR_FAILED);
        assert_eq!(G_IO_STATUS_EOF, VERIFY_G_IO_STATUS_EOF);
        assert_eq!(G_IO_CHANNEL_ERROR_FAILED, VERIFY_G_IO_CHANNEL_ERROR_FAILED);
    }
}
