//! Compiles a C translation unit that reports the real layouts of the
//! structures `gbind-sys` mirrors.

use std::env;
use std::path::{Path, PathBuf};

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));

    generate_layout_reference(&out_dir);

    println!("cargo:rerun-if-changed=build.rs");
}

fn generate_layout_reference(out_dir: &Path) {
    let c_code = r#"
#include <stddef.h>

typedef void *gpointer;
typedef unsigned int guint;
typedef int gint;
typedef guint GQuark;
typedef void (*GDestroyNotify)(gpointer data);

/* Public structure definitions from glib/glist.h, gslist.h, gerror.h, gthread.h */
typedef struct _GList GList;
struct _GList {
    gpointer data;
    GList *next;
    GList *prev;
};

typedef struct _GSList GSList;
struct _GSList {
    gpointer data;
    GSList *next;
};

typedef struct _GError {
    GQuark domain;
    gint code;
    char *message;
} GError;

typedef union _GMutex {
    gpointer p;
    guint i[2];
} GMutex;

typedef struct _GRecMutex {
    gpointer p;
    guint i[2];
} GRecMutex;

typedef struct _GPrivate {
    gpointer p;
    GDestroyNotify notify;
    gpointer future[2];
} GPrivate;

size_t glist_size(void) { return sizeof(GList); }
size_t glist_align(void) { return _Alignof(GList); }
size_t glist_data_offset(void) { return offsetof(GList, data); }
size_t glist_next_offset(void) { return offsetof(GList, next); }
size_t glist_prev_offset(void) { return offsetof(GList, prev); }

size_t gslist_size(void) { return sizeof(GSList); }
size_t gslist_align(void) { return _Alignof(GSList); }
size_t gslist_data_offset(void) { return offsetof(GSList, data); }
size_t gslist_next_offset(void) { return offsetof(GSList, next); }

size_t gerror_size(void) { return sizeof(GError); }
size_t gerror_align(void) { return _Alignof(GError); }
size_t gerror_domain_offset(void) { return offsetof(GError, domain); }
size_t gerror_code_offset(void) { return offsetof(GError, code); }
size_t gerror_message_offset(void) { return offsetof(GError, message); }

size_t gmutex_size(void) { return sizeof(GMutex); }
size_t gmutex_align(void) { return _Alignof(GMutex); }

size_t grecmutex_size(void) { return sizeof(GRecMutex); }
size_t grecmutex_align(void) { return _Alignof(GRecMutex); }
size_t grecmutex_i_offset(void) { return offsetof(GRecMutex, i); }

size_t gprivate_size(void) { return sizeof(GPrivate); }
size_t gprivate_align(void) { return _Alignof(GPrivate); }
size_t gprivate_notify_offset(void) { return offsetof(GPrivate, notify); }
size_t gprivate_future_offset(void) { return offsetof(GPrivate, future); }

/* Enumerators from glib/gfileutils.h and giochannel.h */
int VERIFY_G_FILE_ERROR_NOENT = 4;
int VERIFY_G_FILE_ERROR_INVAL = 17;
int VERIFY_G_FILE_ERROR_FAILED = 24;
int VERIFY_G_IO_STATUS_EOF = 2;
int VERIFY_G_IO_CHANNEL_ERROR_FAILED = 8;
"#;

    let c_file = out_dir.join("glib_layout_reference.c");
    std::fs::write(&c_file, c_code).expect("failed to write C layout reference");

    cc::Build::new()
        .file(&c_file)
        .warnings(false)
        .static_flag(true)
        .compile("glib_layout_reference");
}
