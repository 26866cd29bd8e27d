// Build script for the foreign utility library surface.
//
// Two modes:
// - default: link the system glib-2.0. Set GBIND_GLIB_LIB_DIR to add a
//   link search path.
// - feature `test-double`: compile the in-tree stand-in from csrc/ into a
//   static library instead, for test hosts without glib-2.0 installed.

use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=csrc/gbind_reference.c");
    println!("cargo:rerun-if-env-changed=GBIND_GLIB_LIB_DIR");

    if env::var_os("CARGO_FEATURE_TEST_DOUBLE").is_some() {
        compile_test_double();
    } else {
        link_system_library();
    }
}

fn link_system_library() {
    if let Ok(dir) = env::var("GBIND_GLIB_LIB_DIR") {
        println!("cargo:rustc-link-search=native={dir}");
    }
    println!("cargo:rustc-link-lib=glib-2.0");
}

fn compile_test_double() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let source = manifest_dir.join("csrc").join("gbind_reference.c");

    cc::Build::new()
        .file(&source)
        .flag_if_supported("-std=c11")
        .warnings(false)
        .compile("gbind_reference");

    // pthread lives outside libc on older glibc
    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("linux") {
        println!("cargo:rustc-link-lib=pthread");
    }
}
