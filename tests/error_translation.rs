//! Foreign error reports surfacing through real fallible calls

use std::ptr;

use gbind::prelude::*;
use gbind::{dir, error_report, io_channel, Error, FileErrorCode, Quark};

#[test]
fn test_success_leaves_no_error() {
    let tmp = tempfile::tempdir().unwrap();
    let listing = dir::open(tmp.path()).unwrap();
    assert_eq!(listing.entries().count(), 0);

    let channel = io_channel::new_file(tmp.path().join("out.txt"), "w").unwrap();
    assert_eq!(channel.write_chars("ok\n").unwrap(), 3);
}

#[test]
fn test_missing_directory() {
    let err = dir::open("/no/such/gbind/directory").unwrap_err();
    let Error::Foreign(foreign) = err else {
        panic!("expected a foreign error, got {err:?}");
    };
    assert_eq!(foreign.domain(), Some(Quark::file_error()));
    assert_eq!(foreign.file_error(), Some(FileErrorCode::NoEnt));
    assert!(!foreign.message().is_empty());
}

#[test]
fn test_file_is_not_a_directory() {
    let tmp = tempfile::NamedTempFile::new().unwrap();
    let err = dir::open(tmp.path()).unwrap_err();
    assert_eq!(err.foreign().unwrap().file_error(), Some(FileErrorCode::NotDir));
}

#[test]
fn test_missing_file_for_reading() {
    let tmp = tempfile::tempdir().unwrap();
    let err = io_channel::new_file(tmp.path().join("absent.txt"), "r").unwrap_err();
    let foreign = err.foreign().unwrap();
    assert!(foreign.matches(Quark::file_error(), FileErrorCode::NoEnt as i32));
}

#[test]
fn test_interior_nul_never_reaches_the_library() {
    let err = dir::open("bad\0path").unwrap_err();
    assert!(matches!(err, Error::InteriorNul(_)));
}

#[test]
fn test_display_names_domain_and_code() {
    let err = dir::open("/no/such/gbind/directory").unwrap_err();
    let text = err.to_string();
    assert!(text.contains("g-file-error-quark"), "{text}");
    assert!(text.contains(&format!(":{}", FileErrorCode::NoEnt as i32)), "{text}");
}

#[test]
fn test_checked_report_matches_its_source() {
    let domain = Quark::intern("gbind-test-domain").unwrap();
    let report = error_report::new(domain, 42, "custom failure").unwrap();
    let kept = report.copy().unwrap();

    let err = unsafe { gbind::check(report.into_raw().as_ptr()) }.unwrap_err();
    let foreign = err.foreign().unwrap();
    assert_eq!(foreign.domain(), kept.domain());
    assert_eq!(foreign.code(), kept.code());
    assert_eq!(foreign.message(), kept.message().unwrap());
    assert!(kept.matches(domain, 42));
}

#[test]
fn test_failure_wins_over_result() {
    let report = error_report::new(Quark::file_error(), FileErrorCode::Io as i32, "io").unwrap();
    let value = 1u8;
    let ptr = ptr::addr_of!(value).cast_mut();
    let err = unsafe { gbind::check_result(ptr, report.into_raw().as_ptr()) }.unwrap_err();
    assert_eq!(err.foreign().unwrap().file_error(), Some(FileErrorCode::Io));
}
