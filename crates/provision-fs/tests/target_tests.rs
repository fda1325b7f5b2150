//! Tests for target-file precondition checks under real filesystem conditions.

use provision_fs::{Access, Error, check_target};
use rstest::rstest;
use std::fs;
use tempfile::tempdir;

#[rstest]
#[case(Access::Read)]
#[case(Access::ReadWrite)]
fn missing_file_is_not_found(#[case] access: Access) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does_not_exist.conf");

    let result = check_target(&path, access);

    assert!(matches!(result, Err(Error::NotFound { .. })));
    assert!(!path.exists(), "checking must never create the file");
}

#[test]
fn readonly_file_rejected_for_write_access() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("locked.conf");
    fs::write(&path, "content\n").unwrap();

    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_readonly(true);
    fs::set_permissions(&path, perms).unwrap();

    let result = check_target(&path, Access::ReadWrite);
    assert!(matches!(result, Err(Error::PermissionDenied { .. })));

    // Read-only queries are still allowed
    check_target(&path, Access::Read).unwrap();

    // Restore so the tempdir can be cleaned up on every platform
    let mut perms = fs::metadata(&path).unwrap().permissions();
    #[allow(clippy::permissions_set_readonly_false)]
    perms.set_readonly(false);
    fs::set_permissions(&path, perms).unwrap();
}

#[test]
fn error_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.conf");

    let err = check_target(&path, Access::Read).unwrap_err();

    assert_eq!(err.path(), Some(path.as_path()));
    assert!(err.to_string().contains("nope.conf"));
}
