use pretty_assertions::assert_eq;
use provision_fs::{Error, io};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_read_bytes_existing_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("test.txt");
    fs::write(&file_path, "hello").unwrap();

    let content = io::read_bytes(&file_path).unwrap();
    assert_eq!(content, b"hello");
}

#[test]
fn test_read_bytes_keeps_invalid_utf8() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("latin1.conf");
    fs::write(&file_path, [b'c', 0xE9, b'\n']).unwrap();

    let content = io::read_bytes(&file_path).unwrap();
    assert_eq!(content, vec![b'c', 0xE9, b'\n']);
}

#[test]
fn test_read_bytes_nonexistent_file() {
    let temp = TempDir::new().unwrap();
    let result = io::read_bytes(&temp.path().join("missing.txt"));
    assert!(matches!(result, Err(Error::NotFound { .. })));
}

#[test]
fn test_append_bytes_extends_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("test.txt");
    fs::write(&file_path, "line1\n").unwrap();

    io::append_bytes(&file_path, &[b"line2", b"\n"]).unwrap();

    let content = fs::read_to_string(&file_path).unwrap();
    assert_eq!(content, "line1\nline2\n");
}

#[test]
fn test_append_bytes_does_not_create_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("missing.txt");

    let result = io::append_bytes(&file_path, &[b"data"]);

    assert!(matches!(result, Err(Error::NotFound { .. })));
    assert!(!file_path.exists());
}

#[test]
fn test_write_bytes_overwrites_existing() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("test.txt");
    fs::write(&file_path, "original content").unwrap();

    io::write_bytes(&file_path, b"short").unwrap();

    let content = fs::read_to_string(&file_path).unwrap();
    assert_eq!(content, "short");
}

#[test]
fn test_write_bytes_does_not_create_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("missing.txt");

    let result = io::write_bytes(&file_path, b"data");

    assert!(matches!(result, Err(Error::NotFound { .. })));
}
