use std::fs;

use harvester_core::Link;
use harvester_engine::{ensure_output_dir, write_links_csv, AtomicFileWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_output_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("out");
    assert!(!new_dir.exists());
    ensure_output_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("links.csv", b"hello").unwrap();
    assert_eq!(fs::read_to_string(&first).unwrap(), "hello");

    let second = writer.write("links.csv", b"world").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "world");
}

#[test]
fn csv_has_one_link_per_line_and_no_header() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("links.csv");
    let links = vec![
        Link::from("https://www.sec.gov/files/a.pdf"),
        Link::from("https://www.sec.gov/files/b,c.pdf"),
    ];

    let written = write_links_csv(&path, &links).unwrap();
    assert_eq!(written, path);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "https://www.sec.gov/files/a.pdf\r\n\"https://www.sec.gov/files/b,c.pdf\"\r\n"
    );
}

#[test]
fn csv_doubles_embedded_quotes() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("links.csv");
    let links = vec![Link::from("https://example.com/say \"hi\".pdf")];

    write_links_csv(&path, &links).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "\"https://example.com/say \"\"hi\"\".pdf\"\r\n"
    );
}

#[test]
fn empty_match_set_writes_empty_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("links.csv");
    write_links_csv(&path, &[]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn writing_into_a_file_path_fails() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let result = write_links_csv(&file_path.join("links.csv"), &[Link::from("a")]);
    assert!(result.is_err());
}
