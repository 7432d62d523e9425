//! Library-level scans of real directory trees.

use std::fs;

use practice_log::{parse_json, render_json, scan_directory, PracticeLogError, ScanOptions};
use tempfile::TempDir;

fn folder(dir: &TempDir, name: &str, files: &[&str]) {
    let path = dir.path().join(name);
    fs::create_dir_all(&path).unwrap();
    for file in files {
        fs::write(path.join(file), "").unwrap();
    }
}

#[test]
fn scan_collects_titles_in_name_order() {
    let dir = TempDir::new().unwrap();
    folder(&dir, "2025年3月5日", &["02_valid_parens.py", "01.two_sum.py", "notes.txt"]);

    let records = scan_directory(&ScanOptions::new(dir.path())).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date().as_str(), "2025-03-05");
    assert_eq!(records[0].count(), 2);
    let titles: Vec<&str> = records[0]
        .problems()
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(titles, ["Two Sum", "Valid Parens"]);
}

#[test]
fn every_record_count_matches_problems() {
    let dir = TempDir::new().unwrap();
    folder(&dir, "2024年12月31日", &["a.py", "b.py", "c.py"]);
    folder(&dir, "2025年1月1日", &["d.py"]);
    folder(&dir, "2025年1月2日", &["e.txt"]);

    let records = scan_directory(&ScanOptions::new(dir.path())).unwrap();

    assert_eq!(records.len(), 2);
    for record in &records {
        assert!(record.count() >= 1);
        assert_eq!(record.count(), record.problems().len());
    }
}

#[test]
fn files_at_root_and_nested_folders_are_ignored() {
    let dir = TempDir::new().unwrap();
    folder(&dir, "2025年2月1日/sub", &["deep.py"]);
    folder(&dir, "2025年2月1日", &["top.py"]);
    fs::write(dir.path().join("loose.py"), "").unwrap();

    let records = scan_directory(&ScanOptions::new(dir.path())).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].problems()[0].title, "Top");
    assert_eq!(records[0].count(), 1);
}

#[test]
fn folders_sharing_a_date_keep_name_order() {
    let dir = TempDir::new().unwrap();
    folder(&dir, "2025年03月05日", &["b.py"]);
    folder(&dir, "2025年3月5日", &["a.py"]);

    let records = scan_directory(&ScanOptions::new(dir.path())).unwrap();

    let dates: Vec<&str> = records.iter().map(|r| r.date().as_str()).collect();
    assert_eq!(dates, ["2025-03-05", "2025-03-05"]);
    // "2025年03月05日" sorts before "2025年3月5日" by name
    assert_eq!(records[0].problems()[0].title, "B");
    assert_eq!(records[1].problems()[0].title, "A");
}

#[test]
fn custom_tag_and_extension() {
    let dir = TempDir::new().unwrap();
    folder(&dir, "2025年5月1日", &["01_two_sum.rs", "02_other.py"]);

    let options = ScanOptions::new(dir.path())
        .with_extension("rs")
        .with_default_tag("Array");
    let records = scan_directory(&options).unwrap();

    assert_eq!(records[0].count(), 1);
    assert_eq!(records[0].problems()[0].tag, "Array");
}

#[test]
fn missing_root_is_an_error() {
    let dir = TempDir::new().unwrap();

    let err = scan_directory(&ScanOptions::new(dir.path().join("missing"))).unwrap_err();

    assert!(matches!(err, PracticeLogError::DirectoryNotFound { .. }));
}

#[test]
fn rendered_records_parse_back() {
    let dir = TempDir::new().unwrap();
    folder(&dir, "2025年3月5日", &["01_两数之和.py"]);
    folder(&dir, "2025年3月6日", &["3sum.py"]);

    let records = scan_directory(&ScanOptions::new(dir.path())).unwrap();
    let json = render_json(&records).unwrap();

    assert!(json.contains("两数之和"));
    assert_eq!(parse_json(&json).unwrap(), records);
}
