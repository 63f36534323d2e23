#[path = "common/mod.rs"]
mod common;

use common::*;
use posts_analyzer::{parse_line, parse_table, AnalyzeError, PostRecord, MIN_COMMAS};

/// A title with several embedded commas is resolved by peeling the fixed
/// fields from both ends.
#[test]
fn title_keeps_embedded_commas() {
    let rec = parse_line(2, "42,Rust, Go, and Zig: a comparison,public,7,9001,11,2023-03-04T10:00:00Z").unwrap();
    assert_eq!(
        rec,
        PostRecord {
            id: "42".into(),
            title: "Rust, Go, and Zig: a comparison".into(),
            privacy: "public".into(),
            likes: "7".into(),
            views: "9001".into(),
            comments: "11".into(),
            timestamp: "2023-03-04T10:00:00Z".into(),
        }
    );
}

#[test]
fn empty_title_is_allowed() {
    let rec = parse_line(2, "9,,public,1,2,3,2023-01-01").unwrap();
    assert_eq!(rec.title, "");
    assert_eq!(rec.privacy, "public");
}

/// Rows with fewer than six commas are rejected with their line number.
#[test]
fn too_few_commas_is_malformed() {
    let err = parse_line(5, "1,Hello,public,50,9500,2023-01-01T00:00:00Z").unwrap_err();
    match err {
        AnalyzeError::MalformedRow { line, commas } => {
            assert_eq!(line, 5);
            assert_eq!(commas, 5);
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(matches!(parse_line(1, "no commas here"), Err(AnalyzeError::MalformedRow { commas: 0, .. })));
}

/// The comma minimum is checked up front and named in the error message.
#[test]
fn malformed_message_names_the_minimum() {
    assert_eq!(MIN_COMMAS, 6);
    let err = parse_line(3, "1,a,b,c,d").unwrap_err();
    assert_eq!(err.to_string(), "malformed row at line 3: expected at least 6 commas, found 4");

    let six = ",".repeat(MIN_COMMAS);
    let rec = parse_line(1, &six).unwrap();
    assert_eq!(rec.id, "");
    assert_eq!(rec.title, "");
}

/// The header is parsed like any row but kept apart from the data rows, and the
/// trailing line terminator does not become a record.
#[test]
fn table_splits_header_and_drops_trailing_line() {
    let table = parse_table(&to_text(&sample_lines())).unwrap();
    let header = table.header.expect("header row");
    assert_eq!(header.id, "id");
    assert_eq!(header.timestamp, "timestamp");
    assert_eq!(table.posts.len(), 8);
    assert_eq!(table.posts[0].id, "1");
    assert_eq!(table.posts[7].id, "8");
}

#[test]
fn table_without_trailing_newline_keeps_last_row() {
    let text = sample_lines().join("\n");
    let table = parse_table(&text).unwrap();
    assert_eq!(table.posts.len(), 8);
}

#[test]
fn crlf_line_endings_are_stripped() {
    let text = sample_lines().join("\r\n") + "\r\n";
    let table = parse_table(&text).unwrap();
    assert_eq!(table.posts.len(), 8);
    assert_eq!(table.posts[0].timestamp, "2023-01-01T00:00:00Z");
}

#[test]
fn empty_input_has_no_header() {
    let table = parse_table("").unwrap();
    assert!(table.header.is_none());
    assert!(table.posts.is_empty());
}

/// A blank line in the middle of the export is a malformed row, reported with
/// its 1-based line number.
#[test]
fn blank_line_mid_file_fails_strictly() {
    let mut lines = sample_lines();
    lines.insert(3, String::new());
    let err = parse_table(&to_text(&lines)).unwrap_err();
    assert!(matches!(err, AnalyzeError::MalformedRow { line: 4, commas: 0 }));
}

/// Re-rendering a detailed row reproduces the source line verbatim.
#[test]
fn detailed_row_round_trips() {
    for line in sample_lines() {
        let rec = parse_line(1, &line).unwrap();
        assert_eq!(rec.to_csv_row(), line);
        assert_eq!(parse_line(1, &rec.to_csv_row()).unwrap(), rec);
    }
}
