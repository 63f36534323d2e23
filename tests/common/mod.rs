#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const HEADER: &str = "id,title,privacy,likes,views,comments,timestamp";

/// A 40-character title: one too long to qualify.
pub const TITLE_40: &str = "This title is exactly forty chars long!!";

/// Build a small export covering every classification path:
/// - 1, 2: top on 2023-01-01 (2 has a quoted title with a comma); 1 has more likes
/// - 3: views 8000, other
/// - 4: private, other
/// - 5, 6: top on 2023-01-02; 5 has more likes but is later in the day
/// - 7: 40-char title, other
/// - 8: exactly 10 comments, other
pub fn sample_lines() -> Vec<String> {
    vec![
        HEADER.to_string(),
        "1,Hello,public,50,9500,12,2023-01-01T00:00:00Z".to_string(),
        "2,\"A, B\",public,30,9500,12,2023-01-01T05:00:00Z".to_string(),
        "3,Low views,public,100,8000,50,2023-01-01T06:00:00Z".to_string(),
        "4,Private post,private,500,20000,50,2023-01-02T01:00:00Z".to_string(),
        "5,Second day winner,public,80,12000,20,2023-01-02T10:00:00Z".to_string(),
        "6,Second day runner up,public,40,15000,11,2023-01-02T03:00:00Z".to_string(),
        format!("7,{TITLE_40},public,70,10000,30,2023-01-03T00:00:00Z"),
        "8,Few comments,public,999,99999,10,2023-01-03T00:00:00Z".to_string(),
    ]
}

/// Join lines with `\n` and a trailing terminator, like a typical export.
pub fn to_text(lines: &[String]) -> String {
    let mut s = lines.join("\n");
    s.push('\n');
    s
}

/// Write `lines` as a CSV export into a fresh temp dir; returns (dir, csv path).
pub fn write_export(lines: &[String]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("posts.csv");
    fs::write(&path, to_text(lines)).unwrap();
    (dir, path)
}

/// Write `lines` as a zstd-compressed export.
pub fn write_export_zst(path: &Path, lines: &[String]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let f = File::create(path).unwrap();
    let mut enc = zstd::stream::write::Encoder::new(f, 3).unwrap();
    enc.write_all(to_text(lines).as_bytes()).unwrap();
    enc.finish().unwrap();
}

pub fn read_string(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

pub fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&read_string(path)).unwrap()
}

/// `id` values of a JSON array of objects.
pub fn json_ids(v: &serde_json::Value) -> Vec<String> {
    v.as_array()
        .unwrap()
        .iter()
        .map(|o| o["id"].as_str().unwrap().to_string())
        .collect()
}
