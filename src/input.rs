//! Input loading: plain UTF-8 CSV, or zstd-compressed CSV when the path ends
//! in `.zst`. The whole file is read into memory before parsing.

use crate::error::AnalyzeError;
use crate::util::open_with_backoff;
use std::io::{self, BufReader, Read};
use std::path::Path;
use zstd::stream::read::Decoder;

pub fn is_zst(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e.eq_ignore_ascii_case("zst"))
}

/// Read the whole export into a string. Missing files, decode failures and
/// invalid UTF-8 all surface as `FileRead`.
pub fn read_input(path: &Path, read_buf_bytes: usize) -> Result<String, AnalyzeError> {
    read_attempt(path, read_buf_bytes)
        .map_err(|source| AnalyzeError::FileRead { path: path.to_path_buf(), source })
}

fn read_attempt(path: &Path, read_buf_bytes: usize) -> io::Result<String> {
    let file = open_with_backoff(path, 16, 50)?;
    let mut text = String::new();
    if is_zst(path) {
        let mut decoder = Decoder::new(file)?;
        decoder.window_log_max(31)?;
        BufReader::with_capacity(read_buf_bytes, decoder).read_to_string(&mut text)?;
    } else {
        BufReader::with_capacity(read_buf_bytes, file).read_to_string(&mut text)?;
    }
    tracing::debug!(path = %path.display(), bytes = text.len(), "input loaded");
    Ok(text)
}
