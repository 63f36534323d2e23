use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort an analysis run. Nothing is recovered internally.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("cannot read input {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed row at line {line}: expected at least {min} commas, found {commas}", min = crate::record::MIN_COMMAS)]
    MalformedRow { line: usize, commas: usize },
    #[error("post '{id}' has an unparseable timestamp '{timestamp}'")]
    DateParse { id: String, timestamp: String },
    #[error("cannot write output {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
