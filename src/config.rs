use crate::query::QualifyRules;
use std::path::{Path, PathBuf};

/// Fixed output root used by the `analyze` entry point.
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct AnalyzerOptions {
    pub output_dir: PathBuf,           // CSV files land here
    pub json_dir: PathBuf,             // JSON files land here (default: output_dir/json)
    pub emit_json: bool,               // JSON mode instead of CSV mode
    pub emit_detailed: bool,           // CSV mode only: add the detailed CSVs
    pub pretty_json: bool,
    pub create_dirs: bool,             // create missing output directories before writing
    pub progress: bool,                // show progress bar
    pub rules: QualifyRules,

    // IO tuning
    pub read_buffer_bytes: usize,      // BufReader capacity
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        let out = PathBuf::from(DEFAULT_OUTPUT_DIR);
        Self {
            json_dir: out.join("json"),
            output_dir: out,
            emit_json: false,
            emit_detailed: false,
            pretty_json: false,
            create_dirs: true,
            progress: false,
            rules: QualifyRules::default(),
            read_buffer_bytes: 64 * 1024,
        }
    }
}

impl AnalyzerOptions {
    /// Sets the output root; the JSON directory follows as `<dir>/json`.
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref().to_path_buf();
        self.json_dir = dir.join("json");
        self.output_dir = dir;
        self
    }
    pub fn with_json_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.json_dir = dir.as_ref().to_path_buf();
        self
    }
    pub fn with_emit_json(mut self, yes: bool) -> Self {
        self.emit_json = yes;
        self
    }
    pub fn with_emit_detailed(mut self, yes: bool) -> Self {
        self.emit_detailed = yes;
        self
    }
    pub fn with_pretty_json(mut self, yes: bool) -> Self {
        self.pretty_json = yes;
        self
    }
    pub fn with_create_dirs(mut self, yes: bool) -> Self {
        self.create_dirs = yes;
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_rules(mut self, rules: QualifyRules) -> Self {
        self.rules = rules;
        self
    }
    pub fn with_io_read_buffer(mut self, bytes: usize) -> Self {
        self.read_buffer_bytes = bytes.max(8 * 1024);
        self
    }

    /// Merge overrides from the environment:
    /// - POSTS_ANALYZER_OUTPUT_DIR: output root (JSON goes to `<root>/json`)
    /// - POSTS_ANALYZER_PRETTY: `1`/`true`/`yes` to pretty-print JSON
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(dir) = std::env::var("POSTS_ANALYZER_OUTPUT_DIR") {
            if !dir.trim().is_empty() {
                self = self.with_output_dir(dir.trim());
            }
        }
        if let Ok(v) = std::env::var("POSTS_ANALYZER_PRETTY") {
            match v.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => self.pretty_json = true,
                "0" | "false" | "no" | "" => self.pretty_json = false,
                other => tracing::warn!("ignoring POSTS_ANALYZER_PRETTY={other:?}"),
            }
        }
        self
    }
}
