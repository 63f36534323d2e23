use std::path::{Path, PathBuf};

/// What a single output file contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputKind {
    TopIdsCsv,
    OtherIdsCsv,
    DailyCsv,
    TopDetailedCsv,
    OtherDetailedCsv,
    TopJson,
    TopIdsJson,
    OtherJson,
    OtherIdsJson,
    DailyJson,
}

/// Where an output file goes: the CSV root or its `json/` subdirectory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputRoot {
    Csv,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutputFile {
    pub kind: OutputKind,
    pub root: OutputRoot,
    pub file_name: &'static str,
}

impl OutputFile {
    const fn csv(kind: OutputKind, file_name: &'static str) -> Self {
        Self { kind, root: OutputRoot::Csv, file_name }
    }
    const fn json(kind: OutputKind, file_name: &'static str) -> Self {
        Self { kind, root: OutputRoot::Json, file_name }
    }

    pub fn path_in(&self, csv_dir: &Path, json_dir: &Path) -> PathBuf {
        match self.root {
            OutputRoot::Csv => csv_dir.join(self.file_name),
            OutputRoot::Json => json_dir.join(self.file_name),
        }
    }
}

/// The set of files one run writes, in write order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPlan {
    pub files: Vec<OutputFile>,
}

impl OutputPlan {
    /// JSON mode writes five JSON files and ignores `emit_detailed`.
    /// CSV mode writes three CSV files, plus two detailed ones on request.
    pub fn for_mode(emit_json: bool, emit_detailed: bool) -> Self {
        use OutputKind::*;
        let files = if emit_json {
            vec![
                OutputFile::json(TopJson, "top-posts-detailed.json"),
                OutputFile::json(TopIdsJson, "top-posts.json"),
                OutputFile::json(OtherJson, "other-posts.json"),
                // ids only, despite the name
                OutputFile::json(OtherIdsJson, "other-post-detailed.json"),
                OutputFile::json(DailyJson, "daily_top_posts_detailed.json"),
            ]
        } else {
            let mut v = vec![
                OutputFile::csv(TopIdsCsv, "top_posts.csv"),
                OutputFile::csv(OtherIdsCsv, "other_posts.csv"),
                OutputFile::csv(DailyCsv, "daily_top_posts.csv"),
            ];
            if emit_detailed {
                v.push(OutputFile::csv(TopDetailedCsv, "top_posts_detailed.csv"));
                v.push(OutputFile::csv(OtherDetailedCsv, "other_posts_detailed.csv"));
            }
            v
        };
        Self { files }
    }

    pub fn needs_json_dir(&self) -> bool {
        self.files.iter().any(|f| f.root == OutputRoot::Json)
    }
}
