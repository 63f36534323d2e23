use crate::config::AnalyzerOptions;
use crate::daily::{daily_top, DailyPost};
use crate::error::AnalyzeError;
use crate::filters::classify;
use crate::input::read_input;
use crate::paths::{OutputFile, OutputKind, OutputPlan};
use crate::progress::ProgressScope;
use crate::query::QualifyRules;
use crate::record::{parse_table, PostRecord, PostTable};
use crate::render::{daily_csv, detailed_csv, ids_csv, ids_json, json_array};
use crate::util::{create_with_backoff, init_tracing_once, remove_with_backoff, replace_file_atomic_backoff};
use anyhow::Result;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Run `path` through the pipeline and write the files for the selected mode
/// under the fixed `./output` root (JSON under `./output/json`).
pub fn analyze(file_path: impl AsRef<Path>, emit_json: bool, emit_detailed: bool) -> Result<()> {
    PostsAnalyzer::new()
        .emit_json(emit_json)
        .emit_detailed(emit_detailed)
        .run(file_path.as_ref())?;
    Ok(())
}

/// Everything one run computes, held in memory before anything is written.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Analysis {
    pub header: Option<PostRecord>,
    pub top: Vec<PostRecord>,
    pub other: Vec<PostRecord>,
    pub daily: Vec<DailyPost>,
}

impl Analysis {
    pub fn from_table(table: PostTable, rules: &QualifyRules) -> Result<Self, AnalyzeError> {
        let total = table.posts.len();
        let split = classify(table.posts, rules);
        let daily = daily_top(&split.top)?;
        tracing::info!(
            posts = total,
            top = split.top.len(),
            other = split.other.len(),
            days = daily.len(),
            "classified posts"
        );
        Ok(Self { header: table.header, top: split.top, other: split.other, daily })
    }

    pub fn render_file(&self, file: &OutputFile, pretty: bool) -> Result<String> {
        let header = self.header.as_ref();
        let body = match file.kind {
            OutputKind::TopIdsCsv => ids_csv(header, &self.top),
            OutputKind::OtherIdsCsv => ids_csv(header, &self.other),
            OutputKind::DailyCsv => daily_csv(header, &self.daily),
            OutputKind::TopDetailedCsv => detailed_csv(header, &self.top),
            OutputKind::OtherDetailedCsv => detailed_csv(header, &self.other),
            OutputKind::TopJson => json_array(&self.top, pretty)?,
            OutputKind::TopIdsJson => ids_json(&self.top, pretty)?,
            OutputKind::OtherJson => json_array(&self.other, pretty)?,
            OutputKind::OtherIdsJson => ids_json(&self.other, pretty)?,
            OutputKind::DailyJson => json_array(&self.daily, pretty)?,
        };
        Ok(body)
    }

    /// Render every file of `plan` without touching disk.
    pub fn render(&self, plan: &OutputPlan, pretty: bool) -> Result<Vec<(OutputFile, String)>> {
        plan.files.iter().map(|f| self.render_file(f, pretty).map(|body| (*f, body))).collect()
    }
}

/// What a finished run reports back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub posts: usize,
    pub top: usize,
    pub other: usize,
    pub days: usize,
    pub files: Vec<PathBuf>,
}

#[derive(Clone, Debug, Default)]
pub struct PostsAnalyzer {
    pub(crate) opts: AnalyzerOptions,
}

impl PostsAnalyzer {
    pub fn new() -> Self {
        Self { opts: AnalyzerOptions::default() }
    }

    pub fn with_options(opts: AnalyzerOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &AnalyzerOptions {
        &self.opts
    }

    // -------- Builder methods --------
    pub fn output_dir(mut self, dir: impl AsRef<Path>) -> Self { self.opts = self.opts.with_output_dir(dir); self }
    pub fn json_dir(mut self, dir: impl AsRef<Path>) -> Self { self.opts = self.opts.with_json_dir(dir); self }
    pub fn emit_json(mut self, yes: bool) -> Self { self.opts = self.opts.with_emit_json(yes); self }
    pub fn emit_detailed(mut self, yes: bool) -> Self { self.opts = self.opts.with_emit_detailed(yes); self }
    pub fn pretty_json(mut self, yes: bool) -> Self { self.opts = self.opts.with_pretty_json(yes); self }
    pub fn create_dirs(mut self, yes: bool) -> Self { self.opts = self.opts.with_create_dirs(yes); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }
    pub fn rules(mut self, rules: QualifyRules) -> Self { self.opts = self.opts.with_rules(rules); self }
    pub fn io_read_buffer(mut self, bytes: usize) -> Self { self.opts = self.opts.with_io_read_buffer(bytes); self }
    pub fn env_overrides(mut self) -> Self { self.opts = self.opts.with_env_overrides(); self }

    pub fn plan(&self) -> OutputPlan {
        OutputPlan::for_mode(self.opts.emit_json, self.opts.emit_detailed)
    }

    /// Parse, classify and reduce `text` in memory.
    pub fn analyze_text(&self, text: &str) -> Result<Analysis> {
        let table = parse_table(text)?;
        if table.header.is_none() {
            tracing::warn!("input is empty; outputs will be empty");
        }
        Ok(Analysis::from_table(table, &self.opts.rules)?)
    }

    /// Full run: read `input`, compute everything, then write each planned file.
    /// A failing write aborts the run; files written before it stay in place.
    pub fn run(&self, input: &Path) -> Result<RunSummary> {
        init_tracing_once();
        let text = read_input(input, self.opts.read_buffer_bytes)?;
        let analysis = self.analyze_text(&text)?;

        let plan = self.plan();
        let rendered = analysis.render(&plan, self.opts.pretty_json)?;
        self.ensure_dirs(&plan)?;

        let scope = ProgressScope::count(self.opts.progress, "Writing outputs", rendered.len() as u64);
        let mut files = Vec::with_capacity(rendered.len());
        for (file, body) in rendered {
            let path = file.path_in(&self.opts.output_dir, &self.opts.json_dir);
            write_output(&path, &body)?;
            tracing::debug!(path = %path.display(), bytes = body.len(), "wrote output");
            files.push(path);
            scope.inc_items(1);
        }
        scope.finish("done");

        tracing::info!(input = %input.display(), files = files.len(), "analysis finished");
        Ok(RunSummary {
            posts: analysis.top.len() + analysis.other.len(),
            top: analysis.top.len(),
            other: analysis.other.len(),
            days: analysis.daily.len(),
            files,
        })
    }

    fn ensure_dirs(&self, plan: &OutputPlan) -> Result<(), AnalyzeError> {
        if !self.opts.create_dirs {
            return Ok(());
        }
        let dir = if plan.needs_json_dir() { &self.opts.json_dir } else { &self.opts.output_dir };
        fs::create_dir_all(dir).map_err(|source| AnalyzeError::OutputWrite { path: dir.clone(), source })
    }
}

/// Write `body` to `<path>.inprogress`, then promote it over `path`.
fn write_output(path: &Path, body: &str) -> Result<(), AnalyzeError> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".inprogress");
    let tmp = PathBuf::from(tmp);

    let attempt = || -> io::Result<()> {
        let mut w = BufWriter::new(create_with_backoff(&tmp, 16, 50)?);
        w.write_all(body.as_bytes())?;
        w.flush()?;
        drop(w);
        replace_file_atomic_backoff(&tmp, path)
    };
    attempt().map_err(|source| {
        let _ = remove_with_backoff(&tmp, 1, 0);
        AnalyzeError::OutputWrite { path: path.to_path_buf(), source }
    })
}
