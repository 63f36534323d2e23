mod config;
mod date;
mod error;
mod paths;
mod input;
mod record;
mod query;

mod filters;
mod progress;
mod daily;
mod render;
mod util;
mod pipeline;

pub use crate::config::{AnalyzerOptions, DEFAULT_OUTPUT_DIR};
pub use crate::date::{parse_timestamp, DayKey};
pub use crate::error::AnalyzeError;
pub use crate::pipeline::{analyze, Analysis, PostsAnalyzer, RunSummary};
pub use crate::query::QualifyRules;

// Row schema and parser.
pub use crate::record::{loose_number, parse_line, parse_table, PostRecord, PostTable, MIN_COMMAS};

// Classification and daily reduction.
pub use crate::filters::{classify, qualifies, Classified};
pub use crate::daily::{daily_top, DailyPost};

// Renderers and the output file plan.
pub use crate::render::{daily_csv, detailed_csv, ids_csv, ids_json, json_array, ROW_SEP};
pub use crate::paths::{OutputFile, OutputKind, OutputPlan, OutputRoot};

// Input helpers, robust file ops and logging setup.
pub use crate::input::read_input;
pub use crate::util::{init_tracing_once, open_with_backoff, create_with_backoff, replace_file_atomic_backoff};
