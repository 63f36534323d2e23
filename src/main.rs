use anyhow::Result;
use posts_analyzer::PostsAnalyzer;
use std::path::PathBuf;

const INPUT_FILE: &str = "posts.csv";

fn main() -> Result<()> {
    let input = PathBuf::from(INPUT_FILE);

    let base = PostsAnalyzer::new()
        .env_overrides()
        .emit_detailed(true)
        .progress(true);

    // JSON first, then CSV, both with detailed output.
    for emit_json in [true, false] {
        let summary = base.clone().emit_json(emit_json).run(&input)?;
        println!(
            "{}: {} posts, {} top, {} other, {} days -> {} files",
            if emit_json { "json" } else { "csv" },
            summary.posts,
            summary.top,
            summary.other,
            summary.days,
            summary.files.len()
        );
    }

    Ok(())
}
