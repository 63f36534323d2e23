//! Output rendering: ids-only CSV, detailed CSV, daily CSV and JSON arrays.
//! CSV renderings put the header row first (when there is one) and join rows
//! with `\r\n`, without a trailing line break. JSON never carries the header.

use crate::daily::DailyPost;
use crate::record::PostRecord;
use anyhow::Result;
use serde::Serialize;

pub const ROW_SEP: &str = "\r\n";

fn join_rows(first: Option<String>, rest: impl Iterator<Item = String>) -> String {
    first.into_iter().chain(rest).collect::<Vec<_>>().join(ROW_SEP)
}

/// One id per line.
pub fn ids_csv(header: Option<&PostRecord>, posts: &[PostRecord]) -> String {
    join_rows(header.map(|h| h.id.clone()), posts.iter().map(|p| p.id.clone()))
}

/// All seven fields per line.
pub fn detailed_csv(header: Option<&PostRecord>, posts: &[PostRecord]) -> String {
    join_rows(header.map(PostRecord::to_csv_row), posts.iter().map(PostRecord::to_csv_row))
}

/// Seven fields plus the day; the header gains a literal `date` column.
pub fn daily_csv(header: Option<&PostRecord>, days: &[DailyPost]) -> String {
    join_rows(
        header.map(|h| format!("{},date", h.to_csv_row())),
        days.iter().map(DailyPost::to_csv_row),
    )
}

#[derive(Serialize)]
struct IdOnly<'a> {
    id: &'a str,
}

pub fn json_array<T: Serialize>(items: &[T], pretty: bool) -> Result<String> {
    let s = if pretty { serde_json::to_string_pretty(items)? } else { serde_json::to_string(items)? };
    Ok(s)
}

/// `[{"id": ...}, ...]`
pub fn ids_json(posts: &[PostRecord], pretty: bool) -> Result<String> {
    let ids: Vec<IdOnly<'_>> = posts.iter().map(|p| IdOnly { id: &p.id }).collect();
    json_array(&ids, pretty)
}
