//! Post rows: the `PostRecord` schema and the comma-peeling line parser.
//!
//! Every field except `title` is free of commas, so a row is resolved by
//! peeling `id` from the front and `timestamp`, `comments`, `views`, `likes`,
//! `privacy` from the back. Whatever is left in the middle is the title.

use crate::error::AnalyzeError;
use serde::{Deserialize, Serialize};

/// Number of separators a row needs: one after `id`, four between the tail
/// fields and one before `timestamp`.
pub const MIN_COMMAS: usize = 6;

/// One row of the export. Fields stay verbatim so a detailed CSV line can be
/// rebuilt byte for byte.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    pub id: String,
    pub title: String,
    pub privacy: String,
    pub likes: String,
    pub views: String,
    pub comments: String,
    pub timestamp: String,
}

impl PostRecord {
    pub fn likes_value(&self) -> f64 { loose_number(&self.likes) }
    pub fn views_value(&self) -> f64 { loose_number(&self.views) }
    pub fn comments_value(&self) -> f64 { loose_number(&self.comments) }

    /// Title length in UTF-16 code units, so an emoji counts as two.
    pub fn title_len(&self) -> usize {
        self.title.encode_utf16().count()
    }

    /// The seven fields joined with `,` in schema order. Titles are not quoted.
    pub fn to_csv_row(&self) -> String {
        [
            self.id.as_str(),
            self.title.as_str(),
            self.privacy.as_str(),
            self.likes.as_str(),
            self.views.as_str(),
            self.comments.as_str(),
            self.timestamp.as_str(),
        ]
        .join(",")
    }
}

/// Numeric view of a count field: whitespace-trimmed, empty means 0,
/// anything else that does not parse is NaN and fails every comparison.
/// The only non-finite spelling accepted is `Infinity` (optionally signed);
/// `inf`, `nan` and friends are NaN.
pub fn loose_number(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() {
        return 0.0;
    }
    let unsigned = s.strip_prefix(&['+', '-'][..]).unwrap_or(s);
    if unsigned == "Infinity" {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }
    if unsigned.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse one raw line. `line_no` is 1-based and only used for error reporting.
pub fn parse_line(line_no: usize, line: &str) -> Result<PostRecord, AnalyzeError> {
    let commas = line.matches(',').count();
    let malformed = || AnalyzeError::MalformedRow { line: line_no, commas };
    if commas < MIN_COMMAS {
        return Err(malformed());
    }

    let (id, rest) = line.split_once(',').ok_or_else(malformed)?;
    let (middle, timestamp) = rest.rsplit_once(',').ok_or_else(malformed)?;

    // comments, views, likes, privacy, then the (possibly comma-laden) title
    let mut tail = middle.rsplitn(5, ',');
    let comments = tail.next().ok_or_else(malformed)?;
    let views = tail.next().ok_or_else(malformed)?;
    let likes = tail.next().ok_or_else(malformed)?;
    let privacy = tail.next().ok_or_else(malformed)?;
    let title = tail.next().ok_or_else(malformed)?;

    Ok(PostRecord {
        id: id.to_string(),
        title: title.to_string(),
        privacy: privacy.to_string(),
        likes: likes.to_string(),
        views: views.to_string(),
        comments: comments.to_string(),
        timestamp: timestamp.to_string(),
    })
}

/// A parsed export: the column-name row kept apart from the data rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostTable {
    pub header: Option<PostRecord>,
    pub posts: Vec<PostRecord>,
}

/// Parse a whole export. The first line is the header; a trailing line
/// terminator does not produce an extra row.
pub fn parse_table(text: &str) -> Result<PostTable, AnalyzeError> {
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    let mut table = PostTable::default();
    for (idx, raw) in lines.into_iter().enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let rec = parse_line(idx + 1, line)?;
        if idx == 0 {
            table.header = Some(rec);
        } else {
            table.posts.push(rec);
        }
    }
    Ok(table)
}
