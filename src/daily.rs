//! Daily reducer: sort top posts by time, bucket them by UTC day (first-seen
//! day order) and keep the most-liked post of each day.

use crate::date::{parse_timestamp, DayKey};
use crate::error::AnalyzeError;
use crate::record::PostRecord;
use ahash::RandomState;
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use time::OffsetDateTime;

/// A post annotated with the UTC day it was published on.
/// Built fresh from the source record, which is left untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DailyPost {
    #[serde(flatten)]
    pub post: PostRecord,
    #[serde(serialize_with = "serialize_day")]
    pub date: DayKey,
}

impl DailyPost {
    pub fn to_csv_row(&self) -> String {
        format!("{},{}", self.post.to_csv_row(), self.date)
    }
}

fn serialize_day<S: Serializer>(day: &DayKey, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(day)
}

/// Ordered day → bucket mapping: buckets stay in the order their day was
/// first seen; the hash index only resolves a day to its slot.
struct DayBuckets<T> {
    index: HashMap<DayKey, usize, RandomState>,
    buckets: Vec<(DayKey, Vec<T>)>,
}

impl<T> DayBuckets<T> {
    fn new() -> Self {
        Self { index: HashMap::with_hasher(RandomState::new()), buckets: Vec::new() }
    }

    fn push(&mut self, day: DayKey, item: T) {
        match self.index.get(&day) {
            Some(&slot) => self.buckets[slot].1.push(item),
            None => {
                self.index.insert(day, self.buckets.len());
                self.buckets.push((day, vec![item]));
            }
        }
    }

    fn into_buckets(self) -> Vec<(DayKey, Vec<T>)> {
        self.buckets
    }
}

/// One post per UTC day: the greatest numeric `likes`, earliest wins on ties.
/// Days appear in ascending time order. Fails on the first unparseable timestamp.
pub fn daily_top(top: &[PostRecord]) -> Result<Vec<DailyPost>, AnalyzeError> {
    let mut dated: Vec<(OffsetDateTime, &PostRecord)> = top
        .iter()
        .map(|p| {
            parse_timestamp(&p.timestamp)
                .map(|at| (at, p))
                .ok_or_else(|| AnalyzeError::DateParse { id: p.id.clone(), timestamp: p.timestamp.clone() })
        })
        .collect::<Result<_, _>>()?;

    // stable: equal instants keep input order
    dated.sort_by_key(|(at, _)| *at);

    let mut days = DayBuckets::new();
    for (at, post) in dated {
        days.push(DayKey::from_instant(at), post);
    }

    let mut out = Vec::new();
    for (day, bucket) in days.into_buckets() {
        let mut best = bucket[0];
        for cand in &bucket[1..] {
            let (c, b) = (cand.likes_value(), best.likes_value());
            // a NaN best gives way to any real count
            if c > b || (b.is_nan() && !c.is_nan()) {
                best = *cand;
            }
        }
        out.push(DailyPost { post: best.clone(), date: day });
    }
    Ok(out)
}
