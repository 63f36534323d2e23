//! Qualification rules ("what makes a top post") and normalization helpers.

/// Thresholds a post must beat to count as a top post.
/// All numeric bounds are strict: a post needs *more* than `min_comments`
/// comments and `min_views` views, and a title *shorter* than `max_title_len`.
#[derive(Clone, Debug, PartialEq)]
pub struct QualifyRules {
    pub privacy: String,       // normalized lowercase
    pub min_comments: f64,
    pub min_views: f64,
    pub max_title_len: usize,
}

impl Default for QualifyRules {
    fn default() -> Self {
        Self {
            privacy: "public".to_string(),
            min_comments: 10.0,
            min_views: 9000.0,
            max_title_len: 40,
        }
    }
}

impl QualifyRules {
    pub fn with_privacy(mut self, privacy: impl AsRef<str>) -> Self {
        self.privacy = normalize_str(privacy.as_ref());
        self
    }
    pub fn with_min_comments(mut self, v: f64) -> Self {
        self.min_comments = v;
        self
    }
    pub fn with_min_views(mut self, v: f64) -> Self {
        self.min_views = v;
        self
    }
    pub fn with_max_title_len(mut self, v: usize) -> Self {
        self.max_title_len = v;
        self
    }
}

#[inline]
pub fn normalize_str(s: &str) -> String {
    s.trim().to_lowercase()
}
