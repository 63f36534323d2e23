//! Classification: the top-post predicate and the order-preserving partition.

use crate::query::QualifyRules;
use crate::record::PostRecord;

/// True when the post passes every rule. Privacy is compared exactly, so
/// `"Public"` does not qualify.
pub fn qualifies(post: &PostRecord, rules: &QualifyRules) -> bool {
    post.privacy == rules.privacy
        && post.comments_value() > rules.min_comments
        && post.views_value() > rules.min_views
        && post.title_len() < rules.max_title_len
}

/// Posts split into top and other, each in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classified {
    pub top: Vec<PostRecord>,
    pub other: Vec<PostRecord>,
}

pub fn classify(posts: Vec<PostRecord>, rules: &QualifyRules) -> Classified {
    let (top, other) = posts.into_iter().partition(|p| qualifies(p, rules));
    Classified { top, other }
}
