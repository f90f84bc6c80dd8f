//! Typo-tolerant matching of a search query against one field value.
//!
//! A candidate matches when its normalized form contains the normalized
//! query. Failing that, and only if [`FallbackPolicy`] allows it for the
//! candidate, a query within one edit of the whole candidate also matches.

use crate::normalize::normalize;

/// Largest edit distance the fallback accepts.
pub const MAX_EDIT_DISTANCE: usize = 1;

/// When the edit-distance fallback may run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Skip the fallback for candidates made only of ASCII letters and
    /// digits. Short dense tokens such as roll numbers would otherwise
    /// match far too much.
    #[default]
    SkipAlphanumeric,
    Always,
    Never,
}

impl FallbackPolicy {
    /// `candidate` must already be normalized.
    pub fn allows(self, candidate: &str) -> bool {
        match self {
            FallbackPolicy::SkipAlphanumeric => !is_plain_alphanumeric(candidate),
            FallbackPolicy::Always => true,
            FallbackPolicy::Never => false,
        }
    }
}

fn is_plain_alphanumeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FuzzyMatcher {
    policy: FallbackPolicy,
}

impl FuzzyMatcher {
    pub fn new(policy: FallbackPolicy) -> Self { Self { policy } }

    pub fn policy(&self) -> FallbackPolicy { self.policy }

    pub fn matches(&self, query: &str, candidate: &str) -> bool {
        if query.is_empty() || candidate.is_empty() {
            return false;
        }
        let query = normalize(query);
        let candidate = normalize(candidate);

        if candidate.contains(query.as_str()) {
            return true;
        }
        if !self.policy.allows(&candidate) {
            return false;
        }

        let query_len = query.chars().count();
        let candidate_len = candidate.chars().count();
        if query_len.abs_diff(candidate_len) > MAX_EDIT_DISTANCE {
            return false;
        }
        levenshtein(&query, &candidate) <= MAX_EDIT_DISTANCE
    }
}

/// [`FuzzyMatcher::matches`] under the default policy.
pub fn matches(query: &str, candidate: &str) -> bool {
    FuzzyMatcher::default().matches(query, candidate)
}

/// Levenshtein distance over chars, unit cost for insert, delete and
/// substitute. Fills the whole `(|a|+1) x (|b|+1)` table.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut dp = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1]
            } else {
                1 + dp[i - 1][j].min(dp[i][j - 1]).min(dp[i - 1][j - 1])
            };
        }
    }
    dp[a.len()][b.len()]
}
