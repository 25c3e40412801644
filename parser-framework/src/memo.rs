//! Packrat memoization keyed by `(rule, absolute position)`.
//!
//! A successful parse of a rule is recorded as the span of buffer indices it
//! consumed. Those indices are local to the lookahead buffer, so an entry is
//! only meaningful until the next truncation; [`MemoCache::purge_before`]
//! must run every time the buffer truncates.

use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use tracing::trace;

/// Buffer-local index span consumed by a successful rule parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoSpan {
    pub start: usize,
    pub end: usize,
}

impl MemoSpan {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Number of tokens the rule consumed.
    pub fn width(&self) -> usize {
        self.end - self.start
    }
}

/// Per-rule map from absolute start position to consumed span.
#[derive(Debug, Default)]
pub struct MemoCache {
    rules: FxHashMap<&'static str, BTreeMap<usize, MemoSpan>>,
    hits: usize,
    misses: usize,
}

impl MemoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the span recorded for `rule` at `position`, if any.
    pub fn lookup(&mut self, rule: &'static str, position: usize) -> Option<MemoSpan> {
        let span = self
            .rules
            .get(rule)
            .and_then(|entries| entries.get(&position))
            .copied();
        match span {
            Some(_) => self.hits += 1,
            None => self.misses += 1,
        }
        span
    }

    /// Records a span. The same rule at the same position always reduces to
    /// the same span, so overwriting is harmless.
    pub fn store(&mut self, rule: &'static str, position: usize, span: MemoSpan) {
        trace!(rule, position, start = span.start, width = span.width(), "memo store");
        self.rules.entry(rule).or_default().insert(position, span);
    }

    /// Drops every entry, across all rules, whose position is below
    /// `threshold`. Returns how many were removed.
    pub fn purge_before(&mut self, threshold: usize) -> usize {
        let mut purged = 0;
        for entries in self.rules.values_mut() {
            let kept = entries.split_off(&threshold);
            purged += entries.len();
            *entries = kept;
        }
        if purged > 0 {
            trace!(threshold, purged, "memo purge");
        }
        purged
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.rules.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}
