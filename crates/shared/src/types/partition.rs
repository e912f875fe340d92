//! Partition planning for splitting ordered collections into contiguous chunks.
//!
//! Used both for parallel payment aggregation (split into N workers) and for
//! paged payment export (split into files of N records).

use std::ops::Range;

/// Returns how many items each chunk holds when `len` items are split across
/// `parts` chunks: `ceil(len / parts)`. Zero parts are treated as one.
#[must_use]
pub fn chunk_len(len: usize, parts: usize) -> usize {
    len.div_ceil(parts.max(1))
}

/// Splits `0..len` into contiguous ranges of `per_part` items each.
///
/// The ranges are disjoint, ordered, and cover every index exactly once; only
/// the last range may be shorter. Returns no ranges when `len` or `per_part`
/// is zero.
#[must_use]
pub fn partitions(len: usize, per_part: usize) -> Vec<Range<usize>> {
    if len == 0 || per_part == 0 {
        return Vec::new();
    }
    (0..len)
        .step_by(per_part)
        .map(|start| start..len.min(start + per_part))
        .collect()
}
