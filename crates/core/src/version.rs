//! Dotted version comparison

use crate::error::{Result, UtilError};
use std::cmp::Ordering;

fn segments(version: &str) -> Result<Vec<u64>> {
    let trimmed = version.trim();
    let body = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    body.split('.')
        .map(|segment| {
            segment
                .trim()
                .parse::<u64>()
                .map_err(|_| UtilError::invalid_version(version, segment))
        })
        .collect()
}

/// Compare two dot-separated numeric versions
///
/// Segments are compared left to right; a missing segment counts as zero,
/// so `1.2` equals `1.2.0`. `Less`, `Equal` and `Greater` correspond to
/// -1, 0 and 1 (`ordering as i32`).
pub fn compare_version(a: &str, b: &str) -> Result<Ordering> {
    let left = segments(a)?;
    let right = segments(b)?;

    for i in 0..left.len().max(right.len()) {
        let l = left.get(i).copied().unwrap_or(0);
        let r = right.get(i).copied().unwrap_or(0);
        match l.cmp(&r) {
            Ordering::Equal => continue,
            unequal => return Ok(unequal),
        }
    }

    Ok(Ordering::Equal)
}
