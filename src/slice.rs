//! Extended sequence slicing with start/stop/step semantics.
//!
//! Architecturally independent of the branch engine; used by the
//! surrounding tooling to carve up generated sequences. Negative indices
//! count from the end, extents clamp to the sequence bounds, and a negative
//! step walks backward. A zero step is rejected.

use crate::error::{ContextError, Result};

/// Slice `data` by optional `start`/`stop`/`step`.
///
/// Defaults: `step` 1; with a positive step, `start` 0 and `stop` the
/// sequence length; with a negative step, `start` the sequence length and
/// `stop` 0, walking from `start - 1` down to (exclusive) `stop`. Negative
/// `start`/`stop` have the length added once, then clamp.
pub fn slice<T: Clone>(
    data: &[T],
    start: Option<i64>,
    stop: Option<i64>,
    step: Option<i64>,
) -> Result<Vec<T>> {
    let step = step.unwrap_or(1);
    if step == 0 {
        return Err(ContextError::InvalidStep);
    }

    let len = data.len() as i64;
    let clamp = |extent: i64| -> i64 {
        let extent = if extent < 0 { extent + len } else { extent };
        extent.clamp(0, len)
    };

    let mut out = Vec::new();
    if step > 0 {
        let start = clamp(start.unwrap_or(0));
        let stop = clamp(stop.unwrap_or(len));

        let mut index = start;
        while index < stop {
            out.push(data[index as usize].clone());
            index += step;
        }
    } else {
        let start = clamp(start.unwrap_or(len));
        let stop = clamp(stop.unwrap_or(0));

        let mut index = start - 1;
        while index > stop {
            out.push(data[index as usize].clone());
            index += step;
        }
    }

    Ok(out)
}
