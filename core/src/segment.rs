//! Splitting a sequence into chunks, runs and windows.
//!
//! All three functions copy elements into owned sub-vectors so the result
//! outlives the input. Output vectors are sized up front from the input
//! length, so the work is linear in the number of elements copied.

use sift_common::{Result, SiftError};
use tracing::debug;

/// Split `items` into consecutive chunks of `size` elements.
///
/// The last chunk holds the remainder and may be shorter. An empty input
/// yields no chunks. Fails with [`SiftError::InvalidArgument`] when `size`
/// is zero.
pub fn chunked<T>(items: &[T], size: usize) -> Result<Vec<Vec<T>>>
where
    T: Clone,
{
    ensure_positive("size", size)?;

    let mut chunks = Vec::with_capacity(items.len().div_ceil(size));
    for chunk in items.chunks(size) {
        chunks.push(chunk.to_vec());
    }
    Ok(chunks)
}

/// Split `items` into runs decided by a pairwise predicate.
///
/// The first element opens the first run. Each following element is
/// appended to the current run when `belongs(last_of_run, element)` holds,
/// otherwise it opens a new run. An empty input yields no runs.
pub fn chunked_by<T, F>(items: &[T], mut belongs: F) -> Vec<Vec<T>>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let Some((first, rest)) = items.split_first() else {
        return Vec::new();
    };

    let mut runs = Vec::new();
    let mut current = vec![first.clone()];

    for item in rest {
        if current.last().is_some_and(|last| belongs(last, item)) {
            current.push(item.clone());
        } else {
            runs.push(std::mem::replace(&mut current, vec![item.clone()]));
        }
    }
    runs.push(current);

    runs
}

/// Produce windows of up to `size` elements, starting every `step`
/// elements.
///
/// Windows start at indices `0, step, 2 * step, ...` while the start is
/// still inside the sequence. Windows that run off the end are truncated,
/// so trailing windows can be shorter than `size`. Fails with
/// [`SiftError::InvalidArgument`] when `size` or `step` is zero.
pub fn windowed<T>(items: &[T], size: usize, step: usize) -> Result<Vec<Vec<T>>>
where
    T: Clone,
{
    ensure_positive("size", size)?;
    ensure_positive("step", step)?;

    let len = items.len();
    let mut windows = Vec::with_capacity(len.div_ceil(step));
    let mut start = 0;

    while start < len {
        let end = start.saturating_add(size).min(len);
        windows.push(items[start..end].to_vec());
        start = start.saturating_add(step).min(len);
    }

    Ok(windows)
}

fn ensure_positive(name: &str, value: usize) -> Result<()> {
    if value == 0 {
        debug!("Rejected segmentation argument {} = 0", name);
        return Err(SiftError::invalid_argument(format!(
            "{} must be positive, got 0",
            name
        )));
    }
    Ok(())
}
