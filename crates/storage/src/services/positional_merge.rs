//! Positional matching of incoming nested entries against stored child rows.
//!
//! Nested collections of an exercise are updated by position, not by id: the
//! n-th incoming entry overwrites the n-th stored row. When the lengths
//! differ, the surplus on either side is left alone, so extra entries create
//! nothing and extra rows are neither changed nor deleted. Reordering the
//! input therefore rebinds entries to different rows.

use std::collections::VecDeque;

/// Pair each incoming entry with the next remaining stored row, in order.
pub fn pair_by_position<R, E>(stored: Vec<R>, incoming: &[E]) -> Vec<(R, &E)> {
    let mut remaining: VecDeque<R> = stored.into();

    incoming
        .iter()
        .map_while(|entry| remaining.pop_front().map(|row| (row, entry)))
        .collect()
}
