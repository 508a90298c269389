//! Splitting lookup keys into API-sized batches.

/// Split `items` into consecutive groups of at most `size` elements.
///
/// Order is preserved across and within groups; only the last group may be
/// short. Empty input yields no groups. A `size` of zero is treated as one.
pub fn chunk(items: &[String], size: usize) -> Vec<Vec<String>> {
    items
        .chunks(size.max(1))
        .map(|group| group.to_vec())
        .collect()
}
