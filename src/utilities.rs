// Bracket search helpers shared by the tables and models

/// Index `k` of the interval `x[k] <= x_new < x[k+1]`.
///
/// The caller must ensure `x.len() >= 2` and `x[0] <= x_new < x[x.len() - 1]`;
/// values outside that range are clamped to the first or last interval.
#[inline]
pub fn find_interval(x: &[f64], x_new: f64) -> usize {
    // invariant: target interval within [low, high)
    let mut low = 0usize;
    let mut high = x.len() - 1;
    while high - low > 1 {
        let mid = (low + high) >> 1;
        if x[mid] <= x_new {
            low = mid;
        } else {
            high = mid;
        }
    }
    low
}

/// Index of the greatest entry `<= value`, or `None` when `value` lies below
/// the first entry (or the slice is empty).
#[inline]
pub fn floor_index(x: &[f64], value: f64) -> Option<usize> {
    x.partition_point(|&v| v <= value).checked_sub(1)
}
