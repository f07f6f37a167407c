/// Every unordered pair of team indices, each exactly once, in `(i, j)`
/// order with `i < j`.
///
/// ```
/// use league_sim::league::round_robin_pairs;
///
/// let pairs: Vec<_> = round_robin_pairs(3).collect();
/// assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
/// ```
pub fn round_robin_pairs(num_teams: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..num_teams).flat_map(move |i| ((i + 1)..num_teams).map(move |j| (i, j)))
}

/// Number of matches a single round robin between `num_teams` teams plays.
pub fn num_matches(num_teams: usize) -> usize {
    num_teams * num_teams.saturating_sub(1) / 2
}

/// Mutable references to two distinct entries of `items`.
///
/// Panics if `first >= second` or `second` is out of bounds; the pairs from
/// [`round_robin_pairs`] always satisfy this.
pub(crate) fn pair_mut<T>(items: &mut [T], first: usize, second: usize) -> (&mut T, &mut T) {
    assert!(first < second, "pair_mut needs first < second");
    let (left, right) = items.split_at_mut(second);
    (&mut left[first], &mut right[0])
}
