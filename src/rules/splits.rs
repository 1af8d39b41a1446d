/// Every (antecedent, consequent) split of positions `0..n` where both
/// sides are non-empty. Antecedents come by size, then lexicographically.
///
/// Enumerates `2^n - 2` subsets, so `n` stays far below `usize::BITS` for
/// any itemset whose subsets could all be frequent.
pub fn proper_splits(n: usize) -> Vec<(Vec<usize>, Vec<usize>)> {
    let full = (1usize << n) - 1;
    let positions = |mask: usize| -> Vec<usize> { (0..n).filter(|pos| mask & (1 << pos) != 0).collect() };

    let mut splits: Vec<_> = (1..full)
        .map(|mask| (positions(mask), positions(full ^ mask)))
        .collect();
    splits.sort_by(|a, b| a.0.len().cmp(&b.0.len()).then_with(|| a.0.cmp(&b.0)));
    splits
}
