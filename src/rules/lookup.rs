use std::collections::HashMap;
use std::hash::Hash;

use crate::eclat::FrequentItemsetTable;

/// Finds table rows by multiset equality: same items, same multiplicity,
/// any order.
///
/// Items are interned to dense symbols so the key is a sorted symbol list;
/// `V` only needs `Eq + Hash`.
pub struct ItemsetLookup<'a, V> {
    symbols: HashMap<&'a V, usize>,
    rows: HashMap<Vec<usize>, usize>,
}

impl<'a, V: Eq + Hash> ItemsetLookup<'a, V> {
    pub fn new(table: &'a FrequentItemsetTable<V>) -> Self {
        let mut symbols: HashMap<&'a V, usize> = HashMap::new();
        let mut rows = HashMap::with_capacity(table.len());

        for idx in 0..table.len() {
            let mut key: Vec<usize> = table
                .get_itemset(idx)
                .iter()
                .map(|item| {
                    let next = symbols.len();
                    *symbols.entry(item).or_insert(next)
                })
                .collect();
            key.sort_unstable();
            rows.entry(key).or_insert(idx);
        }

        Self { symbols, rows }
    }

    /// Row index of the itemset, if the table holds it.
    pub fn find<'q, I>(&self, itemset: I) -> Option<usize>
    where
        I: IntoIterator<Item = &'q V>,
        V: 'q,
    {
        let mut key = itemset
            .into_iter()
            .map(|item| self.symbols.get(item).copied())
            .collect::<Option<Vec<usize>>>()?;
        key.sort_unstable();
        self.rows.get(&key).copied()
    }
}
