/// Frequent itemsets in discovery order, stored as one flat item buffer
/// plus (start, length) offsets.
#[derive(Debug, Clone)]
pub struct FrequentItemsetTable<V> {
    items: Vec<V>,
    offsets: Vec<(usize, usize)>,
    frequencies: Vec<usize>,
    num_transactions: usize,
}

/// One row of a [`FrequentItemsetTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequentItemset<'a, V> {
    pub itemset: &'a [V],
    pub frequency: usize,
    pub support: f64,
}

impl<V> FrequentItemsetTable<V> {
    pub fn new(num_transactions: usize) -> Self {
        Self {
            items: Vec::new(),
            offsets: Vec::new(),
            frequencies: Vec::new(),
            num_transactions,
        }
    }

    /// Append an itemset as-is; element order is kept.
    pub fn add_itemset<I>(&mut self, itemset: I, frequency: usize) -> usize
    where
        I: IntoIterator<Item = V>,
    {
        let start = self.items.len();
        self.items.extend(itemset);
        self.offsets.push((start, self.items.len() - start));
        self.frequencies.push(frequency);
        self.offsets.len() - 1
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Denominator used for every support value in this table.
    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn get_itemset(&self, idx: usize) -> &[V] {
        let (start, len) = self.offsets[idx];
        &self.items[start..start + len]
    }

    pub fn frequency(&self, idx: usize) -> usize {
        self.frequencies[idx]
    }

    pub fn support(&self, idx: usize) -> f64 {
        if self.num_transactions == 0 {
            return 0.0;
        }
        self.frequencies[idx] as f64 / self.num_transactions as f64
    }

    pub fn get(&self, idx: usize) -> FrequentItemset<'_, V> {
        FrequentItemset {
            itemset: self.get_itemset(idx),
            frequency: self.frequency(idx),
            support: self.support(idx),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = FrequentItemset<'_, V>> {
        (0..self.len()).map(move |idx| self.get(idx))
    }

    /// Records of exactly `size` items, in discovery order.
    pub fn of_size(&self, size: usize) -> impl Iterator<Item = FrequentItemset<'_, V>> {
        self.iter().filter(move |record| record.itemset.len() == size)
    }

    /// Length of the longest itemset in the table, 0 when empty.
    pub fn max_itemset_size(&self) -> usize {
        self.offsets.iter().map(|&(_, len)| len).max().unwrap_or(0)
    }
}
