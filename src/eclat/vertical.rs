use std::collections::HashMap;
use std::hash::Hash;

use tracing::debug;

use super::observations::ObservationTable;
use crate::error::Result;

/// Sorted, deduplicated set of dense transaction indices.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TidSet(Vec<usize>);

impl TidSet {
    pub fn from_unsorted(mut tids: Vec<usize>) -> Self {
        tids.sort_unstable();
        tids.dedup();
        Self(tids)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Merge-intersect two sorted sets.
    pub fn intersect(&self, other: &TidSet) -> TidSet {
        let (a, b) = (&self.0, &other.0);
        let mut out = Vec::with_capacity(a.len().min(b.len()));
        let (mut i, mut j) = (0, 0);
        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    out.push(a[i]);
                    i += 1;
                    j += 1;
                }
            }
        }
        TidSet(out)
    }
}

/// Item -> transaction set mapping, ordered by ascending support.
///
/// Items with equal support keep the order in which they were first seen.
#[derive(Debug, Clone)]
pub struct VerticalIndex<V> {
    items: Vec<V>,
    tidsets: Vec<TidSet>,
    transaction_field: String,
    num_transactions: usize,
}

impl<V: Eq + Hash + Clone> VerticalIndex<V> {
    pub fn build<T>(table: &ObservationTable<T, V>, item_field: &str) -> Result<Self>
    where
        T: Eq + Hash,
    {
        table.check_item_field(item_field)?;

        let mut tx_ids: HashMap<&T, usize> = HashMap::new();
        let mut item_ids: HashMap<&V, usize> = HashMap::new();
        let mut seen: Vec<&V> = Vec::new();
        let mut members: Vec<Vec<usize>> = Vec::new();

        for (tx, item) in table.rows() {
            let next_tx = tx_ids.len();
            let tid = *tx_ids.entry(tx).or_insert(next_tx);

            let slot = *item_ids.entry(item).or_insert_with(|| {
                seen.push(item);
                members.push(Vec::new());
                seen.len() - 1
            });
            members[slot].push(tid);
        }

        let mut entries: Vec<(&V, TidSet)> = seen
            .into_iter()
            .zip(members.into_iter().map(TidSet::from_unsorted))
            .collect();
        entries.sort_by_key(|(_, tids)| tids.len());

        let (items, tidsets): (Vec<V>, Vec<TidSet>) = entries
            .into_iter()
            .map(|(item, tids)| (item.clone(), tids))
            .unzip();

        let index = Self {
            items,
            tidsets,
            transaction_field: table.transaction_field().to_string(),
            num_transactions: tx_ids.len().max(table.declared_transactions()),
        };
        debug!(
            items = index.len(),
            transactions = index.num_transactions,
            "built vertical index"
        );
        Ok(index)
    }
}

impl<V> VerticalIndex<V> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, pos: usize) -> &V {
        &self.items[pos]
    }

    pub fn tidset(&self, pos: usize) -> &TidSet {
        &self.tidsets[pos]
    }

    pub fn support(&self, pos: usize) -> usize {
        self.tidsets[pos].len()
    }

    /// Name of the column that held transaction ids.
    pub fn transaction_field(&self) -> &str {
        &self.transaction_field
    }

    /// Number of distinct transaction ids in the input, or the declared
    /// transaction count when that is larger.
    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, &TidSet)> {
        self.items.iter().zip(self.tidsets.iter())
    }
}
