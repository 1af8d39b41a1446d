use std::hash::Hash;

use tracing::{debug, info, warn};

use super::class::{common_prefix, EquivalenceClass};
use super::config::{EclatConfig, IterationBudget};
use super::observations::ObservationTable;
use super::storage::FrequentItemsetTable;
use super::vertical::VerticalIndex;
use crate::error::Result;

/// Depth-first ECLAT miner.
#[derive(Debug, Clone, Default)]
pub struct Eclat {
    config: EclatConfig,
}

impl Eclat {
    pub fn new(config: EclatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EclatConfig {
        &self.config
    }

    pub fn mine<T, V>(
        &self,
        observations: &ObservationTable<T, V>,
        item_field: &str,
    ) -> Result<FrequentItemsetTable<V>>
    where
        T: Eq + Hash,
        V: Eq + Hash + Clone,
    {
        self.config.validate()?;
        let index = VerticalIndex::build(observations, item_field)?;
        self.mine_index(&index)
    }

    /// Run the search over an already built vertical index.
    pub fn mine_index<V: Clone>(&self, index: &VerticalIndex<V>) -> Result<FrequentItemsetTable<V>> {
        self.config.validate()?;

        let num_transactions = index.num_transactions();
        let min_freq = self.config.min_frequency(num_transactions);
        let mut table = FrequentItemsetTable::new(num_transactions);

        let mut seed = EquivalenceClass::new();
        for pos in 0..index.len() {
            let support = index.support(pos);
            if support < min_freq {
                continue;
            }
            seed.push(vec![pos], index.tidset(pos).clone());
            table.add_itemset([index.item(pos).clone()], support);
        }
        debug!(
            min_freq,
            kept = seed.len(),
            pruned = index.len() - seed.len(),
            "pruned infrequent items"
        );

        let mut stack = vec![seed];
        let mut remaining = self.config.max_iterations.limit();
        let mut explored = 0usize;

        while let Some(class) = stack.pop() {
            if remaining == Some(0) {
                warn!(
                    explored,
                    pending = stack.len() + 1,
                    "iteration budget exhausted, returning partial itemsets"
                );
                break;
            }
            if let Some(left) = remaining.as_mut() {
                *left -= 1;
            }
            explored += 1;

            let members = &class.members;
            for i in 0..members.len().saturating_sub(1) {
                let first = &members[i];
                let mut next = EquivalenceClass::new();

                for second in &members[i + 1..] {
                    let tids = first.tids.intersect(&second.tids);
                    if tids.len() < min_freq {
                        continue;
                    }

                    let itemset = extend_itemset(index, &first.itemset, &second.itemset)?;
                    table.add_itemset(itemset.iter().map(|&pos| index.item(pos).clone()), tids.len());
                    next.push(itemset, tids);
                }

                if !next.is_empty() {
                    stack.push(next);
                }
            }
        }

        info!(itemsets = table.len(), explored, min_freq, "eclat finished");
        Ok(table)
    }
}

/// Join two class members: shared prefix, then both last items, ordered by
/// ascending singleton support (stable on ties).
fn extend_itemset<V>(index: &VerticalIndex<V>, left: &[usize], right: &[usize]) -> Result<Vec<usize>> {
    let mut itemset = common_prefix(left, right)?;
    itemset.extend(left.last());
    itemset.extend(right.last());
    itemset.sort_by_key(|&pos| index.support(pos));
    Ok(itemset)
}

/// Mine every frequent itemset of `observations`. `item_field` must name the
/// table's item field.
pub fn mine_frequent_itemsets<T, V>(
    observations: &ObservationTable<T, V>,
    min_support: f64,
    item_field: &str,
    max_iterations: IterationBudget,
) -> Result<FrequentItemsetTable<V>>
where
    T: Eq + Hash,
    V: Eq + Hash + Clone,
{
    let config = EclatConfig::new(min_support).with_budget(max_iterations);
    Eclat::new(config).mine(observations, item_field)
}
