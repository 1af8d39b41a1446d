use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use super::lookup::ItemsetLookup;
use super::splits::proper_splits;
use crate::eclat::FrequentItemsetTable;
use crate::error::{EclatError, Result};

/// Association rule `antecedent -> consequent` with its metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule<V> {
    pub antecedent: Vec<V>,
    pub consequent: Vec<V>,
    /// Transactions containing the whole itemset.
    pub frequency: usize,
    pub support: f64,
    pub antecedent_support: f64,
    pub consequent_support: f64,
    pub confidence: f64,
    pub lift: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable<V> {
    rules: Vec<Rule<V>>,
}

impl<V> RuleTable<V> {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule<V>> {
        self.rules.iter()
    }

    pub fn rules(&self) -> &[Rule<V>] {
        &self.rules
    }

    pub fn into_rules(self) -> Vec<Rule<V>> {
        self.rules
    }

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.rules.retain(|rule| rule.confidence >= min_confidence);
        self
    }

    pub fn with_min_lift(mut self, min_lift: f64) -> Self {
        self.rules.retain(|rule| rule.lift >= min_lift);
        self
    }
}

impl<'a, V> IntoIterator for &'a RuleTable<V> {
    type Item = &'a Rule<V>;
    type IntoIter = std::slice::Iter<'a, Rule<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Derive every rule from every non-trivial split of each itemset.
///
/// The itemsets and all of their splits must be present in `table`;
/// otherwise the whole call fails with [`EclatError::MissingFrequentItemset`].
pub fn derive_rules<V, I, S>(itemsets: I, table: &FrequentItemsetTable<V>) -> Result<RuleTable<V>>
where
    V: Eq + Hash + Clone + Debug,
    I: IntoIterator<Item = S>,
    S: AsRef<[V]>,
{
    let lookup = ItemsetLookup::new(table);
    let mut rules = Vec::new();
    let mut derived_from = 0usize;

    for itemset in itemsets {
        let itemset = itemset.as_ref();
        let whole = find(&lookup, itemset.iter())?;
        derived_from += 1;

        for (antecedent, consequent) in proper_splits(itemset.len()) {
            let antecedent: Vec<&V> = antecedent.iter().map(|&pos| &itemset[pos]).collect();
            let consequent: Vec<&V> = consequent.iter().map(|&pos| &itemset[pos]).collect();

            let ante_row = find(&lookup, antecedent.iter().copied())?;
            let cons_row = find(&lookup, consequent.iter().copied())?;

            let support = table.support(whole);
            let antecedent_support = table.support(ante_row);
            let consequent_support = table.support(cons_row);
            let confidence = support / antecedent_support;

            rules.push(Rule {
                antecedent: antecedent.into_iter().cloned().collect(),
                consequent: consequent.into_iter().cloned().collect(),
                frequency: table.frequency(whole),
                support,
                antecedent_support,
                consequent_support,
                confidence,
                lift: confidence / consequent_support,
            });
        }
    }

    debug!(itemsets = derived_from, rules = rules.len(), "derived association rules");
    Ok(RuleTable { rules })
}

/// Rules for every itemset of two or more items in `table`.
pub fn derive_all_rules<V>(table: &FrequentItemsetTable<V>) -> Result<RuleTable<V>>
where
    V: Eq + Hash + Clone + Debug,
{
    let itemsets = table
        .iter()
        .filter(|record| record.itemset.len() > 1)
        .map(|record| record.itemset);
    derive_rules(itemsets, table)
}

fn find<'q, V, I>(lookup: &ItemsetLookup<'_, V>, itemset: I) -> Result<usize>
where
    V: Eq + Hash + Debug + 'q,
    I: IntoIterator<Item = &'q V> + Clone,
{
    lookup.find(itemset.clone()).ok_or_else(|| {
        let missing: Vec<&V> = itemset.into_iter().collect();
        EclatError::MissingFrequentItemset(format!("{:?}", missing))
    })
}
