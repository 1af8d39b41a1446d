//! Frequent itemset mining with ECLAT and association rules derived from
//! the mined itemsets.
//!
//! ```
//! use eclat::{derive_rules, mine_frequent_itemsets, IterationBudget, ObservationTable};
//!
//! let observations = ObservationTable::from_pairs(
//!     "basket",
//!     "item",
//!     [(1, 10), (1, 20), (2, 10), (2, 20), (3, 10)],
//! );
//! let table = mine_frequent_itemsets(&observations, 0.5, "item", IterationBudget::Unbounded)?;
//! assert_eq!(table.len(), 3);
//!
//! let rules = derive_rules(&[vec![10, 20]], &table)?;
//! assert_eq!(rules.len(), 2);
//! # Ok::<(), eclat::EclatError>(())
//! ```

pub mod eclat;
pub mod error;
pub mod rules;

#[cfg(feature = "python")]
mod python;

pub use eclat::{
    mine_frequent_itemsets, Eclat, EclatConfig, FrequentItemset, FrequentItemsetTable,
    IterationBudget, ObservationTable, TidSet, VerticalIndex,
};
pub use error::{EclatError, Result};
pub use rules::{derive_all_rules, derive_rules, ItemsetLookup, Rule, RuleTable};
