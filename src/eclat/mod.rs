pub mod class;
pub mod config;
pub mod observations;
pub mod search;
pub mod storage;
pub mod vertical;

pub use config::{EclatConfig, IterationBudget};
pub use observations::ObservationTable;
pub use search::{mine_frequent_itemsets, Eclat};
pub use storage::{FrequentItemset, FrequentItemsetTable};
pub use vertical::{TidSet, VerticalIndex};
