pub mod derive;
pub mod lookup;
pub mod splits;

pub use derive::{derive_all_rules, derive_rules, Rule, RuleTable};
pub use lookup::ItemsetLookup;
