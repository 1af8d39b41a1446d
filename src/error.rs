use thiserror::Error;

pub type Result<T> = std::result::Result<T, EclatError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EclatError {
    #[error("min_support must be in (0, 1], got {0}")]
    InvalidMinSupport(f64),

    #[error("unknown field {field:?}, table has fields {available:?}")]
    UnknownField {
        field: String,
        available: [String; 2],
    },

    #[error("field {0:?} holds transaction ids, transpose the table to mine it as items")]
    TransactionFieldAsItem(String),

    /// Two itemsets of one equivalence class had different lengths. Only
    /// reachable through a bug in the search.
    #[error("itemsets have different length: {left} vs {right}")]
    MalformedItemsetPair { left: usize, right: usize },

    #[error("missing frequent itemset: {0}")]
    MissingFrequentItemset(String),
}
