use ndarray::ArrayView2;

use crate::error::{EclatError, Result};

/// (transaction, item) observations under two named fields.
///
/// Transactions that hold no item never show up as a row; declare them with
/// [`ObservationTable::with_transaction_count`] so they still count towards
/// support.
#[derive(Debug, Clone)]
pub struct ObservationTable<T, I> {
    transaction_field: String,
    item_field: String,
    rows: Vec<(T, I)>,
    declared_transactions: usize,
}

impl<T, I> ObservationTable<T, I> {
    pub fn new(transaction_field: impl Into<String>, item_field: impl Into<String>) -> Self {
        Self {
            transaction_field: transaction_field.into(),
            item_field: item_field.into(),
            rows: Vec::new(),
            declared_transactions: 0,
        }
    }

    pub fn from_pairs<P>(transaction_field: &str, item_field: &str, pairs: P) -> Self
    where
        P: IntoIterator<Item = (T, I)>,
    {
        let mut table = Self::new(transaction_field, item_field);
        table.extend(pairs);
        table
    }

    /// Total transaction count, including transactions without items. The
    /// distinct ids in the rows win when they are more.
    pub fn with_transaction_count(mut self, num_transactions: usize) -> Self {
        self.declared_transactions = num_transactions;
        self
    }

    pub fn push(&mut self, transaction: T, item: I) {
        self.rows.push((transaction, item));
    }

    pub fn transaction_field(&self) -> &str {
        &self.transaction_field
    }

    pub fn item_field(&self) -> &str {
        &self.item_field
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = (&T, &I)> {
        self.rows.iter().map(|(tx, item)| (tx, item))
    }

    pub(crate) fn declared_transactions(&self) -> usize {
        self.declared_transactions
    }

    /// Swap the roles of the two fields, e.g. to group transactions by item.
    /// A declared transaction count does not carry over.
    pub fn transpose(self) -> ObservationTable<I, T> {
        ObservationTable {
            transaction_field: self.item_field,
            item_field: self.transaction_field,
            rows: self.rows.into_iter().map(|(tx, item)| (item, tx)).collect(),
            declared_transactions: 0,
        }
    }

    pub(crate) fn check_item_field(&self, item_field: &str) -> Result<()> {
        if item_field == self.item_field {
            Ok(())
        } else if item_field == self.transaction_field {
            Err(EclatError::TransactionFieldAsItem(item_field.to_string()))
        } else {
            Err(EclatError::UnknownField {
                field: item_field.to_string(),
                available: [self.transaction_field.clone(), self.item_field.clone()],
            })
        }
    }
}

impl<T, I> Extend<(T, I)> for ObservationTable<T, I> {
    fn extend<P: IntoIterator<Item = (T, I)>>(&mut self, iter: P) {
        self.rows.extend(iter);
    }
}

impl ObservationTable<usize, usize> {
    /// Convert a binary transaction matrix (rows are transactions, columns
    /// are items) into a `transaction` / `item` table. Any non-zero cell
    /// counts as present; every row counts as a transaction.
    pub fn from_matrix(transactions: ArrayView2<i32>) -> Self {
        let mut table = Self::new("transaction", "item").with_transaction_count(transactions.nrows());
        for ((tx, item), &cell) in transactions.indexed_iter() {
            if cell != 0 {
                table.push(tx, item);
            }
        }
        table
    }
}
