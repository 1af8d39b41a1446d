use super::vertical::TidSet;
use crate::error::{EclatError, Result};

/// Itemset as positions into the vertical index, paired with its tidset.
#[derive(Debug, Clone)]
pub struct ClassMember {
    pub itemset: Vec<usize>,
    pub tids: TidSet,
}

/// Members sharing every item but the last (singletons at the root).
#[derive(Debug, Clone, Default)]
pub struct EquivalenceClass {
    pub members: Vec<ClassMember>,
}

impl EquivalenceClass {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, itemset: Vec<usize>, tids: TidSet) {
        self.members.push(ClassMember { itemset, tids });
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Longest shared leading run of two equal-length itemsets.
pub fn common_prefix(left: &[usize], right: &[usize]) -> Result<Vec<usize>> {
    if left.len() != right.len() {
        return Err(EclatError::MalformedItemsetPair {
            left: left.len(),
            right: right.len(),
        });
    }

    let shared = left
        .iter()
        .zip(right)
        .take_while(|(a, b)| a == b)
        .count();
    Ok(left[..shared].to_vec())
}
