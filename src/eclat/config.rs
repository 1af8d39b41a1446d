use std::num::NonZeroUsize;

use crate::error::{EclatError, Result};

/// Upper bound on the number of equivalence classes the search may expand.
///
/// A cap of zero means no cap, so `Bounded` only ever holds a positive count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IterationBudget {
    #[default]
    Unbounded,
    Bounded(NonZeroUsize),
}

impl IterationBudget {
    pub fn bounded(max_iterations: usize) -> Self {
        NonZeroUsize::new(max_iterations).map_or(IterationBudget::Unbounded, IterationBudget::Bounded)
    }

    /// Classes the search may still expand, `None` when unbounded.
    pub(crate) fn limit(self) -> Option<usize> {
        match self {
            IterationBudget::Unbounded => None,
            IterationBudget::Bounded(cap) => Some(cap.get()),
        }
    }
}

impl From<Option<usize>> for IterationBudget {
    fn from(cap: Option<usize>) -> Self {
        cap.map_or(IterationBudget::Unbounded, IterationBudget::bounded)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclatConfig {
    pub min_support: f64,
    pub max_iterations: IterationBudget,
}

impl Default for EclatConfig {
    fn default() -> Self {
        Self {
            min_support: 0.01,
            max_iterations: IterationBudget::Unbounded,
        }
    }
}

impl EclatConfig {
    pub fn new(min_support: f64) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = IterationBudget::bounded(max_iterations);
        self
    }

    pub fn with_budget(mut self, budget: IterationBudget) -> Self {
        self.max_iterations = budget;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_support > 0.0 && self.min_support <= 1.0 {
            Ok(())
        } else {
            Err(EclatError::InvalidMinSupport(self.min_support))
        }
    }

    /// Smallest transaction count an itemset needs to be frequent.
    pub fn min_frequency(&self, num_transactions: usize) -> usize {
        (self.min_support * num_transactions as f64).ceil() as usize
    }
}
