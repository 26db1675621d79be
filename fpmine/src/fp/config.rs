use super::error::{FpError, FpResult};
use std::time::Duration;

/// Minimum support, either as an absolute transaction count or as a fraction
/// of all transactions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MinSupport {
    Count(usize),
    Fraction(f64),
}

impl MinSupport {
    /// Resolve to an absolute count for a dataset of `num_transactions`.
    pub fn resolve(self, num_transactions: usize) -> FpResult<usize> {
        match self {
            MinSupport::Count(0) => Err(FpError::InvalidMinSupport(
                "count must be positive".to_string(),
            )),
            MinSupport::Count(count) => Ok(count),
            MinSupport::Fraction(fraction) if fraction > 0.0 && fraction <= 1.0 => {
                let product = fraction * num_transactions as f64;
                // 0.07 * 100 is 7.000000000000001; a ceil of that would demand 8.
                let nearest = product.round();
                let min_count = if (product - nearest).abs() <= product.max(1.0) * 1e-9 {
                    nearest
                } else {
                    product.ceil()
                };
                Ok((min_count as usize).max(1))
            }
            MinSupport::Fraction(fraction) => Err(FpError::InvalidMinSupport(format!(
                "fraction {} is outside (0, 1]",
                fraction
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MiningConfig {
    pub min_support: MinSupport,
    /// Stop starting new top-level items once this many itemsets were emitted.
    pub max_itemsets: Option<usize>,
    /// Stop starting new top-level items once this much time has passed.
    pub time_limit: Option<Duration>,
    /// Mine top-level items on the rayon pool.
    pub parallel: bool,
    /// Check header table consistency after every structural operation.
    pub verify_integrity: bool,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: MinSupport::Fraction(0.01),
            max_itemsets: None,
            time_limit: None,
            parallel: false,
            verify_integrity: cfg!(debug_assertions),
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: MinSupport) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    /// Minimum support as an absolute number of transactions.
    pub fn count(min_count: usize) -> Self {
        Self::new(MinSupport::Count(min_count))
    }

    /// Minimum support as a share of all transactions.
    pub fn fraction(fraction: f64) -> Self {
        Self::new(MinSupport::Fraction(fraction))
    }

    pub fn with_max_itemsets(mut self, limit: usize) -> Self {
        self.max_itemsets = Some(limit);
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_integrity_checks(mut self, enabled: bool) -> Self {
        self.verify_integrity = enabled;
        self
    }
}
