use crate::statistics::{Statistic, StatisticCategory};
use std::fmt::{Display, Formatter, Result};

/// Point-in-time reading of a [`Statistic`].
///
/// Taken by the reporting layer, typically at the end of a replication and
/// before the estimator is reset.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub name: &'static str,
    pub category: StatisticCategory,
    pub estimate: f64,
    pub half_width: f64,
    pub variance: f64,
    pub relative_precision: f64,
    pub confidence_level: f64,
    pub num_observations: u64,
}

impl Summary {
    pub fn of<S: Statistic + ?Sized>(statistic: &S) -> Self {
        Self {
            name: statistic.name(),
            category: statistic.category(),
            estimate: statistic.estimate(),
            half_width: statistic.half_width(),
            variance: statistic.variance(),
            relative_precision: statistic.relative_precision(),
            confidence_level: statistic.confidence_level(),
            num_observations: statistic.num_observations(),
        }
    }

    /// True when the estimate came from at least one observation.
    #[inline]
    pub fn is_meaningful(&self) -> bool {
        self.num_observations > 0
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{}: estimate={:.6}, hw={:.6}, var={:.6}, rp={:.6}, n={}, ci={}",
            self.name,
            self.estimate,
            self.half_width,
            self.variance,
            self.relative_precision,
            self.num_observations,
            self.confidence_level
        )
    }
}
