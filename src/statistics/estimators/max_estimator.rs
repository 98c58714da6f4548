use crate::statistics::StatisticCategory;
use crate::statistics::estimators::{DEFAULT_CONFIDENCE_LEVEL, Statistic};

/// Running maximum of an observation stream.
///
/// Mirror of [`MinEstimator`](super::MinEstimator): sentinel is
/// `f64::NEG_INFINITY`, weights are ignored and interval metadata is `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxEstimator {
    count: u64,
    max: f64,
    confidence_level: f64,
}

impl MaxEstimator {
    pub fn new(confidence_level: f64) -> Self {
        Self {
            count: 0,
            max: f64::NEG_INFINITY,
            confidence_level,
        }
    }
}

impl Default for MaxEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIDENCE_LEVEL)
    }
}

impl Statistic for MaxEstimator {
    #[inline]
    fn collect(&mut self, value: f64, _weight: f64) {
        self.count += 1;
        if value > self.max {
            log::trace!("new maximum {value} after {} observations", self.count);
            self.max = value;
        }
    }

    fn category(&self) -> StatisticCategory {
        StatisticCategory::Max
    }

    fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    #[inline]
    fn estimate(&self) -> f64 {
        self.max
    }

    fn half_width(&self) -> f64 {
        0.0
    }

    fn variance(&self) -> f64 {
        0.0
    }

    fn relative_precision(&self) -> f64 {
        0.0
    }

    fn num_observations(&self) -> u64 {
        self.count
    }

    fn reset(&mut self) {
        log::debug!("resetting Max after {} observations", self.count);
        self.max = f64::NEG_INFINITY;
        self.count = 0;
    }

    fn name(&self) -> &'static str {
        "Max"
    }
}
