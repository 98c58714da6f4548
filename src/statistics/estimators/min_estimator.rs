use crate::statistics::StatisticCategory;
use crate::statistics::estimators::{DEFAULT_CONFIDENCE_LEVEL, Statistic};

/// Running minimum of an observation stream.
///
/// O(1) per observation. Weights are accepted but ignored. The minimum is an
/// exact point statistic, so all interval metadata is `0.0`.
///
/// Before the first observation [`Statistic::estimate`] returns
/// `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinEstimator {
    count: u64,
    min: f64,
    confidence_level: f64,
}

impl MinEstimator {
    pub fn new(confidence_level: f64) -> Self {
        Self {
            count: 0,
            min: f64::INFINITY,
            confidence_level,
        }
    }
}

impl Default for MinEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIDENCE_LEVEL)
    }
}

impl Statistic for MinEstimator {
    #[inline]
    fn collect(&mut self, value: f64, _weight: f64) {
        self.count += 1;
        // NaN fails the comparison and never becomes the minimum.
        if value < self.min {
            log::trace!("new minimum {value} after {} observations", self.count);
            self.min = value;
        }
    }

    fn category(&self) -> StatisticCategory {
        StatisticCategory::Min
    }

    fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    #[inline]
    fn estimate(&self) -> f64 {
        self.min
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
        log::debug!("resetting Min after {} observations", self.count);
        self.min = f64::INFINITY;
        self.count = 0;
    }

    fn name(&self) -> &'static str {
        "Min"
    }
}
