use crate::statistics::{StatisticCategory, Summary};

/// Confidence level used when an estimator is built without one.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Online estimator of a simulation output statistic.
///
/// Implementations accept weighted observations via [`collect`] and expose
/// a point estimate plus interval metadata. Estimators that compute an exact
/// point statistic (e.g. min/max) report `0.0` for [`half_width`],
/// [`variance`] and [`relative_precision`].
///
/// The trait is object safe so a collection layer can hold heterogeneous
/// estimators as `Box<dyn Statistic>`.
///
/// [`collect`]: Statistic::collect
/// [`half_width`]: Statistic::half_width
/// [`variance`]: Statistic::variance
/// [`relative_precision`]: Statistic::relative_precision
pub trait Statistic {
    /// Incorporates one observation with its weight.
    fn collect(&mut self, value: f64, weight: f64);

    fn category(&self) -> StatisticCategory;

    /// Confidence level fixed at construction.
    fn confidence_level(&self) -> f64;

    /// Returns the current point estimate.
    ///
    /// Always defined, but meaningless while [`num_observations`] is zero.
    ///
    /// [`num_observations`]: Statistic::num_observations
    fn estimate(&self) -> f64;

    /// Half width of the confidence interval around [`estimate`].
    ///
    /// [`estimate`]: Statistic::estimate
    fn half_width(&self) -> f64;

    fn variance(&self) -> f64;

    /// Half width relative to the point estimate.
    fn relative_precision(&self) -> f64;

    /// Number of [`collect`] calls since construction or the last reset.
    ///
    /// [`collect`]: Statistic::collect
    fn num_observations(&self) -> u64;

    /// Restores construction-time state. The confidence level is kept.
    fn reset(&mut self);

    /// Stable human-readable name, e.g. `"Min"`.
    fn name(&self) -> &'static str;

    /// The point estimate, or `None` before the first observation.
    fn checked_estimate(&self) -> Option<f64> {
        if self.num_observations() == 0 {
            None
        } else {
            Some(self.estimate())
        }
    }

    /// Snapshot of every query operation.
    fn summary(&self) -> Summary {
        Summary::of(self)
    }
}
