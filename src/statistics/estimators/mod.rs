mod max_estimator;
mod min_estimator;
mod statistic;

pub use max_estimator::MaxEstimator;
pub use min_estimator::MinEstimator;
pub use statistic::{DEFAULT_CONFIDENCE_LEVEL, Statistic};
