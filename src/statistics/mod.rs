mod category;
mod estimators;
mod summary;

pub use category::StatisticCategory;
pub use estimators::{DEFAULT_CONFIDENCE_LEVEL, MaxEstimator, MinEstimator, Statistic};
pub use summary::Summary;
