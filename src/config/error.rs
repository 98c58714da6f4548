use crate::statistics::StatisticCategory;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("unsupported statistic: {0}")]
    Unsupported(StatisticCategory),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
