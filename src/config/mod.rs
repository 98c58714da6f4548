mod error;
mod statistic_choice;

pub use error::BuildError;
pub use statistic_choice::{ExtremumParameters, StatisticChoice};
