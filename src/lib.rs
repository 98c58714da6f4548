//! Online statistic estimators for discrete-event simulation output.
//!
//! Every estimator implements [`statistics::Statistic`], so a result
//! collection layer can feed, query and reset heterogeneous estimators
//! through `Box<dyn Statistic>`:
//!
//! ```
//! use simstat::statistics::{MinEstimator, Statistic};
//!
//! let mut min = MinEstimator::default();
//! for v in [5.0, 3.0, 9.0, 1.0, 7.0] {
//!     min.collect(v, 1.0);
//! }
//! assert_eq!(min.estimate(), 1.0);
//! assert_eq!(min.num_observations(), 5);
//! assert_eq!(min.half_width(), 0.0);
//! ```

pub mod config;
pub mod statistics;

#[cfg(test)]
mod testing;
