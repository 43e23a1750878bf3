//! Energy and cost figures derived from sensor sample series.

mod aggregator;
pub mod core;
mod error;
pub mod sensor;
mod settings;

pub use aggregator::{Aggregator, AggregatorBuilder, StatsPaging};
pub use error::{Error, Result};
pub use settings::{AggregatorSettings, Settings};
