use derive_more::derive::AsRef;
use serde::Serialize;
use std::fmt::Display;

/// Monetary amount in whatever currency the flat rate is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsRef, Serialize)]
pub struct Cost(pub f64);

impl Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<&Cost> for f64 {
    fn from(value: &Cost) -> Self {
        value.0
    }
}

impl From<Cost> for f64 {
    fn from(value: Cost) -> Self {
        value.0
    }
}
