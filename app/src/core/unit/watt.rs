use derive_more::derive::AsRef;
use serde::Serialize;
use std::{fmt::Display, ops::Add};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsRef, Serialize)]
pub struct Watt(pub f64);

impl Watt {
    pub fn to_kilowatts(&self) -> f64 {
        self.0 / 1000.0
    }
}

impl Display for Watt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} W", self.0)
    }
}

impl From<&Watt> for f64 {
    fn from(value: &Watt) -> Self {
        value.0
    }
}

impl From<Watt> for f64 {
    fn from(value: Watt) -> Self {
        value.0
    }
}

impl From<f64> for Watt {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for Watt {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Watt(self.0 + rhs.0)
    }
}
