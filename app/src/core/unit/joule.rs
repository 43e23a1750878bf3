use derive_more::derive::AsRef;
use serde::Serialize;
use std::{fmt::Display, ops::Add};

use super::KiloWattHours;

const JOULES_PER_KWH: f64 = 1000.0 * 3600.0;

/// Energy as reported by the sensor API (watt-seconds).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, AsRef, Serialize)]
pub struct Joule(pub f64);

impl Joule {
    pub fn to_kwh(&self) -> KiloWattHours {
        KiloWattHours(self.0 / JOULES_PER_KWH)
    }
}

impl Display for Joule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} J", self.0)
    }
}

impl From<&Joule> for f64 {
    fn from(value: &Joule) -> Self {
        value.0
    }
}

impl From<Joule> for f64 {
    fn from(value: Joule) -> Self {
        value.0
    }
}

impl From<f64> for Joule {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl Add for Joule {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Joule(self.0 + rhs.0)
    }
}
