mod cost;
mod joule;
mod kwh;
mod watt;

pub use cost::Cost;
pub use joule::Joule;
pub use kwh::KiloWattHours;
pub use watt::Watt;
