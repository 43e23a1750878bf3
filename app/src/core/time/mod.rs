mod range;
mod timezone;

pub use range::{Granularity, SampleRange};
pub use timezone::{FixedTimezone, SystemTimezone, TimezoneSource, UtcOffset};
