use derive_more::derive::{Display, Error};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Display)]
pub enum Error {
    #[display("No sensor client configured")]
    MissingClient,

    #[display("Invalid flat rate {}", _0)]
    InvalidRate(#[error(not(source))] f64),

    #[display("Invalid stats paging {}", _0)]
    InvalidPaging(#[error(not(source))] String),

    #[display("Invalid timezone offset {}", _0)]
    InvalidTimezone(#[error(not(source))] String),

    #[display("Invalid ISO-8601 timestamp {}", _0)]
    InvalidTimestamp(#[error(not(source))] String),

    #[display("End of range lies before its start")]
    InvalidRange,

    #[display("Flat rate not configured")]
    RateNotConfigured,

    #[display("No samples in range {}", _0)]
    NoData(#[error(not(source))] String),

    #[display("Error accessing sensor API")]
    SensorApi(anyhow::Error),
}
