//! Error types for leafkit-schema.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("parameter {schema}.{field} has invalid value: {value}")]
    InvalidValue {
        schema: &'static str,
        field: &'static str,
        value: i64,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
