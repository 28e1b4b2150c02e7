//! Error types for leafkit-prims.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameter schema for primitive {0}; must be a recognized paramclass")]
    InvalidSchema(String),

    #[error("unnamed port on primitive {prim}")]
    UnnamedPort { prim: String },

    #[error("port {port} on primitive {prim} must have port visibility")]
    PortVisibility { prim: String, port: String },

    #[error("parameter type mismatch calling {prim}: got {got}, expected {expected}")]
    ParamTypeMismatch {
        prim: String,
        got: &'static str,
        expected: &'static str,
    },

    #[error(transparent)]
    Param(#[from] leafkit_schema::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
