//! Declarative parameter schemas and signal declarations for leafkit.
//!
//! This crate provides the two mechanisms leaf primitives are built on:
//! - Parameter schemas: plain-data descriptors of named, typed, defaulted
//!   fields, paired with a [`Params`] capability trait for the value
//!   records that instantiate them.
//! - Signals and ports: named connection endpoints with a visibility tag.

pub mod error;
pub mod params;
pub mod schema;
pub mod signal;

pub use error::{Error, Result};
pub use params::Params;
pub use schema::{is_paramclass, Dtype, Field, NoParams, Schema, NO_PARAMS};
pub use signal::{Port, Visibility};
