//! The `Params` capability: validated parameter-value records.

use crate::error::Result;
use crate::schema::Schema;

/// Capability trait for parameter-value records.
///
/// Each record type declares exactly one [`Schema`] and may hook
/// post-construction value validation. Constructors and every binding
/// path run [`Params::validate`], so no invalid value survives past a
/// constructor.
pub trait Params: std::fmt::Debug {
    /// The schema this record type instantiates.
    fn schema() -> &'static Schema
    where
        Self: Sized;

    /// Post-construction value checks. Field-level typing is already
    /// enforced by the record's own types; this hook covers numeric and
    /// domain invariants beyond per-field typing.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}
