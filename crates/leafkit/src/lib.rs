//! # leafkit
//!
//! A typed catalog of leaf-level circuit primitives — transistors,
//! diodes, resistors, capacitors, inductors, shorts, and ideal sources —
//! with eagerly-validated parameter bindings.
//!
//! ## Quick Start
//!
//! ```rust
//! use leafkit::prelude::*;
//!
//! let divider_top = IDEAL_RESISTOR.call(ResistorParams { r: 1e3 })?;
//! let supply = VOLTAGE_SOURCE.call(VoltageSourceParams::dc(1.8))?;
//!
//! assert!(divider_top.ports().contains_key("p"));
//! assert_eq!(supply.prim().name(), "VoltageSource");
//! # Ok::<(), leafkit::Error>(())
//! ```
//!
//! Everything is immutable after construction: a [`Primitive`] validates
//! its ports and parameter schema when declared, and [`Primitive::call`]
//! re-validates every parameter binding, so no invalid leaf instance can
//! exist downstream.

// Re-export the component crates
pub use leafkit_prims as prims;
pub use leafkit_schema as schema;

// ============================================================================
// Convenient re-exports from leafkit_schema
// ============================================================================

pub use leafkit_schema::{
    is_paramclass, Dtype, Error as SchemaError, Field, NoParams, Params, Port, Schema, Visibility,
};

// ============================================================================
// Convenient re-exports from leafkit_prims
// ============================================================================

pub use leafkit_prims::{
    // Core types
    Error,
    Instantiable,
    ParamValue,
    Primitive,
    PrimitiveCall,
    PrimitiveType,
    Result,
    // Parameter records
    CurrentSourceParams,
    DiodeParams,
    IdealCapacitorParams,
    IdealInductorParams,
    MosParams,
    MosType,
    MosVth,
    PhysicalCapacitorParams,
    PhysicalInductorParams,
    PhysicalResistorParams,
    PhysicalShortParams,
    ResistorParams,
    Scalar,
    VoltageSourceParams,
    // Convenience constructors
    nmos,
    pmos,
    // Registry constants
    CURRENT_SOURCE,
    DIODE,
    IDEAL_CAPACITOR,
    IDEAL_INDUCTOR,
    IDEAL_RESISTOR,
    IDEAL_SHORT,
    MOS,
    PHYSICAL_CAPACITOR,
    PHYSICAL_INDUCTOR,
    PHYSICAL_RESISTOR,
    PHYSICAL_SHORT,
    VOLTAGE_SOURCE,
    // Aliases
    C,
    CAP,
    CAPACITOR,
    D,
    I,
    IND,
    INDUCTOR,
    ISRC,
    L,
    R,
    RES,
    RESISTOR,
    SHORT,
    V,
    VSRC,
};

// ============================================================================
// Prelude module for convenient imports
// ============================================================================

/// Prelude module containing commonly used types and constants.
///
/// ```rust
/// use leafkit::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use crate::{
        ParamValue, Params, Port, Primitive, PrimitiveCall, PrimitiveType, Visibility,
    };

    // Parameter records
    pub use crate::{
        CurrentSourceParams, DiodeParams, IdealCapacitorParams, IdealInductorParams, MosParams,
        MosType, MosVth, NoParams, PhysicalCapacitorParams, PhysicalInductorParams,
        PhysicalShortParams, ResistorParams, Scalar, VoltageSourceParams,
    };

    // Registry constants and constructors
    pub use crate::{
        nmos, pmos, CURRENT_SOURCE, DIODE, IDEAL_CAPACITOR, IDEAL_INDUCTOR, IDEAL_RESISTOR,
        IDEAL_SHORT, MOS, PHYSICAL_CAPACITOR, PHYSICAL_INDUCTOR, PHYSICAL_RESISTOR,
        PHYSICAL_SHORT, VOLTAGE_SOURCE,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_imports() {
        use crate::prelude::*;

        let call = DIODE.call(DiodeParams::default()).expect("valid call");
        assert_eq!(call.prim().name(), "Diode");
        assert_eq!(call.prim().primtype(), PrimitiveType::Physical);
    }

    #[test]
    fn test_alias_reexports() {
        assert!(std::ptr::eq(&*R, &*IDEAL_RESISTOR));
        assert!(std::ptr::eq(&*V, &*VOLTAGE_SOURCE));
    }
}
