//! Leaf-level circuit primitives for leafkit.
//!
//! Primitives are leaf-level components typically defined not by users
//! but by simulation tools or device fabricators: MOS transistors,
//! diodes, resistors, capacitors, and the like.
//!
//! Primitives divide in two classes, physical and ideal, indicated by
//! their `primtype`. [`PrimitiveType::Ideal`] primitives specify
//! circuit-theoretic ideal elements, including aphysical ones such as
//! ideal voltage and current sources. [`PrimitiveType::Physical`]
//! primitives specify abstract versions of ultimately
//! physically-realizable elements such as transistors and diodes, which
//! typically require external process-technology translation to run in
//! simulation or be realized in hardware.
//!
//! Many element types (particularly passives) come in both flavors,
//! since typical process technologies include physical passives with
//! far different parameterization than their ideal counterparts.
//!
//! | Physical            | Ideal             | Alias(es)               |
//! | ------------------- | ----------------- | ----------------------- |
//! | `PHYSICAL_RESISTOR` | `IDEAL_RESISTOR`  | `R`, `RES`, `RESISTOR`  |
//! | `PHYSICAL_INDUCTOR` | `IDEAL_INDUCTOR`  | `L`, `IND`, `INDUCTOR`  |
//! | `PHYSICAL_CAPACITOR`| `IDEAL_CAPACITOR` | `C`, `CAP`, `CAPACITOR` |
//! | `PHYSICAL_SHORT`    | `IDEAL_SHORT`     | `SHORT`                 |
//! |                     | `VOLTAGE_SOURCE`  | `V`, `VSRC`             |
//! |                     | `CURRENT_SOURCE`  | `I`, `ISRC`             |
//! | `MOS`               |                   |                         |
//! | `DIODE`             |                   | `D`                     |
//!
//! Selecting a registry constant, building a parameter value against
//! its schema, and calling the primitive yields a validated
//! [`PrimitiveCall`], the atomic leaf instance consumed by composition
//! layers:
//!
//! ```rust
//! use leafkit_prims::{MOS, MosParams, MosType, MosVth};
//!
//! let params = MosParams::new(Some(10), Some(2), 1, 4, MosType::Nmos, MosVth::Std)?;
//! let call = MOS.call(params)?;
//! assert!(call.ports().contains_key("g"));
//! # Ok::<(), leafkit_prims::Error>(())
//! ```

pub mod diode;
pub mod error;
pub mod mos;
pub mod passive;
pub mod primitive;
pub mod sources;
pub mod value;

pub use error::{Error, Result};
pub use primitive::{Instantiable, Primitive, PrimitiveCall, PrimitiveType};
pub use value::ParamValue;

pub use diode::{DiodeParams, D, DIODE};
pub use mos::{nmos, pmos, MosParams, MosType, MosVth, MOS};
pub use passive::{
    IdealCapacitorParams, IdealInductorParams, PhysicalCapacitorParams, PhysicalInductorParams,
    PhysicalResistorParams, PhysicalShortParams, ResistorParams, C, CAP, CAPACITOR,
    IDEAL_CAPACITOR, IDEAL_INDUCTOR, IDEAL_RESISTOR, IDEAL_SHORT, IND, INDUCTOR, L,
    PHYSICAL_CAPACITOR, PHYSICAL_INDUCTOR, PHYSICAL_RESISTOR, PHYSICAL_SHORT, R, RES, RESISTOR,
    SHORT,
};
pub use sources::{
    CurrentSourceParams, Scalar, VoltageSourceParams, CURRENT_SOURCE, I, ISRC, V, VOLTAGE_SOURCE,
    VSRC,
};
