//! Passive primitives: resistors, capacitors, inductors, and shorts.
//!
//! Most passives come in both ideal and physical flavors. The ideal and
//! physical resistors deliberately share [`ResistorParams`];
//! [`PhysicalResistorParams`] is declared but bound to no primitive.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use leafkit_schema::{Dtype, Field, NoParams, Params, Port, Schema};

use crate::primitive::{Primitive, PrimitiveType};

const fn float_field(name: &'static str, desc: &'static str) -> Field {
    Field {
        name,
        dtype: Dtype::Float,
        desc,
        optional: false,
        default: None,
    }
}

fn two_terminal(
    name: &str,
    desc: &str,
    paramtype: &'static Schema,
    primtype: PrimitiveType,
) -> Primitive {
    Primitive::new(
        name,
        desc,
        vec![Port::new("p"), Port::new("n")],
        paramtype,
        primtype,
    )
    .expect("valid primitive")
}

/// Ideal resistor parameters, shared by the ideal and physical
/// resistor primitives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResistorParams {
    /// Resistance (ohms).
    pub r: f64,
}

static RESISTOR_PARAMS: Schema = Schema {
    name: "ResistorParams",
    desc: "Resistor Parameters",
    fields: &[float_field("r", "Resistance (ohms)")],
};

impl Params for ResistorParams {
    fn schema() -> &'static Schema {
        &RESISTOR_PARAMS
    }
}

/// Physical resistor parameters. Not bound to any primitive; the
/// physical resistor also takes [`ResistorParams`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalResistorParams {
    /// Resistance (ohms).
    pub r: f64,
}

static PHYSICAL_RESISTOR_PARAMS: Schema = Schema {
    name: "PhysicalResistorParams",
    desc: "Physical Resistor Parameters",
    fields: &[float_field("r", "Resistance (ohms)")],
};

impl Params for PhysicalResistorParams {
    fn schema() -> &'static Schema {
        &PHYSICAL_RESISTOR_PARAMS
    }
}

/// Ideal capacitor parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealCapacitorParams {
    /// Capacitance (F).
    pub c: f64,
}

static IDEAL_CAPACITOR_PARAMS: Schema = Schema {
    name: "IdealCapacitorParams",
    desc: "Ideal Capacitor Parameters",
    fields: &[float_field("c", "Capacitance (F)")],
};

impl Params for IdealCapacitorParams {
    fn schema() -> &'static Schema {
        &IDEAL_CAPACITOR_PARAMS
    }
}

/// Physical capacitor parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalCapacitorParams {
    /// Capacitance (F).
    pub c: f64,
}

static PHYSICAL_CAPACITOR_PARAMS: Schema = Schema {
    name: "PhysicalCapacitorParams",
    desc: "Physical Capacitor Parameters",
    fields: &[float_field("c", "Capacitance (F)")],
};

impl Params for PhysicalCapacitorParams {
    fn schema() -> &'static Schema {
        &PHYSICAL_CAPACITOR_PARAMS
    }
}

/// Ideal inductor parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealInductorParams {
    /// Inductance (H).
    pub l: f64,
}

static IDEAL_INDUCTOR_PARAMS: Schema = Schema {
    name: "IdealInductorParams",
    desc: "Ideal Inductor Parameters",
    fields: &[float_field("l", "Inductance (H)")],
};

impl Params for IdealInductorParams {
    fn schema() -> &'static Schema {
        &IDEAL_INDUCTOR_PARAMS
    }
}

/// Physical inductor parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalInductorParams {
    /// Inductance (H).
    pub l: f64,
}

static PHYSICAL_INDUCTOR_PARAMS: Schema = Schema {
    name: "PhysicalInductorParams",
    desc: "Physical Inductor Parameters",
    fields: &[float_field("l", "Inductance (H)")],
};

impl Params for PhysicalInductorParams {
    fn schema() -> &'static Schema {
        &PHYSICAL_INDUCTOR_PARAMS
    }
}

/// Physical short / net-tie parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalShortParams {
    /// Metal layer.
    pub layer: Option<i64>,
    /// Width in resolution units.
    pub w: Option<i64>,
    /// Length in resolution units.
    pub l: Option<i64>,
}

static PHYSICAL_SHORT_PARAMS: Schema = Schema {
    name: "PhysicalShortParams",
    desc: "Physical Short Parameters",
    fields: &[
        Field {
            name: "layer",
            dtype: Dtype::Int,
            desc: "Metal layer",
            optional: true,
            default: None,
        },
        Field {
            name: "w",
            dtype: Dtype::Int,
            desc: "Width in resolution units",
            optional: true,
            default: None,
        },
        Field {
            name: "l",
            dtype: Dtype::Int,
            desc: "Length in resolution units",
            optional: true,
            default: None,
        },
    ],
};

impl Params for PhysicalShortParams {
    fn schema() -> &'static Schema {
        &PHYSICAL_SHORT_PARAMS
    }
}

/// The ideal resistor primitive. Ports: p, n.
pub static IDEAL_RESISTOR: LazyLock<Primitive> = LazyLock::new(|| {
    two_terminal(
        "IdealResistor",
        "Ideal Resistor",
        ResistorParams::schema(),
        PrimitiveType::Ideal,
    )
});

/// The physical resistor primitive. Shares [`ResistorParams`] with the
/// ideal resistor.
pub static PHYSICAL_RESISTOR: LazyLock<Primitive> = LazyLock::new(|| {
    two_terminal(
        "PhysicalResistor",
        "Physical Resistor",
        ResistorParams::schema(),
        PrimitiveType::Physical,
    )
});

/// The ideal capacitor primitive. Ports: p, n.
pub static IDEAL_CAPACITOR: LazyLock<Primitive> = LazyLock::new(|| {
    two_terminal(
        "IdealCapacitor",
        "Ideal Capacitor",
        IdealCapacitorParams::schema(),
        PrimitiveType::Ideal,
    )
});

/// The physical capacitor primitive. Ports: p, n.
pub static PHYSICAL_CAPACITOR: LazyLock<Primitive> = LazyLock::new(|| {
    two_terminal(
        "PhysicalCapacitor",
        "Physical Capacitor",
        PhysicalCapacitorParams::schema(),
        PrimitiveType::Physical,
    )
});

/// The ideal inductor primitive. Ports: p, n.
pub static IDEAL_INDUCTOR: LazyLock<Primitive> = LazyLock::new(|| {
    two_terminal(
        "IdealInductor",
        "Ideal Inductor",
        IdealInductorParams::schema(),
        PrimitiveType::Ideal,
    )
});

/// The physical inductor primitive. Ports: p, n.
pub static PHYSICAL_INDUCTOR: LazyLock<Primitive> = LazyLock::new(|| {
    two_terminal(
        "PhysicalInductor",
        "Physical Inductor",
        PhysicalInductorParams::schema(),
        PrimitiveType::Physical,
    )
});

/// The physical short / net-tie primitive. Ports: p, n.
pub static PHYSICAL_SHORT: LazyLock<Primitive> = LazyLock::new(|| {
    two_terminal(
        "PhysicalShort",
        "Short-Circuit/ Net-Tie",
        PhysicalShortParams::schema(),
        PrimitiveType::Physical,
    )
});

/// The ideal short / net-tie primitive. Takes no parameters; must be
/// called with the [`NoParams`] marker.
pub static IDEAL_SHORT: LazyLock<Primitive> = LazyLock::new(|| {
    two_terminal(
        "IdealShort",
        "Short-Circuit/ Net-Tie",
        NoParams::schema(),
        PrimitiveType::Ideal,
    )
});

// Common aliases: additional names bound to the same registry
// constants, not copies.
pub use self::IDEAL_CAPACITOR as C;
pub use self::IDEAL_CAPACITOR as CAP;
pub use self::IDEAL_CAPACITOR as CAPACITOR;
pub use self::IDEAL_INDUCTOR as IND;
pub use self::IDEAL_INDUCTOR as INDUCTOR;
pub use self::IDEAL_INDUCTOR as L;
pub use self::IDEAL_RESISTOR as R;
pub use self::IDEAL_RESISTOR as RES;
pub use self::IDEAL_RESISTOR as RESISTOR;
pub use self::IDEAL_SHORT as SHORT;
