//! MOS transistor primitive and parameters.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use leafkit_schema::{Dtype, Error as SchemaError, Field, Params, Port, Result, Schema};

use crate::primitive::{Primitive, PrimitiveCall, PrimitiveType};

/// NMOS/PMOS type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MosType {
    #[default]
    Nmos,
    Pmos,
}

/// MOS threshold-voltage flavor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MosVth {
    #[default]
    Std,
    Low,
    High,
}

/// MOS transistor parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MosParams {
    /// Width in resolution units.
    pub w: Option<i64>,
    /// Length in resolution units.
    pub l: Option<i64>,
    /// Number of series fingers.
    pub nser: i64,
    /// Number of parallel fingers.
    pub npar: i64,
    /// NMOS or PMOS.
    pub tp: MosType,
    /// Threshold voltage specifier.
    pub vth: MosVth,
}

impl Default for MosParams {
    fn default() -> Self {
        Self {
            w: None,
            l: None,
            nser: 1,
            npar: 1,
            tp: MosType::Nmos,
            vth: MosVth::Std,
        }
    }
}

impl MosParams {
    /// Create validated MOS parameters.
    pub fn new(
        w: Option<i64>,
        l: Option<i64>,
        nser: i64,
        npar: i64,
        tp: MosType,
        vth: MosVth,
    ) -> Result<Self> {
        let params = Self {
            w,
            l,
            nser,
            npar,
            tp,
            vth,
        };
        params.validate()?;
        Ok(params)
    }

    /// Copy with the transistor type overridden. The source is left
    /// untouched.
    pub fn with_tp(&self, tp: MosType) -> Self {
        Self { tp, ..self.clone() }
    }
}

static MOS_PARAMS: Schema = Schema {
    name: "MosParams",
    desc: "MOS Transistor Parameters",
    fields: &[
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
        Field {
            name: "nser",
            dtype: Dtype::Int,
            desc: "Number of series fingers",
            optional: false,
            default: Some("1"),
        },
        Field {
            name: "npar",
            dtype: Dtype::Int,
            desc: "Number of parallel fingers",
            optional: false,
            default: Some("1"),
        },
        Field {
            name: "tp",
            dtype: Dtype::Enum("MosType"),
            desc: "MosType (PMOS/NMOS)",
            optional: false,
            default: Some("NMOS"),
        },
        Field {
            name: "vth",
            dtype: Dtype::Enum("MosVth"),
            desc: "Threshold voltage specifier",
            optional: false,
            default: Some("STD"),
        },
    ],
};

impl Params for MosParams {
    fn schema() -> &'static Schema {
        &MOS_PARAMS
    }

    fn validate(&self) -> Result<()> {
        let invalid = |field: &'static str, value: i64| SchemaError::InvalidValue {
            schema: "MosParams",
            field,
            value,
        };
        if let Some(w) = self.w {
            if w <= 0 {
                return Err(invalid("w", w));
            }
        }
        if let Some(l) = self.l {
            if l <= 0 {
                return Err(invalid("l", l));
            }
        }
        if self.nser <= 0 {
            return Err(invalid("nser", self.nser));
        }
        if self.npar <= 0 {
            return Err(invalid("npar", self.npar));
        }
        Ok(())
    }
}

/// The MOS transistor primitive. Ports: d, g, s, b.
pub static MOS: LazyLock<Primitive> = LazyLock::new(|| {
    Primitive::new(
        "Mos",
        "Mos Transistor",
        vec![Port::new("d"), Port::new("g"), Port::new("s"), Port::new("b")],
        MosParams::schema(),
        PrimitiveType::Physical,
    )
    .expect("valid primitive")
});

/// NMOS constructor: call [`MOS`] with `tp` forced to
/// [`MosType::Nmos`]. The input parameters are not mutated.
pub fn nmos(params: &MosParams) -> crate::error::Result<PrimitiveCall> {
    MOS.call(params.with_tp(MosType::Nmos))
}

/// PMOS constructor: call [`MOS`] with `tp` forced to
/// [`MosType::Pmos`]. The input parameters are not mutated.
pub fn pmos(params: &MosParams) -> crate::error::Result<PrimitiveCall> {
    MOS.call(params.with_tp(MosType::Pmos))
}
