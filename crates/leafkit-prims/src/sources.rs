//! Ideal source primitives: voltage and current sources.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use leafkit_schema::{Dtype, Field, Params, Port, Schema};

use crate::primitive::{Primitive, PrimitiveType};

/// A scalar parameter value: integer, float, or an expression string
/// passed through to downstream tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Expr(String),
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Expr(value.to_string())
    }
}

const fn scalar_field(
    name: &'static str,
    desc: &'static str,
    default: Option<&'static str>,
) -> Field {
    Field {
        name,
        dtype: Dtype::Scalar,
        desc,
        optional: true,
        default,
    }
}

/// Ideal voltage source parameters.
///
/// Models the DC and pulse-source field sets together. No cross-field
/// consistency is enforced; supplying a partial pulse specification
/// (e.g. rise/fall without period) is passed through as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoltageSourceParams {
    /// DC value (V).
    pub dc: Option<Scalar>,
    /// Time delay (s).
    pub delay: Option<Scalar>,
    /// Zero value (V).
    pub v0: Option<Scalar>,
    /// One value (V).
    pub v1: Option<Scalar>,
    /// Period (s).
    pub period: Option<Scalar>,
    /// Rise time (s).
    pub rise: Option<Scalar>,
    /// Fall time (s).
    pub fall: Option<Scalar>,
    /// Pulse width (s).
    pub width: Option<Scalar>,
}

impl Default for VoltageSourceParams {
    fn default() -> Self {
        Self {
            dc: Some(Scalar::Int(0)),
            delay: None,
            v0: None,
            v1: None,
            period: None,
            rise: None,
            fall: None,
            width: None,
        }
    }
}

impl VoltageSourceParams {
    /// DC-only source parameters.
    pub fn dc(value: impl Into<Scalar>) -> Self {
        Self {
            dc: Some(value.into()),
            ..Self::default()
        }
    }
}

static VOLTAGE_SOURCE_PARAMS: Schema = Schema {
    name: "VoltageSourceParams",
    desc: "Voltage Source Parameters",
    fields: &[
        scalar_field("dc", "DC Value (V)", Some("0")),
        scalar_field("delay", "Time Delay (s)", None),
        scalar_field("v0", "Zero Value (V)", None),
        scalar_field("v1", "One Value (V)", None),
        scalar_field("period", "Period (s)", None),
        scalar_field("rise", "Rise time (s)", None),
        scalar_field("fall", "Fall time (s)", None),
        scalar_field("width", "Pulse width (s)", None),
    ],
};

impl Params for VoltageSourceParams {
    fn schema() -> &'static Schema {
        &VOLTAGE_SOURCE_PARAMS
    }
}

/// Ideal current source parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentSourceParams {
    /// DC value (A).
    pub dc: Option<Scalar>,
}

impl Default for CurrentSourceParams {
    fn default() -> Self {
        Self {
            dc: Some(Scalar::Int(0)),
        }
    }
}

static CURRENT_SOURCE_PARAMS: Schema = Schema {
    name: "CurrentSourceParams",
    desc: "Current Source Parameters",
    fields: &[scalar_field("dc", "DC Value (A)", Some("0"))],
};

impl Params for CurrentSourceParams {
    fn schema() -> &'static Schema {
        &CURRENT_SOURCE_PARAMS
    }
}

/// The ideal voltage source primitive. Ports: p, n.
pub static VOLTAGE_SOURCE: LazyLock<Primitive> = LazyLock::new(|| {
    Primitive::new(
        "VoltageSource",
        "Ideal Voltage Source",
        vec![Port::new("p"), Port::new("n")],
        VoltageSourceParams::schema(),
        PrimitiveType::Ideal,
    )
    .expect("valid primitive")
});

/// The ideal current source primitive. Ports: p, n.
pub static CURRENT_SOURCE: LazyLock<Primitive> = LazyLock::new(|| {
    Primitive::new(
        "CurrentSource",
        "Ideal Current Source",
        vec![Port::new("p"), Port::new("n")],
        CurrentSourceParams::schema(),
        PrimitiveType::Ideal,
    )
    .expect("valid primitive")
});

pub use self::CURRENT_SOURCE as I;
pub use self::CURRENT_SOURCE as ISRC;
pub use self::VOLTAGE_SOURCE as V;
pub use self::VOLTAGE_SOURCE as VSRC;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let v = VoltageSourceParams::default();
        assert_eq!(v.dc, Some(Scalar::Int(0)));
        assert_eq!(v.period, None);

        let i = CurrentSourceParams::default();
        assert_eq!(i.dc, Some(Scalar::Int(0)));
    }

    #[test]
    fn test_dc_shorthand() {
        let v = VoltageSourceParams::dc(1.8);
        assert_eq!(v.dc, Some(Scalar::Float(1.8)));
        assert_eq!(v.v0, None);

        let expr = VoltageSourceParams::dc("vdd/2");
        assert_eq!(expr.dc, Some(Scalar::Expr("vdd/2".to_string())));
    }

    #[test]
    fn test_partial_pulse_spec_allowed() {
        // No cross-field consistency is enforced.
        let v = VoltageSourceParams {
            rise: Some(Scalar::Float(1e-12)),
            fall: Some(Scalar::Float(1e-12)),
            ..Default::default()
        };
        assert!(v.validate().is_ok());
    }

    #[test]
    fn test_source_primitives() {
        assert_eq!(VOLTAGE_SOURCE.primtype(), PrimitiveType::Ideal);
        assert_eq!(CURRENT_SOURCE.primtype(), PrimitiveType::Ideal);
        let keys: Vec<&str> = VOLTAGE_SOURCE.ports().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["p", "n"]);
    }
}
