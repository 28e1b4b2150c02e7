//! Diode primitive and parameters.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use leafkit_schema::{Dtype, Field, Params, Port, Schema};

use crate::primitive::{Primitive, PrimitiveType};

/// Diode parameters.
// TODO: add a diode type discriminant once process bindings need one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiodeParams {
    /// Width in resolution units.
    pub w: Option<i64>,
    /// Length in resolution units.
    pub l: Option<i64>,
}

static DIODE_PARAMS: Schema = Schema {
    name: "DiodeParams",
    desc: "Diode Parameters",
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
    ],
};

impl Params for DiodeParams {
    fn schema() -> &'static Schema {
        &DIODE_PARAMS
    }
}

/// The diode primitive. Ports: p, n.
pub static DIODE: LazyLock<Primitive> = LazyLock::new(|| {
    Primitive::new(
        "Diode",
        "Diode",
        vec![Port::new("p"), Port::new("n")],
        DiodeParams::schema(),
        PrimitiveType::Physical,
    )
    .expect("valid primitive")
});

pub use self::DIODE as D;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diode_primitive() {
        assert_eq!(DIODE.name(), "Diode");
        assert_eq!(DIODE.primtype(), PrimitiveType::Physical);
        let keys: Vec<&str> = DIODE.ports().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["p", "n"]);
    }

    #[test]
    fn test_diode_params_default() {
        let params = DiodeParams::default();
        assert_eq!(params.w, None);
        assert_eq!(params.l, None);
        assert!(params.validate().is_ok());
    }
}
