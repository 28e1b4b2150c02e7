//! The `Primitive` descriptor and its validated `PrimitiveCall` binding.

use indexmap::IndexMap;
use std::fmt;
use std::ptr;

use leafkit_schema::{is_paramclass, Port, Schema};

use crate::error::{Error, Result};
use crate::value::ParamValue;

/// Primitive classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveType {
    /// Circuit-theoretic ideal element with no physical realization.
    Ideal,
    /// Abstraction of a manufacturable device, requiring external
    /// technology-specific translation.
    Physical,
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveType::Ideal => write!(f, "ideal"),
            PrimitiveType::Physical => write!(f, "physical"),
        }
    }
}

/// Marker for entities the composition layer may place directly as
/// leaf instances.
pub trait Instantiable {}

/// A leaf-level primitive component descriptor.
///
/// Primitives are leaf-level components typically defined not by users
/// but by simulation tools or device fabricators: MOS transistors,
/// diodes, resistors, capacitors, and the like. A `Primitive` is
/// write-once: it validates itself at construction and exposes no
/// mutation afterward.
#[derive(Debug)]
pub struct Primitive {
    /// Primitive name, unique among the registry.
    name: String,
    /// Human-readable description.
    desc: String,
    /// Ordered port declarations.
    port_list: Vec<Port>,
    /// Name-keyed port view, in declaration order. Built once.
    ports: IndexMap<String, Port>,
    /// The parameter schema this primitive accepts.
    paramtype: &'static Schema,
    /// Ideal or physical classification.
    primtype: PrimitiveType,
}

impl Primitive {
    /// Create a new primitive descriptor.
    ///
    /// Fails with [`Error::InvalidSchema`] when `paramtype` is not a
    /// recognized parameter schema, and with [`Error::UnnamedPort`] or
    /// [`Error::PortVisibility`] when any port is unnamed or is not
    /// declared with port visibility.
    pub fn new(
        name: impl Into<String>,
        desc: impl Into<String>,
        port_list: Vec<Port>,
        paramtype: &'static Schema,
        primtype: PrimitiveType,
    ) -> Result<Self> {
        let name = name.into();
        if !is_paramclass(paramtype) {
            return Err(Error::InvalidSchema(name));
        }
        for port in &port_list {
            if port.name().is_empty() {
                return Err(Error::UnnamedPort { prim: name });
            }
            if !port.is_port() {
                return Err(Error::PortVisibility {
                    prim: name,
                    port: port.name().to_string(),
                });
            }
        }
        let ports = port_list
            .iter()
            .map(|p| (p.name().to_string(), p.clone()))
            .collect();
        Ok(Self {
            name,
            desc: desc.into(),
            port_list,
            ports,
            paramtype,
            primtype,
        })
    }

    /// Bind parameter values to this primitive, producing a
    /// [`PrimitiveCall`].
    ///
    /// This is the sole instantiation entry point. The values are
    /// re-validated and their schema must be *identical* to this
    /// primitive's declared schema; a structurally equal but distinct
    /// schema fails with [`Error::ParamTypeMismatch`].
    pub fn call(&'static self, params: impl Into<ParamValue>) -> Result<PrimitiveCall> {
        let params = params.into();
        params.validate()?;
        if !ptr::eq(params.schema(), self.paramtype) {
            return Err(Error::ParamTypeMismatch {
                prim: self.name.clone(),
                got: params.schema().name,
                expected: self.paramtype.name,
            });
        }
        Ok(PrimitiveCall { prim: self, params })
    }

    /// Get the primitive's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the primitive's description.
    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// Get the ordered port declarations.
    pub fn port_list(&self) -> &[Port] {
        &self.port_list
    }

    /// Get the name-keyed port view, in declaration order.
    pub fn ports(&self) -> &IndexMap<String, Port> {
        &self.ports
    }

    /// Get the parameter schema this primitive accepts.
    pub fn params_type(&self) -> &'static Schema {
        self.paramtype
    }

    /// Get the ideal/physical classification.
    pub fn primtype(&self) -> PrimitiveType {
        self.primtype
    }
}

/// A validated pairing of a [`Primitive`] with concrete parameter
/// values, produced by [`Primitive::call`].
///
/// The call shares the originating primitive (many calls may reference
/// the same primitive concurrently) and owns its validated values.
/// Downstream composition layers treat it as an atomic, placeable leaf
/// instance.
#[derive(Debug, Clone)]
pub struct PrimitiveCall {
    prim: &'static Primitive,
    params: ParamValue,
}

impl PrimitiveCall {
    /// Get the originating primitive.
    pub fn prim(&self) -> &'static Primitive {
        self.prim
    }

    /// Get the bound parameter values.
    pub fn params(&self) -> &ParamValue {
        &self.params
    }

    /// Get the name-keyed port view of the originating primitive.
    pub fn ports(&self) -> &IndexMap<String, Port> {
        self.prim.ports()
    }
}

impl PartialEq for PrimitiveCall {
    /// Two calls are equal when they reference the identical primitive
    /// and hold equal parameter values.
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.prim, other.prim) && self.params == other.params
    }
}

impl Instantiable for PrimitiveCall {}

#[cfg(test)]
mod tests {
    use super::*;
    use leafkit_schema::{NoParams, Params, Visibility};

    #[test]
    fn test_new_primitive() {
        let prim = Primitive::new(
            "Thing",
            "A test primitive",
            vec![Port::new("p"), Port::new("n")],
            NoParams::schema(),
            PrimitiveType::Ideal,
        )
        .expect("valid primitive");

        assert_eq!(prim.name(), "Thing");
        assert_eq!(prim.primtype(), PrimitiveType::Ideal);
        assert_eq!(prim.port_list().len(), 2);
        assert_eq!(prim.params_type().name, "NoParams");
    }

    #[test]
    fn test_ports_view_order() {
        let prim = Primitive::new(
            "Thing",
            "",
            vec![Port::new("d"), Port::new("g"), Port::new("s"), Port::new("b")],
            NoParams::schema(),
            PrimitiveType::Physical,
        )
        .expect("valid primitive");

        let keys: Vec<&str> = prim.ports().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["d", "g", "s", "b"]);
        for port in prim.ports().values() {
            assert_eq!(port.vis, Visibility::Port);
        }
    }

    #[test]
    fn test_invalid_schema_rejected() {
        static BOGUS: Schema = Schema {
            name: "",
            desc: "",
            fields: &[],
        };
        let err = Primitive::new(
            "Thing",
            "",
            vec![Port::new("p")],
            &BOGUS,
            PrimitiveType::Ideal,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidSchema(ref prim) if prim == "Thing"));
    }

    #[test]
    fn test_unnamed_port_rejected() {
        let err = Primitive::new(
            "Thing",
            "",
            vec![Port::new("")],
            NoParams::schema(),
            PrimitiveType::Ideal,
        )
        .unwrap_err();
        assert!(matches!(err, Error::UnnamedPort { .. }));
    }

    #[test]
    fn test_internal_signal_rejected() {
        let err = Primitive::new(
            "Thing",
            "",
            vec![Port::new("p"), Port::internal("mid")],
            NoParams::schema(),
            PrimitiveType::Ideal,
        )
        .unwrap_err();
        assert!(matches!(err, Error::PortVisibility { ref port, .. } if port == "mid"));
    }
}
