//! `ParamValue`: the closed union over built-in parameter records.

use serde::{Deserialize, Serialize};

use leafkit_schema::{NoParams, Params, Result, Schema};

use crate::diode::DiodeParams;
use crate::mos::MosParams;
use crate::passive::{
    IdealCapacitorParams, IdealInductorParams, PhysicalCapacitorParams, PhysicalInductorParams,
    PhysicalResistorParams, PhysicalShortParams, ResistorParams,
};
use crate::sources::{CurrentSourceParams, VoltageSourceParams};

/// An owned parameter-value instance for any built-in primitive.
///
/// [`Primitive::call`](crate::Primitive::call) dispatches on the
/// carried schema, so a value is only ever accepted by a primitive
/// declaring the identical schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Mos(MosParams),
    Diode(DiodeParams),
    Resistor(ResistorParams),
    PhysicalResistor(PhysicalResistorParams),
    IdealCapacitor(IdealCapacitorParams),
    PhysicalCapacitor(PhysicalCapacitorParams),
    IdealInductor(IdealInductorParams),
    PhysicalInductor(PhysicalInductorParams),
    PhysicalShort(PhysicalShortParams),
    VoltageSource(VoltageSourceParams),
    CurrentSource(CurrentSourceParams),
    /// The canonical "no parameters" marker.
    None,
}

impl ParamValue {
    /// The schema this value instantiates.
    pub fn schema(&self) -> &'static Schema {
        match self {
            ParamValue::Mos(_) => MosParams::schema(),
            ParamValue::Diode(_) => DiodeParams::schema(),
            ParamValue::Resistor(_) => ResistorParams::schema(),
            ParamValue::PhysicalResistor(_) => PhysicalResistorParams::schema(),
            ParamValue::IdealCapacitor(_) => IdealCapacitorParams::schema(),
            ParamValue::PhysicalCapacitor(_) => PhysicalCapacitorParams::schema(),
            ParamValue::IdealInductor(_) => IdealInductorParams::schema(),
            ParamValue::PhysicalInductor(_) => PhysicalInductorParams::schema(),
            ParamValue::PhysicalShort(_) => PhysicalShortParams::schema(),
            ParamValue::VoltageSource(_) => VoltageSourceParams::schema(),
            ParamValue::CurrentSource(_) => CurrentSourceParams::schema(),
            ParamValue::None => NoParams::schema(),
        }
    }

    /// Run the carried record's value-validation hook.
    pub fn validate(&self) -> Result<()> {
        match self {
            ParamValue::Mos(p) => p.validate(),
            ParamValue::Diode(p) => p.validate(),
            ParamValue::Resistor(p) => p.validate(),
            ParamValue::PhysicalResistor(p) => p.validate(),
            ParamValue::IdealCapacitor(p) => p.validate(),
            ParamValue::PhysicalCapacitor(p) => p.validate(),
            ParamValue::IdealInductor(p) => p.validate(),
            ParamValue::PhysicalInductor(p) => p.validate(),
            ParamValue::PhysicalShort(p) => p.validate(),
            ParamValue::VoltageSource(p) => p.validate(),
            ParamValue::CurrentSource(p) => p.validate(),
            ParamValue::None => NoParams.validate(),
        }
    }
}

impl From<MosParams> for ParamValue {
    fn from(params: MosParams) -> Self {
        ParamValue::Mos(params)
    }
}

impl From<DiodeParams> for ParamValue {
    fn from(params: DiodeParams) -> Self {
        ParamValue::Diode(params)
    }
}

impl From<ResistorParams> for ParamValue {
    fn from(params: ResistorParams) -> Self {
        ParamValue::Resistor(params)
    }
}

impl From<PhysicalResistorParams> for ParamValue {
    fn from(params: PhysicalResistorParams) -> Self {
        ParamValue::PhysicalResistor(params)
    }
}

impl From<IdealCapacitorParams> for ParamValue {
    fn from(params: IdealCapacitorParams) -> Self {
        ParamValue::IdealCapacitor(params)
    }
}

impl From<PhysicalCapacitorParams> for ParamValue {
    fn from(params: PhysicalCapacitorParams) -> Self {
        ParamValue::PhysicalCapacitor(params)
    }
}

impl From<IdealInductorParams> for ParamValue {
    fn from(params: IdealInductorParams) -> Self {
        ParamValue::IdealInductor(params)
    }
}

impl From<PhysicalInductorParams> for ParamValue {
    fn from(params: PhysicalInductorParams) -> Self {
        ParamValue::PhysicalInductor(params)
    }
}

impl From<PhysicalShortParams> for ParamValue {
    fn from(params: PhysicalShortParams) -> Self {
        ParamValue::PhysicalShort(params)
    }
}

impl From<VoltageSourceParams> for ParamValue {
    fn from(params: VoltageSourceParams) -> Self {
        ParamValue::VoltageSource(params)
    }
}

impl From<CurrentSourceParams> for ParamValue {
    fn from(params: CurrentSourceParams) -> Self {
        ParamValue::CurrentSource(params)
    }
}

impl From<NoParams> for ParamValue {
    fn from(_: NoParams) -> Self {
        ParamValue::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_dispatch() {
        let value: ParamValue = MosParams::default().into();
        assert_eq!(value.schema().name, "MosParams");

        let value: ParamValue = NoParams.into();
        assert_eq!(value.schema().name, "NoParams");
    }

    #[test]
    fn test_shared_resistor_schema() {
        // Both resistor primitives accept the plain ResistorParams value;
        // PhysicalResistorParams carries its own distinct schema.
        let ideal: ParamValue = ResistorParams { r: 1e3 }.into();
        let phys: ParamValue = PhysicalResistorParams { r: 1e3 }.into();
        assert!(!std::ptr::eq(ideal.schema(), phys.schema()));
    }

    #[test]
    fn test_validate_dispatch() {
        let bad: ParamValue = ParamValue::Mos(MosParams {
            npar: 0,
            ..Default::default()
        });
        assert!(bad.validate().is_err());

        let good: ParamValue = DiodeParams::default().into();
        assert!(good.validate().is_ok());
    }
}
