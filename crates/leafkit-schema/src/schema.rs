//! Plain-data parameter schema descriptors.
//!
//! A [`Schema`] describes the fields a parameter record declares: name,
//! type, optionality, default, and a free-text description. Schemas are
//! `const`-constructible so every parameter type can expose one as a
//! `static`; schema *identity* is pointer identity of the `&'static
//! Schema`, which is what primitive binding checks against.

use crate::params::Params;

/// Declarable field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dtype {
    /// Signed integer, typically a count or a size in resolution units.
    Int,
    /// Floating-point component value (ohms, farads, henries, ...).
    Float,
    /// Scalar union: integer, float, or expression string.
    Scalar,
    /// Closed enumeration, named for documentation purposes.
    Enum(&'static str),
    /// Free-form string.
    String,
}

/// Metadata for a single schema field.
///
/// Plain data, consumed by both validation and documentation generation.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// Field name.
    pub name: &'static str,
    /// Declared type.
    pub dtype: Dtype,
    /// Human-readable description.
    pub desc: &'static str,
    /// Whether the field may be absent.
    pub optional: bool,
    /// Display form of the default value, if any.
    pub default: Option<&'static str>,
}

/// A parameter schema: the declared shape of one parameter record.
#[derive(Debug)]
pub struct Schema {
    /// Schema name, unique among declared schemas.
    pub name: &'static str,
    /// Human-readable description.
    pub desc: &'static str,
    /// Ordered field declarations.
    pub fields: &'static [Field],
}

/// Test whether a schema descriptor is a recognized parameter schema.
///
/// A schema qualifies when its name is non-empty and its field names are
/// non-empty and pairwise unique. Primitive construction rejects any
/// schema that fails this test.
pub fn is_paramclass(schema: &Schema) -> bool {
    if schema.name.is_empty() {
        return false;
    }
    for (i, field) in schema.fields.iter().enumerate() {
        if field.name.is_empty() {
            return false;
        }
        if schema.fields[..i].iter().any(|f| f.name == field.name) {
            return false;
        }
    }
    true
}

/// The canonical "no parameters" marker.
///
/// Parameterless primitives declare [`NO_PARAMS`] as their schema and
/// accept only the corresponding marker value when called.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoParams;

/// Schema for [`NoParams`]: a recognized schema with no fields.
pub static NO_PARAMS: Schema = Schema {
    name: "NoParams",
    desc: "No parameters",
    fields: &[],
};

impl Params for NoParams {
    fn schema() -> &'static Schema {
        &NO_PARAMS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_params_is_paramclass() {
        assert!(is_paramclass(&NO_PARAMS));
        assert!(NO_PARAMS.fields.is_empty());
    }

    #[test]
    fn test_unnamed_schema_rejected() {
        let bogus = Schema {
            name: "",
            desc: "",
            fields: &[],
        };
        assert!(!is_paramclass(&bogus));
    }

    #[test]
    fn test_unnamed_field_rejected() {
        static FIELDS: [Field; 1] = [Field {
            name: "",
            dtype: Dtype::Int,
            desc: "",
            optional: false,
            default: None,
        }];
        let bogus = Schema {
            name: "Bogus",
            desc: "",
            fields: &FIELDS,
        };
        assert!(!is_paramclass(&bogus));
    }

    #[test]
    fn test_duplicate_field_rejected() {
        static FIELDS: [Field; 2] = [
            Field {
                name: "w",
                dtype: Dtype::Int,
                desc: "",
                optional: false,
                default: None,
            },
            Field {
                name: "w",
                dtype: Dtype::Float,
                desc: "",
                optional: false,
                default: None,
            },
        ];
        let bogus = Schema {
            name: "Bogus",
            desc: "",
            fields: &FIELDS,
        };
        assert!(!is_paramclass(&bogus));
    }

    #[test]
    fn test_well_formed_schema() {
        static FIELDS: [Field; 2] = [
            Field {
                name: "w",
                dtype: Dtype::Int,
                desc: "Width",
                optional: true,
                default: None,
            },
            Field {
                name: "l",
                dtype: Dtype::Int,
                desc: "Length",
                optional: true,
                default: None,
            },
        ];
        let schema = Schema {
            name: "Geometry",
            desc: "Geometry parameters",
            fields: &FIELDS,
        };
        assert!(is_paramclass(&schema));
    }
}
