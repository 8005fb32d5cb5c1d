// Player parameter schema
//
// Static tables describing every attribute the <audio> player understands,
// in the order they are emitted.

/// Accepted values for a player parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    /// Fixed set of accepted values
    Choices(&'static [&'static str]),
    /// Any numeric value
    Number,
}

impl Validity {
    /// Boolean parameters accept exactly "0" and "1" and render as bare flags
    pub fn is_boolean(&self) -> bool {
        matches!(self, Validity::Choices(values) if *values == BOOLEAN)
    }
}

/// One entry of the parameter schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub default: &'static str,
    pub valid: Validity,
}

/// A sizing dimension (only `width` for audio)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimSpec {
    pub name: &'static str,
    pub default: &'static str,
}

const BOOLEAN: &[&str] = &["0", "1"];

/// Parameter schema, in declaration order
pub const PARAMS: &[ParamSpec] = &[
    ParamSpec { name: "autoplay", default: "0", valid: Validity::Choices(BOOLEAN) },
    ParamSpec { name: "controls", default: "0", valid: Validity::Choices(BOOLEAN) },
    ParamSpec { name: "loop", default: "0", valid: Validity::Choices(BOOLEAN) },
    ParamSpec { name: "muted", default: "0", valid: Validity::Choices(BOOLEAN) },
    ParamSpec { name: "preload", default: "auto", valid: Validity::Choices(&["none", "metadata", "auto"]) },
    ParamSpec { name: "volume", default: "", valid: Validity::Number },
];

/// Dimension schema
pub const DIMS: &[DimSpec] = &[DimSpec { name: "width", default: "" }];

/// Separator placed between rendered parameter tokens
pub const GLUE: &str = " ";

/// Find a parameter by name
pub fn param(name: &str) -> Option<&'static ParamSpec> {
    PARAMS.iter().find(|p| p.name == name)
}

/// Default value of a parameter or dimension, if it exists in the schema
pub fn default_for(name: &str) -> Option<&'static str> {
    param(name)
        .map(|p| p.default)
        .or_else(|| DIMS.iter().find(|d| d.name == name).map(|d| d.default))
}
