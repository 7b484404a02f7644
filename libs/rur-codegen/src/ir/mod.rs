//! Intermediate Representation (IR)
//!
//! Language-agnostic description of a single port, extracted from an IDL operation.
//! A descriptor is built fresh every time a port is visited and dropped after emission.

use rur_idl::TypeKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Data flow direction of a port, seen from the generated class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The class reads from the port
    In,
    /// The class writes to the port
    Out,
    /// Bidirectional; not supported by the emitters
    InOut,
}

impl Direction {
    /// Classify a textual direction tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "in" => Some(Direction::In),
            "out" => Some(Direction::Out),
            "inout" => Some(Direction::InOut),
            _ => None,
        }
    }

    /// Classify a front-end direction code
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Direction::In),
            1 => Some(Direction::Out),
            2 => Some(Direction::InOut),
            _ => None,
        }
    }

    /// Prefix of the accessor/mutator generated for this direction
    pub fn function_prefix(self) -> Option<&'static str> {
        match self {
            Direction::In => Some("read"),
            Direction::Out => Some("write"),
            Direction::InOut => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::In => "in",
            Direction::Out => "out",
            Direction::InOut => "inout",
        };
        f.write_str(s)
    }
}

/// Canonical description of one port
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortDescriptor {
    /// Port name as declared (e.g. "Output")
    pub identifier: String,
    /// `None` when the parameter carries no usable direction
    pub direction: Option<Direction>,
    /// Name of the carried parameter (e.g. "speed")
    pub param_name: String,
    /// Rendered C++ type of the parameter (e.g. "int")
    pub param_type: String,
    pub param_kind: TypeKind,
    pub pragmas: Vec<String>,
    pub comments: Vec<String>,
}

impl PortDescriptor {
    /// Name of the port member object, e.g. `portOutput`
    pub fn member_name(&self) -> String {
        format!("port{}", self.identifier)
    }

    /// Accessor/mutator name for the given direction, e.g. `writeOutput`
    pub fn function_name(&self, direction: Direction) -> Option<String> {
        direction
            .function_prefix()
            .map(|prefix| format!("{}{}", prefix, self.identifier))
    }

    /// Sequences go by const reference, everything else by const value
    pub fn passes_by_reference(&self) -> bool {
        self.param_kind.is_sequence()
    }
}

/// Non-fatal problem found while extracting a port
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The port does not carry exactly one parameter
    MalformedPortArity { port: String, count: usize },
    /// The parameter is declared `inout`
    UnsupportedDirection { port: String },
    /// The parameter direction could not be classified
    UndeterminedDirection { port: String },
}

impl Diagnostic {
    /// Comment line written into the generated code
    pub fn warning_text(&self) -> &'static str {
        match self {
            Diagnostic::MalformedPortArity { .. } => {
                "//! Warning: wrong number of parameters used in the .idl file"
            }
            Diagnostic::UnsupportedDirection { .. } => "//! Warning: inout is not supported",
            Diagnostic::UndeterminedDirection { .. } => {
                "//! Warning: no proper direction for port defined in .idl file"
            }
        }
    }

    pub fn port(&self) -> &str {
        match self {
            Diagnostic::MalformedPortArity { port, .. }
            | Diagnostic::UnsupportedDirection { port }
            | Diagnostic::UndeterminedDirection { port } => port,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedPortArity { port, count } => write!(
                f,
                "port '{}' declares {} parameters, expected exactly one",
                port, count
            ),
            Diagnostic::UnsupportedDirection { port } => {
                write!(f, "port '{}' is inout, which is not supported", port)
            }
            Diagnostic::UndeterminedDirection { port } => {
                write!(f, "port '{}' has no proper direction", port)
            }
        }
    }
}
