//! Serde model of a dumped IDL tree
//!
//! A front end serialises the declarations it parsed into this shape:
//!
//! ```json
//! {
//!   "source_file": "motor.idl",
//!   "pragmas": ["author Jane Doe"],
//!   "interfaces": [{
//!     "identifier": "Motor",
//!     "ports": [{
//!       "identifier": "Sensor",
//!       "parameters": [{
//!         "identifier": "readings",
//!         "direction": "in",
//!         "type": { "type": "sequence", "element": { "type": "float" } }
//!       }]
//!     }]
//!   }]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::kind::TypeKind;
use crate::node::{ParamNode, PortNode};

/// A compilation unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdlModule {
    /// Name of the IDL file this tree was parsed from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    /// Top-level pragmas, in source order
    #[serde(default)]
    pub pragmas: Vec<String>,
    #[serde(default)]
    pub interfaces: Vec<InterfaceDecl>,
}

impl IdlModule {
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Load a dumped tree, picking the format from the file extension.
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let parse: fn(&str) -> Result<Self> = match extension.as_str() {
            "json" => Self::from_json_str,
            "yaml" | "yml" => Self::from_yaml_str,
            other => return Err(Error::UnsupportedFormat(other.to_string())),
        };
        let module = parse(&fs::read_to_string(path)?)?;

        tracing::debug!(
            path = %path.display(),
            interfaces = module.interfaces.len(),
            "Loaded IDL tree"
        );

        Ok(module)
    }

    /// Find an interface by identifier
    pub fn interface(&self, identifier: &str) -> Option<&InterfaceDecl> {
        self.interfaces.iter().find(|i| i.identifier == identifier)
    }
}

/// An interface; becomes one generated class whose operations are its ports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceDecl {
    pub identifier: String,
    #[serde(default)]
    pub pragmas: Vec<String>,
    #[serde(default)]
    pub comments: Vec<String>,
    #[serde(default, alias = "operations")]
    pub ports: Vec<OperationDecl>,
}

/// An operation, read as a port declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationDecl {
    pub identifier: String,
    #[serde(default)]
    pub parameters: Vec<ParameterDecl>,
    #[serde(default)]
    pub pragmas: Vec<String>,
    #[serde(default)]
    pub comments: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDecl {
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<DirectionSpec>,
    #[serde(rename = "type")]
    pub ty: IdlType,
}

/// Direction as dumped by the front end: either a tag or a numeric code
///
/// Anything else is kept as `Other` so the port is reported as having no proper
/// direction instead of rejecting the whole tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DirectionSpec {
    Code(u32),
    Tag(String),
    Other(serde_json::Value),
}

/// A parameter type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IdlType {
    Void,
    Short,
    Long,
    #[serde(rename = "unsigned_short")]
    UShort,
    #[serde(rename = "unsigned_long")]
    ULong,
    LongLong,
    #[serde(rename = "unsigned_long_long")]
    ULongLong,
    Float,
    Double,
    LongDouble,
    Boolean,
    Char,
    #[serde(rename = "wchar")]
    WChar,
    Octet,
    String {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bound: Option<u32>,
    },
    #[serde(rename = "wstring")]
    WString {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bound: Option<u32>,
    },
    Sequence {
        element: Box<IdlType>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bound: Option<u32>,
    },
    /// A user-declared type (struct, enum, typedef, interface, ...) referenced by scoped name
    Declared {
        scoped_name: Vec<String>,
        kind: TypeKind,
    },
}

impl IdlType {
    pub fn kind(&self) -> TypeKind {
        match self {
            IdlType::Void => TypeKind::Void,
            IdlType::Short => TypeKind::Short,
            IdlType::Long => TypeKind::Long,
            IdlType::UShort => TypeKind::UShort,
            IdlType::ULong => TypeKind::ULong,
            IdlType::LongLong => TypeKind::LongLong,
            IdlType::ULongLong => TypeKind::ULongLong,
            IdlType::Float => TypeKind::Float,
            IdlType::Double => TypeKind::Double,
            IdlType::LongDouble => TypeKind::LongDouble,
            IdlType::Boolean => TypeKind::Boolean,
            IdlType::Char => TypeKind::Char,
            IdlType::WChar => TypeKind::WChar,
            IdlType::Octet => TypeKind::Octet,
            IdlType::String { .. } => TypeKind::String,
            IdlType::WString { .. } => TypeKind::WString,
            IdlType::Sequence { .. } => TypeKind::Sequence,
            IdlType::Declared { kind, .. } => *kind,
        }
    }

    /// C++ spelling of the type
    pub fn cpp_name(&self) -> String {
        match self {
            IdlType::Void => "void".to_string(),
            IdlType::Short => "short".to_string(),
            IdlType::Long => "int".to_string(),
            IdlType::UShort => "unsigned short".to_string(),
            IdlType::ULong => "unsigned int".to_string(),
            IdlType::LongLong => "long long".to_string(),
            IdlType::ULongLong => "unsigned long long".to_string(),
            IdlType::Float => "float".to_string(),
            IdlType::Double => "double".to_string(),
            IdlType::LongDouble => "long double".to_string(),
            IdlType::Boolean => "bool".to_string(),
            IdlType::Char => "char".to_string(),
            IdlType::WChar => "wchar_t".to_string(),
            IdlType::Octet => "unsigned char".to_string(),
            IdlType::String { .. } => "std::string".to_string(),
            IdlType::WString { .. } => "std::wstring".to_string(),
            IdlType::Sequence { element, .. } => format!("std::vector<{}>", element.cpp_name()),
            IdlType::Declared { scoped_name, .. } => scoped_name.join("::"),
        }
    }
}

impl PortNode for OperationDecl {
    type Param = ParameterDecl;

    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn parameters(&self) -> &[ParameterDecl] {
        &self.parameters
    }

    fn pragmas(&self) -> &[String] {
        &self.pragmas
    }

    fn comments(&self) -> &[String] {
        &self.comments
    }
}

impl ParamNode for ParameterDecl {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn type_name(&self) -> String {
        self.ty.cpp_name()
    }

    fn kind(&self) -> TypeKind {
        self.ty.kind()
    }

    fn direction_tag(&self) -> Option<&str> {
        match &self.direction {
            Some(DirectionSpec::Tag(tag)) => Some(tag.as_str()),
            _ => None,
        }
    }

    fn direction_code(&self) -> Option<u32> {
        match &self.direction {
            Some(DirectionSpec::Code(code)) => Some(*code),
            _ => None,
        }
    }
}
