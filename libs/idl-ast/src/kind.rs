//! Structural type kinds
//!
//! Mirrors the type-code taxonomy of CORBA-style IDL compilers (`tk_null` .. `tk_local_interface`),
//! so front ends can pass their numeric tags straight through.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural kind of an IDL type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Null,
    Void,
    Short,
    Long,
    #[serde(rename = "unsigned_short")]
    UShort,
    #[serde(rename = "unsigned_long")]
    ULong,
    Float,
    Double,
    Boolean,
    Char,
    Octet,
    Any,
    #[serde(rename = "typecode")]
    TypeCode,
    Principal,
    #[serde(rename = "objref")]
    ObjRef,
    Struct,
    Union,
    Enum,
    String,
    Sequence,
    Array,
    Alias,
    Except,
    LongLong,
    #[serde(rename = "unsigned_long_long")]
    ULongLong,
    LongDouble,
    #[serde(rename = "wchar")]
    WChar,
    #[serde(rename = "wstring")]
    WString,
    Fixed,
    Value,
    ValueBox,
    Native,
    AbstractInterface,
    LocalInterface,
}

const ALL: [TypeKind; 34] = [
    TypeKind::Null,
    TypeKind::Void,
    TypeKind::Short,
    TypeKind::Long,
    TypeKind::UShort,
    TypeKind::ULong,
    TypeKind::Float,
    TypeKind::Double,
    TypeKind::Boolean,
    TypeKind::Char,
    TypeKind::Octet,
    TypeKind::Any,
    TypeKind::TypeCode,
    TypeKind::Principal,
    TypeKind::ObjRef,
    TypeKind::Struct,
    TypeKind::Union,
    TypeKind::Enum,
    TypeKind::String,
    TypeKind::Sequence,
    TypeKind::Array,
    TypeKind::Alias,
    TypeKind::Except,
    TypeKind::LongLong,
    TypeKind::ULongLong,
    TypeKind::LongDouble,
    TypeKind::WChar,
    TypeKind::WString,
    TypeKind::Fixed,
    TypeKind::Value,
    TypeKind::ValueBox,
    TypeKind::Native,
    TypeKind::AbstractInterface,
    TypeKind::LocalInterface,
];

impl TypeKind {
    /// Numeric type code as used by the IDL front end
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Look up a kind by its numeric type code
    pub fn from_code(code: u32) -> Option<Self> {
        ALL.get(code as usize).copied()
    }

    /// Variable-length ordered collection ("sequence of T")
    ///
    /// Sequences are handed over by reference in generated signatures, every other
    /// kind by value.
    pub fn is_sequence(self) -> bool {
        self == TypeKind::Sequence
    }
}

impl TypeKind {
    /// Type-code constant name as spelled by omniidl, e.g. `tk_TypeCode`
    pub fn tk_name(self) -> &'static str {
        match self {
            TypeKind::Null => "tk_null",
            TypeKind::Void => "tk_void",
            TypeKind::Short => "tk_short",
            TypeKind::Long => "tk_long",
            TypeKind::UShort => "tk_ushort",
            TypeKind::ULong => "tk_ulong",
            TypeKind::Float => "tk_float",
            TypeKind::Double => "tk_double",
            TypeKind::Boolean => "tk_boolean",
            TypeKind::Char => "tk_char",
            TypeKind::Octet => "tk_octet",
            TypeKind::Any => "tk_any",
            TypeKind::TypeCode => "tk_TypeCode",
            TypeKind::Principal => "tk_Principal",
            TypeKind::ObjRef => "tk_objref",
            TypeKind::Struct => "tk_struct",
            TypeKind::Union => "tk_union",
            TypeKind::Enum => "tk_enum",
            TypeKind::String => "tk_string",
            TypeKind::Sequence => "tk_sequence",
            TypeKind::Array => "tk_array",
            TypeKind::Alias => "tk_alias",
            TypeKind::Except => "tk_except",
            TypeKind::LongLong => "tk_longlong",
            TypeKind::ULongLong => "tk_ulonglong",
            TypeKind::LongDouble => "tk_longdouble",
            TypeKind::WChar => "tk_wchar",
            TypeKind::WString => "tk_wstring",
            TypeKind::Fixed => "tk_fixed",
            TypeKind::Value => "tk_value",
            TypeKind::ValueBox => "tk_value_box",
            TypeKind::Native => "tk_native",
            TypeKind::AbstractInterface => "tk_abstract_interface",
            TypeKind::LocalInterface => "tk_local_interface",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tk_name())
    }
}
