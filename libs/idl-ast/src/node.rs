//! Capability traits for port declarations

use crate::kind::TypeKind;

/// A port declaration: an IDL operation carrying (ideally) exactly one parameter.
pub trait PortNode {
    type Param: ParamNode;

    /// Port name as declared, e.g. `Output`
    fn identifier(&self) -> &str;

    /// Declared parameters in source order
    fn parameters(&self) -> &[Self::Param];

    /// Raw pragma texts attached to the declaration
    fn pragmas(&self) -> &[String];

    /// Raw comment texts attached to the declaration
    fn comments(&self) -> &[String];
}

/// A single operation parameter.
pub trait ParamNode {
    fn identifier(&self) -> &str;

    /// Target-language (C++) name of the parameter type
    fn type_name(&self) -> String;

    /// Structural kind of the parameter type
    fn kind(&self) -> TypeKind;

    /// Textual direction tag (`in`, `out`, `inout`) if the front end supplies one
    fn direction_tag(&self) -> Option<&str>;

    /// Numeric direction code (0 = in, 1 = out, 2 = inout) if the front end supplies one
    fn direction_code(&self) -> Option<u32> {
        None
    }
}
