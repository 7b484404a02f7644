//! IDL syntax tree access for port code generation
//!
//! Code generators never touch a concrete front-end AST. They go through two narrow
//! capability traits:
//!
//! * [`PortNode`]: a port declaration (an IDL operation) with its identifier, parameters,
//!   pragmas and comments
//! * [`ParamNode`]: a single parameter with its name, rendered type, structural
//!   [`TypeKind`] and declared direction
//!
//! The [`model`] module provides a serde-backed tree that implements both traits, so a
//! front end can dump its parse result as JSON or YAML and hand it to the generator.
//!
//! ```rust
//! use rur_idl::{IdlModule, ParamNode, PortNode, TypeKind};
//!
//! let module = IdlModule::from_json_str(r#"{
//!     "interfaces": [{
//!         "identifier": "Motor",
//!         "ports": [{
//!             "identifier": "Output",
//!             "parameters": [{ "identifier": "speed", "direction": "out", "type": { "type": "long" } }]
//!         }]
//!     }]
//! }"#).unwrap();
//!
//! let port = &module.interfaces[0].ports[0];
//! assert_eq!(port.identifier(), "Output");
//! assert_eq!(port.parameters()[0].type_name(), "int");
//! assert_eq!(port.parameters()[0].kind(), TypeKind::Long);
//! ```

mod error;
mod kind;
pub mod model;
mod node;

pub use error::{Error, Result};
pub use kind::TypeKind;
pub use model::{DirectionSpec, IdlModule, IdlType, InterfaceDecl, OperationDecl, ParameterDecl};
pub use node::{ParamNode, PortNode};
