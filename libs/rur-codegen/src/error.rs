//! Error types for port code generation
//!
//! Malformed ports are normally reported as warning comments inside the generated code;
//! only strict mode and pipeline failures surface here.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IDL tree error: {0}")]
    Idl(#[from] rur_idl::Error),

    #[error("no proper direction for port '{port}' defined in .idl file")]
    UndeterminedDirection { port: String },

    #[error("interface not found: {0}")]
    InterfaceNotFound(String),
}
