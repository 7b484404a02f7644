//! Code generators for port classes
//!
//! Each output flavour implements the `Generator` trait.

pub mod cpp;

use crate::error::Result;
use rur_idl::IdlModule;
use serde::{Deserialize, Serialize};

/// Trait that all generators must implement
pub trait Generator {
    /// The output type of this generator
    type Output;

    /// Generate code from a parsed IDL module
    fn generate(&self, module: &IdlModule) -> Result<Self::Output>;
}

/// Configuration options for code generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Whether to carry port comments and pragmas into the header
    pub generate_docs: bool,
    /// Treat a port without a usable direction as an error instead of skipping it
    pub strict: bool,
    /// Spaces per indentation level
    pub indent_width: usize,
    /// Replacement for the default file banner body
    pub banner: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            generate_docs: true,
            strict: false,
            indent_width: 2,
            banner: None,
        }
    }
}
