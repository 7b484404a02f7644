//! Port Class Code Generator
//!
//! This library turns IDL port declarations into C++ classes: one read accessor or write
//! mutator per port, declared in a header and stubbed out in a source file.
//!
//! ## Architecture
//!
//! The generator uses a three-stage pipeline:
//! 1. **Parser**: Extracts a port descriptor from each IDL operation
//! 2. **IR (Intermediate Representation)**: Language-agnostic port model
//! 3. **Generators**: C++ header and source emission from the IR
//!
//! Only the `rur_idl` capability traits are used to read the syntax tree, so any front end
//! that implements them can drive the generators.

pub mod error;
pub mod generators;
pub mod ir;
pub mod parser;
pub mod utils;
pub mod writer;

use std::path::Path;

use anyhow::{Context, Result as AnyResult};
use generators::cpp::CppGenerator;
use generators::GeneratorConfig;
use rur_idl::IdlModule;

pub use error::{Error, Result};
pub use ir::{Diagnostic, Direction, PortDescriptor};
pub use parser::{extract, extract_port, Extraction};
pub use writer::{CodeWriter, Scope};

/// Main entry point for code generation
pub struct CodeGenerator {
    module: IdlModule,
}

impl CodeGenerator {
    pub fn new(module: IdlModule) -> Self {
        Self { module }
    }

    /// Create a new code generator from a dumped IDL tree (`.json`, `.yaml`, `.yml`)
    pub fn from_path(path: &Path) -> Result<Self> {
        let module = IdlModule::load(path)?;
        Ok(Self { module })
    }

    /// Get the IDL module
    pub fn module(&self) -> &IdlModule {
        &self.module
    }

    /// Restrict generation to a single interface
    pub fn only_interface(mut self, identifier: &str) -> Result<Self> {
        if self.module.interface(identifier).is_none() {
            return Err(Error::InterfaceNotFound(identifier.to_string()));
        }
        self.module.interfaces.retain(|i| i.identifier == identifier);
        Ok(self)
    }

    /// Generate code with a specific generator
    pub fn generate<G: generators::Generator>(&self, generator: G) -> Result<G::Output> {
        generator.generate(&self.module)
    }
}

/// Convenience helper to run the C++ generator on a dumped IDL tree.
///
/// Returns the number of generated files.
pub fn generate_cpp_from_file(
    input: &Path,
    output_dir: &Path,
    config: GeneratorConfig,
) -> AnyResult<usize> {
    let codegen = CodeGenerator::from_path(input)
        .with_context(|| format!("loading IDL tree {}", input.display()))?;

    let generator = CppGenerator::new(config);
    let output = codegen
        .generate(generator)
        .context("running C++ generator")?;

    utils::write_modules(output_dir, &output.modules)?;

    Ok(output.modules.len())
}
