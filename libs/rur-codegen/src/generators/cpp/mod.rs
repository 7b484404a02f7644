//! C++ code generator for port classes
//!
//! Every IDL interface becomes a class `<Name>` with one accessor (`read<Port>`) or
//! mutator (`write<Port>`) per port, split over `<Name>.h` and `<Name>.cpp`.

pub mod declaration;
pub mod definition;
pub mod header;
pub mod source;

pub use declaration::{emit_declaration, ownership_remark, read_declaration, write_declaration};
pub use definition::{open_definition, read_definition_head, write_definition_head};
pub use header::{render_header, HeaderGenerator};
pub use source::{render_source, BodyFiller, SourceGenerator, StubBody};

use crate::error::Result;
use crate::generators::{Generator, GeneratorConfig};
use crate::ir::PortDescriptor;
use crate::writer::CodeWriter;
use rur_idl::IdlModule;
use std::collections::BTreeMap;

const DEFAULT_BANNER: &str = "This file is generated by rur-gen from an IDL port description. It is open-source
software, published under the GNU Lesser General Public License (LGPL), version 2.1 or later.
Changes made by hand are lost the next time the generator runs.
";

/// Output of the C++ generators
#[derive(Debug, Default)]
pub struct CppOutput {
    /// Generated files indexed by file name
    pub modules: BTreeMap<String, String>,
}

/// Header and source generation in one pass
pub struct CppGenerator {
    config: GeneratorConfig,
}

impl CppGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn new_default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl Generator for CppGenerator {
    type Output = CppOutput;

    fn generate(&self, module: &IdlModule) -> Result<Self::Output> {
        let mut output = HeaderGenerator::new(self.config.clone()).generate(module)?;
        let sources = SourceGenerator::new(self.config.clone()).generate(module)?;
        output.modules.extend(sources.modules);
        Ok(output)
    }
}

/// Include guard macro, e.g. `MOTOR_H_`
pub fn include_guard(class_name: &str) -> String {
    format!("{}_H_", class_name.to_uppercase())
}

/// `const <Type> &<name>` for sequences, `const <Type> <name>` otherwise
fn write_parameter(port: &PortDescriptor) -> String {
    if port.passes_by_reference() {
        format!("const {} &{}", port.param_type, port.param_name)
    } else {
        format!("const {} {}", port.param_type, port.param_name)
    }
}

/// File banner followed by one `@<pragma>` line per module pragma
fn write_banner(w: &mut CodeWriter, pragmas: &[String], config: &GeneratorConfig) {
    let body = config.banner.as_deref().unwrap_or(DEFAULT_BANNER);

    w.line("/**");
    for line in body.lines() {
        if line.is_empty() {
            w.line(" *");
        } else {
            w.line(format!(" * {}", line));
        }
    }
    w.line(" *");
    for pragma in pragmas {
        w.line(format!(" * @{}", pragma));
    }
    w.line(" */");
    w.blank();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rur_idl::TypeKind;

    #[test]
    fn test_include_guard_upper_cases_class_name() {
        assert_eq!(include_guard("Motor"), "MOTOR_H_");
        assert_eq!(include_guard("LaserScanner2"), "LASERSCANNER2_H_");
    }

    #[test]
    fn test_banner_lists_pragmas() {
        let mut w = CodeWriter::new();
        let config = GeneratorConfig {
            banner: Some("Line one\n\nLine two".to_string()),
            ..Default::default()
        };
        write_banner(
            &mut w,
            &["author Jane Doe".to_string(), "license LGPL".to_string()],
            &config,
        );
        assert_eq!(
            w.as_str(),
            "/**\n * Line one\n *\n * Line two\n *\n * @author Jane Doe\n * @license LGPL\n */\n\n"
        );
    }

    #[test]
    fn test_default_banner_carries_license() {
        let mut w = CodeWriter::new();
        write_banner(&mut w, &[], &GeneratorConfig::default());
        let banner = w.finish();

        assert!(banner.starts_with("/**\n * This file is generated by rur-gen"));
        assert!(banner.contains("GNU Lesser General Public License (LGPL), version 2.1 or later"));
        assert!(banner.ends_with(" *\n */\n\n"));
    }

    #[test]
    fn test_write_parameter_reference_iff_sequence() {
        let mut port = PortDescriptor {
            identifier: "Sensor".to_string(),
            direction: None,
            param_name: "readings".to_string(),
            param_type: "std::vector<float>".to_string(),
            param_kind: TypeKind::Sequence,
            pragmas: Vec::new(),
            comments: Vec::new(),
        };
        assert_eq!(write_parameter(&port), "const std::vector<float> &readings");

        port.param_kind = TypeKind::String;
        port.param_type = "std::string".to_string();
        assert_eq!(write_parameter(&port), "const std::string readings");
    }
}
