//! Header (`<Name>.h`) generation

use super::{emit_declaration, include_guard, write_banner, CppOutput};
use crate::error::Result;
use crate::generators::{Generator, GeneratorConfig};
use crate::ir::PortDescriptor;
use crate::parser::extract_port;
use crate::writer::CodeWriter;
use rur_idl::{IdlModule, PortNode};

/// Generates one header per interface
pub struct HeaderGenerator {
    config: GeneratorConfig,
}

impl HeaderGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }
}

impl Generator for HeaderGenerator {
    type Output = CppOutput;

    fn generate(&self, module: &IdlModule) -> Result<Self::Output> {
        let mut output = CppOutput::default();

        for iface in &module.interfaces {
            let file_name = format!("{}.h", iface.identifier);
            tracing::debug!(file = %file_name, ports = iface.ports.len(), "Generating header");

            let code = render_header(
                &iface.identifier,
                &iface.ports,
                &module.pragmas,
                &self.config,
            )?;
            output.modules.insert(file_name, code);
        }

        Ok(output)
    }
}

/// Render a complete header declaring class `class_name` with one member per port.
pub fn render_header<N: PortNode>(
    class_name: &str,
    ports: &[N],
    module_pragmas: &[String],
    config: &GeneratorConfig,
) -> Result<String> {
    let mut w = CodeWriter::with_indent_width(config.indent_width);
    let guard = include_guard(class_name);

    write_banner(&mut w, module_pragmas, config);

    w.line(format!("#ifndef {}", guard));
    w.line(format!("#define {}", guard));
    w.blank();

    {
        let mut class = w.class_scope(class_name);
        class.line("public:");

        for port in ports {
            let descriptor = extract_port(&mut class, port, config)?;
            if config.generate_docs && has_accessor(&descriptor) {
                write_port_docs(&mut class, &descriptor);
            }
            if emit_declaration(&mut class, &descriptor) {
                class.blank();
            }
        }
    }

    w.blank();
    w.line(format!("#endif // {}", guard));

    Ok(w.finish())
}

fn has_accessor(port: &PortDescriptor) -> bool {
    port.direction.and_then(|d| d.function_prefix()).is_some()
}

fn write_port_docs(w: &mut CodeWriter, port: &PortDescriptor) {
    for comment in &port.comments {
        w.line(comment);
    }
    for pragma in &port.pragmas {
        w.line(format!("// @{}", pragma));
    }
}
