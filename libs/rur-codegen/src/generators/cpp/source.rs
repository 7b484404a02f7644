//! Source (`<Name>.cpp`) generation

use super::{open_definition, write_banner, CppOutput};
use crate::error::Result;
use crate::generators::{Generator, GeneratorConfig};
use crate::ir::{Direction, PortDescriptor};
use crate::parser::extract_port;
use crate::writer::CodeWriter;
use rur_idl::{IdlModule, PortNode};

/// Fills the body of a generated method.
///
/// Called with the writer positioned inside the opened body.
pub trait BodyFiller {
    fn fill(&self, w: &mut CodeWriter, port: &PortDescriptor, direction: Direction);
}

/// Compilable placeholder bodies
#[derive(Debug, Clone, Copy, Default)]
pub struct StubBody;

impl BodyFiller for StubBody {
    fn fill(&self, w: &mut CodeWriter, _port: &PortDescriptor, direction: Direction) {
        match direction {
            Direction::In => w.line("return NULL;"),
            Direction::Out => w.line("return false;"),
            Direction::InOut => {}
        }
    }
}

/// Generates one source file per interface
pub struct SourceGenerator<B = StubBody> {
    config: GeneratorConfig,
    filler: B,
}

impl SourceGenerator<StubBody> {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            filler: StubBody,
        }
    }
}

impl<B: BodyFiller> SourceGenerator<B> {
    pub fn with_filler(config: GeneratorConfig, filler: B) -> Self {
        Self { config, filler }
    }
}

impl<B: BodyFiller> Generator for SourceGenerator<B> {
    type Output = CppOutput;

    fn generate(&self, module: &IdlModule) -> Result<Self::Output> {
        let mut output = CppOutput::default();

        for iface in &module.interfaces {
            let file_name = format!("{}.cpp", iface.identifier);
            tracing::debug!(file = %file_name, ports = iface.ports.len(), "Generating source");

            let code = render_source(
                &iface.identifier,
                &iface.ports,
                &module.pragmas,
                &self.config,
                &self.filler,
            )?;
            output.modules.insert(file_name, code);
        }

        Ok(output)
    }
}

/// Render a source file defining every readable/writable port of `class_name`.
pub fn render_source<N: PortNode, B: BodyFiller>(
    class_name: &str,
    ports: &[N],
    module_pragmas: &[String],
    config: &GeneratorConfig,
    filler: &B,
) -> Result<String> {
    let mut w = CodeWriter::with_indent_width(config.indent_width);

    write_banner(&mut w, module_pragmas, config);
    w.line(format!("#include \"{}.h\"", class_name));
    w.blank();

    for port in ports {
        let descriptor = extract_port(&mut w, port, config)?;
        let Some(direction) = descriptor.direction else {
            continue;
        };
        tracing::trace!(port = %descriptor.identifier, %direction, "Defining port method");

        let Some(mut body) = open_definition(&mut w, &descriptor, direction, class_name) else {
            continue;
        };
        filler.fill(&mut body, &descriptor, direction);
        body.close();
        w.blank();
    }

    Ok(w.finish())
}
