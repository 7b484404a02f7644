//! Port descriptor extraction
//!
//! Reads a port declaration through the [`PortNode`] capability traits and normalises it
//! into a [`PortDescriptor`]. The policy is tolerant: arity and direction problems are
//! collected as [`Diagnostic`]s and extraction always produces a complete descriptor.

use rur_idl::{ParamNode, PortNode, TypeKind};

use crate::error::{Error, Result};
use crate::generators::GeneratorConfig;
use crate::ir::{Diagnostic, Direction, PortDescriptor};
use crate::writer::CodeWriter;

/// A descriptor together with the problems found while building it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub descriptor: PortDescriptor,
    pub diagnostics: Vec<Diagnostic>,
}

/// Build a descriptor from a port node without writing anything.
///
/// Only the first parameter is considered. A port without parameters yields an
/// empty `void` parameter and no direction.
pub fn extract<N: PortNode>(node: &N) -> Extraction {
    let identifier = node.identifier().to_string();
    let params = node.parameters();
    let mut diagnostics = Vec::new();

    if params.len() != 1 {
        diagnostics.push(Diagnostic::MalformedPortArity {
            port: identifier.clone(),
            count: params.len(),
        });
    }

    let (param_name, param_type, param_kind, direction) = match params.first() {
        Some(param) => (
            param.identifier().to_string(),
            param.type_name(),
            param.kind(),
            classify_direction(param),
        ),
        None => (String::new(), "void".to_string(), TypeKind::Void, None),
    };

    match direction {
        Some(Direction::InOut) => diagnostics.push(Diagnostic::UnsupportedDirection {
            port: identifier.clone(),
        }),
        None => diagnostics.push(Diagnostic::UndeterminedDirection {
            port: identifier.clone(),
        }),
        Some(_) => {}
    }

    let descriptor = PortDescriptor {
        identifier,
        direction,
        param_name,
        param_type,
        param_kind,
        pragmas: node.pragmas().to_vec(),
        comments: node.comments().to_vec(),
    };

    Extraction {
        descriptor,
        diagnostics,
    }
}

/// Extract a port and report its diagnostics as warning comments in `writer`.
///
/// In strict mode an undetermined direction is returned as an error instead.
pub fn extract_port<N: PortNode>(
    writer: &mut CodeWriter,
    node: &N,
    config: &GeneratorConfig,
) -> Result<PortDescriptor> {
    let Extraction {
        descriptor,
        diagnostics,
    } = extract(node);

    for diagnostic in &diagnostics {
        if config.strict {
            if let Diagnostic::UndeterminedDirection { port } = diagnostic {
                return Err(Error::UndeterminedDirection { port: port.clone() });
            }
        }
        tracing::warn!(port = %diagnostic.port(), "{}", diagnostic);
        writer.line(diagnostic.warning_text());
    }

    tracing::debug!(
        port = %descriptor.identifier,
        direction = ?descriptor.direction,
        kind = %descriptor.param_kind,
        "Extracted port"
    );

    Ok(descriptor)
}

/// Textual tag wins over the numeric code
fn classify_direction<P: ParamNode>(param: &P) -> Option<Direction> {
    param
        .direction_tag()
        .and_then(Direction::from_tag)
        .or_else(|| param.direction_code().and_then(Direction::from_code))
}
