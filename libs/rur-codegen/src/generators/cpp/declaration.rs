//! Member declarations inside the class body

use super::write_parameter;
use crate::ir::{Direction, PortDescriptor};
use crate::writer::CodeWriter;
use rur_idl::TypeKind;

/// Ownership note placed above a read accessor
pub fn ownership_remark(kind: TypeKind) -> &'static str {
    if kind.is_sequence() {
        "// Remark: caller is responsible for evoking vector->clear()"
    } else {
        "// Remark: check if result is not NULL"
    }
}

/// `<Type> *read<Port>(bool blocking=false);`
pub fn read_declaration(port: &PortDescriptor) -> String {
    format!(
        "{} *read{}(bool blocking=false);",
        port.param_type, port.identifier
    )
}

/// `bool write<Port>(const <Type> [&]<param>);`
pub fn write_declaration(port: &PortDescriptor) -> String {
    format!("bool write{}({});", port.identifier, write_parameter(port))
}

/// Emit the declaration for a port's own direction.
///
/// Returns `false` and writes nothing for inout ports and ports without a direction.
pub fn emit_declaration(w: &mut CodeWriter, port: &PortDescriptor) -> bool {
    match port.direction {
        Some(Direction::In) => {
            w.line(ownership_remark(port.param_kind));
            w.line(read_declaration(port));
            true
        }
        Some(Direction::Out) => {
            w.line(write_declaration(port));
            true
        }
        Some(Direction::InOut) | None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port(
        identifier: &str,
        direction: Option<Direction>,
        name: &str,
        ty: &str,
        kind: TypeKind,
    ) -> PortDescriptor {
        PortDescriptor {
            identifier: identifier.to_string(),
            direction,
            param_name: name.to_string(),
            param_type: ty.to_string(),
            param_kind: kind,
            pragmas: Vec::new(),
            comments: Vec::new(),
        }
    }

    fn emitted(port: &PortDescriptor) -> String {
        let mut w = CodeWriter::new();
        emit_declaration(&mut w, port);
        w.finish()
    }

    #[test]
    fn test_out_scalar() {
        let p = port("Output", Some(Direction::Out), "speed", "int", TypeKind::Long);
        assert_eq!(emitted(&p), "bool writeOutput(const int speed);\n");
    }

    #[test]
    fn test_out_sequence_passes_reference() {
        let p = port(
            "Path",
            Some(Direction::Out),
            "points",
            "std::vector<double>",
            TypeKind::Sequence,
        );
        assert_eq!(
            emitted(&p),
            "bool writePath(const std::vector<double> &points);\n"
        );
    }

    #[test]
    fn test_in_scalar() {
        let p = port("Speed", Some(Direction::In), "speed", "int", TypeKind::Long);
        assert_eq!(
            emitted(&p),
            "// Remark: check if result is not NULL\nint *readSpeed(bool blocking=false);\n"
        );
    }

    #[test]
    fn test_in_sequence() {
        let p = port(
            "Sensor",
            Some(Direction::In),
            "readings",
            "vector<float>",
            TypeKind::Sequence,
        );
        let out = emitted(&p);
        assert_eq!(
            out,
            "// Remark: caller is responsible for evoking vector->clear()\nvector<float> *readSensor(bool blocking=false);\n"
        );
        assert!(!out.contains("NULL"));
    }

    #[test]
    fn test_inout_and_undetermined_emit_nothing() {
        let p = port("Both", Some(Direction::InOut), "x", "int", TypeKind::Long);
        let mut w = CodeWriter::new();
        assert!(!emit_declaration(&mut w, &p));

        let p = port("Lost", None, "x", "int", TypeKind::Long);
        assert!(!emit_declaration(&mut w, &p));
        assert_eq!(w.as_str(), "");
    }
}
