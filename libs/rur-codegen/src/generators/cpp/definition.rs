//! Out-of-class method definitions

use super::write_parameter;
use crate::ir::{Direction, PortDescriptor};
use crate::writer::{CodeWriter, Scope};

/// `<Type>* <Class>::read<Port>(bool blocking) {`
pub fn read_definition_head(port: &PortDescriptor, class_name: &str) -> String {
    format!(
        "{}* {}::read{}(bool blocking) {{",
        port.param_type, class_name, port.identifier
    )
}

/// `bool <Class>::write<Port>(const <Type> [&]<param>) {`
pub fn write_definition_head(port: &PortDescriptor, class_name: &str) -> String {
    format!(
        "bool {}::write{}({}) {{",
        class_name,
        port.identifier,
        write_parameter(port)
    )
}

/// Open the body of the method implementing `direction` for `port`.
///
/// The returned scope writes the closing brace when dropped. For inout nothing is
/// written and `None` is returned.
pub fn open_definition<'w>(
    w: &'w mut CodeWriter,
    port: &PortDescriptor,
    direction: Direction,
    class_name: &str,
) -> Option<Scope<'w>> {
    let head = match direction {
        Direction::In => read_definition_head(port, class_name),
        Direction::Out => write_definition_head(port, class_name),
        Direction::InOut => return None,
    };
    Some(w.scope(head, "}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rur_idl::TypeKind;

    fn port(kind: TypeKind, ty: &str) -> PortDescriptor {
        PortDescriptor {
            identifier: "Output".to_string(),
            direction: Some(Direction::Out),
            param_name: "value".to_string(),
            param_type: ty.to_string(),
            param_kind: kind,
            pragmas: Vec::new(),
            comments: Vec::new(),
        }
    }

    #[test]
    fn test_heads() {
        let scalar = port(TypeKind::Long, "int");
        assert_eq!(
            read_definition_head(&scalar, "Motor"),
            "int* Motor::readOutput(bool blocking) {"
        );
        assert_eq!(
            write_definition_head(&scalar, "Motor"),
            "bool Motor::writeOutput(const int value) {"
        );

        let seq = port(TypeKind::Sequence, "std::vector<int>");
        assert_eq!(
            write_definition_head(&seq, "Motor"),
            "bool Motor::writeOutput(const std::vector<int> &value) {"
        );
    }

    #[test]
    fn test_direction_is_taken_from_argument() {
        // descriptor says out, caller asks for the reader
        let p = port(TypeKind::Long, "int");
        let mut w = CodeWriter::new();
        {
            let mut body = open_definition(&mut w, &p, Direction::In, "Motor").unwrap();
            body.line("return NULL;");
        }
        assert_eq!(
            w.as_str(),
            "int* Motor::readOutput(bool blocking) {\n  return NULL;\n}\n"
        );
        assert_eq!(w.depth(), 0);
    }

    #[test]
    fn test_inout_opens_nothing() {
        let p = port(TypeKind::Long, "int");
        let mut w = CodeWriter::new();
        assert!(open_definition(&mut w, &p, Direction::InOut, "Motor").is_none());
        assert_eq!(w.as_str(), "");
        assert_eq!(w.depth(), 0);
    }
}
