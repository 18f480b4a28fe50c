use crate::value_types::{Field, FieldType, Repr, ValueType};

pub const PREAMBLE: &str = "#include <stdint.h>\n";

/// The C declaration for a single value type including the trailing newline.
pub fn c_declaration(value_type: &ValueType) -> String {
    let name = value_type.kind.c_name();
    match value_type.repr {
        Repr::Typedef(scalar) => format!("typedef {} {name};\n", scalar.c_name()),
        Repr::Alias(target) => format!("typedef {} {name};\n", target.c_name()),
        Repr::Struct(fields) => {
            let members: String = fields
                .iter()
                .map(|f| format!("    {};\n", c_member(f)))
                .collect();
            format!("typedef struct {name} {{\n{members}}} {name};\n")
        }
    }
}

fn c_member(field: &Field) -> String {
    let name = field.name;
    match field.ty {
        FieldType::Scalar(scalar) => format!("{} {name}", scalar.c_name()),
        FieldType::Array(scalar, count) => format!("{} {name}[{count}]", scalar.c_name()),
        FieldType::Nested(kind, 1) => format!("{} {name}", kind.c_name()),
        FieldType::Nested(kind, count) => format!("{} {name}[{count}]", kind.c_name()),
    }
}
