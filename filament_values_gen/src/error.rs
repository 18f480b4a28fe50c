use thiserror::Error;

/// Errors while generating declarations for a list of value types.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CreateModuleError {
    /// Only kinds with a [ValueType](crate::ValueType) declaration can be generated.
    /// Plain scalars like `uint8_t` are already builtin types.
    #[error("`{name}` is a builtin scalar without a value type declaration")]
    NotAValueType { name: &'static str },

    /// Each value type must be declared exactly once.
    #[error("duplicate value type `{name}`")]
    DuplicateValueType { name: &'static str },

    /// Aliases and nested fields must refer to a value type declared earlier in the list.
    #[error("`{name}` refers to `{dependency}`, which is not declared before it")]
    UndeclaredDependency {
        name: &'static str,
        dependency: &'static str,
    },

    /// The generated Rust code could not be parsed for formatting.
    #[error("failed to parse generated code: {error}")]
    ParseError { error: syn::Error },
}

impl CreateModuleError {
    /// Writes a diagnostic error to stderr.
    pub fn emit_to_stderr(&self) {
        eprintln!("{}", self.emit_to_string());
    }

    /// Creates a diagnostic string from the error.
    pub fn emit_to_string(&self) -> String {
        match self {
            CreateModuleError::UndeclaredDependency { name, dependency } => {
                format!("{self}\nhelp: declare `{dependency}` before `{name}`")
            }
            other => format!("{other}"),
        }
    }
}

/// An unknown spelling for a [PrimitiveKind](crate::PrimitiveKind).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown primitive type `{name}`")]
pub struct ParseKindError {
    pub name: String,
}
