//! # filament_values_gen
//! filament_values_gen generates declarations for the layout-only math and handle types
//! exchanged with the filament rendering library through its C API.
//!
//! The native library and the C API surface share the memory layout of these types,
//! so values cross the boundary by reinterpretation rather than conversion.
//! Each [PrimitiveKind] knows its C spelling, its native spelling, and its [Layout].
//!
//! ## Getting Started
//! The [create_value_types_module] and [create_c_header] functions are intended for use in build scripts.
//! Both generate declarations from the same catalog,
//! so the Rust bindings and the C header can't drift apart.
//!
//! ```rust no_run
//! // build.rs
//! use filament_values_gen::{create_value_types_module, PrimitiveKind, WriteOptions};
//!
//! fn main() {
//!     let options = WriteOptions {
//!         derive_bytemuck: true,
//!         ..Default::default()
//!     };
//!
//!     let text = create_value_types_module(&PrimitiveKind::VALUE_TYPES, options).unwrap();
//!     std::fs::write("src/value_types.rs", text.as_bytes()).unwrap();
//! }
//! ```
use std::{
    collections::BTreeSet,
    io::{self, Write},
    process::{Command, Stdio},
};

use log::{debug, warn};
use proc_macro2::TokenStream;
use quote::quote;

mod c_header;
mod error;
mod kind;
mod structs;
mod value_types;

pub use error::{CreateModuleError, ParseKindError};
pub use kind::PrimitiveKind;
pub use value_types::{Field, FieldType, Layout, Repr, Scalar, ValueType};

/// Options for configuring the generated Rust bindings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Derive [bytemuck::Pod](https://docs.rs/bytemuck/latest/bytemuck/trait.Pod.html#)
    /// and [bytemuck::Zeroable](https://docs.rs/bytemuck/latest/bytemuck/trait.Zeroable.html#)
    /// for every value type when `true`.
    pub derive_bytemuck: bool,

    /// Derive [serde::Serialize](https://docs.rs/serde/1.0.*/serde/trait.Serialize.html)
    /// and [serde::Deserialize](https://docs.rs/serde/1.0.*/serde/trait.Deserialize.html)
    /// for every value type when `true`.
    pub derive_serde: bool,

    /// Generate compile time assertions to check that the size
    /// and field offsets of each type match the C declaration.
    pub layout_assertions: bool,

    /// Format the generated code with the `rustfmt` formatter used for `cargo fmt`.
    /// This invokes a separate process to run the `rustfmt` executable.
    /// The output is formatted with `prettyplease` instead if `rustfmt` can't be run.
    pub rustfmt: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            derive_bytemuck: false,
            derive_serde: false,
            layout_assertions: true,
            rustfmt: false,
        }
    }
}

/// Create a Rust module declaring the value types for `kinds` in order.
///
/// Aliases and nested fields must refer to kinds earlier in `kinds`.
/// Use [PrimitiveKind::VALUE_TYPES] to generate every value type.
///
/// # Examples
/**
```rust
use filament_values_gen::{create_value_types_module, PrimitiveKind, WriteOptions};

let text = create_value_types_module(
    &[PrimitiveKind::Vec3Float, PrimitiveKind::LinearColor],
    WriteOptions::default(),
)
.unwrap();
assert!(text.contains("pub type FLinearColor = FVec3Float;"));
```
 */
pub fn create_value_types_module(
    kinds: &[PrimitiveKind],
    options: WriteOptions,
) -> Result<String, CreateModuleError> {
    let declarations = declarations(kinds)?;

    let items = declarations.iter().map(|value_type| {
        debug!("generating Rust declaration for {}", value_type.kind);
        structs::value_type_items(value_type, options)
    });
    let output = quote!(#(#items)*);

    if options.rustfmt {
        pretty_print_rustfmt(output)
    } else {
        pretty_print(output)
    }
}

/// Create the text of a C header declaring the value types for `kinds` in order.
///
/// Aliases and nested fields must refer to kinds earlier in `kinds`.
/// Use [PrimitiveKind::VALUE_TYPES] to generate every value type.
pub fn create_c_header(kinds: &[PrimitiveKind]) -> Result<String, CreateModuleError> {
    let declarations = declarations(kinds)?;

    let mut output = c_header::PREAMBLE.to_string();
    for value_type in declarations {
        debug!("generating C declaration for {}", value_type.kind);
        output.push('\n');
        output.push_str(&c_header::c_declaration(value_type));
    }
    Ok(output)
}

/// Look up and validate the declarations for `kinds` in declaration order.
fn declarations(kinds: &[PrimitiveKind]) -> Result<Vec<&'static ValueType>, CreateModuleError> {
    let mut declared = BTreeSet::new();

    kinds
        .iter()
        .map(|kind| {
            let value_type = kind
                .value_type()
                .ok_or(CreateModuleError::NotAValueType {
                    name: kind.c_name(),
                })?;

            if declared.contains(kind) {
                return Err(CreateModuleError::DuplicateValueType {
                    name: kind.c_name(),
                });
            }

            if let Some(dependency) = value_type
                .dependencies()
                .into_iter()
                .find(|d| !declared.contains(d))
            {
                return Err(CreateModuleError::UndeclaredDependency {
                    name: kind.c_name(),
                    dependency: dependency.c_name(),
                });
            }

            declared.insert(*kind);
            Ok(value_type)
        })
        .collect()
}

fn pretty_print(output: TokenStream) -> Result<String, CreateModuleError> {
    let file = syn::parse2::<syn::File>(output)
        .map_err(|error| CreateModuleError::ParseError { error })?;
    Ok(prettyplease::unparse(&file))
}

fn pretty_print_rustfmt(output: TokenStream) -> Result<String, CreateModuleError> {
    match rustfmt(&output.to_string()) {
        Ok(text) => Ok(text),
        Err(e) => {
            warn!("Failed to run rustfmt, falling back to prettyplease: {e}");
            pretty_print(output)
        }
    }
}

fn rustfmt(source: &str) -> io::Result<String> {
    let mut command = Command::new("rustfmt");
    command.arg("--emit=stdout");
    format_with(command, source)
}

fn format_with(mut command: Command, source: &str) -> io::Result<String> {
    let program = command.get_program().to_string_lossy().into_owned();
    let mut proc = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    // Dropping stdin closes the pipe so the formatter sees the end of the input.
    let written = match proc.stdin.take() {
        Some(mut stdin) => stdin.write_all(source.as_bytes()),
        None => Err(io::Error::other(format!("{program} stdin is not piped"))),
    };
    if let Err(e) = written {
        // Reap the child before reporting the error.
        let _ = proc.kill();
        proc.wait()?;
        return Err(e);
    }

    let output = proc.wait_with_output()?;
    if !output.status.success() {
        return Err(io::Error::other(format!(
            "{program} exited with {}",
            output.status
        )));
    }

    // Don't modify line endings.
    let text = String::from_utf8(output.stdout).map_err(io::Error::other)?;
    Ok(text.replace('\r', ""))
}
