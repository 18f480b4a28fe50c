use std::path::Path;

use filament_values_gen::{create_c_header, create_value_types_module, PrimitiveKind, WriteOptions};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let options = WriteOptions {
        derive_bytemuck: true,
        derive_serde: std::env::var_os("CARGO_FEATURE_SERDE").is_some(),
        ..Default::default()
    };

    let out_dir = std::env::var("OUT_DIR").unwrap();
    let out_dir = Path::new(&out_dir);

    let text = create_value_types_module(&PrimitiveKind::VALUE_TYPES, options)
        .inspect_err(|error| error.emit_to_stderr())
        .unwrap();
    std::fs::write(out_dir.join("value_types.rs"), text).unwrap();

    let header = create_c_header(&PrimitiveKind::VALUE_TYPES)
        .inspect_err(|error| error.emit_to_stderr())
        .unwrap();
    std::fs::write(out_dir.join("c_valuetypes.h"), header).unwrap();
}
