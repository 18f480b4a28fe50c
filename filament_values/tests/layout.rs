use std::mem::{align_of, size_of};

use filament_values::*;
use pretty_assertions::assert_eq;

#[test]
fn sizes_match_field_widths() {
    assert_eq!(2 * 4, size_of::<FVec2Float>());
    assert_eq!(2 * 8, size_of::<FVec2Double>());
    assert_eq!(3 * 4, size_of::<FVec3Float>());
    assert_eq!(3 * 8, size_of::<FVec3Double>());
    assert_eq!(4 * 4, size_of::<FVec4Float>());
    assert_eq!(4 * 8, size_of::<FVec4Double>());
    assert_eq!(9 * 4, size_of::<FMat33Float>());
    assert_eq!(9 * 8, size_of::<FMat33Double>());
    assert_eq!(16 * 4, size_of::<FMat44Float>());
    assert_eq!(16 * 8, size_of::<FMat44Double>());
    assert_eq!(4 * 4, size_of::<FQuaternionFloat>());
    assert_eq!(6 * 4 * 4, size_of::<FFrustum>());
    assert_eq!(4, size_of::<FBool>());
    assert_eq!(4, size_of::<FEntity>());
    assert_eq!(4, size_of::<FSamplerParams>());
}

#[test]
fn natural_alignment() {
    assert_eq!(4, align_of::<FVec3Float>());
    assert_eq!(8, align_of::<FVec3Double>());
    assert_eq!(8, align_of::<FMat44Double>());
    assert_eq!(4, align_of::<FFrustum>());
    assert_eq!(align_of::<i32>(), align_of::<FBool>());
}

#[test]
fn fields_round_trip() {
    let v2 = FVec2Float { x: 1.5, y: -2.0 };
    assert_eq!((1.5, -2.0), (v2.x, v2.y));

    let v3 = FVec3Double {
        x: 1.0e-300,
        y: 2.0,
        z: f64::MAX,
    };
    assert_eq!((1.0e-300, 2.0, f64::MAX), (v3.x, v3.y, v3.z));

    let v4 = FVec4Float {
        x: 0.1,
        y: 0.2,
        z: 0.3,
        w: 0.4,
    };
    assert_eq!((0.1, 0.2, 0.3, 0.4), (v4.x, v4.y, v4.z, v4.w));

    let m: [f64; 16] = std::array::from_fn(|i| i as f64 * 0.5);
    let mat = FMat44Double { m };
    assert_eq!(m, mat.m);

    let q = FQuaternionFloat {
        m: [0.0, 0.0, 0.0, 1.0],
    };
    assert_eq!([0.0, 0.0, 0.0, 1.0], q.m);

    let entity = FEntity(0xdead_beef);
    assert_eq!(0xdead_beef, entity.0);

    let flag = FBool(7);
    assert_eq!(7, flag.0);

    let v2 = FVec2Double { x: -0.5, y: 1.0e10 };
    assert_eq!((-0.5, 1.0e10), (v2.x, v2.y));

    let v3 = FVec3Float {
        x: 1.0,
        y: f32::MIN_POSITIVE,
        z: -3.5,
    };
    assert_eq!((1.0, f32::MIN_POSITIVE, -3.5), (v3.x, v3.y, v3.z));

    let v4 = FVec4Double {
        x: 1.0,
        y: -2.0,
        z: 3.0e-5,
        w: 0.0,
    };
    assert_eq!((1.0, -2.0, 3.0e-5, 0.0), (v4.x, v4.y, v4.z, v4.w));

    let m: [f64; 9] = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
    let mat = FMat33Double { m };
    assert_eq!(m, mat.m);

    let m: [f32; 16] = std::array::from_fn(|i| i as f32 - 8.0);
    let mat = FMat44Float { m };
    assert_eq!(m, mat.m);

    let params = FSamplerParams(0x8000_0001);
    assert_eq!(0x8000_0001, params.0);

    let planes: [FVec4Float; 6] =
        std::array::from_fn(|i| FVec4Float::new(i as f32, 1.0, 0.0, -(i as f32)));
    let frustum = FFrustum { planes };
    assert_eq!(planes, frustum.planes);
    assert_eq!((5.0, -5.0), (frustum.planes[5].x, frustum.planes[5].w));
}

#[test]
fn colors_are_vectors() {
    let color: FLinearColor = FLinearColor {
        x: 0.25,
        y: 0.5,
        z: 1.0,
    };
    let vector = FVec3Float::new(0.25, 0.5, 1.0);
    assert_eq!(vector, color);
    assert_eq!((vector.x, vector.y, vector.z), (color.x, color.y, color.z));

    let color_a: FLinearColorA = FVec4Float::new(1.0, 0.0, 0.0, 0.5);
    let vector: FVec4Float = color_a;
    assert_eq!(0.5, vector.w);
}

#[test]
fn bytes_in_declaration_order() {
    let v = FVec3Float::new(1.0, 2.0, 3.0);
    let expected: Vec<u8> = [1.0f32, 2.0, 3.0]
        .iter()
        .flat_map(|f| f.to_ne_bytes())
        .collect();
    assert_eq!(expected, bytemuck::bytes_of(&v));

    let planes = [FVec4Float::new(1.0, 2.0, 3.0, 4.0); 6];
    let frustum = FFrustum::new(planes);
    let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&frustum));
    assert_eq!(24, floats.len());
    assert_eq!(&[1.0f32, 2.0, 3.0, 4.0], &floats[20..24]);
}

#[test]
fn cast_between_color_and_array() {
    let color: FLinearColorA = bytemuck::cast([0.1f32, 0.2, 0.3, 1.0]);
    assert_eq!(1.0, color.w);

    let raw: u32 = bytemuck::cast(FSamplerParams(0x0102_0304));
    assert_eq!(0x0102_0304, raw);
}

#[test]
fn zeroed_values() {
    let mat: FMat33Float = bytemuck::Zeroable::zeroed();
    assert_eq!(FMat33Float::default(), mat);
    assert!(!bool::from(FBool::default()));
}

#[test]
fn header_matches_rust_types() {
    for name in [
        "FBOOL",
        "FENTITY",
        "FSAMPLER_PARAMS",
        "FVEC2_FLOAT",
        "FVEC2_DOUBLE",
        "FVEC3_FLOAT",
        "FVEC3_DOUBLE",
        "FVEC4_FLOAT",
        "FVEC4_DOUBLE",
        "FMAT33_FLOAT",
        "FMAT33_DOUBLE",
        "FMAT44_FLOAT",
        "FMAT44_DOUBLE",
        "FQUATERNION_FLOAT",
        "FFRUSTUM",
        "FLINEAR_COLOR",
        "FLINEAR_COLOR_A",
    ] {
        assert!(C_HEADER.contains(&format!(" {name};\n")), "{name}");
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_fields() {
    let v = FVec2Double::new(1.0, 2.0);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(r#"{"x":1.0,"y":2.0}"#, json);
    assert_eq!(v, serde_json::from_str::<FVec2Double>(&json).unwrap());

    let entity: FEntity = serde_json::from_str("5").unwrap();
    assert_eq!(FEntity(5), entity);
}
