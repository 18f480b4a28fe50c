//! # filament_values
//! Plain value types with the same memory layout as the filament C API declarations.
//!
//! The types only store data. Vectors, matrices, quaternions, and frustum planes
//! don't define any arithmetic, so the storage convention is left to the consuming code.
//! Every type implements [bytemuck::Pod] for viewing values as bytes.
//!
//! ```rust
//! use filament_values::{FLinearColor, FVec3Float};
//!
//! let color: FLinearColor = FVec3Float::new(1.0, 0.5, 0.25);
//! assert_eq!(0.5, color.y);
//! assert_eq!(12, bytemuck::bytes_of(&color).len());
//! ```
//!
//! ## Features
//! - `serde`: derive `Serialize` and `Deserialize` for every type.
//! - `glam`: conversions between the vector types and `glam` vectors.
include!(concat!(env!("OUT_DIR"), "/value_types.rs"));

#[cfg(feature = "glam")]
mod glam_conversions;

/// The C declarations for every type in this crate.
pub const C_HEADER: &str = include_str!(concat!(env!("OUT_DIR"), "/c_valuetypes.h"));

impl FBool {
    pub const FALSE: Self = Self(0);
    pub const TRUE: Self = Self(1);

    /// Returns `true` for any nonzero value.
    pub const fn is_true(self) -> bool {
        self.0 != 0
    }
}

impl From<bool> for FBool {
    fn from(value: bool) -> Self {
        if value {
            Self::TRUE
        } else {
            Self::FALSE
        }
    }
}

impl From<FBool> for bool {
    fn from(value: FBool) -> Self {
        value.is_true()
    }
}

macro_rules! handle_impls {
    ($name:ident) => {
        impl From<u32> for $name {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

handle_impls!(FEntity);
handle_impls!(FSamplerParams);

macro_rules! vector_impls {
    ($name:ident, $scalar:ty, $n:literal, $($field:ident),+) => {
        impl $name {
            pub const fn new($($field: $scalar),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl From<[$scalar; $n]> for $name {
            fn from([$($field),+]: [$scalar; $n]) -> Self {
                Self { $($field),+ }
            }
        }

        impl From<$name> for [$scalar; $n] {
            fn from(value: $name) -> Self {
                [$(value.$field),+]
            }
        }
    };
}

vector_impls!(FVec2Float, f32, 2, x, y);
vector_impls!(FVec2Double, f64, 2, x, y);
vector_impls!(FVec3Float, f32, 3, x, y, z);
vector_impls!(FVec3Double, f64, 3, x, y, z);
vector_impls!(FVec4Float, f32, 4, x, y, z, w);
vector_impls!(FVec4Double, f64, 4, x, y, z, w);

// Elements are stored as given without assuming a row or column order.
macro_rules! array_impls {
    ($name:ident, $scalar:ty, $n:literal) => {
        impl $name {
            pub const fn new(m: [$scalar; $n]) -> Self {
                Self { m }
            }
        }

        impl From<[$scalar; $n]> for $name {
            fn from(m: [$scalar; $n]) -> Self {
                Self { m }
            }
        }

        impl From<$name> for [$scalar; $n] {
            fn from(value: $name) -> Self {
                value.m
            }
        }
    };
}

array_impls!(FMat33Float, f32, 9);
array_impls!(FMat33Double, f64, 9);
array_impls!(FMat44Float, f32, 16);
array_impls!(FMat44Double, f64, 16);
array_impls!(FQuaternionFloat, f32, 4);

impl FFrustum {
    pub const fn new(planes: [FVec4Float; 6]) -> Self {
        Self { planes }
    }
}

impl From<[FVec4Float; 6]> for FFrustum {
    fn from(planes: [FVec4Float; 6]) -> Self {
        Self { planes }
    }
}
