use std::{fmt, str::FromStr};

use case::CaseExt;

use crate::{
    error::ParseKindError,
    value_types::{self, Layout, ValueType},
};

/// A type the binding layer maps directly instead of wrapping it behind an opaque handle.
///
/// Scalars are passed through unchanged.
/// The remaining kinds only describe a memory layout shared by the C API surface
/// and the native library, so values can be reinterpreted across the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    Bool,
    Uint8,
    Int8,
    Uint16,
    Int16,
    Uint32,
    Int32,
    Uint64,
    Int64,
    SizeT,
    Float,
    Double,

    /// An opaque handle into an external entity registry.
    Entity,
    /// An opaque bit-packed sampler description.
    SamplerParams,

    LinearColor,
    LinearColorA,
    Mat33Double,
    Mat33Float,
    Mat44Double,
    Mat44Float,
    Vec2Double,
    Vec2Float,
    Vec3Double,
    Vec3Float,
    Vec4Double,
    Vec4Float,
    QuaternionFloat,
    Frustum,
}

impl PrimitiveKind {
    /// Every known kind.
    pub const ALL: [PrimitiveKind; 28] = [
        PrimitiveKind::Bool,
        PrimitiveKind::Uint8,
        PrimitiveKind::Int8,
        PrimitiveKind::Uint16,
        PrimitiveKind::Int16,
        PrimitiveKind::Uint32,
        PrimitiveKind::Int32,
        PrimitiveKind::Uint64,
        PrimitiveKind::Int64,
        PrimitiveKind::SizeT,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::Entity,
        PrimitiveKind::SamplerParams,
        PrimitiveKind::LinearColor,
        PrimitiveKind::LinearColorA,
        PrimitiveKind::Mat33Double,
        PrimitiveKind::Mat33Float,
        PrimitiveKind::Mat44Double,
        PrimitiveKind::Mat44Float,
        PrimitiveKind::Vec2Double,
        PrimitiveKind::Vec2Float,
        PrimitiveKind::Vec3Double,
        PrimitiveKind::Vec3Float,
        PrimitiveKind::Vec4Double,
        PrimitiveKind::Vec4Float,
        PrimitiveKind::QuaternionFloat,
        PrimitiveKind::Frustum,
    ];

    /// The kinds with a value type declaration in the order they must be declared.
    /// Aliases and nested fields only refer to kinds earlier in the list.
    pub const VALUE_TYPES: [PrimitiveKind; 17] = [
        PrimitiveKind::Bool,
        PrimitiveKind::Entity,
        PrimitiveKind::SamplerParams,
        PrimitiveKind::Vec2Float,
        PrimitiveKind::Vec2Double,
        PrimitiveKind::Vec3Float,
        PrimitiveKind::Vec3Double,
        PrimitiveKind::Vec4Float,
        PrimitiveKind::Vec4Double,
        PrimitiveKind::Mat33Float,
        PrimitiveKind::Mat33Double,
        PrimitiveKind::Mat44Float,
        PrimitiveKind::Mat44Double,
        PrimitiveKind::QuaternionFloat,
        PrimitiveKind::Frustum,
        PrimitiveKind::LinearColor,
        PrimitiveKind::LinearColorA,
    ];

    /// The spelling used on the C API surface.
    pub fn c_name(self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "FBOOL",
            PrimitiveKind::Uint8 => "uint8_t",
            PrimitiveKind::Int8 => "int8_t",
            PrimitiveKind::Uint16 => "uint16_t",
            PrimitiveKind::Int16 => "int16_t",
            PrimitiveKind::Uint32 => "uint32_t",
            PrimitiveKind::Int32 => "int32_t",
            PrimitiveKind::Uint64 => "uint64_t",
            PrimitiveKind::Int64 => "int64_t",
            PrimitiveKind::SizeT => "size_t",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Entity => "FENTITY",
            PrimitiveKind::SamplerParams => "FSAMPLER_PARAMS",
            PrimitiveKind::LinearColor => "FLINEAR_COLOR",
            PrimitiveKind::LinearColorA => "FLINEAR_COLOR_A",
            PrimitiveKind::Mat33Double => "FMAT33_DOUBLE",
            PrimitiveKind::Mat33Float => "FMAT33_FLOAT",
            PrimitiveKind::Mat44Double => "FMAT44_DOUBLE",
            PrimitiveKind::Mat44Float => "FMAT44_FLOAT",
            PrimitiveKind::Vec2Double => "FVEC2_DOUBLE",
            PrimitiveKind::Vec2Float => "FVEC2_FLOAT",
            PrimitiveKind::Vec3Double => "FVEC3_DOUBLE",
            PrimitiveKind::Vec3Float => "FVEC3_FLOAT",
            PrimitiveKind::Vec4Double => "FVEC4_DOUBLE",
            PrimitiveKind::Vec4Float => "FVEC4_FLOAT",
            PrimitiveKind::QuaternionFloat => "FQUATERNION_FLOAT",
            PrimitiveKind::Frustum => "FFRUSTUM",
        }
    }

    /// The spelling used by the native C++ library.
    pub fn native_name(self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Uint8 => "uint8_t",
            PrimitiveKind::Int8 => "int8_t",
            PrimitiveKind::Uint16 => "uint16_t",
            PrimitiveKind::Int16 => "int16_t",
            PrimitiveKind::Uint32 => "uint32_t",
            PrimitiveKind::Int32 => "int32_t",
            PrimitiveKind::Uint64 => "uint64_t",
            PrimitiveKind::Int64 => "int64_t",
            PrimitiveKind::SizeT => "size_t",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Entity => "utils::Entity",
            PrimitiveKind::SamplerParams => "filament::driver::SamplerParams",
            PrimitiveKind::LinearColor => "filament::LinearColor",
            PrimitiveKind::LinearColorA => "filament::LinearColorA",
            PrimitiveKind::Mat33Double => "math::mat3",
            PrimitiveKind::Mat33Float => "math::mat3f",
            PrimitiveKind::Mat44Double => "math::mat4",
            PrimitiveKind::Mat44Float => "math::mat4f",
            PrimitiveKind::Vec2Double => "math::double2",
            PrimitiveKind::Vec2Float => "math::float2",
            PrimitiveKind::Vec3Double => "math::double3",
            PrimitiveKind::Vec3Float => "math::float3",
            PrimitiveKind::Vec4Double => "math::double4",
            PrimitiveKind::Vec4Float => "math::float4",
            PrimitiveKind::QuaternionFloat => "math::quatf",
            PrimitiveKind::Frustum => "filament::Frustum",
        }
    }

    /// The Rust type name like `FVec3Float` for value types or `u16` for scalars.
    pub fn rust_name(self) -> String {
        match self {
            PrimitiveKind::Uint8 => "u8".to_string(),
            PrimitiveKind::Int8 => "i8".to_string(),
            PrimitiveKind::Uint16 => "u16".to_string(),
            PrimitiveKind::Int16 => "i16".to_string(),
            PrimitiveKind::Uint32 => "u32".to_string(),
            PrimitiveKind::Int32 => "i32".to_string(),
            PrimitiveKind::Uint64 => "u64".to_string(),
            PrimitiveKind::Int64 => "i64".to_string(),
            PrimitiveKind::SizeT => "usize".to_string(),
            PrimitiveKind::Float => "f32".to_string(),
            PrimitiveKind::Double => "f64".to_string(),
            other => {
                // FVEC3_FLOAT -> FVec3Float
                let name = other.c_name();
                let words = name.strip_prefix('F').unwrap_or(name).to_lowercase();
                format!("F{}", words.to_camel())
            }
        }
    }

    /// Returns `true` if the C and native representations share the same memory layout,
    /// so values cross the API boundary by reinterpretation rather than conversion.
    pub fn is_layout_compatible(self) -> bool {
        !self.is_scalar()
    }

    /// Returns `true` if the C API returns this kind by value.
    /// Other kinds are written through an out pointer instead.
    pub fn can_be_returned(self) -> bool {
        self.is_scalar()
    }

    /// Returns `true` for builtin integer, floating point, and boolean kinds.
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            PrimitiveKind::Bool
                | PrimitiveKind::Uint8
                | PrimitiveKind::Int8
                | PrimitiveKind::Uint16
                | PrimitiveKind::Int16
                | PrimitiveKind::Uint32
                | PrimitiveKind::Int32
                | PrimitiveKind::Uint64
                | PrimitiveKind::Int64
                | PrimitiveKind::SizeT
                | PrimitiveKind::Float
                | PrimitiveKind::Double
        )
    }

    /// The declaration for this kind or `None` for scalars without a dedicated typedef.
    pub fn value_type(self) -> Option<&'static ValueType> {
        value_types::declaration(self)
    }

    /// The size and alignment of this kind on the C API surface.
    pub fn layout(self) -> Layout {
        if let Some(value_type) = self.value_type() {
            return value_type.layout();
        }

        let size = match self {
            PrimitiveKind::Uint8 | PrimitiveKind::Int8 => 1,
            PrimitiveKind::Uint16 | PrimitiveKind::Int16 => 2,
            PrimitiveKind::Uint32 | PrimitiveKind::Int32 | PrimitiveKind::Float => 4,
            PrimitiveKind::Uint64 | PrimitiveKind::Int64 | PrimitiveKind::Double => 8,
            PrimitiveKind::SizeT => std::mem::size_of::<usize>(),
            _ => unreachable!("{self:?} has a value type declaration"),
        };
        Layout::scalar(size)
    }

    /// Finds the kind with the given C API spelling.
    pub fn from_c_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.c_name() == name)
    }

    /// Finds the kind with the given native C++ spelling.
    pub fn from_native_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.native_name() == name)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.c_name())
    }
}

impl FromStr for PrimitiveKind {
    type Err = ParseKindError;

    /// Parses either the C or the native spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::from_c_name(name)
            .or_else(|| Self::from_native_name(name))
            .ok_or_else(|| ParseKindError {
                name: name.to_string(),
            })
    }
}
