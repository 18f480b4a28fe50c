use proc_macro2::TokenStream;
use quote::quote;

use crate::PrimitiveKind;

/// The size and alignment of a type in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub size: usize,
    pub align: usize,
}

impl Layout {
    pub(crate) const fn scalar(size: usize) -> Self {
        Self { size, align: size }
    }

    fn array(self, count: usize) -> Self {
        Self {
            size: self.size * count,
            align: self.align,
        }
    }
}

/// A builtin field type used in value type declarations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    Int32,
    Uint32,
    Float,
    Double,
}

impl Scalar {
    pub fn c_name(self) -> &'static str {
        match self {
            Scalar::Int32 => "int",
            Scalar::Uint32 => "uint32_t",
            Scalar::Float => "float",
            Scalar::Double => "double",
        }
    }

    pub fn rust_type(self) -> TokenStream {
        match self {
            Scalar::Int32 => quote!(i32),
            Scalar::Uint32 => quote!(u32),
            Scalar::Float => quote!(f32),
            Scalar::Double => quote!(f64),
        }
    }

    pub fn layout(self) -> Layout {
        match self {
            Scalar::Int32 | Scalar::Uint32 | Scalar::Float => Layout::scalar(4),
            Scalar::Double => Layout::scalar(8),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Scalar(Scalar),
    /// A fixed size array like `double m[16]`.
    Array(Scalar, usize),
    /// One or more values of another value type like `FVEC4_FLOAT planes[6]`.
    Nested(PrimitiveKind, usize),
}

impl FieldType {
    pub fn layout(self) -> Layout {
        match self {
            FieldType::Scalar(scalar) => scalar.layout(),
            FieldType::Array(scalar, count) => scalar.layout().array(count),
            FieldType::Nested(kind, count) => kind.layout().array(count),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldType,
}

/// How a value type is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repr {
    /// A typedef of a single integer like `typedef uint32_t FENTITY;`.
    Typedef(Scalar),
    /// A plain struct with fields in declaration order.
    Struct(&'static [Field]),
    /// Another name for an existing value type.
    Alias(PrimitiveKind),
}

/// A type whose memory layout is exposed without exposing any methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueType {
    pub kind: PrimitiveKind,
    pub repr: Repr,
}

impl ValueType {
    /// The size and alignment following C struct layout rules.
    pub fn layout(&self) -> Layout {
        match self.repr {
            Repr::Typedef(scalar) => scalar.layout(),
            Repr::Alias(kind) => kind.layout(),
            Repr::Struct(fields) => {
                let mut size: usize = 0;
                let mut align = 1;
                for field in fields {
                    let layout = field.ty.layout();
                    size = size.next_multiple_of(layout.align) + layout.size;
                    align = align.max(layout.align);
                }
                Layout {
                    size: size.next_multiple_of(align),
                    align,
                }
            }
        }
    }

    /// The byte offset of each struct field in declaration order.
    /// Typedefs and aliases have no fields.
    pub fn field_offsets(&self) -> Vec<(&'static str, usize)> {
        match self.repr {
            Repr::Struct(fields) => {
                let mut offset: usize = 0;
                fields
                    .iter()
                    .map(|field| {
                        let layout = field.ty.layout();
                        offset = offset.next_multiple_of(layout.align);
                        let field_offset = offset;
                        offset += layout.size;
                        (field.name, field_offset)
                    })
                    .collect()
            }
            Repr::Typedef(_) | Repr::Alias(_) => Vec::new(),
        }
    }

    /// Other value types that must be declared before this one.
    pub fn dependencies(&self) -> Vec<PrimitiveKind> {
        match self.repr {
            Repr::Typedef(_) => Vec::new(),
            Repr::Alias(kind) => vec![kind],
            Repr::Struct(fields) => fields
                .iter()
                .filter_map(|f| match f.ty {
                    FieldType::Nested(kind, _) => Some(kind),
                    _ => None,
                })
                .collect(),
        }
    }
}

const fn field(name: &'static str, ty: FieldType) -> Field {
    Field { name, ty }
}

const fn vector<const N: usize>(names: [&'static str; N], scalar: Scalar) -> [Field; N] {
    let mut fields = [field("", FieldType::Scalar(scalar)); N];
    let mut i = 0;
    while i < N {
        fields[i].name = names[i];
        i += 1;
    }
    fields
}

const fn value_type(kind: PrimitiveKind, repr: Repr) -> ValueType {
    ValueType { kind, repr }
}

static VEC2_FLOAT_FIELDS: [Field; 2] = vector(["x", "y"], Scalar::Float);
static VEC2_DOUBLE_FIELDS: [Field; 2] = vector(["x", "y"], Scalar::Double);
static VEC3_FLOAT_FIELDS: [Field; 3] = vector(["x", "y", "z"], Scalar::Float);
static VEC3_DOUBLE_FIELDS: [Field; 3] = vector(["x", "y", "z"], Scalar::Double);
static VEC4_FLOAT_FIELDS: [Field; 4] = vector(["x", "y", "z", "w"], Scalar::Float);
static VEC4_DOUBLE_FIELDS: [Field; 4] = vector(["x", "y", "z", "w"], Scalar::Double);
static MAT33_FLOAT_FIELDS: [Field; 1] = [field("m", FieldType::Array(Scalar::Float, 9))];
static MAT33_DOUBLE_FIELDS: [Field; 1] = [field("m", FieldType::Array(Scalar::Double, 9))];
static MAT44_FLOAT_FIELDS: [Field; 1] = [field("m", FieldType::Array(Scalar::Float, 16))];
static MAT44_DOUBLE_FIELDS: [Field; 1] = [field("m", FieldType::Array(Scalar::Double, 16))];
static QUATERNION_FLOAT_FIELDS: [Field; 1] = [field("m", FieldType::Array(Scalar::Float, 4))];
static FRUSTUM_FIELDS: [Field; 1] = [field(
    "planes",
    FieldType::Nested(PrimitiveKind::Vec4Float, 6),
)];

static BOOL: ValueType = value_type(PrimitiveKind::Bool, Repr::Typedef(Scalar::Int32));
static ENTITY: ValueType = value_type(PrimitiveKind::Entity, Repr::Typedef(Scalar::Uint32));
static SAMPLER_PARAMS: ValueType = value_type(
    PrimitiveKind::SamplerParams,
    Repr::Typedef(Scalar::Uint32),
);
static VEC2_FLOAT: ValueType = value_type(
    PrimitiveKind::Vec2Float,
    Repr::Struct(&VEC2_FLOAT_FIELDS),
);
static VEC2_DOUBLE: ValueType = value_type(
    PrimitiveKind::Vec2Double,
    Repr::Struct(&VEC2_DOUBLE_FIELDS),
);
static VEC3_FLOAT: ValueType = value_type(
    PrimitiveKind::Vec3Float,
    Repr::Struct(&VEC3_FLOAT_FIELDS),
);
static VEC3_DOUBLE: ValueType = value_type(
    PrimitiveKind::Vec3Double,
    Repr::Struct(&VEC3_DOUBLE_FIELDS),
);
static VEC4_FLOAT: ValueType = value_type(
    PrimitiveKind::Vec4Float,
    Repr::Struct(&VEC4_FLOAT_FIELDS),
);
static VEC4_DOUBLE: ValueType = value_type(
    PrimitiveKind::Vec4Double,
    Repr::Struct(&VEC4_DOUBLE_FIELDS),
);
static MAT33_FLOAT: ValueType = value_type(
    PrimitiveKind::Mat33Float,
    Repr::Struct(&MAT33_FLOAT_FIELDS),
);
static MAT33_DOUBLE: ValueType = value_type(
    PrimitiveKind::Mat33Double,
    Repr::Struct(&MAT33_DOUBLE_FIELDS),
);
static MAT44_FLOAT: ValueType = value_type(
    PrimitiveKind::Mat44Float,
    Repr::Struct(&MAT44_FLOAT_FIELDS),
);
static MAT44_DOUBLE: ValueType = value_type(
    PrimitiveKind::Mat44Double,
    Repr::Struct(&MAT44_DOUBLE_FIELDS),
);
static QUATERNION_FLOAT: ValueType = value_type(
    PrimitiveKind::QuaternionFloat,
    Repr::Struct(&QUATERNION_FLOAT_FIELDS),
);
static FRUSTUM: ValueType = value_type(PrimitiveKind::Frustum, Repr::Struct(&FRUSTUM_FIELDS));
static LINEAR_COLOR: ValueType = value_type(
    PrimitiveKind::LinearColor,
    Repr::Alias(PrimitiveKind::Vec3Float),
);
static LINEAR_COLOR_A: ValueType = value_type(
    PrimitiveKind::LinearColorA,
    Repr::Alias(PrimitiveKind::Vec4Float),
);

pub(crate) fn declaration(kind: PrimitiveKind) -> Option<&'static ValueType> {
    match kind {
        PrimitiveKind::Bool => Some(&BOOL),
        PrimitiveKind::Entity => Some(&ENTITY),
        PrimitiveKind::SamplerParams => Some(&SAMPLER_PARAMS),
        PrimitiveKind::Vec2Float => Some(&VEC2_FLOAT),
        PrimitiveKind::Vec2Double => Some(&VEC2_DOUBLE),
        PrimitiveKind::Vec3Float => Some(&VEC3_FLOAT),
        PrimitiveKind::Vec3Double => Some(&VEC3_DOUBLE),
        PrimitiveKind::Vec4Float => Some(&VEC4_FLOAT),
        PrimitiveKind::Vec4Double => Some(&VEC4_DOUBLE),
        PrimitiveKind::Mat33Float => Some(&MAT33_FLOAT),
        PrimitiveKind::Mat33Double => Some(&MAT33_DOUBLE),
        PrimitiveKind::Mat44Float => Some(&MAT44_FLOAT),
        PrimitiveKind::Mat44Double => Some(&MAT44_DOUBLE),
        PrimitiveKind::QuaternionFloat => Some(&QUATERNION_FLOAT),
        PrimitiveKind::Frustum => Some(&FRUSTUM),
        PrimitiveKind::LinearColor => Some(&LINEAR_COLOR),
        PrimitiveKind::LinearColorA => Some(&LINEAR_COLOR_A),
        PrimitiveKind::Uint8
        | PrimitiveKind::Int8
        | PrimitiveKind::Uint16
        | PrimitiveKind::Int16
        | PrimitiveKind::Uint32
        | PrimitiveKind::Int32
        | PrimitiveKind::Uint64
        | PrimitiveKind::Int64
        | PrimitiveKind::SizeT
        | PrimitiveKind::Float
        | PrimitiveKind::Double => None,
    }
}
