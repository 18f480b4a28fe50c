use crate::{FVec2Double, FVec2Float, FVec3Double, FVec3Float, FVec4Double, FVec4Float};

macro_rules! glam_vector_impls {
    ($name:ident, $glam:ty, $($field:ident),+) => {
        impl From<$name> for $glam {
            fn from(value: $name) -> Self {
                <$glam>::new($(value.$field),+)
            }
        }

        impl From<$glam> for $name {
            fn from(value: $glam) -> Self {
                Self::new($(value.$field),+)
            }
        }
    };
}

glam_vector_impls!(FVec2Float, glam::Vec2, x, y);
glam_vector_impls!(FVec2Double, glam::DVec2, x, y);
glam_vector_impls!(FVec3Float, glam::Vec3, x, y, z);
glam_vector_impls!(FVec3Double, glam::DVec3, x, y, z);
glam_vector_impls!(FVec4Float, glam::Vec4, x, y, z, w);
glam_vector_impls!(FVec4Double, glam::DVec4, x, y, z, w);
