use proc_macro2::{Literal, Span, TokenStream};
use quote::quote;
use syn::Ident;

use crate::{
    value_types::{Field, FieldType, Repr, ValueType},
    PrimitiveKind, WriteOptions,
};

pub fn value_type_items(value_type: &ValueType, options: WriteOptions) -> TokenStream {
    let name = rust_ident(value_type.kind);

    match value_type.repr {
        Repr::Alias(target) => {
            let target = rust_ident(target);
            quote!(pub type #name = #target;)
        }
        Repr::Typedef(scalar) => {
            let derives = derives(options, true);
            let inner = scalar.rust_type();
            let assertions = layout_assertions(value_type, options);
            quote! {
                #[repr(transparent)]
                #[derive(#(#derives),*)]
                pub struct #name(pub #inner);
                #assertions
            }
        }
        Repr::Struct(fields) => {
            let derives = derives(options, false);
            let members = fields.iter().map(struct_member);
            let assertions = layout_assertions(value_type, options);
            quote! {
                #[repr(C)]
                #[derive(#(#derives),*)]
                pub struct #name {
                    #(#members),*
                }
                #assertions
            }
        }
    }
}

pub fn rust_ident(kind: PrimitiveKind) -> Ident {
    Ident::new(&kind.rust_name(), Span::call_site())
}

fn derives(options: WriteOptions, is_handle: bool) -> Vec<TokenStream> {
    let mut derives = vec![
        quote!(Debug),
        quote!(Default),
        quote!(Copy),
        quote!(Clone),
        quote!(PartialEq),
    ];
    // Floating point fields can't implement Eq or Hash.
    if is_handle {
        derives.push(quote!(Eq));
        derives.push(quote!(Hash));
    }
    if options.derive_bytemuck {
        derives.push(quote!(bytemuck::Pod));
        derives.push(quote!(bytemuck::Zeroable));
    }
    if options.derive_serde {
        derives.push(quote!(serde::Serialize));
        derives.push(quote!(serde::Deserialize));
    }
    derives
}

fn struct_member(field: &Field) -> TokenStream {
    let name = Ident::new(field.name, Span::call_site());
    let ty = field_type(field.ty);
    quote!(pub #name: #ty)
}

fn field_type(ty: FieldType) -> TokenStream {
    match ty {
        FieldType::Scalar(scalar) => scalar.rust_type(),
        FieldType::Array(scalar, count) => {
            let scalar = scalar.rust_type();
            // Use an unsuffixed literal to generate "4" instead of "4usize".
            let count = Literal::usize_unsuffixed(count);
            quote!([#scalar; #count])
        }
        FieldType::Nested(kind, 1) => {
            let name = rust_ident(kind);
            quote!(#name)
        }
        FieldType::Nested(kind, count) => {
            let name = rust_ident(kind);
            let count = Literal::usize_unsuffixed(count);
            quote!([#name; #count])
        }
    }
}

fn layout_assertions(value_type: &ValueType, options: WriteOptions) -> TokenStream {
    if !options.layout_assertions {
        return TokenStream::new();
    }

    let name = rust_ident(value_type.kind);
    let c_name = value_type.kind.c_name();

    let size = Literal::usize_unsuffixed(value_type.layout().size);
    let size_message = format!("size of {name} does not match {c_name}");

    let offsets = value_type.field_offsets().into_iter().map(|(field, offset)| {
        let message = format!("offset of {name}.{field} does not match {c_name}");
        let field = Ident::new(field, Span::call_site());
        let offset = Literal::usize_unsuffixed(offset);
        quote! {
            const _: () = assert!(
                std::mem::offset_of!(#name, #field) == #offset,
                #message
            );
        }
    });

    quote! {
        const _: () = assert!(
            std::mem::size_of::<#name>() == #size,
            #size_message
        );
        #(#offsets)*
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::assert_tokens_eq;

    fn items(kind: PrimitiveKind, options: WriteOptions) -> TokenStream {
        value_type_items(kind.value_type().unwrap(), options)
    }

    #[test]
    fn vector_struct() {
        let actual = items(
            PrimitiveKind::Vec3Float,
            WriteOptions {
                layout_assertions: false,
                ..Default::default()
            },
        );

        assert_tokens_eq!(
            quote! {
                #[repr(C)]
                #[derive(Debug, Default, Copy, Clone, PartialEq)]
                pub struct FVec3Float {
                    pub x: f32,
                    pub y: f32,
                    pub z: f32,
                }
            },
            actual
        );
    }

    #[test]
    fn vector_struct_layout_assertions() {
        let actual = items(PrimitiveKind::Vec2Double, WriteOptions::default());

        assert_tokens_eq!(
            quote! {
                #[repr(C)]
                #[derive(Debug, Default, Copy, Clone, PartialEq)]
                pub struct FVec2Double {
                    pub x: f64,
                    pub y: f64,
                }
                const _: () = assert!(
                    std::mem::size_of::<FVec2Double>() == 16,
                    "size of FVec2Double does not match FVEC2_DOUBLE"
                );
                const _: () = assert!(
                    std::mem::offset_of!(FVec2Double, x) == 0,
                    "offset of FVec2Double.x does not match FVEC2_DOUBLE"
                );
                const _: () = assert!(
                    std::mem::offset_of!(FVec2Double, y) == 8,
                    "offset of FVec2Double.y does not match FVEC2_DOUBLE"
                );
            },
            actual
        );
    }

    #[test]
    fn matrix_struct_bytemuck() {
        let actual = items(
            PrimitiveKind::Mat44Double,
            WriteOptions {
                derive_bytemuck: true,
                ..Default::default()
            },
        );

        assert_tokens_eq!(
            quote! {
                #[repr(C)]
                #[derive(
                    Debug,
                    Default,
                    Copy,
                    Clone,
                    PartialEq,
                    bytemuck::Pod,
                    bytemuck::Zeroable
                )]
                pub struct FMat44Double {
                    pub m: [f64; 16],
                }
                const _: () = assert!(
                    std::mem::size_of::<FMat44Double>() == 128,
                    "size of FMat44Double does not match FMAT44_DOUBLE"
                );
                const _: () = assert!(
                    std::mem::offset_of!(FMat44Double, m) == 0,
                    "offset of FMat44Double.m does not match FMAT44_DOUBLE"
                );
            },
            actual
        );
    }

    #[test]
    fn frustum_nested_planes() {
        let actual = items(
            PrimitiveKind::Frustum,
            WriteOptions {
                layout_assertions: false,
                ..Default::default()
            },
        );

        assert_tokens_eq!(
            quote! {
                #[repr(C)]
                #[derive(Debug, Default, Copy, Clone, PartialEq)]
                pub struct FFrustum {
                    pub planes: [FVec4Float; 6],
                }
            },
            actual
        );
    }

    #[test]
    fn typedef_serde() {
        let actual = items(
            PrimitiveKind::Entity,
            WriteOptions {
                derive_serde: true,
                ..Default::default()
            },
        );

        assert_tokens_eq!(
            quote! {
                #[repr(transparent)]
                #[derive(
                    Debug,
                    Default,
                    Copy,
                    Clone,
                    PartialEq,
                    Eq,
                    Hash,
                    serde::Serialize,
                    serde::Deserialize
                )]
                pub struct FEntity(pub u32);
                const _: () = assert!(
                    std::mem::size_of::<FEntity>() == 4,
                    "size of FEntity does not match FENTITY"
                );
            },
            actual
        );
    }

    #[test]
    fn alias() {
        let actual = items(PrimitiveKind::LinearColorA, WriteOptions::default());

        assert_tokens_eq!(quote!(pub type FLinearColorA = FVec4Float;), actual);
    }
}
