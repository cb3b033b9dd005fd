//! Implementation of the `#[lift]` attribute macro.
//!
//! # Generated Code Structure
//!
//! For
//!
//! ```text
//! #[lift]
//! fn describe<T: Debug>(value: T, width: usize) -> String { ... }
//! ```
//!
//! the macro generates:
//!
//! ```text
//! fn describe<T: Debug>(value: T, width: usize) -> String { ... }
//!
//! #[doc = "Callable form of [`describe`]."]
//! #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
//! struct Describe;
//!
//! impl<T: Debug> ::fnfit::Callable<(T, usize,)> for Describe {
//!     type Output = String;
//!
//!     #[inline]
//!     fn call(&self, (__fnfit_argument_0, __fnfit_argument_1,): (T, usize,)) -> String {
//!         describe::<T>(__fnfit_argument_0, __fnfit_argument_1)
//!     }
//! }
//! ```
//!
//! Parameter patterns are replaced by generated names, so destructuring
//! parameters (`(x, y): (i32, i32)`) are supported. Lifetime parameters are
//! kept in the impl but left out of the turbofish, because late-bound
//! lifetimes cannot be named there.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::spanned::Spanned;
use syn::{
    FnArg, GenericArgument, GenericParam, Ident, ItemFn, PathArguments, ReturnType, Signature,
    Type,
};

struct LiftInput {
    function: ItemFn,
    struct_name: Ident,
}

pub fn lift_impl(attribute: TokenStream2, item: TokenStream2) -> TokenStream2 {
    match parse_lift_input(attribute, item) {
        Ok(input) => generate_callable(&input),
        Err(error) => error.to_compile_error(),
    }
}

fn parse_lift_input(attribute: TokenStream2, item: TokenStream2) -> syn::Result<LiftInput> {
    let function: ItemFn = syn::parse2(item)?;
    validate_signature(&function.sig)?;

    let struct_name = if attribute.is_empty() {
        let name = to_pascal_case(&function.sig.ident.to_string());
        if name.is_empty() {
            return Err(syn::Error::new(
                function.sig.ident.span(),
                "#[lift] cannot derive a struct name from this function name; use #[lift(Name)]",
            ));
        }
        format_ident!("{}", name, span = function.sig.ident.span())
    } else {
        syn::parse2::<Ident>(attribute)?
    };

    if struct_name == function.sig.ident {
        return Err(syn::Error::new(
            struct_name.span(),
            "#[lift] struct name must differ from the function name",
        ));
    }

    Ok(LiftInput {
        function,
        struct_name,
    })
}

fn validate_signature(signature: &Signature) -> syn::Result<()> {
    if let Some(asyncness) = &signature.asyncness {
        return Err(syn::Error::new(
            asyncness.span(),
            "#[lift] does not support async functions",
        ));
    }
    if let Some(unsafety) = &signature.unsafety {
        return Err(syn::Error::new(
            unsafety.span(),
            "#[lift] does not support unsafe functions",
        ));
    }
    if let Some(variadic) = &signature.variadic {
        return Err(syn::Error::new(
            variadic.span(),
            "#[lift] does not support variadic functions",
        ));
    }

    for input in &signature.inputs {
        match input {
            FnArg::Receiver(receiver) => {
                return Err(syn::Error::new(
                    receiver.span(),
                    "#[lift] can only be applied to free functions, not methods",
                ));
            }
            FnArg::Typed(typed) => {
                if contains_impl_trait(&typed.ty) {
                    return Err(syn::Error::new(
                        typed.ty.span(),
                        "#[lift] does not support `impl Trait` parameters; use a named type parameter",
                    ));
                }
            }
        }
    }

    if let ReturnType::Type(_, output) = &signature.output {
        if contains_impl_trait(output) {
            return Err(syn::Error::new(
                output.span(),
                "#[lift] does not support `impl Trait` return types",
            ));
        }
        if contains_elided_reference(output) {
            return Err(syn::Error::new(
                output.span(),
                "#[lift] requires explicit lifetimes on references in the return type",
            ));
        }
    }

    Ok(())
}

fn generate_callable(input: &LiftInput) -> TokenStream2 {
    let function = &input.function;
    let struct_name = &input.struct_name;
    let function_name = &function.sig.ident;
    let visibility = &function.vis;

    let parameter_types: Vec<&Type> = function
        .sig
        .inputs
        .iter()
        .filter_map(|input| match input {
            FnArg::Typed(typed) => Some(typed.ty.as_ref()),
            FnArg::Receiver(_) => None,
        })
        .collect();

    let arguments: Vec<Ident> = (0..parameter_types.len())
        .map(|index| format_ident!("__fnfit_argument_{}", index))
        .collect();

    let output = match &function.sig.output {
        ReturnType::Default => quote! { () },
        ReturnType::Type(_, output) => quote! { #output },
    };

    let (impl_generics, _, where_clause) = function.sig.generics.split_for_impl();

    let turbofish_arguments: Vec<TokenStream2> = function
        .sig
        .generics
        .params
        .iter()
        .filter_map(|parameter| match parameter {
            GenericParam::Type(type_parameter) => {
                let ident = &type_parameter.ident;
                Some(quote! { #ident })
            }
            GenericParam::Const(const_parameter) => {
                let ident = &const_parameter.ident;
                Some(quote! { #ident })
            }
            GenericParam::Lifetime(_) => None,
        })
        .collect();

    let turbofish = if turbofish_arguments.is_empty() {
        quote! {}
    } else {
        quote! { ::<#(#turbofish_arguments),*> }
    };

    let documentation = format!("Callable form of [`{function_name}`].");

    quote! {
        #function

        #[doc = #documentation]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #visibility struct #struct_name;

        impl #impl_generics ::fnfit::Callable<(#(#parameter_types,)*)> for #struct_name #where_clause {
            type Output = #output;

            #[inline]
            fn call(&self, (#(#arguments,)*): (#(#parameter_types,)*)) -> Self::Output {
                #function_name #turbofish(#(#arguments),*)
            }
        }
    }
}

fn contains_impl_trait(ty: &Type) -> bool {
    match ty {
        Type::ImplTrait(_) => true,
        Type::Array(array) => contains_impl_trait(&array.elem),
        Type::Group(group) => contains_impl_trait(&group.elem),
        Type::Paren(paren) => contains_impl_trait(&paren.elem),
        Type::Ptr(pointer) => contains_impl_trait(&pointer.elem),
        Type::Reference(reference) => contains_impl_trait(&reference.elem),
        Type::Slice(slice) => contains_impl_trait(&slice.elem),
        Type::Tuple(tuple) => tuple.elems.iter().any(contains_impl_trait),
        Type::Path(path) => path.path.segments.iter().any(|segment| {
            matches!(
                &segment.arguments,
                PathArguments::AngleBracketed(arguments)
                    if arguments.args.iter().any(|argument| matches!(
                        argument,
                        GenericArgument::Type(inner) if contains_impl_trait(inner)
                    ))
            )
        }),
        _ => false,
    }
}

fn contains_elided_reference(ty: &Type) -> bool {
    match ty {
        Type::Reference(reference) => {
            reference.lifetime.is_none() || contains_elided_reference(&reference.elem)
        }
        Type::Array(array) => contains_elided_reference(&array.elem),
        Type::Group(group) => contains_elided_reference(&group.elem),
        Type::Paren(paren) => contains_elided_reference(&paren.elem),
        Type::Slice(slice) => contains_elided_reference(&slice.elem),
        Type::Tuple(tuple) => tuple.elems.iter().any(contains_elided_reference),
        Type::Path(path) => path.path.segments.iter().any(|segment| {
            matches!(
                &segment.arguments,
                PathArguments::AngleBracketed(arguments)
                    if arguments.args.iter().any(|argument| matches!(
                        argument,
                        GenericArgument::Type(inner) if contains_elided_reference(inner)
                    ))
            )
        }),
        _ => false,
    }
}

/// Converts a `snake_case` function name to a `PascalCase` type name.
fn to_pascal_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut capitalize_next = true;

    for character in input.chars() {
        if character == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(character.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(character);
        }
    }

    result
}
