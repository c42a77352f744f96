//! Implementation of the `#[derive(Carrier)]` macro.
//!
//! Generates `Carrier`, `Rebind` (when the element parameter is unbounded),
//! `CloneInner`, the `Instances` table and the `|` operator impls.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Data, DeriveInput, GenericParam, Generics, Ident, Type, TypeParam, WherePredicate,
    parse_macro_input, parse_quote,
};

use crate::options::CarrierOptions;

/// Main implementation of the Carrier derive macro.
pub fn derive_carrier_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input).unwrap_or_else(syn::Error::into_compile_error))
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    if let Data::Union(_) = input.data {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Carrier cannot be derived for unions.",
        ));
    }
    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "Carrier cannot be derived for types with lifetime parameters.",
        ));
    }

    let options = CarrierOptions::from_attributes(&input.attrs)?;
    let element = element_parameter(input, &options)?;

    let carrier = generate_carrier(input, &element.ident);
    let rebind = if is_unbounded(&input.generics, element) {
        generate_rebind(input, &element.ident)
    } else {
        TokenStream2::new()
    };
    let clone_inner = generate_clone_inner(input, &element.ident);
    let instances = generate_instances(input, &options);
    let pipeable = generate_pipeable(input);

    Ok(quote! {
        #carrier
        #rebind
        #clone_inner
        #instances
        #pipeable
    })
}

/// The element parameter: `#[carrier(element = X)]`, else the first type parameter.
fn element_parameter<'a>(
    input: &'a DeriveInput,
    options: &CarrierOptions,
) -> syn::Result<&'a TypeParam> {
    let mut type_parameters = input.generics.type_params();

    match &options.element {
        Some(requested) => input
            .generics
            .type_params()
            .find(|parameter| parameter.ident == *requested)
            .ok_or_else(|| {
                syn::Error::new_spanned(
                    requested,
                    format!("`{requested}` is not a type parameter of `{}`", input.ident),
                )
            }),
        None => type_parameters.next().ok_or_else(|| {
            syn::Error::new_spanned(
                &input.ident,
                "Carrier can only be derived for types with a type parameter for the element.",
            )
        }),
    }
}

/// `Rebind` would require every bound on the element to hold for any new element type.
fn is_unbounded(generics: &Generics, element: &TypeParam) -> bool {
    if !element.bounds.is_empty() {
        return false;
    }
    generics.where_clause.as_ref().is_none_or(|clause| {
        !clause.predicates.iter().any(|predicate| match predicate {
            WherePredicate::Type(bounded) => {
                matches!(&bounded.bounded_ty, Type::Path(path) if path.path.is_ident(&element.ident))
            }
            _ => false,
        })
    })
}

fn generate_carrier(input: &DeriveInput, element: &Ident) -> TokenStream2 {
    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::retrofit::typeclass::Carrier for #name #type_generics #where_clause {
            type Inner = #element;
            type Ref<'__r>
                = &'__r #element
            where
                Self: '__r;
        }
    }
}

fn generate_rebind(input: &DeriveInput, element: &Ident) -> TokenStream2 {
    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    let rebound_arguments = input.generics.params.iter().map(|parameter| match parameter {
        GenericParam::Type(parameter) if parameter.ident == *element => quote!(__B),
        GenericParam::Type(parameter) => {
            let ident = &parameter.ident;
            quote!(#ident)
        }
        GenericParam::Const(parameter) => {
            let ident = &parameter.ident;
            quote!(#ident)
        }
        GenericParam::Lifetime(parameter) => {
            let lifetime = &parameter.lifetime;
            quote!(#lifetime)
        }
    });

    quote! {
        impl #impl_generics ::retrofit::typeclass::Rebind for #name #type_generics #where_clause {
            type With<__B> = #name<#(#rebound_arguments),*>;
        }
    }
}

fn generate_clone_inner(input: &DeriveInput, element: &Ident) -> TokenStream2 {
    let name = &input.ident;
    let mut generics = input.generics.clone();
    generics
        .make_where_clause()
        .predicates
        .push(parse_quote!(#element: ::core::clone::Clone));
    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let (_, type_generics, _) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::retrofit::typeclass::CloneInner for #name #type_generics #where_clause {
            #[inline]
            fn clone_inner<'__r>(element: &'__r #element) -> #element
            where
                Self: '__r,
            {
                ::core::clone::Clone::clone(element)
            }
        }
    }
}

fn generate_instances(input: &DeriveInput, options: &CarrierOptions) -> TokenStream2 {
    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();
    let monoid = options.monoid.marker();
    let foldable = options.foldable.marker();
    let functor = options.functor.marker();
    let filterable = options.filterable.marker();
    let monad = options.monad.marker();

    quote! {
        impl #impl_generics ::retrofit::typeclass::Instances for #name #type_generics #where_clause {
            type MonoidVia = #monoid;
            type FoldableVia = #foldable;
            type FunctorVia = #functor;
            type FilterableVia = #filterable;
            type MonadVia = #monad;
        }
    }
}

fn generate_pipeable(input: &DeriveInput) -> TokenStream2 {
    let name = &input.ident;
    let (_, type_generics, _) = input.generics.split_for_impl();

    // Defaults are not allowed on impl parameters.
    let parameters = input.generics.params.iter().map(|parameter| match parameter {
        GenericParam::Type(parameter) => {
            let ident = &parameter.ident;
            let bounds = &parameter.bounds;
            if bounds.is_empty() {
                quote!(#ident)
            } else {
                quote!(#ident: #bounds)
            }
        }
        GenericParam::Const(parameter) => {
            let ident = &parameter.ident;
            let ty = &parameter.ty;
            quote!(const #ident: #ty)
        }
        GenericParam::Lifetime(parameter) => {
            let lifetime = &parameter.lifetime;
            quote!(#lifetime)
        }
    });
    let predicates = input
        .generics
        .where_clause
        .as_ref()
        .map(|clause| clause.predicates.iter().collect::<Vec<_>>())
        .unwrap_or_default();

    quote! {
        ::retrofit::pipeable!(impl[#(#parameters),*] #name #type_generics where [#(#predicates,)*]);
    }
}

#[cfg(test)]
mod tests {
    use super::{expand, is_unbounded};
    use syn::{DeriveInput, parse_quote};

    fn rendered(input: &DeriveInput) -> String {
        expand(input).map(|tokens| tokens.to_string()).unwrap_or_default()
    }

    #[test]
    fn first_type_parameter_is_the_element() {
        let input: DeriveInput = parse_quote! {
            #[carrier(monoid = native, foldable = native)]
            struct Bag<T>(Vec<T>);
        };
        let output = rendered(&input);
        assert!(output.contains("type Inner = T"));
        assert!(output.contains("type With < __B > = Bag < __B >"));
        assert!(output.contains("type MonoidVia = :: retrofit :: typeclass :: Native"));
        assert!(output.contains("type MonadVia = :: retrofit :: typeclass :: Unsupported"));
        assert!(output.contains(":: retrofit :: pipeable !"));
    }

    #[test]
    fn explicit_element_keeps_other_parameters() {
        let input: DeriveInput = parse_quote! {
            #[carrier(element = V)]
            struct Keyed<K, V, const N: usize>(K, [V; N]);
        };
        let output = rendered(&input);
        assert!(output.contains("type Inner = V"));
        assert!(output.contains("Keyed < K , __B , N >"));
    }

    #[test]
    fn bounded_element_skips_rebind() {
        let input: DeriveInput = parse_quote! {
            struct Sorted<T: Ord>(Vec<T>);
        };
        let element = input.generics.type_params().next().unwrap();
        assert!(!is_unbounded(&input.generics, element));
        assert!(!rendered(&input).contains("Rebind"));
    }

    #[test]
    fn where_clause_bound_also_skips_rebind() {
        let input: DeriveInput = parse_quote! {
            struct Sorted<T>(Vec<T>) where T: Ord;
        };
        let element = input.generics.type_params().next().unwrap();
        assert!(!is_unbounded(&input.generics, element));
    }

    #[test]
    fn missing_type_parameter_is_an_error() {
        let input: DeriveInput = parse_quote! {
            struct Plain(Vec<u8>);
        };
        let message = expand(&input).err().map(|error| error.to_string());
        assert!(message.is_some_and(|text| text.contains("type parameter")));
    }

    #[test]
    fn lifetime_parameters_are_rejected() {
        let input: DeriveInput = parse_quote! {
            struct Borrowing<'a, T>(&'a [T]);
        };
        assert!(expand(&input).is_err());
    }
}
