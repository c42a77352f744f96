//! Parsing of the `#[carrier(...)]` attribute.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Attribute, Ident};

/// Strategy named for one typeclass in the generated `Instances` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    Native,
    NativeAlias,
    Adapted,
    Derived,
    DerivedSingleton,
    DerivedInPlace,
    #[default]
    Unsupported,
}

impl Strategy {
    fn parse(value: &Ident) -> syn::Result<Self> {
        match value.to_string().as_str() {
            "native" => Ok(Self::Native),
            "native_alias" => Ok(Self::NativeAlias),
            "adapted" => Ok(Self::Adapted),
            "derived" => Ok(Self::Derived),
            "derived_singleton" => Ok(Self::DerivedSingleton),
            "in_place" | "derived_in_place" => Ok(Self::DerivedInPlace),
            "unsupported" => Ok(Self::Unsupported),
            other => Err(syn::Error::new_spanned(
                value,
                format!(
                    "unknown strategy `{other}`; expected one of `native`, `native_alias`, \
                     `adapted`, `derived`, `derived_singleton`, `in_place`, `unsupported`"
                ),
            )),
        }
    }

    /// Path of the strategy marker type.
    pub fn marker(self) -> TokenStream2 {
        match self {
            Self::Native => quote!(::retrofit::typeclass::Native),
            Self::NativeAlias => quote!(::retrofit::typeclass::NativeAlias),
            Self::Adapted => quote!(::retrofit::typeclass::Adapted),
            Self::Derived => quote!(::retrofit::typeclass::Derived),
            Self::DerivedSingleton => quote!(::retrofit::typeclass::DerivedSingleton),
            Self::DerivedInPlace => quote!(::retrofit::typeclass::DerivedInPlace),
            Self::Unsupported => quote!(::retrofit::typeclass::Unsupported),
        }
    }
}

/// Everything `#[carrier(...)]` can configure.
#[derive(Debug, Default)]
pub struct CarrierOptions {
    pub element: Option<Ident>,
    pub monoid: Strategy,
    pub foldable: Strategy,
    pub functor: Strategy,
    pub filterable: Strategy,
    pub monad: Strategy,
}

impl CarrierOptions {
    /// Reads every `#[carrier(...)]` attribute; later keys override earlier ones.
    pub fn from_attributes(attributes: &[Attribute]) -> syn::Result<Self> {
        let mut options = Self::default();

        for attribute in attributes.iter().filter(|attribute| attribute.path().is_ident("carrier")) {
            attribute.parse_nested_meta(|meta| {
                let Some(key) = meta.path.get_ident().map(ToString::to_string) else {
                    return Err(meta.error("expected a single identifier"));
                };
                let value: Ident = meta.value()?.parse()?;

                match key.as_str() {
                    "element" => options.element = Some(value),
                    "monoid" => options.monoid = Strategy::parse(&value)?,
                    "foldable" => options.foldable = Strategy::parse(&value)?,
                    "functor" => options.functor = Strategy::parse(&value)?,
                    "filterable" => options.filterable = Strategy::parse(&value)?,
                    "monad" => options.monad = Strategy::parse(&value)?,
                    _ => {
                        return Err(meta.error(
                            "unknown carrier option; expected `element`, `monoid`, `foldable`, \
                             `functor`, `filterable` or `monad`",
                        ));
                    }
                }
                Ok(())
            })?;
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::{CarrierOptions, Strategy};
    use rstest::rstest;
    use syn::{DeriveInput, parse_quote};

    #[rstest]
    #[case("native", Strategy::Native)]
    #[case("native_alias", Strategy::NativeAlias)]
    #[case("in_place", Strategy::DerivedInPlace)]
    #[case("derived_in_place", Strategy::DerivedInPlace)]
    #[case("unsupported", Strategy::Unsupported)]
    fn strategy_names_parse(#[case] name: &str, #[case] expected: Strategy) {
        let identifier = syn::Ident::new(name, proc_macro2::Span::call_site());
        assert_eq!(Strategy::parse(&identifier).ok(), Some(expected));
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        let identifier = syn::Ident::new("magic", proc_macro2::Span::call_site());
        assert!(Strategy::parse(&identifier).is_err());
    }

    #[test]
    fn unset_typeclasses_default_to_unsupported() {
        let input: DeriveInput = parse_quote! {
            #[carrier(monoid = native, foldable = native_alias)]
            struct Bag<T>(Vec<T>);
        };
        let options = CarrierOptions::from_attributes(&input.attrs).unwrap();
        assert_eq!(options.monoid, Strategy::Native);
        assert_eq!(options.foldable, Strategy::NativeAlias);
        assert_eq!(options.functor, Strategy::Unsupported);
        assert!(options.element.is_none());
    }

    #[test]
    fn split_attributes_accumulate() {
        let input: DeriveInput = parse_quote! {
            #[carrier(element = U)]
            #[carrier(functor = derived)]
            struct Tagged<K, U>(K, Vec<U>);
        };
        let options = CarrierOptions::from_attributes(&input.attrs).unwrap();
        assert_eq!(options.element.map(|element| element.to_string()).as_deref(), Some("U"));
        assert_eq!(options.functor, Strategy::Derived);
    }
}
