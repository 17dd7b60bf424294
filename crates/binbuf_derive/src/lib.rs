use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Attribute, Data, DataStruct, DeriveInput, Fields, GenericParam, Index, parse_macro_input,
    parse_quote,
};

/// Derives `binbuf::Serializable` for a struct, encoding its fields in
/// declaration order.
///
/// Also implements `Encode`, `Decode` and `Decodable`. Fresh instances come
/// from `Default` unless the struct is marked `#[binbuf(no_default)]`, in which
/// case container reconstruction fails with `ElementNotConstructible`.
/// Fields marked `#[binbuf(skip)]` are neither written nor read.
///
/// Every field is read in place, so container fields (`Vec` and friends) fail
/// with `UnsupportedType`. Types that need them implement `Serializable` by hand
/// and read them with an element count.
#[proc_macro_derive(Serializable, attributes(binbuf))]
pub fn derive_serializable(input: TokenStream) -> TokenStream {
    let mut input = parse_macro_input!(input as DeriveInput);

    match expand(&mut input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand(input: &mut DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(DataStruct { fields, .. }) => fields,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Serializable can only be derived for structs",
            ));
        }
    };

    let mut members = Vec::new();
    match fields {
        Fields::Named(named) => {
            for field in &named.named {
                if !is_skipped(&field.attrs)? {
                    let ident = &field.ident;
                    members.push(quote! { #ident });
                }
            }
        }
        Fields::Unnamed(unnamed) => {
            for (i, field) in unnamed.unnamed.iter().enumerate() {
                if !is_skipped(&field.attrs)? {
                    let index = Index::from(i);
                    members.push(quote! { #index });
                }
            }
        }
        Fields::Unit => {}
    }

    let no_default = has_no_default(&input.attrs)?;
    let buf = if members.is_empty() {
        quote! { _buf }
    } else {
        quote! { buf }
    };

    for param in &mut input.generics.params {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(parse_quote!(::binbuf::Encode));
            ty.bounds.push(parse_quote!(::binbuf::Decode));
        }
    }

    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut decodable_generics = input.generics.clone();
    let instantiate = if no_default {
        quote! {}
    } else {
        decodable_generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(#struct_name #ty_generics: ::core::default::Default));
        quote! {
            #[inline]
            fn instantiate() -> ::binbuf::Result<Self> {
                Ok(<Self as ::core::default::Default>::default())
            }
        }
    };
    let decodable_where_clause = &decodable_generics.where_clause;

    Ok(quote! {
        impl #impl_generics ::binbuf::Serializable for #struct_name #ty_generics #where_clause {
            fn encode_self(&self, #buf: &mut ::binbuf::Buffer) -> ::binbuf::Result<()> {
                #(buf.write(&self.#members)?;)*
                Ok(())
            }

            fn decode_self(&mut self, #buf: &mut ::binbuf::Buffer) -> ::binbuf::Result<()> {
                #(buf.read(&mut self.#members)?;)*
                Ok(())
            }
        }

        impl #impl_generics ::binbuf::Encode for #struct_name #ty_generics #where_clause {
            #[inline]
            fn encode(&self, buf: &mut ::binbuf::Buffer) -> ::binbuf::Result<()> {
                ::binbuf::Serializable::encode_self(self, buf)
            }

            #[inline]
            fn shape(&self) -> ::binbuf::Shape {
                ::binbuf::Shape::Serializable
            }
        }

        impl #impl_generics ::binbuf::Decode for #struct_name #ty_generics #where_clause {
            #[inline]
            fn decode(&mut self, buf: &mut ::binbuf::Buffer) -> ::binbuf::Result<()> {
                ::binbuf::Serializable::decode_self(self, buf)
            }
        }

        impl #impl_generics ::binbuf::Decodable for #struct_name #ty_generics #decodable_where_clause {
            #instantiate
        }
    })
}

fn is_skipped(attrs: &[Attribute]) -> syn::Result<bool> {
    has_flag(attrs, "skip")
}

fn has_no_default(attrs: &[Attribute]) -> syn::Result<bool> {
    has_flag(attrs, "no_default")
}

fn has_flag(attrs: &[Attribute], flag: &str) -> syn::Result<bool> {
    let mut found = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("binbuf")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident(flag) {
                found = true;
                Ok(())
            } else if meta.path.is_ident("skip") || meta.path.is_ident("no_default") {
                Ok(())
            } else {
                Err(meta.error("unknown binbuf attribute, expected `skip` or `no_default`"))
            }
        })?;
    }
    Ok(found)
}
