use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, Arm, Generics, Ident, Visibility};

use super::analyze::{Case, Model, Payload};

pub struct Ir {
    pub vis: Visibility,
    pub ident: Ident,
    pub generics: Generics,
    pub param: Ident,
    pub arms: Vec<Arm>,
}

pub fn lower(model: Model) -> Ir {
    let Model {
        vis,
        ident,
        generics,
        param,
        cases,
    } = model;
    let mut arms: Vec<Arm> = cases.iter().map(arm).collect();
    arms.push(parse_quote! {
        #[allow(unreachable_patterns)]
        _ => ::core::option::Option::None,
    });
    Ir {
        vis,
        ident,
        generics,
        param,
        arms,
    }
}

fn arm(case: &Case) -> Arm {
    let Case {
        ident,
        cfgs,
        payload,
    } = case;
    let fields = bindings(payload);
    parse_quote! {
        #(#cfgs)*
        Self::#ident #fields => ::core::option::Option::Some(Self::#ident #fields),
    }
}

/// Same tokens work as the pattern and as the constructor.
fn bindings(payload: &Payload) -> TokenStream {
    match payload {
        Payload::Unit => TokenStream::new(),
        Payload::Tuple(names) => quote!((#(#names),*)),
        Payload::Named(names) => quote!({ #(#names),* }),
    }
}
