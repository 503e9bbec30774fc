use syn::{parse_quote, ImplItem, ImplItemFn};

use super::lower::Ir;

pub fn codegen(ir: Ir) -> Vec<ImplItem> {
    let Ir {
        vis,
        ident,
        generics,
        param,
        arms,
    } = ir;
    let (_, ty_generics, _) = generics.split_for_impl();

    let initializer: ImplItemFn = parse_quote! {
        #[allow(non_snake_case)]
        #vis fn new(#param: #ident #ty_generics) -> ::core::option::Option<Self> {
            match #param {
                #(#arms)*
            }
        }
    };
    vec![ImplItem::Fn(initializer)]
}
