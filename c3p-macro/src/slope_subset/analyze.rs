use syn::ext::IdentExt;
use syn::{Attribute, Fields, Generics, Ident, Visibility};

use super::parse::Ast;
use crate::context::{Diagnostic, MacroExpansionContext};

pub struct Model {
    pub vis: Visibility,
    pub ident: Ident,
    pub generics: Generics,
    pub param: Ident,
    pub cases: Vec<Case>,
}

pub struct Case {
    pub ident: Ident,
    pub cfgs: Vec<Attribute>,
    pub payload: Payload,
}

/// Bindings used to move a variant's fields out of the incoming value and
/// into the new one.
pub enum Payload {
    Unit,
    Tuple(Vec<Ident>),
    Named(Vec<Ident>),
}

pub fn analyze(ast: Ast, ctx: &mut MacroExpansionContext) -> Model {
    let item = ast.item;
    let param = parameter_name(&item.ident, ctx);
    let cases: Vec<Case> = item
        .variants
        .iter()
        .map(|variant| Case {
            ident: variant.ident.clone(),
            cfgs: variant
                .attrs
                .iter()
                .filter(|attr| attr.path().is_ident("cfg"))
                .cloned()
                .collect(),
            payload: match &variant.fields {
                Fields::Unit => Payload::Unit,
                Fields::Unnamed(fields) => Payload::Tuple(
                    fields
                        .unnamed
                        .iter()
                        .map(|_| ctx.make_unique_name("field"))
                        .collect(),
                ),
                Fields::Named(fields) => Payload::Named(
                    fields.named.iter().filter_map(|f| f.ident.clone()).collect(),
                ),
            },
        })
        .collect();

    if cases.is_empty() {
        let message = format!(
            "`#[{}]` on an enum without cases generates an initializer that always returns `None`",
            ctx.macro_name()
        );
        ctx.diagnose(Diagnostic::warning(item.ident.span(), message));
    }

    Model {
        vis: item.vis,
        ident: item.ident,
        generics: item.generics,
        param,
        cases,
    }
}

/// `Slope` becomes `slope`: the type name with its first character
/// lower-cased.
fn parameter_name(ident: &Ident, ctx: &mut MacroExpansionContext) -> Ident {
    let name = ident.unraw().to_string();
    let mut chars = name.chars();
    let lowered: String = match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => name.clone(),
    };
    if syn::parse_str::<Ident>(&lowered).is_ok() {
        Ident::new(&lowered, ident.span())
    } else if !matches!(lowered.as_str(), "crate" | "self" | "super") {
        Ident::new_raw(&lowered, ident.span())
    } else {
        ctx.make_unique_name(&lowered)
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;
    use crate::context::Severity;

    fn model(item: syn::ItemEnum) -> (Model, MacroExpansionContext) {
        let mut ctx = MacroExpansionContext::new("slope_subset");
        let model = analyze(Ast { item }, &mut ctx);
        (model, ctx)
    }

    #[test]
    fn parameter_is_the_lower_camel_type_name() {
        let (m, _) = model(parse_quote!(
            enum Slope {
                A,
            }
        ));
        assert_eq!(m.param, "slope");
        let (m, _) = model(parse_quote!(
            enum EasySlope {
                A,
            }
        ));
        assert_eq!(m.param, "easySlope");
        let (m, _) = model(parse_quote!(
            enum HTTPStatus {
                Ok,
            }
        ));
        assert_eq!(m.param, "hTTPStatus");
    }

    #[test]
    fn keyword_parameter_falls_back() {
        let (m, _) = model(parse_quote!(
            enum Type {
                A,
            }
        ));
        assert_eq!(m.param.to_string(), "r#type");
        let (m, _) = model(parse_quote!(
            enum Crate {
                A,
            }
        ));
        assert_eq!(m.param.to_string(), "__macro_local_crate_0");
    }

    #[test]
    fn cases_keep_source_order_and_shapes() {
        let (m, ctx) = model(parse_quote!(
            enum Shape {
                Point,
                #[cfg(feature = "circle")]
                Circle(f64),
                Rect { w: f64, h: f64 },
            }
        ));
        assert!(ctx.diagnostics().is_empty());
        let names: Vec<String> = m.cases.iter().map(|c| c.ident.to_string()).collect();
        assert_eq!(names, vec!["Point", "Circle", "Rect"]);
        assert!(matches!(m.cases[0].payload, Payload::Unit));
        assert_eq!(m.cases[1].cfgs.len(), 1);
        match &m.cases[1].payload {
            Payload::Tuple(bindings) => assert_eq!(bindings.len(), 1),
            _ => panic!("expected a tuple payload"),
        }
        match &m.cases[2].payload {
            Payload::Named(fields) => assert_eq!(fields, &["w", "h"]),
            _ => panic!("expected a named payload"),
        }
    }

    #[test]
    fn empty_enum_warns() {
        let (m, ctx) = model(parse_quote!(
            enum Never {}
        ));
        assert!(m.cases.is_empty());
        assert_eq!(ctx.diagnostics().len(), 1);
        assert_eq!(ctx.diagnostics()[0].severity, Severity::Warning);
        assert!(!ctx.has_errors());
    }
}
