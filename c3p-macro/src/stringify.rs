use syn::punctuated::Punctuated;
use syn::{Expr, ExprLit, ExprTuple, Lit, LitStr};

use crate::context::MacroExpansionContext;
use crate::error::Result;
use crate::expand::Invocation;
use crate::registry::ExpressionMacro;

/// `stringify!(x + y)` expands to `(x + y, "x + y")`: the value of the
/// expression together with the source code that produced it.
pub struct StringifyMacro;

impl ExpressionMacro for StringifyMacro {
    fn expansion(
        &self,
        invocation: &Invocation,
        _ctx: &mut MacroExpansionContext,
    ) -> Result<Expr> {
        let Some(argument) = invocation.arguments.first() else {
            panic!(
                "compiler bug: `{}!` reached expansion without any arguments",
                invocation.name
            );
        };

        let text = Expr::Lit(ExprLit {
            attrs: Vec::new(),
            lit: Lit::Str(LitStr::new(&argument.source_text, invocation.span)),
        });
        Ok(Expr::Tuple(ExprTuple {
            attrs: Vec::new(),
            paren_token: Default::default(),
            elems: Punctuated::from_iter([argument.expr.clone(), text]),
        }))
    }
}
