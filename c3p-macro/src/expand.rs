use std::cmp::Ordering;

use proc_macro2::{LineColumn, Span, TokenStream};
use quote::{quote, ToTokens};
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Expr, Generics, Ident, Item, Token};

use crate::context::{Diagnostic, MacroExpansionContext};
use crate::error::{ExpansionError, Result};
use crate::registry::Registry;

/// One argument of a freestanding call together with its spelling in the
/// source.
pub struct Argument {
    pub expr: Expr,
    pub source_text: String,
}

/// A freestanding call site: `name!(arg, ...)`.
pub struct Invocation {
    pub name: String,
    pub arguments: Vec<Argument>,
    pub span: Span,
}

impl Invocation {
    pub fn parse(name: &str, tokens: TokenStream, span: Span) -> Result<Self> {
        let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
        let arguments = parser
            .parse2(tokens)?
            .into_iter()
            .map(|expr| {
                let source_text = source_text(&expr);
                Argument { expr, source_text }
            })
            .collect();
        Ok(Invocation {
            name: name.to_string(),
            arguments,
            span,
        })
    }
}

/// An attribute-like macro placed on a declaration: `#[name(args)] item`.
pub struct Attachment {
    pub name: String,
    pub arguments: TokenStream,
    pub declaration: Item,
}

/// What the host substitutes for the call site, plus everything reported
/// while producing it.
pub struct Expansion {
    pub tokens: TokenStream,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn expand_freestanding(
    registry: &Registry,
    name: &str,
    input: TokenStream,
) -> Expansion {
    let mut ctx = MacroExpansionContext::new(name);
    let tokens = match freestanding(registry, name, input, &mut ctx) {
        Ok(expr) => expr.into_token_stream(),
        Err(e) => {
            ctx.diagnose(e.into());
            TokenStream::new()
        }
    };
    Expansion {
        tokens,
        diagnostics: ctx.into_diagnostics(),
    }
}

fn freestanding(
    registry: &Registry,
    name: &str,
    input: TokenStream,
    ctx: &mut MacroExpansionContext,
) -> Result<Expr> {
    let span = Span::call_site();
    let expander = registry.expression(name, span)?;
    let invocation = Invocation::parse(name, input, span)?;
    if invocation.arguments.len() != expander.arity() {
        return Err(ExpansionError::ArityMismatch {
            name: name.to_string(),
            expected: expander.arity(),
            found: invocation.arguments.len(),
            span,
        });
    }
    tracing::debug!(macro_name = name, expander = expander.type_name(), "expanding expression");
    let expr = expander.expansion(&invocation, ctx)?;
    tracing::trace!(diagnostics = ctx.diagnostics().len(), "expression expanded");
    Ok(expr)
}

pub fn expand_attached(
    registry: &Registry,
    name: &str,
    arguments: TokenStream,
    item: TokenStream,
) -> Expansion {
    let mut ctx = MacroExpansionContext::new(name);
    let tokens = match attached(registry, name, arguments, item.clone(), &mut ctx) {
        Ok(tokens) => tokens,
        Err(e) => {
            ctx.diagnose(e.into());
            item
        }
    };
    Expansion {
        tokens,
        diagnostics: ctx.into_diagnostics(),
    }
}

fn attached(
    registry: &Registry,
    name: &str,
    arguments: TokenStream,
    item: TokenStream,
    ctx: &mut MacroExpansionContext,
) -> Result<TokenStream> {
    let span = Span::call_site();
    let expander = registry.member(name, span)?;
    let declaration: Item = syn::parse2(item)?;
    let attachment = Attachment {
        name: name.to_string(),
        arguments,
        declaration,
    };
    tracing::debug!(macro_name = name, expander = expander.type_name(), "expanding members");
    let members = expander.expansion(&attachment, ctx)?;
    let declaration = &attachment.declaration;
    if members.is_empty() || ctx.has_errors() {
        return Ok(declaration.to_token_stream());
    }
    let Some((ident, generics)) = type_header(declaration) else {
        let (found, span) = describe(declaration);
        return Err(ExpansionError::InvalidAttachment {
            name: name.to_string(),
            found,
            span,
        });
    };
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    Ok(quote! {
        #declaration
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#members)*
        }
    })
}

fn type_header(item: &Item) -> Option<(&Ident, &Generics)> {
    match item {
        Item::Enum(e) => Some((&e.ident, &e.generics)),
        Item::Struct(s) => Some((&s.ident, &s.generics)),
        Item::Union(u) => Some((&u.ident, &u.generics)),
        _ => None,
    }
}

/// Human readable kind of an item and the span of the keyword introducing
/// it.
pub fn describe(item: &Item) -> (&'static str, Span) {
    match item {
        Item::Enum(i) => ("an enum", i.enum_token.span),
        Item::Struct(i) => ("a struct", i.struct_token.span),
        Item::Union(i) => ("a union", i.union_token.span),
        Item::Fn(i) => ("a function", i.sig.fn_token.span),
        Item::Trait(i) => ("a trait", i.trait_token.span),
        Item::TraitAlias(i) => ("a trait alias", i.trait_token.span),
        Item::Impl(i) => ("an impl block", i.impl_token.span),
        Item::Mod(i) => ("a module", i.mod_token.span),
        Item::Const(i) => ("a constant", i.const_token.span),
        Item::Static(i) => ("a static", i.static_token.span),
        Item::Type(i) => ("a type alias", i.type_token.span),
        Item::Use(i) => ("a use declaration", i.use_token.span),
        Item::ExternCrate(i) => ("an extern crate", i.extern_token.span),
        Item::ForeignMod(i) => ("an extern block", i.abi.extern_token.span),
        Item::Macro(i) => ("a macro invocation", i.mac.span()),
        other => ("an unsupported item", other.span()),
    }
}

/// The argument exactly as written. Falls back to the token rendering when
/// the host cannot recover source text for every token.
fn source_text(expr: &Expr) -> String {
    let tokens = expr.to_token_stream();
    if let Some(text) = joined(&tokens).or_else(|| stitched(&tokens)) {
        return text;
    }
    let rendered = tokens.to_string();
    tracing::warn!(%rendered, "no source text, using token rendering");
    rendered
}

/// Source text of the span covering the whole stream. Only hosts that can
/// join spans (nightly) get this far.
fn joined(tokens: &TokenStream) -> Option<String> {
    let mut trees = tokens.clone().into_iter();
    let first = trees.next()?.span();
    let span = match trees.last() {
        Some(last) => first.join(last.span())?,
        None => first,
    };
    span.source_text()
}

/// Concatenates the source text of each top level token, putting back the
/// whitespace between them from their line and column positions. Groups
/// carry their own source text, so their inner spacing comes along as is.
fn stitched(tokens: &TokenStream) -> Option<String> {
    let mut text = String::new();
    let mut previous: Option<LineColumn> = None;
    for tree in tokens.clone() {
        let span = tree.span();
        let spelling = span.source_text()?;
        if let Some(end) = previous {
            text.push_str(&gap(end, span.start())?);
        }
        text.push_str(&spelling);
        previous = Some(span.end());
    }
    (!text.is_empty()).then_some(text)
}

/// Whitespace between the end of one token and the start of the next.
/// `None` when the host does not track positions (line 0) or the tokens
/// are out of order.
fn gap(end: LineColumn, start: LineColumn) -> Option<String> {
    if end.line == 0 || start.line == 0 {
        return None;
    }
    match start.line.cmp(&end.line) {
        Ordering::Equal => start.column.checked_sub(end.column).map(|n| " ".repeat(n)),
        Ordering::Greater => {
            Some("\n".repeat(start.line - end.line) + &" ".repeat(start.column))
        }
        Ordering::Less => None,
    }
}
