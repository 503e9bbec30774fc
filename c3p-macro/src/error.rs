use proc_macro2::Span;
use thiserror::*;

pub type Result<E> = std::result::Result<E, ExpansionError>;

#[derive(Error, Debug, Clone)]
pub enum ExpansionError {
    #[error("no macro named `{name}` is registered")]
    UnresolvedMacro { name: String, span: Span },
    #[error("macro `{name}` is {found}, but was invoked as {expected}")]
    CapabilityMismatch {
        name: String,
        expected: Capability,
        found: Capability,
        span: Span,
    },
    #[error("macro `{0}` is registered more than once")]
    DuplicateMacro(&'static str),
    #[error("`{name}!` takes {expected} argument{}, {found} supplied", plural(.expected))]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
        span: Span,
    },
    #[error("`#[{name}]` can only be attached to an enum, found {found}")]
    InvalidAttachment {
        name: String,
        found: &'static str,
        span: Span,
    },
    #[error("`#[{name}]` does not take arguments")]
    UnexpectedArguments { name: String, span: Span },
    #[error(transparent)]
    Syntax(#[from] syn::Error),
}

fn plural(n: &usize) -> &'static str {
    if *n == 1 {
        ""
    } else {
        "s"
    }
}

impl ExpansionError {
    pub fn span(&self) -> Span {
        use ExpansionError::*;
        match self {
            UnresolvedMacro { span, .. }
            | CapabilityMismatch { span, .. }
            | ArityMismatch { span, .. }
            | InvalidAttachment { span, .. }
            | UnexpectedArguments { span, .. } => *span,
            DuplicateMacro(_) => Span::call_site(),
            Syntax(e) => e.span(),
        }
    }
}

/// The two expansion protocols a macro can implement.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Capability {
    Expression,
    Member,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::Expression => write!(f, "a freestanding expression macro"),
            Capability::Member => write!(f, "an attached member macro"),
        }
    }
}
