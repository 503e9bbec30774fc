use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use proc_macro2::Span;
use syn::{Expr, ImplItem};

use crate::context::MacroExpansionContext;
use crate::error::{Capability, ExpansionError, Result};
use crate::expand::{Attachment, Invocation};
use crate::slope_subset::SlopeSubsetMacro;
use crate::stringify::StringifyMacro;

/// Freestanding protocol: one call site in, one replacement expression out.
pub trait ExpressionMacro: Sync {
    /// Number of arguments the host validates before calling
    /// [`ExpressionMacro::expansion`].
    fn arity(&self) -> usize {
        1
    }

    fn expansion(
        &self,
        invocation: &Invocation,
        ctx: &mut MacroExpansionContext,
    ) -> Result<Expr>;

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Attached protocol: the annotated declaration in, members to add to its
/// type out.
pub trait MemberMacro: Sync {
    fn expansion(
        &self,
        attachment: &Attachment,
        ctx: &mut MacroExpansionContext,
    ) -> Result<Vec<ImplItem>>;

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

#[derive(Copy, Clone)]
pub enum MacroImpl {
    Expression(&'static dyn ExpressionMacro),
    Member(&'static dyn MemberMacro),
}

impl MacroImpl {
    pub fn capability(&self) -> Capability {
        match self {
            MacroImpl::Expression(_) => Capability::Expression,
            MacroImpl::Member(_) => Capability::Member,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            MacroImpl::Expression(m) => m.type_name(),
            MacroImpl::Member(m) => m.type_name(),
        }
    }
}

impl fmt::Debug for MacroImpl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(match self.capability() {
            Capability::Expression => "Expression",
            Capability::Member => "Member",
        })
        .field(&self.type_name())
        .finish()
    }
}

/// Every macro this plugin provides, in registration order.
pub fn providing_macros() -> Vec<(&'static str, MacroImpl)> {
    vec![
        ("stringify", MacroImpl::Expression(&StringifyMacro)),
        ("slope_subset", MacroImpl::Member(&SlopeSubsetMacro)),
    ]
}

static GLOBAL: LazyLock<Registry> = LazyLock::new(|| {
    Registry::new(providing_macros())
        .unwrap_or_else(|e| panic!("compiler bug: invalid macro table: {e}"))
});

#[derive(Debug)]
pub struct Registry {
    macros: HashMap<&'static str, MacroImpl>,
}

impl Registry {
    pub fn new(
        providers: impl IntoIterator<Item = (&'static str, MacroImpl)>,
    ) -> Result<Self> {
        let mut macros = HashMap::new();
        for (name, implementation) in providers {
            if macros.insert(name, implementation).is_some() {
                return Err(ExpansionError::DuplicateMacro(name));
            }
        }
        Ok(Registry { macros })
    }

    /// The table built from [`providing_macros`] on first use.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    pub fn get(&self, name: &str) -> Option<MacroImpl> {
        self.macros.get(name).copied()
    }

    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.macros.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn expression(
        &self,
        name: &str,
        span: Span,
    ) -> Result<&'static dyn ExpressionMacro> {
        match self.resolve(name, span)? {
            MacroImpl::Expression(m) => Ok(m),
            other => Err(mismatch(name, Capability::Expression, other, span)),
        }
    }

    pub fn member(&self, name: &str, span: Span) -> Result<&'static dyn MemberMacro> {
        match self.resolve(name, span)? {
            MacroImpl::Member(m) => Ok(m),
            other => Err(mismatch(name, Capability::Member, other, span)),
        }
    }

    fn resolve(&self, name: &str, span: Span) -> Result<MacroImpl> {
        self.get(name).ok_or_else(|| {
            tracing::debug!(name, available = ?self.names(), "unresolved macro");
            ExpansionError::UnresolvedMacro {
                name: name.to_string(),
                span,
            }
        })
    }
}

fn mismatch(
    name: &str,
    expected: Capability,
    found: MacroImpl,
    span: Span,
) -> ExpansionError {
    ExpansionError::CapabilityMismatch {
        name: name.to_string(),
        expected,
        found: found.capability(),
        span,
    }
}
