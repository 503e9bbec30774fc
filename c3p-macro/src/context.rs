use proc_macro2::{Ident, Span};
use quote::format_ident;

use crate::error::ExpansionError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A message tied to a source location, reported back to the host instead
/// of aborting the expansion.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub span: Span,
}

impl Diagnostic {
    pub fn error(span: Span, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            span,
        }
    }

    pub fn warning(span: Span, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            span,
        }
    }
}

impl From<ExpansionError> for Diagnostic {
    fn from(e: ExpansionError) -> Self {
        Diagnostic::error(e.span(), e.to_string())
    }
}

/// State owned by a single expansion call. Created by the host right
/// before the call and consumed right after it.
#[derive(Debug)]
pub struct MacroExpansionContext {
    macro_name: String,
    diagnostics: Vec<Diagnostic>,
    unique_names: usize,
}

impl MacroExpansionContext {
    pub fn new(macro_name: impl Into<String>) -> Self {
        Self {
            macro_name: macro_name.into(),
            diagnostics: Vec::new(),
            unique_names: 0,
        }
    }

    pub fn macro_name(&self) -> &str {
        &self.macro_name
    }

    pub fn diagnose(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(
            macro_name = %self.macro_name,
            severity = ?diagnostic.severity,
            "{}",
            diagnostic.message
        );
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Allocates an identifier that cannot collide with user code.
    pub fn make_unique_name(&mut self, base: &str) -> Ident {
        let n = self.unique_names;
        self.unique_names += 1;
        let base = base.trim_start_matches("r#");
        format_ident!(
            "__macro_local_{}_{}",
            base,
            n,
            span = Span::mixed_site()
        )
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
