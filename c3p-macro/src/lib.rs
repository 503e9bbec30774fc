use proc_macro::TokenStream;

use proc_macro_error::{emit_error, emit_warning, proc_macro_error};

mod context;
mod error;
mod expand;
mod registry;
mod slope_subset;
mod stringify;
use crate::context::Severity;
use crate::expand::Expansion;
use crate::registry::Registry;

/// Produces both a value and a string containing the source code that
/// generated the value.
///
/// ```text
/// c3p::stringify!(x + y)
/// ```
///
/// expands to
///
/// ```text
/// (x + y, "x + y")
/// ```
#[proc_macro]
#[proc_macro_error]
pub fn stringify(input: TokenStream) -> TokenStream {
    let expansion =
        expand::expand_freestanding(Registry::global(), "stringify", input.into());
    emit(expansion).into()
}

/// Attached to an enum, adds `fn new(value: Self) -> Option<Self>` that
/// maps each case of `value` onto the case of the same name.
///
/// ```text
/// #[c3p::slope_subset]
/// enum EasySlope {
///     BeginnersParadise,
///     PracticeRun,
/// }
/// ```
#[proc_macro_attribute]
#[proc_macro_error]
pub fn slope_subset(attr: TokenStream, item: TokenStream) -> TokenStream {
    let expansion = expand::expand_attached(
        Registry::global(),
        "slope_subset",
        attr.into(),
        item.into(),
    );
    emit(expansion).into()
}

fn emit(expansion: Expansion) -> proc_macro2::TokenStream {
    let Expansion {
        tokens,
        diagnostics,
    } = expansion;
    for diagnostic in diagnostics {
        match diagnostic.severity {
            Severity::Error => emit_error!(diagnostic.span, "{}", diagnostic.message),
            Severity::Warning => {
                emit_warning!(diagnostic.span, "{}", diagnostic.message)
            }
        }
    }
    tokens
}
