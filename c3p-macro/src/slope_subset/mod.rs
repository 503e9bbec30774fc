use syn::ImplItem;

use crate::context::MacroExpansionContext;
use crate::error::Result;
use crate::expand::Attachment;
use crate::registry::MemberMacro;

mod analyze;
mod codegen;
mod lower;
mod parse;

/// `#[slope_subset]` on an enum adds
/// `fn new(value: Enum) -> Option<Self>` which maps every case of the
/// incoming value onto the case of the same name.
pub struct SlopeSubsetMacro;

impl MemberMacro for SlopeSubsetMacro {
    fn expansion(
        &self,
        attachment: &Attachment,
        ctx: &mut MacroExpansionContext,
    ) -> Result<Vec<ImplItem>> {
        let ast = parse::parse(attachment)?;
        let model = analyze::analyze(ast, ctx);
        let ir = lower::lower(model);
        let members = codegen::codegen(ir);
        tracing::trace!(members = members.len(), "generated subset initializer");
        Ok(members)
    }
}
