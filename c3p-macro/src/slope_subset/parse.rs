use syn::{Item, ItemEnum};

use crate::error::{ExpansionError, Result};
use crate::expand::{describe, Attachment};

pub struct Ast {
    pub item: ItemEnum,
}

pub fn parse(attachment: &Attachment) -> Result<Ast> {
    if let Some(first) = attachment.arguments.clone().into_iter().next() {
        return Err(ExpansionError::UnexpectedArguments {
            name: attachment.name.clone(),
            span: first.span(),
        });
    }
    match &attachment.declaration {
        Item::Enum(item) => Ok(Ast {
            item: item.clone(),
        }),
        other => {
            let (found, span) = describe(other);
            Err(ExpansionError::InvalidAttachment {
                name: attachment.name.clone(),
                found,
                span,
            })
        }
    }
}
