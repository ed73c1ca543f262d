use syn::{Attribute, LitStr, Result};

use crate::support::diag;

/// Options from `#[record(...)]` on a single field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// `rename = "..."`: the name the field is looked up by.
    pub rename: Option<LitStr>,
    /// `skip`: the field is invisible to lookups and zero checks.
    pub skip: bool,
}

/// Parses every `#[record(...)]` attribute on a field.
pub fn parse_field_attrs(attrs: &[Attribute]) -> Result<FieldAttrs> {
    let mut out = FieldAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident("record") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(diag::error_spanned(&lit, "`rename` must not be empty"));
                }
                out.rename = Some(lit);
                Ok(())
            } else if meta.path.is_ident("skip") {
                out.skip = true;
                Ok(())
            } else {
                Err(meta.error("unknown `record` attribute, expected `rename = \"...\"` or `skip`"))
            }
        })?;
    }

    if out.skip
        && let Some(rename) = &out.rename
    {
        return Err(diag::error_spanned(
            rename,
            "`rename` has no effect on a skipped field",
        ));
    }

    Ok(out)
}
