use crate::error::{PslError, Result};
use crate::rule::Rule;
use crate::types::{DecomposedDomain, NormalizedName};

/// Split a normalized name at the boundary given by its prevailing rule.
///
/// Fails with `NameNotAllowed` when nothing registrable is left below the
/// suffix, i.e. the name is itself a public suffix.
///
/// Labels are not validated, so empty labels pass through as empty
/// strings: `foo..` normalizes to `foo.` and splits into `sld = "foo"`
/// with an empty `tld` under the default rule.
pub fn decompose(name: &NormalizedName, rule: &Rule) -> Result<DecomposedDomain> {
    let split = rule.decompose(name.as_str());

    let (tld, remainder) = match (split.suffix, split.remainder) {
        (Some(suffix), Some(remainder)) => (suffix, remainder),
        _ => {
            return Err(PslError::NameNotAllowed {
                name: name.as_str().to_string(),
            })
        }
    };

    let (trd, sld) = match remainder.rsplit_once('.') {
        Some((trd, sld)) => (Some(trd.to_string()), sld),
        None => (None, remainder),
    };

    Ok(DecomposedDomain {
        tld: tld.to_string(),
        sld: Some(sld.to_string()),
        trd,
    })
}
