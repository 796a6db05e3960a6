use crate::error::{InvalidNameKind, PslError, Result};
use crate::types::NormalizedName;

/// Canonicalize a raw host name for matching.
///
/// Trims surrounding whitespace, drops one trailing FQDN dot and
/// lowercases. Rejects empty names, names with a leading dot and URLs.
/// Nothing else is validated.
pub fn normalize(raw: &str) -> Result<NormalizedName> {
    let trimmed = raw.trim();
    let name = trimmed.strip_suffix('.').unwrap_or(trimmed).to_lowercase();

    let kind = if name.is_empty() {
        Some(InvalidNameKind::EmptyName)
    } else if name.starts_with('.') {
        Some(InvalidNameKind::LeadingDot)
    } else if name.contains("://") {
        Some(InvalidNameKind::ContainsScheme)
    } else {
        None
    };

    if let Some(kind) = kind {
        return Err(PslError::NameInvalid { name, kind });
    }

    let labels = name.rsplit('.').map(str::to_string).collect();
    Ok(NormalizedName { name, labels })
}
