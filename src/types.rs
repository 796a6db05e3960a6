use std::fmt;

use crate::rule::Rule;

/// A host name ready for matching: trimmed, lowercased, no trailing dot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedName {
    pub(crate) name: String,
    /// Labels root-most first
    pub(crate) labels: Vec<String>,
}

impl NormalizedName {
    /// The normalized name
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Labels root-most first, e.g. `["com", "google", "www"]`
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Consume into the normalized name
    pub fn into_string(self) -> String {
        self.name
    }
}

impl AsRef<str> for NormalizedName {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A domain name split at its public suffix.
///
/// `www.google.co.uk` becomes `trd = "www"`, `sld = "google"`,
/// `tld = "co.uk"`. Joining the present parts with dots gives back the
/// normalized name. Empty labels in the name stay empty here, so a name
/// ending in an empty label has an empty `tld`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecomposedDomain {
    /// Public suffix, possibly several labels
    pub tld: String,
    /// Registrable label directly below the suffix
    pub sld: Option<String>,
    /// Remaining subdomain labels
    pub trd: Option<String>,
}

impl DecomposedDomain {
    /// Create a decomposed domain from its parts
    pub fn new(tld: impl Into<String>, sld: Option<String>, trd: Option<String>) -> Self {
        Self {
            tld: tld.into(),
            sld,
            trd,
        }
    }

    /// Registrable domain (`sld.tld`), if there is a registrable label
    pub fn domain(&self) -> Option<String> {
        self.sld.as_ref().map(|sld| format!("{}.{}", sld, self.tld))
    }

    /// Full subdomain (`trd.sld.tld`), if there is one
    pub fn subdomain(&self) -> Option<String> {
        match (&self.trd, &self.sld) {
            (Some(trd), Some(sld)) => Some(format!("{}.{}.{}", trd, sld, self.tld)),
            _ => None,
        }
    }

    /// True for a registrable domain without subdomain labels
    pub fn is_domain(&self) -> bool {
        self.sld.is_some() && self.trd.is_none()
    }

    /// True for a registrable domain with subdomain labels
    pub fn is_subdomain(&self) -> bool {
        self.sld.is_some() && self.trd.is_some()
    }
}

impl fmt::Display for DecomposedDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(trd) = &self.trd {
            write!(f, "{}.", trd)?;
        }
        if let Some(sld) = &self.sld {
            write!(f, "{}.", sld)?;
        }
        f.write_str(&self.tld)
    }
}

/// Per-lookup options
#[derive(Debug, Clone)]
pub struct LookupOptions {
    /// Skip rules from the PRIVATE section of the list
    pub ignore_private: bool,
    /// Rule used when nothing in the list matches, applied only to names
    /// it matches itself; `None` makes unlisted suffixes an error
    pub default_rule: Option<Rule>,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            ignore_private: false,
            default_rule: Some(Rule::default_rule().clone()),
        }
    }
}

impl LookupOptions {
    /// Create new lookup options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore PRIVATE section rules.
    pub fn with_ignore_private(mut self, ignore: bool) -> Self {
        self.ignore_private = ignore;
        self
    }

    /// Set the fallback rule, or disable the fallback with `None`.
    pub fn with_default_rule(mut self, rule: Option<Rule>) -> Self {
        self.default_rule = rule;
        self
    }
}
