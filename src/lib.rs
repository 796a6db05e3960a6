//! PSL Engine - Public Suffix List domain parsing for Rust
//!
//! This library splits host names at their public suffix:
//! - Rule parsing from Public Suffix List text (ICANN and PRIVATE sections)
//! - Longest-match rule selection with wildcard and exception rules
//! - Decomposition into suffix (`tld`), registrable label (`sld`) and
//!   subdomain (`trd`)
//! - A process-wide default list, replaceable at runtime
//! - LRU caching for repeated lookups
//!
//! # Example
//!
//! ```rust
//! use psl_engine_r::{parse, registrable_domain};
//!
//! let domain = parse("www.google.co.uk").unwrap();
//! assert_eq!(domain.tld, "co.uk");
//! assert_eq!(domain.sld.as_deref(), Some("google"));
//! assert_eq!(domain.trd.as_deref(), Some("www"));
//!
//! assert_eq!(registrable_domain("mail.google.com").as_deref(), Some("google.com"));
//! assert!(parse("co.uk").is_err()); // a bare public suffix
//! ```
//!
//! # Custom lists
//!
//! ```rust
//! use psl_engine_r::SuffixList;
//!
//! let list = SuffixList::from_text("com\nuk\nco.uk\n*.ke").unwrap();
//! assert_eq!(list.parse("foo.google.co.uk").unwrap().trd.as_deref(), Some("foo"));
//! assert!(!list.is_valid("nic.ke"));
//! ```
//!
//! # Rule Syntax
//!
//! | Rule | Example | Meaning |
//! |------|---------|---------|
//! | Normal | `co.uk` | `co.uk` is a public suffix |
//! | Wildcard | `*.ck` | every label under `ck` is a public suffix |
//! | Exception | `!www.ck` | `www.ck` is registrable despite `*.ck` |
//!
//! Names no rule matches fall back to the implicit `*` rule: their last
//! label is the suffix.

pub mod cache;
pub mod decomposer;
pub mod error;
pub mod list;
pub mod normalizer;
pub mod parser;
pub mod rule;
pub mod types;

// Re-export commonly used items
pub use cache::{CachedSuffixList, DEFAULT_CACHE_SIZE};
pub use error::{InvalidNameKind, PslError, Result};
pub use list::{builtin_list, default_list, reset_default_list, set_default_list, SuffixList};
pub use normalizer::normalize;
pub use parser::{parse_rules, parse_rules_from_file};
pub use rule::{Rule, RuleKind, Section, Split};
pub use types::{DecomposedDomain, LookupOptions, NormalizedName};

/// Split a host name using the default list.
pub fn parse(raw: &str) -> Result<DecomposedDomain> {
    default_list().parse(raw)
}

/// [`parse`] with explicit lookup options.
pub fn parse_with(raw: &str, options: &LookupOptions) -> Result<DecomposedDomain> {
    default_list().parse_with(raw, options)
}

/// Check whether `raw` has a registrable part under the default list.
pub fn is_valid(raw: &str) -> bool {
    default_list().is_valid(raw)
}

/// Registrable domain of `raw` under the default list.
pub fn registrable_domain(raw: &str) -> Option<String> {
    default_list().registrable_domain(raw)
}
