//! Suffix rule list.
//!
//! A [`SuffixList`] holds rules in load order together with an index from
//! each rule's root-most label to the rules that start with it, so a
//! lookup only tests rules sharing the name's last label.

mod default;
mod select;

pub use default::{builtin_list, default_list, reset_default_list, set_default_list};
pub use select::select;

use std::collections::HashMap;
use std::path::Path;

use tracing::trace;

use crate::decomposer::decompose;
use crate::error::{PslError, Result};
use crate::normalizer::normalize;
use crate::parser::{parse_rules, parse_rules_from_file};
use crate::rule::Rule;
use crate::types::{DecomposedDomain, LookupOptions, NormalizedName};

/// Ordered, immutable collection of suffix rules
#[derive(Debug, Clone, Default)]
pub struct SuffixList {
    rules: Vec<Rule>,
    /// Root-most label -> positions in `rules`, ascending
    index: HashMap<String, Vec<usize>>,
}

impl SuffixList {
    /// Create a list from rules, keeping their order.
    pub fn new(rules: Vec<Rule>) -> Self {
        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (pos, rule) in rules.iter().enumerate() {
            if let Some(first) = rule.labels().first() {
                index.entry(first.clone()).or_default().push(pos);
            }
        }
        Self { rules, index }
    }

    /// Create a list from Public Suffix List text.
    pub fn from_text(text: &str) -> Result<Self> {
        Ok(Self::new(parse_rules(text)?))
    }

    /// Create a list from a Public Suffix List file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(parse_rules_from_file(path)?))
    }

    /// Get the number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the list has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules in load order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Iterate over rules in load order
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Check if the list holds `rule` (same definition and section)
    pub fn contains(&self, rule: &Rule) -> bool {
        rule.labels()
            .first()
            .and_then(|first| self.index.get(first))
            .is_some_and(|positions| positions.iter().any(|&pos| self.rules[pos] == *rule))
    }

    /// Rules matching `labels` (root-most first), in load order.
    pub fn candidates<S: AsRef<str>>(&self, labels: &[S]) -> Vec<&Rule> {
        let Some(first) = labels.first() else {
            return Vec::new();
        };
        self.index
            .get(first.as_ref())
            .map(|positions| {
                positions
                    .iter()
                    .map(|&pos| &self.rules[pos])
                    .filter(|rule| rule.matches(labels))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Same as [`candidates`](Self::candidates) without the index.
    pub fn candidates_scan<S: AsRef<str>>(&self, labels: &[S]) -> Vec<&Rule> {
        if labels.is_empty() {
            return Vec::new();
        }
        self.rules.iter().filter(|rule| rule.matches(labels)).collect()
    }

    /// Find the rule that decides where the suffix of `name` ends.
    ///
    /// Falls back to the options' default rule when nothing in the list
    /// matches. Fails with `UnlistedSuffix` if the fallback is disabled or
    /// does not match `name` either.
    pub fn find_rule<'a>(
        &'a self,
        name: &NormalizedName,
        options: &'a LookupOptions,
    ) -> Result<&'a Rule> {
        let candidates = self
            .candidates(name.labels())
            .into_iter()
            .filter(|rule| !(options.ignore_private && rule.is_private()));

        let fallback = options
            .default_rule
            .as_ref()
            .filter(|default| default.matches(name.labels()));

        let rule = match (select(candidates), fallback) {
            (Some(rule), _) => rule,
            (None, Some(default)) => default,
            (None, None) => {
                return Err(PslError::UnlistedSuffix {
                    name: name.as_str().to_string(),
                })
            }
        };

        trace!(name = %name, rule = %rule, "selected suffix rule");
        Ok(rule)
    }

    /// Split a raw host name into suffix, registrable label and subdomain.
    pub fn parse(&self, raw: &str) -> Result<DecomposedDomain> {
        self.parse_with(raw, &LookupOptions::default())
    }

    /// [`parse`](Self::parse) with explicit lookup options.
    pub fn parse_with(&self, raw: &str, options: &LookupOptions) -> Result<DecomposedDomain> {
        let name = normalize(raw)?;
        let rule = self.find_rule(&name, options)?;
        decompose(&name, rule)
    }

    /// Check whether `raw` is a name with a registrable part.
    pub fn is_valid(&self, raw: &str) -> bool {
        self.parse(raw).is_ok()
    }

    /// Registrable domain (`sld.tld`) of `raw`, if any.
    pub fn registrable_domain(&self, raw: &str) -> Option<String> {
        self.parse(raw).ok().and_then(|d| d.domain())
    }
}

impl<'a> IntoIterator for &'a SuffixList {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl FromIterator<Rule> for SuffixList {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
