//! Suffix rules.
//!
//! A rule is one line of a Public Suffix List: `com`, `*.ck` or `!www.ck`.
//! Rules store their labels root-most first so that matching a name is a
//! plain prefix comparison against the name's reversed labels.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{PslError, Result};

/// Rule syntax: optional `*.` or `!` marker followed by one or more
/// non-empty labels free of `*`, `!` and whitespace.
static RULE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\*\.|!)?([^.*!\s]+(?:\.[^.*!\s]+)*)$")
        .expect("RULE_PATTERN: hardcoded regex is invalid")
});

/// The implicit `*` rule used when no listed rule matches.
static DEFAULT_RULE: Lazy<Rule> = Lazy::new(|| Rule {
    kind: RuleKind::Wildcard,
    definition: "*".to_string(),
    value: String::new(),
    labels: Vec::new(),
    section: Section::Icann,
});

/// Rule type, fixed by the rule's leading characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RuleKind {
    /// `co.uk`: the listed labels are the suffix
    Normal,
    /// `*.ck`: any single label under the listed labels is a suffix
    Wildcard,
    /// `!www.ck`: carves a registrable name out of a wildcard
    Exception,
}

/// PSL section a rule was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Section {
    /// Delegations made by ICANN registries
    #[default]
    Icann,
    /// Suffixes submitted by private parties (`github.io`, `blogspot.com`)
    Private,
}

/// Result of splitting a name at a rule's suffix boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a> {
    /// Labels before the suffix, `None` when the suffix is the whole name
    pub remainder: Option<&'a str>,
    /// The matched suffix, `None` when the name is too short to fill it
    pub suffix: Option<&'a str>,
}

/// A single public suffix rule
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    kind: RuleKind,
    definition: String,
    value: String,
    /// Labels of `value`, root-most first
    labels: Vec<String>,
    section: Section,
}

impl Rule {
    /// Parse a rule definition into an ICANN-section rule.
    pub fn parse(definition: &str) -> Result<Self> {
        Self::parse_in(definition, Section::Icann)
    }

    /// Parse a rule definition read from the given section.
    pub fn parse_in(definition: &str, section: Section) -> Result<Self> {
        let definition = definition.trim().to_lowercase();

        let captures = RULE_PATTERN
            .captures(&definition)
            .ok_or_else(|| PslError::InvalidRule(format!("malformed rule `{}`", definition)))?;

        let kind = match captures.get(1).map(|m| m.as_str()) {
            Some("*.") => RuleKind::Wildcard,
            Some(_) => RuleKind::Exception,
            None => RuleKind::Normal,
        };
        let value = captures[2].to_string();

        if kind == RuleKind::Exception && !value.contains('.') {
            return Err(PslError::InvalidRule(format!(
                "exception rule `{}` needs at least two labels",
                definition
            )));
        }

        let labels = value.rsplit('.').map(str::to_string).collect();

        Ok(Self {
            kind,
            definition,
            value,
            labels,
            section,
        })
    }

    /// The implicit `*` rule: treats the last label of any name as its suffix.
    pub fn default_rule() -> &'static Rule {
        &DEFAULT_RULE
    }

    /// Rule type
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Original rule text (lowercased)
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Definition without its `*.` or `!` marker
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Labels root-most first, e.g. `["uk", "co"]` for `co.uk`
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Section the rule was read from
    pub fn section(&self) -> Section {
        self.section
    }

    /// Check if the rule comes from the PRIVATE section
    pub fn is_private(&self) -> bool {
        self.section == Section::Private
    }

    /// Check the rule against a name's labels, given root-most first.
    ///
    /// Every label the rule lists must equal the name's label at the same
    /// position. Both sides are compared as-is; callers lowercase names.
    pub fn matches<S: AsRef<str>>(&self, labels: &[S]) -> bool {
        labels.len() >= self.labels.len()
            && self
                .labels
                .iter()
                .zip(labels)
                .all(|(rule, label)| rule == label.as_ref())
    }

    /// Number of name labels the rule accounts for when ranking matches.
    /// The wildcard label counts even though it is not written out.
    pub fn length(&self) -> usize {
        match self.kind {
            RuleKind::Normal | RuleKind::Exception => self.labels.len(),
            RuleKind::Wildcard => self.labels.len() + 1,
        }
    }

    /// Split `name` into the labels before the suffix and the suffix itself.
    ///
    /// Only meaningful for names this rule [`matches`](Self::matches).
    pub fn decompose<'a>(&self, name: &'a str) -> Split<'a> {
        let suffix_labels = match self.kind {
            RuleKind::Normal => self.labels.len(),
            RuleKind::Wildcard => self.labels.len() + 1,
            // The leftmost label of an exception belongs to the registrable part
            RuleKind::Exception => self.labels.len().saturating_sub(1),
        };
        split_trailing_labels(name, suffix_labels)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.definition)
    }
}

/// Split off the last `count` labels of `name`.
fn split_trailing_labels(name: &str, count: usize) -> Split<'_> {
    const NO_SUFFIX: Split<'static> = Split {
        remainder: None,
        suffix: None,
    };

    if count == 0 {
        return NO_SUFFIX;
    }

    match name.rmatch_indices('.').nth(count - 1) {
        Some((pos, _)) => Split {
            remainder: Some(&name[..pos]),
            suffix: Some(&name[pos + 1..]),
        },
        None if name.matches('.').count() + 1 == count => Split {
            remainder: None,
            suffix: Some(name),
        },
        None => NO_SUFFIX,
    }
}
