use thiserror::Error;

/// Classifies why a raw name could not be normalized, for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidNameKind {
    /// Nothing left after trimming and removing the trailing dot
    EmptyName,
    /// Name starts with `.`
    LeadingDot,
    /// Name contains `://`, i.e. a URL was passed instead of a host
    ContainsScheme,
}

impl InvalidNameKind {
    fn describe(&self) -> &'static str {
        match self {
            InvalidNameKind::EmptyName => "name is blank",
            InvalidNameKind::LeadingDot => "name starts with a dot",
            InvalidNameKind::ContainsScheme => "name contains a scheme",
        }
    }
}

/// PSL engine error types
#[derive(Error, Debug)]
pub enum PslError {
    #[error("Invalid name `{name}`: {}", .kind.describe())]
    NameInvalid { name: String, kind: InvalidNameKind },

    #[error("`{name}` is a public suffix and not allowed as a domain")]
    NameNotAllowed { name: String },

    #[error("`{name}` has no matching suffix rule")]
    UnlistedSuffix { name: String },

    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    #[error("Parse error at line {line}: {message}")]
    ParseErrorAtLine { line: usize, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PslError {
    /// The normalization failure kind, if this is a `NameInvalid` error.
    pub fn invalid_name_kind(&self) -> Option<InvalidNameKind> {
        match self {
            PslError::NameInvalid { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PslError>;
