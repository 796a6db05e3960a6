//! Process-wide default list.
//!
//! Built from the bundled rules on first use. Replacing it swaps an `Arc`,
//! so lookups that already hold the previous list finish against it.

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::info;

use super::SuffixList;

/// Rules compiled into the crate
const BUILTIN_RULES: &str = include_str!("../../data/public_suffix_list.dat");

static DEFAULT_LIST: Lazy<RwLock<Arc<SuffixList>>> =
    Lazy::new(|| RwLock::new(Arc::new(builtin_list())));

/// Build a fresh list from the bundled rules.
pub fn builtin_list() -> SuffixList {
    SuffixList::from_text(BUILTIN_RULES).expect("BUILTIN_RULES: bundled suffix list is invalid")
}

/// The current default list.
pub fn default_list() -> Arc<SuffixList> {
    DEFAULT_LIST.read().clone()
}

/// Replace the default list, returning the previous one.
pub fn set_default_list(list: SuffixList) -> Arc<SuffixList> {
    info!(rules = list.len(), "replacing default public suffix list");
    let list = Arc::new(list);
    std::mem::replace(&mut *DEFAULT_LIST.write(), list)
}

/// Restore the bundled rules as the default list.
pub fn reset_default_list() -> Arc<SuffixList> {
    set_default_list(builtin_list())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{Rule, Section};

    // Tests that swap the default live in tests/default_list_tests.rs so
    // they do not race with lookups in this test binary.

    #[test]
    fn test_builtin_list_parses() {
        let list = builtin_list();
        assert!(!list.is_empty());
        assert!(list.contains(&Rule::parse("co.uk").unwrap()));
        assert!(list.contains(&Rule::parse("!www.ck").unwrap()));
        assert!(list.contains(&Rule::parse_in("github.io", Section::Private).unwrap()));
    }

    #[test]
    fn test_builtin_list_sections() {
        let list = builtin_list();
        assert!(list.iter().any(|r| r.is_private()));
        assert!(list
            .iter()
            .filter(|r| r.definition() == "com")
            .all(|r| r.section() == Section::Icann));
    }

    #[test]
    fn test_default_list_is_shared() {
        let a = default_list();
        let b = default_list();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
