use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;

use crate::decomposer::decompose;
use crate::error::{PslError, Result};
use crate::list::SuffixList;
use crate::normalizer::normalize;
use crate::types::{DecomposedDomain, LookupOptions};

/// Default LRU cache size
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Cached outcome of a lookup for a normalized name
#[derive(Debug, Clone)]
enum CacheValue {
    Found(DecomposedDomain),
    NotAllowed,
    Unlisted,
}

/// Suffix list with an LRU cache of lookup results.
///
/// Normalization runs on every call; rule selection and decomposition
/// only run on cache misses.
pub struct CachedSuffixList {
    list: Arc<SuffixList>,
    options: LookupOptions,
    cache: Mutex<LruCache<String, CacheValue>>,
}

impl CachedSuffixList {
    /// Create a cached front-end for `list` with default lookup options.
    pub fn new(list: Arc<SuffixList>, cache_size: usize) -> Self {
        Self::with_options(list, LookupOptions::default(), cache_size)
    }

    /// Create a cached front-end using fixed lookup options.
    pub fn with_options(list: Arc<SuffixList>, options: LookupOptions, cache_size: usize) -> Self {
        let cache_size = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            list,
            options,
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// The underlying list
    pub fn list(&self) -> &Arc<SuffixList> {
        &self.list
    }

    /// Split a raw host name into suffix, registrable label and subdomain.
    pub fn parse(&self, raw: &str) -> Result<DecomposedDomain> {
        let name = normalize(raw)?;

        let mut cache = self.cache.lock();

        let value = match cache.get(name.as_str()) {
            Some(cached) => cached.clone(),
            None => {
                // Lookups are CPU-only, computing under the lock avoids
                // several threads filling the same key.
                let value = match self
                    .list
                    .find_rule(&name, &self.options)
                    .and_then(|rule| decompose(&name, rule))
                {
                    Ok(domain) => CacheValue::Found(domain),
                    Err(PslError::NameNotAllowed { .. }) => CacheValue::NotAllowed,
                    Err(PslError::UnlistedSuffix { .. }) => CacheValue::Unlisted,
                    Err(other) => return Err(other),
                };
                cache.put(name.as_str().to_string(), value.clone());
                value
            }
        };
        drop(cache);

        match value {
            CacheValue::Found(domain) => Ok(domain),
            CacheValue::NotAllowed => Err(PslError::NameNotAllowed {
                name: name.into_string(),
            }),
            CacheValue::Unlisted => Err(PslError::UnlistedSuffix {
                name: name.into_string(),
            }),
        }
    }

    /// Check whether `raw` is a name with a registrable part.
    pub fn is_valid(&self, raw: &str) -> bool {
        self.parse(raw).is_ok()
    }

    /// Registrable domain (`sld.tld`) of `raw`, if any.
    pub fn registrable_domain(&self, raw: &str) -> Option<String> {
        self.parse(raw).ok().and_then(|d| d.domain())
    }

    /// Get the number of cached names
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Clear the cache
    pub fn clear_cache(&self) {
        let mut cache = self.cache.lock();
        cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    fn cached(cache_size: usize) -> CachedSuffixList {
        let list = SuffixList::from_text("com\nuk\nco.uk\n*.ke").unwrap();
        CachedSuffixList::new(Arc::new(list), cache_size)
    }

    #[test]
    fn test_cached_parse_matches_uncached() {
        let c = cached(DEFAULT_CACHE_SIZE);
        for raw in ["google.com", "www.google.co.uk", "co.uk", "nic.ke", "example.org"] {
            let expected = c.list().parse(raw).ok();
            assert_eq!(c.parse(raw).ok(), expected, "first lookup of {}", raw);
            assert_eq!(c.parse(raw).ok(), expected, "cached lookup of {}", raw);
        }
    }

    #[test]
    fn test_cache_keys_on_normalized_name() {
        let c = cached(DEFAULT_CACHE_SIZE);
        c.parse("Google.COM.").unwrap();
        c.parse("google.com").unwrap();
        assert_eq!(c.cached_len(), 1);
    }

    #[test]
    fn test_cache_keeps_rejections() {
        let c = cached(DEFAULT_CACHE_SIZE);
        assert!(matches!(c.parse("co.uk"), Err(PslError::NameNotAllowed { .. })));
        assert_eq!(c.cached_len(), 1);
        match c.parse("CO.UK") {
            Err(PslError::NameNotAllowed { name }) => assert_eq!(name, "co.uk"),
            other => panic!("expected NameNotAllowed, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_names_are_not_cached() {
        let c = cached(DEFAULT_CACHE_SIZE);
        assert!(c.parse("http://x.com").is_err());
        assert!(c.parse("").is_err());
        assert_eq!(c.cached_len(), 0);
    }

    #[test]
    fn test_unlisted_with_options() {
        let list = SuffixList::from_text("com").unwrap();
        let opts = LookupOptions::new().with_default_rule(None);
        let c = CachedSuffixList::with_options(Arc::new(list), opts, 8);
        assert!(matches!(c.parse("a.test"), Err(PslError::UnlistedSuffix { .. })));
        assert!(matches!(c.parse("a.test"), Err(PslError::UnlistedSuffix { .. })));
        assert!(c.is_valid("a.com"));
    }

    #[test]
    fn test_custom_default_skips_non_matching_names() {
        let list = SuffixList::from_text("com").unwrap();
        let opts = LookupOptions::new().with_default_rule(Some(Rule::parse("*.test").unwrap()));
        let c = CachedSuffixList::with_options(Arc::new(list), opts, 8);

        for _ in 0..2 {
            assert!(matches!(
                c.parse("a.b.example.org"),
                Err(PslError::UnlistedSuffix { .. })
            ));
        }
        let d = c.parse("www.shop.test").unwrap();
        assert_eq!(d.tld, "shop.test");
        assert_eq!(d.sld.as_deref(), Some("www"));
    }

    #[test]
    fn test_cache_evicts_and_clears() {
        let c = cached(2);
        c.parse("a.com").unwrap();
        c.parse("b.com").unwrap();
        c.parse("c.com").unwrap();
        assert_eq!(c.cached_len(), 2);
        c.clear_cache();
        assert_eq!(c.cached_len(), 0);
    }

    #[test]
    fn test_zero_cache_size_still_works() {
        let c = cached(0);
        assert_eq!(c.registrable_domain("www.google.co.uk").as_deref(), Some("google.co.uk"));
    }
}
