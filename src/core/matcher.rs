use crate::models::{CatalogEntry, MatchKind, MatchPolicy, MatchResult, MatchingConfig};
use crate::core::{
    normalizer::{is_keyword, normalize, MIN_CONTAINMENT_LEN},
    similarity::similarity,
};

/// Item-to-aisle matcher
///
/// Scans catalog entries in iteration order. Under [`MatchPolicy::FirstMatch`]
/// it stops at the first entry with a keyword that accepts the item; under
/// [`MatchPolicy::BestTier`] it prefers the entry accepting through the
/// strongest tier.
///
/// # Tiers
/// 1. Exact token equality
/// 2. Containment in either direction (contained side longer than 2 chars)
/// 3. Character-overlap similarity at or above the configured threshold
#[derive(Debug, Clone)]
pub struct Matcher {
    config: MatchingConfig,
}

impl Matcher {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn with_default_config() -> Self {
        Self {
            config: MatchingConfig::default(),
        }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Split a catalog product text into normalized keywords
    ///
    /// Pieces are separated by commas, semicolons or whitespace. Pieces that
    /// normalize to something shorter than `min_keyword_len`, or to digits
    /// only, are dropped.
    pub fn keywords(&self, product_text: &str) -> Vec<String> {
        product_text
            .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
            .map(normalize)
            .filter(|token| is_keyword(token, self.config.min_keyword_len))
            .collect()
    }

    /// Keywords of every entry in a catalog, in catalog order
    pub fn catalog_keywords(&self, catalog: &[CatalogEntry]) -> Vec<String> {
        catalog
            .iter()
            .flat_map(|entry| self.keywords(&entry.product_text))
            .collect()
    }

    /// Decide which tier, if any, accepts a normalized item against one keyword
    #[inline]
    pub fn match_keyword(&self, clean_item: &str, keyword: &str) -> Option<MatchKind> {
        if clean_item == keyword {
            return Some(MatchKind::Exact);
        }

        if (keyword.len() > MIN_CONTAINMENT_LEN && clean_item.contains(keyword))
            || (clean_item.len() > MIN_CONTAINMENT_LEN && keyword.contains(clean_item))
        {
            return Some(MatchKind::Containment);
        }

        if similarity(clean_item, keyword) >= self.config.similarity_threshold {
            return Some(MatchKind::Similarity);
        }

        None
    }

    /// Strongest tier by which any keyword of `entry` accepts `clean_item`
    fn match_entry(&self, clean_item: &str, entry: &CatalogEntry) -> Option<MatchKind> {
        if entry.product_text.trim().is_empty() {
            return None;
        }

        self.keywords(&entry.product_text)
            .iter()
            .filter_map(|keyword| self.match_keyword(clean_item, keyword))
            .min_by_key(|kind| kind.rank())
    }

    fn find_entry<'a>(
        &self,
        clean_item: &str,
        catalog: &'a [CatalogEntry],
    ) -> Option<(&'a CatalogEntry, MatchKind)> {
        let mut candidates = catalog
            .iter()
            .filter_map(|entry| self.match_entry(clean_item, entry).map(|kind| (entry, kind)));

        match self.config.policy {
            MatchPolicy::FirstMatch => candidates.next(),
            MatchPolicy::BestTier => {
                let mut best: Option<(&CatalogEntry, MatchKind)> = None;
                for (entry, kind) in candidates {
                    if kind == MatchKind::Exact {
                        return Some((entry, kind));
                    }
                    if best.map_or(true, |(_, current)| kind.rank() < current.rank()) {
                        best = Some((entry, kind));
                    }
                }
                best
            }
        }
    }

    /// Find the aisle stocking `item`
    ///
    /// Blank items are never matched. The returned result carries `item`
    /// exactly as given.
    pub fn match_item(&self, item: &str, catalog: &[CatalogEntry]) -> MatchResult {
        if item.trim().is_empty() {
            return MatchResult::Unmatched {
                item: item.to_string(),
            };
        }

        let clean_item = normalize(item);

        if let Some((entry, kind)) = self.find_entry(&clean_item, catalog) {
            tracing::debug!(
                "Matched '{}' to aisle {} ({:?})",
                item,
                entry.aisle_id,
                kind
            );
            return MatchResult::Matched {
                item: item.to_string(),
                aisle_id: entry.aisle_id,
                kind,
            };
        }

        tracing::debug!("No aisle found for '{}'", item);

        MatchResult::Unmatched {
            item: item.to_string(),
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_config()
    }
}
