use serde::{Deserialize, Serialize};

/// One aisle of a store catalog and the products it stocks
///
/// `product_text` is the free-form list maintained by the store, usually
/// comma or semicolon separated ("Arroz, feijão; macarrão").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "aisleId")]
    pub aisle_id: u32,
    #[serde(rename = "productText", default)]
    pub product_text: String,
    #[serde(rename = "storeId", default)]
    pub store_id: String,
}

impl CatalogEntry {
    pub fn new(aisle_id: u32, product_text: impl Into<String>, store_id: impl Into<String>) -> Self {
        Self {
            aisle_id,
            product_text: product_text.into(),
            store_id: store_id.into(),
        }
    }
}

/// Which matching tier accepted an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Containment,
    Similarity,
}

impl MatchKind {
    /// Lower is stronger
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            MatchKind::Exact => 0,
            MatchKind::Containment => 1,
            MatchKind::Similarity => 2,
        }
    }
}

/// How the matcher picks among catalog entries that accept an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// The first entry in catalog order with any accepting keyword wins
    #[default]
    FirstMatch,
    /// The entry with the strongest tier wins, catalog order breaking ties
    BestTier,
}

/// Outcome of matching a single item against a catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MatchResult {
    Matched {
        item: String,
        #[serde(rename = "aisleId")]
        aisle_id: u32,
        kind: MatchKind,
    },
    Unmatched {
        item: String,
    },
}

impl MatchResult {
    pub fn item(&self) -> &str {
        match self {
            MatchResult::Matched { item, .. } | MatchResult::Unmatched { item } => item,
        }
    }

    pub fn aisle_id(&self) -> Option<u32> {
        match self {
            MatchResult::Matched { aisle_id, .. } => Some(*aisle_id),
            MatchResult::Unmatched { .. } => None,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, MatchResult::Matched { .. })
    }
}

/// An aisle stop on the shopping route
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    #[serde(rename = "aisleId")]
    pub aisle_id: u32,
    pub items: Vec<String>,
}

/// Ordered aisle stops plus the items no aisle claimed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub entries: Vec<RouteEntry>,
    pub unmatched: Vec<String>,
}

impl Route {
    pub fn aisle_order(&self) -> Vec<u32> {
        self.entries.iter().map(|e| e.aisle_id).collect()
    }

    pub fn matched_count(&self) -> usize {
        self.entries.iter().map(|e| e.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.unmatched.is_empty()
    }
}

/// Matching thresholds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchingConfig {
    /// Minimum bag-of-characters similarity for a fuzzy match
    pub similarity_threshold: f64,
    /// Catalog tokens shorter than this never become keywords
    pub min_keyword_len: usize,
    pub policy: MatchPolicy,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.6,
            min_keyword_len: crate::core::normalizer::MIN_KEYWORD_LEN,
            policy: MatchPolicy::FirstMatch,
        }
    }
}

/// A run of aisles whose shelving faces a mirrored run
///
/// Aisle `n` in `[start, end]` sits next to `sum - n` as well as its numeric
/// neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorBlock {
    pub start: u32,
    pub end: u32,
    pub sum: u32,
}

impl MirrorBlock {
    #[inline]
    pub fn contains(&self, aisle: u32) -> bool {
        aisle >= self.start && aisle <= self.end
    }

    #[inline]
    pub fn mirror(&self, aisle: u32) -> i64 {
        self.sum as i64 - aisle as i64
    }
}

impl Default for MirrorBlock {
    fn default() -> Self {
        Self {
            start: 25,
            end: 81,
            sum: 106,
        }
    }
}

/// Physical layout of a store, as far as routing cares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreLayout {
    pub mirror_block: Option<MirrorBlock>,
}

impl Default for StoreLayout {
    fn default() -> Self {
        Self::with_mirror_block(MirrorBlock::default())
    }
}

impl StoreLayout {
    /// Plain numeric layout with no mirrored block
    pub fn linear() -> Self {
        Self { mirror_block: None }
    }

    pub fn with_mirror_block(block: MirrorBlock) -> Self {
        Self {
            mirror_block: Some(block),
        }
    }
}
