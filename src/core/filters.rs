use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::core::{
    matcher::Matcher,
    normalizer::{normalize, normalize_keyword, MIN_CONTAINMENT_LEN},
    similarity::similarity,
};
use crate::models::CatalogEntry;

/// Extracted receipt words longer than this are kept even without a
/// catalog counterpart
const MIN_UNRECOGNIZED_WORD_LEN: usize = 4;

/// A run of at least three capitals, as product lines on receipts are printed
static PRODUCT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-ZÇÃÕÊÉÁÍÓÚÂÔÀ]{3,}").expect("valid product line regex"));

static HEADER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(CNPJ|IE|RUA|TOTAL|PROTOCOLO|CONSUMIDOR|QTD|VALOR)\b")
        .expect("valid header regex")
});

static BARCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{13}").expect("valid barcode regex"));

static QUANTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d+\sUN").expect("valid quantity regex"));

static PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+[.,]\d{2}").expect("valid price regex"));

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\s+").expect("valid leading number regex"));

static WORD_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s/-]+").expect("valid separator regex"));

/// Validate a raw item list once at the boundary
///
/// Blank entries are dropped and the rest trimmed. Case and accents are
/// left untouched.
pub fn sanitize_items<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.as_ref().trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pull candidate product words out of OCR text from a receipt
///
/// Keeps lines that look like product lines and are not headers, strips
/// barcodes, quantities, prices and leading item numbers, then splits the
/// remainder into normalized words longer than two characters.
pub fn extract_receipt_items(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| PRODUCT_LINE.is_match(line) && !HEADER_LINE.is_match(line))
        .flat_map(|line| {
            let line = BARCODE.replace_all(line, "");
            let line = QUANTITY.replace_all(&line, "");
            let line = PRICE.replace_all(&line, "");
            let line = LEADING_NUMBER.replace_all(line.trim_start(), "");

            WORD_SEPARATOR
                .split(line.trim())
                .map(normalize)
                .filter(|word| word.len() > MIN_CONTAINMENT_LEN)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Narrow extracted receipt words down to likely products
///
/// A word is kept when it resembles a catalog keyword (similarity or
/// containment) or is long enough to be a product name on its own.
/// Duplicates are removed. If nothing survives the original words are
/// returned unchanged.
pub fn refine_receipt_words(
    words: &[String],
    catalog: &[CatalogEntry],
    matcher: &Matcher,
) -> Vec<String> {
    let keywords = matcher.catalog_keywords(catalog);
    let threshold = matcher.config().similarity_threshold;

    let mut seen = HashSet::new();
    let mut refined = Vec::new();

    for word in words.iter().filter(|w| !w.is_empty()) {
        let known = keywords.iter().any(|keyword| {
            similarity(word, keyword) >= threshold
                || (keyword.len() > MIN_CONTAINMENT_LEN && word.contains(keyword.as_str()))
                || (word.len() > MIN_CONTAINMENT_LEN && keyword.contains(word.as_str()))
        });

        if (known || word.len() > MIN_UNRECOGNIZED_WORD_LEN) && seen.insert(word.as_str()) {
            refined.push(word.clone());
        }
    }

    if refined.is_empty() {
        tracing::debug!("No receipt word resembles the catalog, keeping all {}", words.len());
        return words.to_vec();
    }

    refined
}

/// Catalog entries whose product text mentions `query`
///
/// Comparison ignores case and accents. A blank query returns every entry.
pub fn search_aisles<'a>(catalog: &'a [CatalogEntry], query: &str) -> Vec<&'a CatalogEntry> {
    let needle = normalize_keyword(query);
    if needle.is_empty() {
        return catalog.iter().collect();
    }

    catalog
        .iter()
        .filter(|entry| normalize_keyword(&entry.product_text).contains(&needle))
        .collect()
}
