use unicode_normalization::UnicodeNormalization;

/// Catalog tokens shorter than this are not used as keywords
pub const MIN_KEYWORD_LEN: usize = 3;

/// Either side of a containment check must be longer than this
pub const MIN_CONTAINMENT_LEN: usize = 2;

#[inline]
fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Decompose, strip combining marks and lowercase
fn fold(input: &str) -> impl Iterator<Item = char> + '_ {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Canonical comparison token for an item or keyword
///
/// "Feijão Preto!" -> "feijaopreto"
pub fn normalize(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    fold(input)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Like [`normalize`] but keeps whitespace so the result can still be split
/// into words
///
/// "Detergente em pó, 500ml" -> "detergente em po 500ml"
pub fn normalize_keyword(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let folded: String = fold(input)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect();

    folded.trim().to_string()
}

/// Whether a normalized token can serve as a catalog keyword
#[inline]
pub fn is_keyword(token: &str, min_len: usize) -> bool {
    token.len() >= min_len && !token.bytes().all(|b| b.is_ascii_digit())
}
