/// Strings whose lengths differ by more than this share of the longer one
/// never count as similar
pub const MAX_LENGTH_DIFF_RATIO: f64 = 0.3;

/// Coarse character-overlap similarity (0-1)
///
/// Counts how many characters of the shorter string occur anywhere in the
/// longer one and divides by the longer length. Position is ignored, so this
/// is a bag-of-characters ratio rather than an edit distance. On equal length
/// the second argument is treated as the longer string, so the score is not
/// symmetric.
///
/// # Returns
/// 0.0 when the lengths differ by more than [`MAX_LENGTH_DIFF_RATIO`] of the
/// longer string, or when both are empty.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    let (longer, longer_len, shorter, shorter_len) = if a_len > b_len {
        (a, a_len, b, b_len)
    } else {
        (b, b_len, a, a_len)
    };

    if longer_len == 0 {
        return 0.0;
    }

    let length_diff = (longer_len - shorter_len) as f64;
    if length_diff > longer_len as f64 * MAX_LENGTH_DIFF_RATIO {
        return 0.0;
    }

    let matches = shorter.chars().filter(|c| longer.contains(*c)).count();

    matches as f64 / longer_len as f64
}
