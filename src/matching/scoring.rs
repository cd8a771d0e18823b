//! Token-order-insensitive string similarity.

use rapidfuzz::distance::indel;

/// Similarity of `a` and `b` on a 0-100 scale, ignoring word order.
///
/// Both strings are split on whitespace, their tokens sorted and re-joined
/// with single spaces. The sorted forms are compared with the normalized
/// insertion/deletion similarity:
///
/// ```text
/// 100 * (1 - indel_distance(a, b) / (len(a) + len(b)))
/// ```
///
/// counted in characters. Two empty strings score 100.
///
/// # Examples
///
/// ```
/// use breed_resolver::matching::scoring::token_sort_similarity;
///
/// assert_eq!(token_sort_similarity("retriever golden", "golden retriever"), 100.0);
/// assert!(token_sort_similarity("havana", "havanese") > 71.0);
/// ```
#[must_use]
pub fn token_sort_similarity(a: &str, b: &str) -> f64 {
    let a = sorted_tokens(a);
    let b = sorted_tokens(b);
    indel::normalized_similarity(a.chars(), b.chars()) * 100.0
}

/// [`token_sort_similarity`] rounded to the nearest integer.
///
/// # Examples
///
/// ```
/// use breed_resolver::matching::scoring::token_sort_ratio;
///
/// assert_eq!(token_sort_ratio("havana", "havanese"), 71);
/// ```
#[must_use]
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    to_score(token_sort_similarity(a, b))
}

/// Round a 0-100 similarity to the integer score reported to callers
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Clamped to 0-100
pub fn to_score(similarity: f64) -> u8 {
    similarity.round().clamp(0.0, 100.0) as u8
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings() {
        assert_eq!(token_sort_ratio("beagle", "beagle"), 100);
    }

    #[test]
    fn test_token_order_is_ignored() {
        assert_eq!(
            token_sort_ratio("retriever labrador", "labrador retriever"),
            100
        );
        assert_eq!(token_sort_ratio("hair  short", "short hair"), 100);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(token_sort_ratio("", ""), 100);
        assert_eq!(token_sort_ratio("abc", ""), 0);
        assert_eq!(token_sort_ratio("", "abc"), 0);
    }

    #[test]
    fn test_known_scores() {
        // lcs 4 over 11 chars -> 72.7
        assert_eq!(token_sort_ratio("beagle", "bagel"), 73);
        // lcs 5 over 14 chars -> 71.4
        assert_eq!(token_sort_ratio("havana", "havanese"), 71);
        // lcs 7 over 20 chars -> exactly 70
        assert_eq!(token_sort_ratio("havanes pups", "havanese"), 70);
        assert_eq!(token_sort_ratio("german shepard", "german shepherd"), 90);
        assert_eq!(token_sort_ratio("bulldog", "french bulldog"), 67);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            ("maine coon", "main coon"),
            ("siamese", "siamse"),
            ("golden retriever", "goldn retriever"),
        ];
        for (a, b) in pairs {
            assert_eq!(token_sort_ratio(a, b), token_sort_ratio(b, a), "{a} / {b}");
        }
    }

    #[test]
    fn test_disjoint_strings() {
        assert_eq!(token_sort_ratio("xyz", "abc"), 0);
    }

    #[test]
    fn test_unicode_chars_count_once() {
        assert_eq!(token_sort_ratio("löwchen", "löwchen"), 100);
        // one substituted char: lcs 6 over 14
        assert_eq!(token_sort_ratio("lowchen", "löwchen"), 86);
    }

    #[test]
    fn test_similarity_is_unrounded() {
        // lcs 19 over 54 chars -> 70.37
        let raw = token_sort_similarity(
            "abcdefghijklmnopqrsz",
            "abcdefghijklmnopqrsxxxxxxxxxxxxxxx",
        );
        assert!(raw > 70.0 && raw < 70.5, "{raw}");
        assert_eq!(to_score(raw), 70);
    }

    #[test]
    fn test_score_rounding() {
        assert_eq!(to_score(72.5), 73);
        assert_eq!(to_score(72.49), 72);
        assert_eq!(to_score(0.0), 0);
        assert_eq!(to_score(100.0), 100);
    }
}
