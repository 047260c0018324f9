//! The alphabet of the tree: 26 lowercase ASCII letters.
//!
//! Every fragment stored in a [`RadixNode`](super::RadixNode) is made only of these
//! letters, so fragments can be sliced by byte offset without landing inside a
//! multi-byte character.

/// Number of child slots per node, one for each letter `a` through `z`.
pub const ALPHABET_LEN: usize = 26;

/// Returns the child slot for `letter`, or `None` if it is not in `a..=z`.
#[inline]
pub fn slot(letter: char) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| usize::from(letter as u8 - b'a'))
}

/// Returns the letter that owns child slot `index`.
///
/// Panics if `index` is not below [`ALPHABET_LEN`].
#[inline]
pub fn letter(index: usize) -> char {
    assert!(index < ALPHABET_LEN, "slot {index} is outside the alphabet");
    char::from(b'a' + index as u8)
}

/// Returns the child slot of the first letter of `s`.
#[inline]
pub(crate) fn first_slot(s: &str) -> Option<usize> {
    s.chars().next().and_then(slot)
}

/// Lowercases `word` and returns it if every character is a letter of the alphabet.
///
/// On failure the first offending character is returned instead. The empty string
/// is accepted; callers decide what an empty word means.
pub(crate) fn normalize(word: &str) -> Result<String, char> {
    let lower = word.to_lowercase();
    match lower.chars().find(|&ch| slot(ch).is_none()) {
        Some(bad) => Err(bad),
        None => Ok(lower),
    }
}

/// Lowercases `word` and cuts it before the first character outside the alphabet.
pub(crate) fn alphabetic_prefix(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .take_while(|&ch| slot(ch).is_some())
        .collect()
}

/// Length in bytes of the longest common prefix of `a` and `b`.
///
/// Both strings are compared byte by byte; as soon as one of them holds a
/// non-ASCII byte the match stops, so the result is always a char boundary
/// in both strings when one of them is alphabetic.
#[inline]
pub(crate) fn common_prefix_len(a: &str, b: &str) -> usize {
    a.bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y && x.is_ascii())
        .count()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn slots_cover_the_alphabet() {
        assert_eq!(slot('a'), Some(0));
        assert_eq!(slot('z'), Some(ALPHABET_LEN - 1));
        assert_eq!(slot('A'), None);
        assert_eq!(slot('é'), None);
        assert_eq!(slot('\''), None);
        for index in 0..ALPHABET_LEN {
            assert_eq!(slot(letter(index)), Some(index));
        }
    }

    #[test]
    fn normalize_lowercases() {
        assert_eq!(normalize("CaRe"), Ok("care".to_string()));
        assert_eq!(normalize(""), Ok(String::new()));
    }

    #[test]
    fn normalize_reports_first_bad_letter() {
        assert_eq!(normalize("don't"), Err('\''));
        assert_eq!(normalize("Åland"), Err('å'));
        assert_eq!(normalize("abc1"), Err('1'));
    }

    #[test]
    fn alphabetic_prefix_stops_at_bad_letter() {
        assert_eq!(alphabetic_prefix("Cart's"), "cart");
        assert_eq!(alphabetic_prefix("1cart"), "");
        assert_eq!(alphabetic_prefix("cart"), "cart");
    }

    #[test]
    fn common_prefix() {
        assert_eq!(common_prefix_len("care", "car"), 3);
        assert_eq!(common_prefix_len("car", "care"), 3);
        assert_eq!(common_prefix_len("cat", "dog"), 0);
        assert_eq!(common_prefix_len("", "dog"), 0);
        assert_eq!(common_prefix_len("café", "cafe"), 3);
    }
}
