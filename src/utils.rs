use crate::constants::{LOWER_BOUND, UPPER_BOUND};

/// Returns `true` when every character of `text` lies inside the cipher
/// alphabet. The empty string is vacuously in bounds.
pub fn is_in_alphabet(text: &str) -> bool {
    text.chars().all(|c| (LOWER_BOUND..=UPPER_BOUND).contains(&c))
}

/// Finalizes a shifted code point into a `char`. Values no `char` can
/// hold (negative, surrogate, past U+10FFFF) are only reachable on the
/// unvalidated paths with keys beyond one alphabet period; they become
/// U+FFFD.
pub(crate) fn char_from_code(code: i64) -> char {
    u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_in_alphabet() {
        assert!(is_in_alphabet("HELLO WORLD_"));
        assert!(is_in_alphabet(" "));
        assert!(is_in_alphabet("_"));
        assert!(!is_in_alphabet("hello"));
        assert!(!is_in_alphabet("HELLO\n"));
        assert!(!is_in_alphabet("caf\u{e9}"));
    }

    #[test]
    fn test_empty_string_is_in_alphabet() {
        assert!(is_in_alphabet(""));
    }

    #[test]
    fn test_char_from_code() {
        assert_eq!(char_from_code(0x41), 'A');
        assert_eq!(char_from_code(-1), char::REPLACEMENT_CHARACTER);
        assert_eq!(char_from_code(0xD800), char::REPLACEMENT_CHARACTER);
    }
}
