use crate::Identifier;
use crate::error::{Result, ShortyError};

/// Digit alphabet; a character's index is its digit value.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

const BASE: Identifier = 62;

/// Digit value of `c`, or `None` if it is outside the alphabet.
pub const fn digit_value(c: char) -> Option<u8> {
    match c {
        'A'..='Z' => Some(c as u8 - b'A'),
        'a'..='z' => Some(c as u8 - b'a' + 26),
        '0'..='9' => Some(c as u8 - b'0' + 52),
        _ => None,
    }
}

/// Returns true if `code` is non-empty and made only of alphabet characters.
pub fn is_valid_code(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|c| digit_value(c).is_some())
}

/// Encode an identifier as a base62 short code, most significant digit first.
///
/// Zero encodes to the first alphabet character.
pub fn encode(id: Identifier) -> String {
    if id == 0 {
        return char::from(ALPHABET[0]).to_string();
    }
    let mut digits = Vec::new();
    let mut v = id;
    while v > 0 {
        #[allow(clippy::cast_possible_truncation)]
        digits.push(ALPHABET[(v % BASE) as usize]);
        v /= BASE;
    }
    digits.iter().rev().map(|&d| char::from(d)).collect()
}

/// Decode a base62 short code back into its identifier.
///
/// Leading zero digits are accepted, so `"AAB"` and `"B"` both decode to 1.
///
/// # Errors
///
/// Returns `EmptyCode` for an empty string, `InvalidCharacter` for the first
/// character outside the alphabet, and `Overflow` if the value does not fit
/// in 64 bits.
pub fn decode(code: &str) -> Result<Identifier> {
    if code.is_empty() {
        return Err(ShortyError::EmptyCode);
    }

    let mut id: Identifier = 0;
    for (position, character) in code.chars().enumerate() {
        let digit =
            digit_value(character).ok_or(ShortyError::InvalidCharacter { character, position })?;
        id = id
            .checked_mul(BASE)
            .and_then(|v| v.checked_add(Identifier::from(digit)))
            .ok_or_else(|| ShortyError::Overflow {
                code: code.to_string(),
            })?;
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_alphabet_is_62_distinct() {
        let mut seen = std::collections::HashSet::new();
        for &c in ALPHABET {
            assert!(seen.insert(c), "duplicate alphabet character: {}", c as char);
        }
        assert_eq!(seen.len(), 62);
    }

    #[test]
    fn test_digit_value_matches_alphabet_position() {
        for (index, &c) in ALPHABET.iter().enumerate() {
            assert_eq!(digit_value(char::from(c)), Some(u8::try_from(index).unwrap()));
        }
    }

    #[test]
    fn test_digit_value_rejects_outsiders() {
        for c in ['$', '-', '_', ' ', '/', '.', 'é', '\u{1F600}'] {
            assert_eq!(digit_value(c), None);
        }
    }

    #[test]
    fn test_encode_zero() {
        assert_eq!(encode(0), "A");
    }

    #[test]
    fn test_encode_single_digits() {
        assert_eq!(encode(1), "B");
        assert_eq!(encode(25), "Z");
        assert_eq!(encode(26), "a");
        assert_eq!(encode(52), "0");
        assert_eq!(encode(61), "9");
    }

    #[test]
    fn test_encode_carries() {
        assert_eq!(encode(62), "BA");
        assert_eq!(encode(3843), "99"); // 62*62-1
        assert_eq!(encode(3844), "BAA");
    }

    #[test]
    fn test_encode_hash_range_bounds() {
        assert_eq!(encode(2_147_483_647), "CVUmlB");
        assert_eq!(encode(2_147_483_648), "CVUmlC");
    }

    #[test]
    fn test_encode_u64_max_round_trips() {
        assert_eq!(decode(&encode(u64::MAX)), Ok(u64::MAX));
    }

    #[test]
    fn test_decode_known_values() {
        assert_eq!(decode("A"), Ok(0));
        assert_eq!(decode("B"), Ok(1));
        assert_eq!(decode("9"), Ok(61));
        assert_eq!(decode("BA"), Ok(62));
        assert_eq!(decode("CVUmlC"), Ok(2_147_483_648));
    }

    #[test]
    fn test_decode_is_case_sensitive() {
        assert_ne!(decode("abc"), decode("ABC"));
    }

    #[test]
    fn test_decode_invalid_character() {
        assert_eq!(
            decode("ABC$123"),
            Err(ShortyError::InvalidCharacter {
                character: '$',
                position: 3,
            })
        );
    }

    #[test]
    fn test_decode_reports_first_invalid_character() {
        assert_eq!(
            decode("-a_b"),
            Err(ShortyError::InvalidCharacter {
                character: '-',
                position: 0,
            })
        );
    }

    #[test]
    fn test_decode_non_ascii_position_counts_chars() {
        assert_eq!(
            decode("aéb"),
            Err(ShortyError::InvalidCharacter {
                character: 'é',
                position: 1,
            })
        );
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(""), Err(ShortyError::EmptyCode));
    }

    #[test]
    fn test_decode_overflow() {
        let code = "9".repeat(20);
        assert_eq!(
            decode(&code),
            Err(ShortyError::Overflow { code: code.clone() })
        );
    }

    #[test]
    fn test_leading_zero_digits_keep_value_not_text() {
        assert_eq!(decode("AAB"), Ok(1));
        assert_eq!(decode("AAB"), decode("B"));
        assert_eq!(encode(decode("AAB").unwrap()), "B");
        assert_eq!(encode(decode("AAAA").unwrap()), "A");
    }

    #[test]
    fn test_is_valid_code() {
        assert!(is_valid_code("A"));
        assert!(is_valid_code("CVUmlC"));
        assert!(!is_valid_code(""));
        assert!(!is_valid_code("ABC$123"));
        assert!(!is_valid_code("ab/cd"));
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(n in 0u64..(1 << 31)) {
            prop_assert_eq!(decode(&encode(n)), Ok(n));
        }

        #[test]
        fn prop_decode_inverts_encode_full_range(n in any::<u64>()) {
            prop_assert_eq!(decode(&encode(n)), Ok(n));
        }

        #[test]
        fn prop_encode_never_empty_and_valid(n in any::<u64>()) {
            let code = encode(n);
            prop_assert!(!code.is_empty());
            prop_assert!(is_valid_code(&code));
        }

        #[test]
        fn prop_encode_is_canonical(n in 1u64..u64::MAX) {
            prop_assert!(!encode(n).starts_with('A'));
        }

        #[test]
        fn prop_reencode_strips_leading_zero_digits(s in "[A-Za-z0-9]{1,10}") {
            let value = decode(&s).unwrap();
            let canonical = encode(value);
            let stripped = s.trim_start_matches('A');
            let expected = if stripped.is_empty() { "A" } else { stripped };
            prop_assert_eq!(canonical.as_str(), expected);
            prop_assert_eq!(decode(&canonical), Ok(value));
        }
    }
}
