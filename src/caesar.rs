//! Caesar module: shift-cipher over ASCII letters
//!
//! Shifts letters by a fixed amount mod 26, preserving case. Everything
//! that is not an ASCII letter (spaces, digits, punctuation) passes through
//! unchanged, so the output lines up with the input character for character.

/// Encrypt text by shifting each letter `shift` places forward.
///
/// The shift may be negative or larger than 26; it is reduced mod 26.
pub fn encrypt(text: &str, shift: i32) -> String {
    let shift = shift.rem_euclid(26) as u8;
    text.chars()
        .map(|ch| match ch {
            'a'..='z' => ((ch as u8 - b'a' + shift) % 26 + b'a') as char,
            'A'..='Z' => ((ch as u8 - b'A' + shift) % 26 + b'A') as char,
            other => other,
        })
        .collect()
}

/// Decrypt text by shifting each letter `shift` places backward
pub fn decrypt(text: &str, shift: i32) -> String {
    encrypt(text, -shift)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_basic_shift() {
        assert_eq!(encrypt("abc", 3), "def");
        assert_eq!(encrypt("ABC", 3), "DEF");
    }

    #[test]
    fn test_encrypt_wraps_around() {
        assert_eq!(encrypt("xyz", 3), "abc");
        assert_eq!(encrypt("XYZ", 3), "ABC");
    }

    #[test]
    fn test_encrypt_preserves_non_letters() {
        assert_eq!(encrypt("Hello, World! 42", 5), "Mjqqt, Btwqi! 42");
    }

    #[test]
    fn test_encrypt_zero_shift_is_identity() {
        assert_eq!(encrypt("Hello", 0), "Hello");
        assert_eq!(encrypt("Hello", 26), "Hello");
    }

    #[test]
    fn test_negative_shift() {
        assert_eq!(encrypt("def", -3), "abc");
        assert_eq!(encrypt("abc", -3), "xyz");
    }

    #[test]
    fn test_large_shift_reduces_mod_26() {
        assert_eq!(encrypt("abc", 29), encrypt("abc", 3));
        assert_eq!(encrypt("abc", -29), encrypt("abc", -3));
    }

    #[test]
    fn test_decrypt_inverts_encrypt() {
        let text = "The quick brown fox jumps over the lazy dog.";
        for shift in [-7, 0, 1, 13, 25, 100] {
            assert_eq!(decrypt(&encrypt(text, shift), shift), text);
        }
    }
}
