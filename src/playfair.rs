//! Playfair module: 5x5 key-square digraph substitution
//!
//! Implements the classic Playfair rules: build a key square from a key
//! phrase, split the plaintext into digraphs (inserting a filler letter for
//! doubled letters and odd lengths), then substitute each pair by the
//! row/column/rectangle rules.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The 25-letter Playfair alphabet: a-z with `j` merged into `i`.
const ALPHABET: [char; 25] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't',
    'u', 'v', 'w', 'x', 'y', 'z',
];

/// Default filler letter inserted between doubled letters and after a
/// trailing odd letter.
pub const DEFAULT_FILLER: char = 'x';

/// Errors from Playfair operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A character outside the 25-letter alphabet was looked up in the
    /// square. Cannot occur for normalized input.
    #[error("letter {0:?} is not in the key square")]
    LetterNotInSquare(char),

    /// Ciphertext passed to decrypt had an odd number of characters.
    #[error("ciphertext must have an even length, got {0} characters")]
    UnevenCiphertext(usize),
}

/// Lowercase, keep letters only, replace `j` with `i` (Playfair convention).
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .map(|c| if c == 'j' { 'i' } else { c })
        .collect()
}

/// The 5x5 key square: each of the 25 usable letters exactly once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySquare {
    rows: [[char; 5]; 5],
}

impl KeySquare {
    /// Build a key square from a key phrase.
    ///
    /// The key's letters (normalized, deduplicated, in order of first
    /// occurrence) come first, followed by the remaining alphabet letters in
    /// natural order. Any key, including the empty string, yields a valid
    /// square.
    pub fn new(key: &str) -> Self {
        let mut seen = [false; 26];
        let mut letters = Vec::with_capacity(25);

        for ch in normalize(key).chars().chain(ALPHABET) {
            let idx = (ch as u8 - b'a') as usize;
            if !seen[idx] {
                seen[idx] = true;
                letters.push(ch);
            }
        }

        Self::from_letters(&letters)
    }

    /// Build a key square from a freshly shuffled alphabet
    pub fn random() -> Self {
        Self::random_with_rng(&mut rand::thread_rng())
    }

    /// Random square with a specific RNG (for testing)
    pub fn random_with_rng<R: Rng>(rng: &mut R) -> Self {
        let mut letters = ALPHABET;
        letters.shuffle(rng);
        Self::from_letters(&letters)
    }

    fn from_letters(letters: &[char]) -> Self {
        debug_assert_eq!(letters.len(), 25);
        let mut rows = [[' '; 5]; 5];
        for (i, &ch) in letters.iter().enumerate() {
            rows[i / 5][i % 5] = ch;
        }
        Self { rows }
    }

    /// Get the (row, col) of a letter in the square
    pub fn position(&self, ch: char) -> Result<(usize, usize), Error> {
        for (r, row) in self.rows.iter().enumerate() {
            for (c, &letter) in row.iter().enumerate() {
                if letter == ch {
                    return Ok((r, c));
                }
            }
        }
        Err(Error::LetterNotInSquare(ch))
    }

    /// Get the letter at (row, col), wrapping both indices mod 5
    fn at(&self, row: usize, col: usize) -> char {
        self.rows[row % 5][col % 5]
    }

    /// Get the grid rows
    pub fn rows(&self) -> &[[char; 5]; 5] {
        &self.rows
    }

    /// The square's letters in reading order, usable as a key phrase that
    /// rebuilds this exact square
    pub fn key_string(&self) -> String {
        self.rows.iter().flatten().collect()
    }
}

impl fmt::Display for KeySquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, ch) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

/// Generate a random 25-letter Playfair key (a shuffled alphabet)
pub fn random_key() -> String {
    KeySquare::random().key_string()
}

/// Random key with a specific RNG (for testing)
pub fn random_key_with_rng<R: Rng>(rng: &mut R) -> String {
    KeySquare::random_with_rng(rng).key_string()
}

/// Split plaintext into digraphs ready for pairwise substitution.
///
/// The scan is greedy left-to-right: a lone trailing letter is paired with
/// the filler; a doubled letter emits (letter, filler) and advances by ONE,
/// so the second occurrence starts the next digraph. `aaa` therefore yields
/// `ax ax ax`.
pub fn prepare_digraphs(plaintext: &str, filler: char) -> Vec<(char, char)> {
    let text: Vec<char> = normalize(plaintext).chars().collect();
    let mut digraphs = Vec::with_capacity(text.len() / 2 + 1);

    let mut i = 0;
    while i < text.len() {
        let a = text[i];
        match text.get(i + 1) {
            Some(&b) if a != b => {
                digraphs.push((a, b));
                i += 2;
            }
            // Doubled letter or end of text: pair with the filler and
            // re-examine the next letter as the start of a fresh digraph.
            _ => {
                digraphs.push((a, filler));
                i += 1;
            }
        }
    }
    digraphs
}

/// Encrypt one digraph: same row shifts right, same column shifts down,
/// otherwise swap columns (rectangle rule).
pub fn encrypt_pair(square: &KeySquare, pair: (char, char)) -> Result<(char, char), Error> {
    let (ra, ca) = square.position(pair.0)?;
    let (rb, cb) = square.position(pair.1)?;

    let out = if ra == rb {
        (square.at(ra, ca + 1), square.at(rb, cb + 1))
    } else if ca == cb {
        (square.at(ra + 1, ca), square.at(rb + 1, cb))
    } else {
        (square.at(ra, cb), square.at(rb, ca))
    };
    Ok(out)
}

/// Decrypt one digraph: exact inverse of [`encrypt_pair`]. The rectangle
/// rule is self-inverse.
pub fn decrypt_pair(square: &KeySquare, pair: (char, char)) -> Result<(char, char), Error> {
    let (ra, ca) = square.position(pair.0)?;
    let (rb, cb) = square.position(pair.1)?;

    // +4 is -1 mod 5
    let out = if ra == rb {
        (square.at(ra, ca + 4), square.at(rb, cb + 4))
    } else if ca == cb {
        (square.at(ra + 4, ca), square.at(rb + 4, cb))
    } else {
        (square.at(ra, cb), square.at(rb, ca))
    };
    Ok(out)
}

/// Encrypt plaintext with the default filler. Returns uppercase ciphertext.
pub fn encrypt(plaintext: &str, key: &str) -> Result<String, Error> {
    encrypt_with_filler(plaintext, key, DEFAULT_FILLER)
}

/// Encrypt plaintext with an explicit filler letter
pub fn encrypt_with_filler(plaintext: &str, key: &str, filler: char) -> Result<String, Error> {
    let square = KeySquare::new(key);
    let pairs = prepare_digraphs(plaintext, filler);

    let mut cipher = String::with_capacity(pairs.len() * 2);
    for pair in pairs {
        let (a, b) = encrypt_pair(&square, pair)?;
        cipher.push(a.to_ascii_uppercase());
        cipher.push(b.to_ascii_uppercase());
    }
    Ok(cipher)
}

/// Decrypt ciphertext. Returns lowercase plaintext with any filler letters
/// inserted during encryption still in place (Playfair is lossy by design).
///
/// The ciphertext is split into consecutive two-letter chunks without
/// re-normalization; it must contain an even number of Playfair-alphabet
/// letters.
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String, Error> {
    let square = KeySquare::new(key);
    let letters: Vec<char> = ciphertext.chars().map(|c| c.to_ascii_lowercase()).collect();
    if letters.len() % 2 != 0 {
        return Err(Error::UnevenCiphertext(letters.len()));
    }

    let mut plain = String::with_capacity(letters.len());
    for chunk in letters.chunks_exact(2) {
        let (a, b) = decrypt_pair(&square, (chunk[0], chunk[1]))?;
        plain.push(a);
        plain.push(b);
    }
    Ok(plain)
}
