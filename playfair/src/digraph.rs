//! Message normalization and digraph preparation

use crate::error::{PlayfairError, Result};

/// Filler letter used to break doubled pairs and pad odd-length text
pub const FILLER: char = 'X';

/// An ordered pair of letters, the atomic substitution unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digraph {
    pub first: char,
    pub second: char,
}

impl Digraph {
    pub fn new(first: char, second: char) -> Self {
        Self { first, second }
    }
}

/// Normalizes a message for pairing.
///
/// Uppercases the text, rewrites 'J' to 'I' and removes space characters.
/// Any remaining character outside A-Z is rejected: such characters have no
/// position in the key square, so passing them through would produce output
/// with no positional meaning. Note that only the space character is
/// stripped; tabs and newlines are treated as unsupported.
///
/// # Arguments
///
/// * `text` - The raw message text.
///
/// # Returns
///
/// The normalized letter string, or `UnsupportedCharacter` for the first
/// offending character.
fn normalize(text: &str) -> Result<String> {
    let mut normalized = String::with_capacity(text.len());

    for c in text.to_ascii_uppercase().chars() {
        if c == ' ' {
            continue;
        }
        if !c.is_ascii_uppercase() {
            return Err(PlayfairError::UnsupportedCharacter(c));
        }
        normalized.push(if c == 'J' { 'I' } else { c });
    }

    Ok(normalized)
}

/// Prepares plaintext for encryption.
///
/// Scans the normalized text with a variable step: at each position the
/// current letter `a` is paired with the next letter `b` (or the filler 'X'
/// at the end of the text). A doubled letter (`a == b`) consumes only the
/// first occurrence, pairing it with 'X', and the second occurrence starts
/// the next pair. So "BALLOON" splits as BA LX LO ON.
///
/// # Arguments
///
/// * `plaintext` - The raw plaintext, letters and spaces.
///
/// # Returns
///
/// The ordered digraph sequence, or `UnsupportedCharacter` if the text
/// contains anything besides letters and spaces.
pub fn prepare_encrypt(plaintext: &str) -> Result<Vec<Digraph>> {
    let letters: Vec<char> = normalize(plaintext)?.chars().collect();
    let mut digraphs: Vec<Digraph> = Vec::with_capacity(letters.len() / 2 + 1);

    let mut i = 0;
    while i < letters.len() {
        let a = letters[i];
        let b = if i + 1 < letters.len() { letters[i + 1] } else { FILLER };

        if a == b {
            digraphs.push(Digraph::new(a, FILLER));
            i += 1;
        } else {
            digraphs.push(Digraph::new(a, b));
            i += 2;
        }
    }

    Ok(digraphs)
}

/// Prepares ciphertext for decryption.
///
/// Scans the normalized text in fixed, non-overlapping pairs of two; an
/// odd-length trailing letter is paired with the filler 'X'. Ciphertext is
/// assumed already digraph-aligned, so no doubled-letter splitting applies.
///
/// # Arguments
///
/// * `ciphertext` - The raw ciphertext, letters and spaces.
///
/// # Returns
///
/// The ordered digraph sequence, or `UnsupportedCharacter` if the text
/// contains anything besides letters and spaces.
pub fn prepare_decrypt(ciphertext: &str) -> Result<Vec<Digraph>> {
    let letters: Vec<char> = normalize(ciphertext)?.chars().collect();
    let mut digraphs: Vec<Digraph> = Vec::with_capacity(letters.len() / 2 + 1);

    for pair in letters.chunks(2) {
        let a = pair[0];
        let b = if pair.len() > 1 { pair[1] } else { FILLER };
        digraphs.push(Digraph::new(a, b));
    }

    Ok(digraphs)
}
