//! The positional substitution engine

use crate::digraph::{self, Digraph};
use crate::error::{PlayfairError, Result};
use crate::square::{KeySquare, SQUARE_SIZE};

/// Transformation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    Encrypt,
    Decrypt,
}

impl OperationMode {
    /// Row/column shift for the same-row and same-column cases:
    /// +1 for encrypt, +4 (i.e. -1 mod 5) for decrypt.
    fn shift(self) -> usize {
        match self {
            OperationMode::Encrypt => 1,
            OperationMode::Decrypt => SQUARE_SIZE - 1,
        }
    }
}

impl KeySquare {
    /// Applies the Playfair substitution rule to a digraph sequence.
    ///
    /// For each digraph the two letters are located in the square and one of
    /// three rules applies:
    ///
    /// - **Same row**: each letter shifts one column right (encrypt) or
    ///   left (decrypt), wrapping modulo 5.
    /// - **Same column**: each letter shifts one row down (encrypt) or up
    ///   (decrypt), wrapping modulo 5.
    /// - **Rectangle**: each letter keeps its row and takes the other
    ///   letter's column. The formula is identical in both directions.
    ///
    /// # Arguments
    ///
    /// * `digraphs` - The ordered digraph sequence to transform.
    /// * `mode` - The transformation direction.
    ///
    /// # Returns
    ///
    /// The concatenated output string, twice as long as the digraph count.
    pub fn transform(&self, digraphs: &[Digraph], mode: OperationMode) -> Result<String> {
        let mut output = String::with_capacity(digraphs.len() * 2);

        for pair in digraphs {
            // Every letter a preparer can produce is present in the square,
            // so lookup only fails for digraphs built outside the preparers.
            let (row1, col1) = self
                .position(pair.first)
                .ok_or(PlayfairError::UnsupportedCharacter(pair.first))?;
            let (row2, col2) = self
                .position(pair.second)
                .ok_or(PlayfairError::UnsupportedCharacter(pair.second))?;

            let shift = mode.shift();
            if row1 == row2 {
                output.push(self.get(row1, (col1 + shift) % SQUARE_SIZE));
                output.push(self.get(row2, (col2 + shift) % SQUARE_SIZE));
            } else if col1 == col2 {
                output.push(self.get((row1 + shift) % SQUARE_SIZE, col1));
                output.push(self.get((row2 + shift) % SQUARE_SIZE, col2));
            } else {
                output.push(self.get(row1, col2));
                output.push(self.get(row2, col1));
            }
        }

        Ok(output)
    }

    /// Encrypts prepared-or-raw plaintext with this square.
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let digraphs = digraph::prepare_encrypt(plaintext)?;
        self.transform(&digraphs, OperationMode::Encrypt)
    }

    /// Decrypts ciphertext with this square.
    pub fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let digraphs = digraph::prepare_decrypt(ciphertext)?;
        self.transform(&digraphs, OperationMode::Decrypt)
    }
}

/// Encrypts a plaintext message with the square derived from `keyword`.
///
/// Builds the key square fresh, prepares the plaintext into digraphs
/// (uppercase, J merged into I, spaces removed, doubled letters split and
/// odd length padded with 'X') and applies the substitution rule.
///
/// # Arguments
///
/// * `keyword` - The keyword the square is derived from.
/// * `plaintext` - The message, letters A-Z and spaces.
///
/// # Returns
///
/// The ciphertext together with the derived key square for display.
pub fn encrypt(keyword: &str, plaintext: &str) -> Result<(String, KeySquare)> {
    let square = KeySquare::from_keyword(keyword);
    let ciphertext = square.encrypt(plaintext)?;
    Ok((ciphertext, square))
}

/// Decrypts a ciphertext message with the square derived from `keyword`.
///
/// The inverse of [`encrypt`]: the ciphertext is paired in fixed twos
/// (padded with 'X' if of odd length) and the substitution rule is applied
/// in the decrypt direction.
///
/// # Arguments
///
/// * `keyword` - The keyword the square is derived from.
/// * `ciphertext` - The message to decrypt, letters A-Z and spaces.
///
/// # Returns
///
/// The recovered plaintext together with the derived key square for display.
pub fn decrypt(keyword: &str, ciphertext: &str) -> Result<(String, KeySquare)> {
    let square = KeySquare::from_keyword(keyword);
    let plaintext = square.decrypt(ciphertext)?;
    Ok((plaintext, square))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruments_reference_vector() {
        // Classic MONARCHY example; with the 'X' filler the trailing SX
        // digraph sits in column 3 and shifts down to XA.
        let (ciphertext, square) = encrypt("MONARCHY", "INSTRUMENTS").unwrap();

        assert_eq!(ciphertext, "GATLMZCLRQXA");
        assert_eq!(square.rows()[0], ['M', 'O', 'N', 'A', 'R']);
    }

    #[test]
    fn test_instruments_round_trip() {
        let (ciphertext, _) = encrypt("MONARCHY", "INSTRUMENTS").unwrap();
        let (plaintext, _) = decrypt("MONARCHY", &ciphertext).unwrap();

        assert_eq!(plaintext, "INSTRUMENTSX");
    }

    #[test]
    fn test_same_row_substitution_wraps_last_column() {
        let square = KeySquare::from_keyword("");

        // D and E share row 0; E sits in the last column and wraps to A
        let pair = [Digraph::new('D', 'E')];
        let encrypted = square.transform(&pair, OperationMode::Encrypt).unwrap();
        assert_eq!(encrypted, "EA");

        let back = square.decrypt(&encrypted).unwrap();
        assert_eq!(back, "DE");
    }

    #[test]
    fn test_same_column_substitution_wraps_last_row() {
        let square = KeySquare::from_keyword("");

        // U and E share the last column; shifting U down wraps to row 0
        let pair = [Digraph::new('U', 'E')];
        let encrypted = square.transform(&pair, OperationMode::Encrypt).unwrap();
        assert_eq!(encrypted, "ZK");

        let back = square.decrypt(&encrypted).unwrap();
        assert_eq!(back, "UE");
    }

    #[test]
    fn test_rectangle_substitution_is_self_inverse() {
        let square = KeySquare::from_keyword("MONARCHY");

        // I(2,3) and N(0,2) share neither row nor column
        let pair = [Digraph::new('I', 'N')];
        let once = square.transform(&pair, OperationMode::Encrypt).unwrap();
        assert_eq!(once, "GA");

        // The rectangle formula is identical in both directions
        let twice = square
            .transform(&[Digraph::new('G', 'A')], OperationMode::Decrypt)
            .unwrap();
        assert_eq!(twice, "IN");
    }

    #[test]
    fn test_output_length_is_twice_digraph_count() {
        let digraphs = crate::digraph::prepare_encrypt("BALLOON").unwrap();
        let square = KeySquare::from_keyword("KEYWORD");
        let output = square.transform(&digraphs, OperationMode::Encrypt).unwrap();

        assert_eq!(output.len(), digraphs.len() * 2);
    }

    #[test]
    fn test_empty_message_yields_empty_output() {
        let (ciphertext, square) = encrypt("MONARCHY", "").unwrap();

        assert_eq!(ciphertext, "");
        assert_eq!(square, KeySquare::from_keyword("MONARCHY"));
    }

    #[test]
    fn test_unsupported_message_character_fails_fast() {
        assert_eq!(
            encrypt("MONARCHY", "HELLO, WORLD"),
            Err(PlayfairError::UnsupportedCharacter(','))
        );
        assert_eq!(
            decrypt("MONARCHY", "GATL4"),
            Err(PlayfairError::UnsupportedCharacter('4'))
        );
    }

    #[test]
    fn test_transform_rejects_letter_missing_from_square() {
        // A digraph built outside the preparers can carry 'J'
        let square = KeySquare::from_keyword("");
        let result = square.transform(&[Digraph::new('J', 'A')], OperationMode::Encrypt);

        assert_eq!(result, Err(PlayfairError::UnsupportedCharacter('J')));
    }
}
