//! # Playfair Cipher Library
//!
//! This library implements the classical Playfair digraph substitution cipher.
//!
//! The cipher derives a 5x5 key square from a keyword (I and J merged into
//! one cell), segments the message into letter pairs, and substitutes each
//! pair according to its positions in the square: same row shifts right,
//! same column shifts down, and a rectangle swaps columns. Decryption shifts
//! in the opposite direction; the rectangle case is its own inverse.
//!
//! ## Usage
//!
//! ```rust
//! use playfair::{encrypt, decrypt};
//!
//! // Encrypt a message; the derived key square comes back for display
//! let (ciphertext, square) = encrypt("MONARCHY", "INSTRUMENTS")?;
//! assert_eq!(ciphertext, "GATLMZCLRQXA");
//! assert_eq!(square.rows()[0], ['M', 'O', 'N', 'A', 'R']);
//!
//! // Decrypt recovers the prepared plaintext (padded to even length)
//! let (plaintext, _) = decrypt("MONARCHY", &ciphertext)?;
//! assert_eq!(plaintext, "INSTRUMENTSX");
//! # Ok::<(), playfair::PlayfairError>(())
//! ```
//!
//! ## Security Warning
//!
//! Playfair offers no security by modern standards. This implementation is
//! for educational and historical use only.
//!
//! ## Features
//!
//! - Purely functional core: no shared state, safe to call concurrently
//! - Key square exposed read-only for rendering by a presentation layer
//! - Strict input validation: characters outside A-Z and space are rejected
//!   instead of silently producing meaningless output

// Public modules
pub mod cipher;
pub mod digraph;
pub mod error;
pub mod square;

// Re-exports for easy access
pub use cipher::{decrypt, encrypt, OperationMode};
pub use digraph::{prepare_decrypt, prepare_encrypt, Digraph, FILLER};
pub use error::{PlayfairError, Result};
pub use square::{KeySquare, SQUARE_SIZE};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Cross-module integration tests
#[cfg(test)]
mod tests {
    use super::*;

    /// The round-trip normalization from the caller's point of view:
    /// uppercase, merge J into I, strip spaces, pad to even length with 'X'
    fn normalize_for_round_trip(plaintext: &str) -> String {
        let mut letters: String = plaintext
            .to_ascii_uppercase()
            .chars()
            .filter(|&c| c != ' ')
            .map(|c| if c == 'J' { 'I' } else { c })
            .collect();
        if letters.len() % 2 != 0 {
            letters.push('X');
        }
        letters
    }

    #[test]
    fn test_round_trip_law() {
        // No doubled letters, so filler insertion only pads the tail
        for plaintext in ["HIDE THE GOLD", "instruments", "JUMPED"] {
            let (ciphertext, _) = encrypt("MONARCHY", plaintext).unwrap();
            let (recovered, _) = decrypt("MONARCHY", &ciphertext).unwrap();

            assert_eq!(recovered, normalize_for_round_trip(plaintext));
        }
    }

    #[test]
    fn test_round_trip_with_doubled_letters() {
        let (ciphertext, _) = encrypt("KEYWORD", "BALLOON").unwrap();
        let (recovered, _) = decrypt("KEYWORD", &ciphertext).unwrap();

        // Fillers inserted between the doubled Ls remain in the output
        assert_eq!(recovered, "BALXLOON");
    }

    #[test]
    fn test_square_is_rebuilt_per_call() {
        let (_, first) = encrypt("MONARCHY", "TEST").unwrap();
        let (_, second) = encrypt("PLAYFAIR", "TEST").unwrap();

        assert_ne!(first, second);
        assert_eq!(first, KeySquare::from_keyword("MONARCHY"));
    }

    #[test]
    fn test_empty_keyword_still_encrypts() {
        let (ciphertext, square) = encrypt("", "HELLO").unwrap();
        let (recovered, _) = decrypt("", &ciphertext).unwrap();

        assert_eq!(square, KeySquare::from_keyword(""));
        assert_eq!(recovered, "HELXLO");
    }

    #[test]
    fn test_ciphertext_never_contains_j() {
        let (ciphertext, _) = encrypt("PLAYFAIR", "THE QUICK BROWN FOX").unwrap();

        assert!(!ciphertext.contains('J'));
        assert!(ciphertext.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_version_metadata() {
        assert!(!VERSION.is_empty());
    }
}
