//! Key square construction and position lookup

use std::fmt;

/// Side length of the key square
pub const SQUARE_SIZE: usize = 5;

/// The 5x5 Playfair key square
///
/// Holds each of the 25 letters A-Z (with J merged into I) exactly once.
/// The square is immutable once built and is exposed read-only so a caller
/// can render it (e.g. as a grid in a UI or on the terminal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySquare {
    cells: [[char; SQUARE_SIZE]; SQUARE_SIZE],
}

impl KeySquare {
    /// Builds a key square from a keyword.
    ///
    /// The keyword is uppercased and every 'J' is rewritten to 'I'. Letters
    /// are placed in first-occurrence order (duplicates are dropped), then
    /// the remaining alphabet A-Z (skipping J) fills the square in natural
    /// order, row-major.
    ///
    /// Non-letter characters in the keyword are silently skipped, so this
    /// never fails: an empty or letterless keyword yields the plain
    /// alphabet square.
    ///
    /// # Arguments
    ///
    /// * `keyword` - The keyword string, arbitrary case and content.
    ///
    /// # Returns
    ///
    /// A `KeySquare` containing all 25 letters exactly once.
    pub fn from_keyword(keyword: &str) -> Self {
        let mut letters: Vec<char> = Vec::with_capacity(25);
        let mut used: [bool; 26] = [false; 26];

        // Keyword letters first, deduplicated, in first-occurrence order
        for c in keyword.to_ascii_uppercase().chars() {
            if !c.is_ascii_alphabetic() {
                continue;
            }
            let c = if c == 'J' { 'I' } else { c };
            let index = (c as u8 - b'A') as usize;
            if !used[index] {
                letters.push(c);
                used[index] = true;
            }
        }

        // Remaining alphabet in natural order, skipping J
        for c in 'A'..='Z' {
            if c == 'J' {
                continue;
            }
            let index = (c as u8 - b'A') as usize;
            if !used[index] {
                letters.push(c);
                used[index] = true;
            }
        }

        // Lay the 25 letters row-major into the grid
        let mut cells = [[' '; SQUARE_SIZE]; SQUARE_SIZE];
        for (i, &c) in letters.iter().enumerate() {
            cells[i / SQUARE_SIZE][i % SQUARE_SIZE] = c;
        }

        Self { cells }
    }

    /// Finds the (row, column) position of a letter in the square.
    ///
    /// Returns `None` for any character not present, i.e. anything outside
    /// the 25-letter alphabet.
    pub fn position(&self, ch: char) -> Option<(usize, usize)> {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == ch {
                    return Some((row, col));
                }
            }
        }
        None
    }

    /// Returns the letter at the given position.
    pub fn get(&self, row: usize, col: usize) -> char {
        self.cells[row][col]
    }

    /// Returns the rows of the square for display purposes.
    pub fn rows(&self) -> &[[char; SQUARE_SIZE]; SQUARE_SIZE] {
        &self.cells
    }
}

impl fmt::Display for KeySquare {
    /// Renders the square as five space-separated rows.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, c) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}
