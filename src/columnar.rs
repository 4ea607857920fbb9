//! Columnar Transposition cipher.
//!
//! The plaintext fills a grid row by row, one column per key character,
//! with incomplete trailing cells padded by [`PAD_CHAR`]. The ciphertext
//! is the columns read top to bottom in the alphabetic order of the key;
//! duplicate key letters keep their left-to-right order (stable sort on
//! character and column index).
//!
//! The key matters only for the relative order of its characters: "KEY"
//! and "JDX" produce the same column order.

use thiserror::Error;

use crate::normalize::normalize;
use crate::PAD_CHAR;

/// Errors that can occur in the Columnar Transposition cipher.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ColumnarError {
    /// The key has no alphabetic characters left after normalization.
    #[error("key contains no alphabetic characters")]
    InvalidKey,

    /// Decrypt input must be a whole number of grid rows.
    #[error("ciphertext length {length} is not a multiple of key length {key_length}")]
    InvalidCipherLength { length: usize, key_length: usize },
}

/// Normalizes the key, rejecting keys with no alphabetic characters.
fn normalize_key(key: &str) -> Result<Vec<char>, ColumnarError> {
    let key: Vec<char> = normalize(key).chars().collect();
    if key.is_empty() {
        return Err(ColumnarError::InvalidKey);
    }
    Ok(key)
}

/// Column visiting order: column indices stably sorted by key character.
fn key_order(key: &[char]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..key.len()).collect();
    order.sort_by_key(|&i| (key[i], i));
    order
}

/// Encrypts text with the Columnar Transposition cipher.
///
/// The output length is always a multiple of the normalized key length,
/// padded with [`PAD_CHAR`] where the last grid row is incomplete.
pub fn encrypt(plaintext: &str, key: &str) -> Result<String, ColumnarError> {
    let key = normalize_key(key)?;
    let key_len = key.len();

    let text: Vec<char> = normalize(plaintext).chars().collect();
    let rows = text.len().div_ceil(key_len);

    // Row-major grid; unfilled trailing cells hold the padding sentinel.
    let mut grid = vec![PAD_CHAR; rows * key_len];
    grid[..text.len()].copy_from_slice(&text);

    let mut ciphertext = String::with_capacity(grid.len());
    for &col in &key_order(&key) {
        for row in 0..rows {
            ciphertext.push(grid[row * key_len + col]);
        }
    }

    Ok(ciphertext)
}

/// Decrypts Columnar Transposition ciphertext.
///
/// Fails with [`ColumnarError::InvalidCipherLength`] if the input is not a
/// whole number of grid rows. Every [`PAD_CHAR`] cell is dropped from the
/// output, so a genuine `'X'` in the original plaintext is lost too; the
/// scheme cannot tell the two apart.
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String, ColumnarError> {
    let key = normalize_key(key)?;
    let key_len = key.len();

    let chars: Vec<char> = ciphertext.chars().collect();
    if chars.len() % key_len != 0 {
        return Err(ColumnarError::InvalidCipherLength {
            length: chars.len(),
            key_length: key_len,
        });
    }
    let rows = chars.len() / key_len;

    // Refill the grid column by column in key order, consuming the
    // ciphertext sequentially.
    let mut grid = vec![PAD_CHAR; chars.len()];
    let mut next = 0;
    for &col in &key_order(&key) {
        for row in 0..rows {
            grid[row * key_len + col] = chars[next];
            next += 1;
        }
    }

    Ok(grid.into_iter().filter(|&c| c != PAD_CHAR).collect())
}
