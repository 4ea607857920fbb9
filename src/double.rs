//! Double Transposition cipher.
//!
//! Columnar Transposition applied twice with two independent keys. There
//! is no new algorithm here: encryption chains two [`columnar::encrypt`]
//! passes, decryption chains two [`columnar::decrypt`] passes with the
//! keys in strictly reverse order.
//!
//! The padding caveat applies twice. The second decrypt pass strips every
//! padding cell, including any padding the first encryption pass added, so
//! an exact round-trip needs the normalized plaintext length to be a
//! multiple of the first key's length (and no genuine `'X'` characters).
//! Otherwise the final pass sees a truncated intermediate and fails with
//! [`ColumnarError::InvalidCipherLength`].

use crate::columnar::{self, ColumnarError};

/// Encrypts with Columnar Transposition under `key1`, then again under
/// `key2`.
pub fn encrypt(plaintext: &str, key1: &str, key2: &str) -> Result<String, ColumnarError> {
    let intermediate = columnar::encrypt(plaintext, key1)?;
    columnar::encrypt(&intermediate, key2)
}

/// Decrypts by reversing both transpositions: `key2` first, then `key1`.
pub fn decrypt(ciphertext: &str, key1: &str, key2: &str) -> Result<String, ColumnarError> {
    let intermediate = columnar::decrypt(ciphertext, key2)?;
    columnar::decrypt(&intermediate, key1)
}
