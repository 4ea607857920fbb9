//! # Transpo - classical transposition ciphers
//!
//! Transpo implements three classical transposition ciphers as reversible
//! text-rearrangement algorithms:
//!
//! - **Rail Fence**: the plaintext zigzags across a fixed number of rails
//!   and the ciphertext is the rails read off top to bottom
//! - **Columnar Transposition**: the plaintext fills a grid row by row and
//!   the columns are read off in the alphabetic order of a keyword
//! - **Double Transposition**: Columnar Transposition applied twice with
//!   two independent keys, decrypted with the keys in reverse order
//!
//! Unlike substitution ciphers, these schemes rearrange characters without
//! replacing them: every ciphertext is a permutation of the (normalized)
//! plaintext, padding aside.
//!
//! ## Security Model
//!
//! There is none. These are pedagogical ciphers, trivially breakable by
//! anagramming or brute force over the small key space. This crate exists
//! to demonstrate the algorithms, not to protect data.
//!
//! ## Text handling
//!
//! - Encrypt entry points accept arbitrary text and normalize it first:
//!   non-alphabetic characters are dropped, the rest is upper-cased
//! - Decrypt entry points assume their input already has that shape
//! - Incomplete grid cells are padded with `'X'` on encrypt and stripped
//!   on decrypt; a genuine `'X'` in the plaintext is indistinguishable
//!   from padding and is lost on round-trip (inherent to the scheme)
//!
//! ## Example Usage
//!
//! ```rust
//! use transpo::{columnar, rail_fence};
//!
//! // The classic rail fence example, three rails
//! let ciphertext = rail_fence::encrypt("WEAREDISCOVEREDFLEEATONCE", 3).unwrap();
//! assert_eq!(ciphertext, "WECRLTEERDSOEEFEAOCAIVDEN");
//! assert_eq!(
//!     rail_fence::decrypt(&ciphertext, 3).unwrap(),
//!     "WEAREDISCOVEREDFLEEATONCE"
//! );
//!
//! // Columnar transposition: normalization strips spaces and punctuation
//! let ciphertext = columnar::encrypt("Hello, world!", "KEY").unwrap();
//! assert_eq!(columnar::decrypt(&ciphertext, "KEY").unwrap(), "HELLOWORLD");
//! ```
//!
//! ## Modules
//!
//! - [`normalize`]: shared text normalization (uppercase letters only)
//! - [`rail_fence`]: Rail Fence cipher
//! - [`columnar`]: Columnar Transposition cipher
//! - [`double`]: Double Transposition cipher

/// Sentinel filler for incomplete grid cells, stripped on decrypt.
pub const PAD_CHAR: char = 'X';

pub mod columnar;
pub mod double;
pub mod normalize;
pub mod rail_fence;

// Re-export commonly used types at the crate root
pub use columnar::ColumnarError;
pub use normalize::normalize;
pub use rail_fence::RailFenceError;
