//! Rail Fence cipher.
//!
//! The plaintext zigzags across a fixed number of rails (rows): a cursor
//! starts on rail 0 moving downward and reverses each time it touches the
//! top or bottom rail. The ciphertext is the rails concatenated in order.
//!
//! With a single rail the cursor never moves, so `rails == 1` is an
//! identity transform in both directions.

use thiserror::Error;

use crate::normalize::normalize;

/// Errors that can occur in the Rail Fence cipher.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RailFenceError {
    #[error("rail count must be at least 1")]
    InvalidRailCount,
}

/// Walks the zigzag cursor over `len` positions, calling `visit` with the
/// rail the cursor is on at each step.
///
/// The direction flips after visiting a boundary rail, so the first move
/// is always downward. Callers guarantee `rails >= 2`.
fn walk_zigzag(len: usize, rails: usize, mut visit: impl FnMut(usize)) {
    let mut rail = 0usize;
    let mut down = false;
    for _ in 0..len {
        visit(rail);
        if rail == 0 || rail == rails - 1 {
            down = !down;
        }
        if down {
            rail += 1;
        } else {
            rail -= 1;
        }
    }
}

/// Encrypts text with the Rail Fence cipher.
///
/// The plaintext is normalized (letters only, upper-cased) before the
/// zigzag walk, except when `rails == 1`: a single rail is the identity
/// transform and the raw input is returned untouched.
pub fn encrypt(plaintext: &str, rails: usize) -> Result<String, RailFenceError> {
    if rails == 0 {
        return Err(RailFenceError::InvalidRailCount);
    }
    if rails == 1 {
        return Ok(plaintext.to_string());
    }

    let text: Vec<char> = normalize(plaintext).chars().collect();
    let mut fence: Vec<String> = vec![String::new(); rails];

    let mut next = 0;
    walk_zigzag(text.len(), rails, |rail| {
        fence[rail].push(text[next]);
        next += 1;
    });

    Ok(fence.concat())
}

/// Decrypts Rail Fence ciphertext.
///
/// The zigzag walk runs twice: once to compute how many characters each
/// rail holds (which partitions the ciphertext into contiguous per-rail
/// chunks), and once more consuming each rail's chunk in fill order.
pub fn decrypt(ciphertext: &str, rails: usize) -> Result<String, RailFenceError> {
    if rails == 0 {
        return Err(RailFenceError::InvalidRailCount);
    }
    if rails == 1 {
        return Ok(ciphertext.to_string());
    }

    let chars: Vec<char> = ciphertext.chars().collect();

    // First pass: how many positions the zigzag visits on each rail.
    let mut rail_lens = vec![0usize; rails];
    walk_zigzag(chars.len(), rails, |rail| rail_lens[rail] += 1);

    // Partition the ciphertext into one contiguous chunk per rail.
    let mut fence: Vec<&[char]> = Vec::with_capacity(rails);
    let mut start = 0;
    for &len in &rail_lens {
        fence.push(&chars[start..start + len]);
        start += len;
    }

    // Second pass: re-walk the zigzag, consuming each rail in fill order.
    let mut rail_pos = vec![0usize; rails];
    let mut plaintext = String::with_capacity(chars.len());
    walk_zigzag(chars.len(), rails, |rail| {
        plaintext.push(fence[rail][rail_pos[rail]]);
        rail_pos[rail] += 1;
    });

    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_classic_example() {
        let ciphertext = encrypt("WEAREDISCOVEREDFLEEATONCE", 3).unwrap();
        assert_eq!(ciphertext, "WECRLTEERDSOEEFEAOCAIVDEN");
    }

    #[test]
    fn test_decrypt_classic_example() {
        let plaintext = decrypt("WECRLTEERDSOEEFEAOCAIVDEN", 3).unwrap();
        assert_eq!(plaintext, "WEAREDISCOVEREDFLEEATONCE");
    }

    #[test]
    fn test_encrypt_normalizes_input() {
        let from_raw = encrypt("We are discovered, flee at once!", 3).unwrap();
        let from_normalized = encrypt("WEAREDISCOVEREDFLEEATONCE", 3).unwrap();
        assert_eq!(from_raw, from_normalized);
    }

    #[test]
    fn test_single_rail_is_raw_identity() {
        // rails == 1 bypasses normalization entirely
        let raw = "Hello, World!";
        assert_eq!(encrypt(raw, 1).unwrap(), raw);
        assert_eq!(decrypt(raw, 1).unwrap(), raw);
    }

    #[test]
    fn test_zero_rails_rejected() {
        assert_eq!(encrypt("TEST", 0), Err(RailFenceError::InvalidRailCount));
        assert_eq!(decrypt("TEST", 0), Err(RailFenceError::InvalidRailCount));
    }

    #[test]
    fn test_output_is_permutation() {
        let normalized = normalize("The quick brown fox jumps over the lazy dog");
        let ciphertext = encrypt(&normalized, 4).unwrap();

        let mut expected: Vec<char> = normalized.chars().collect();
        let mut actual: Vec<char> = ciphertext.chars().collect();
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_more_rails_than_characters() {
        // The zigzag never reaches the lower rails; they stay empty
        let ciphertext = encrypt("ABC", 8).unwrap();
        assert_eq!(ciphertext, "ABC");
        assert_eq!(decrypt(&ciphertext, 8).unwrap(), "ABC");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(encrypt("", 3).unwrap(), "");
        assert_eq!(decrypt("", 3).unwrap(), "");
    }

    #[test]
    fn test_roundtrip_all_rail_counts() {
        let plaintext = "DEFENDTHEEASTWALLOFTHECASTLE";
        for rails in 2..=8 {
            let ciphertext = encrypt(plaintext, rails).unwrap();
            assert_eq!(
                decrypt(&ciphertext, rails).unwrap(),
                plaintext,
                "round-trip failed for {} rails",
                rails
            );
        }
    }
}
