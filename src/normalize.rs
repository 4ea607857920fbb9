//! Shared text normalization for all encrypt entry points.

/// Normalizes text for transposition: keeps ASCII letters only, upper-cased.
///
/// Spaces, digits and punctuation are dropped. Empty input yields empty
/// output. Decrypt paths assume their input already has this shape and do
/// not re-normalize.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_uppercases() {
        assert_eq!(normalize("hello"), "HELLO");
        assert_eq!(normalize("HeLLo"), "HELLO");
    }

    #[test]
    fn test_normalize_strips_non_letters() {
        assert_eq!(normalize("Hello, World!"), "HELLOWORLD");
        assert_eq!(normalize("attack at dawn"), "ATTACKATDAWN");
        assert_eq!(normalize("a1b2c3"), "ABC");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("123 !?"), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = normalize("Meet me at 10pm, sharp!");
        assert_eq!(normalize(&once), once);
    }
}
