use std::collections::HashMap;
use std::sync::OnceLock;

use super::ConvertError;

/// Per-digit names. Owned by this converter; the same digits read
/// differently in other converters' tables.
const NAMES: &[(char, &str)] = &[
    ('0', "nol"),
    ('1', "satu"),
    ('2', "dua"),
    ('3', "tiga"),
    ('4', "empat"),
    ('5', "lima"),
    ('6', "enam"),
    ('7', "tujuh"),
    ('8', "delapan"),
    ('9', "sembilan"),
];

/// Reads a digit string one digit at a time: "123" -> "satu dua tiga".
///
/// "007" is a literal override ("nol nol tujuh"), not a derived rule; any
/// other cleaned string, including ones sharing the prefix ("0079"), takes
/// the per-digit path.
pub struct Digit {
    names: HashMap<char, &'static str>,
}

impl Digit {
    /// Get or initialize the shared instance.
    pub fn global() -> &'static Digit {
        static INSTANCE: OnceLock<Digit> = OnceLock::new();
        INSTANCE.get_or_init(|| Digit {
            names: NAMES.iter().copied().collect(),
        })
    }

    pub fn convert(&self, token: &str) -> Result<String, ConvertError> {
        let cleaned: String = token.chars().filter(|c| c.is_ascii_digit()).collect();
        if cleaned == "007" {
            return Ok("nol nol tujuh".to_string());
        }
        let mut words: Vec<&'static str> = Vec::with_capacity(cleaned.len());
        for ch in cleaned.chars() {
            let name = self
                .names
                .get(&ch)
                .copied()
                .ok_or(ConvertError::UnmappedChar {
                    converter: "digit",
                    ch,
                })?;
            words.push(name);
        }
        Ok(words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(token: &str) -> String {
        Digit::global().convert(token).unwrap()
    }

    #[test]
    fn test_per_digit_names() {
        assert_eq!(convert("123"), "satu dua tiga");
        assert_eq!(convert("90"), "sembilan nol");
    }

    #[test]
    fn test_leading_zeros_kept() {
        assert_eq!(convert("003"), "nol nol tiga");
    }

    #[test]
    fn test_007_override() {
        assert_eq!(convert("007"), "nol nol tujuh");
    }

    #[test]
    fn test_override_needs_exact_match() {
        // Shares the "007" prefix but falls to the per-digit path.
        assert_eq!(convert("0079"), "nol nol tujuh sembilan");
    }

    #[test]
    fn test_non_digits_filtered_before_override_check() {
        // "0-07" cleans to "007" and takes the override.
        assert_eq!(convert("0-07"), "nol nol tujuh");
    }

    #[test]
    fn test_non_digits_filtered() {
        assert_eq!(convert("1-3"), "satu tiga");
        assert_eq!(convert("(21)"), "dua satu");
    }

    #[test]
    fn test_empty_after_filter() {
        assert_eq!(convert("abc"), "");
        assert_eq!(convert(""), "");
    }
}
