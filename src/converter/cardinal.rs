use std::sync::OnceLock;

/// One-word names for the digits 0-9, indexed by digit value.
const UNITS: [&str; 10] = [
    "nol", "satu", "dua", "tiga", "empat", "lima", "enam", "tujuh", "delapan", "sembilan",
];

/// Scale words for 3-digit groups, least significant first. The empty entry
/// is the ones group.
const SCALES: &[&str] = &[
    "",
    "ribu",
    "juta",
    "miliar",
    "triliun",
    "kuadriliun",
    "kuintiliun",
    "sekstiliun",
    "septiliun",
    "oktiliun",
    "noniliun",
    "desiliun",
    "undesiliun",
    "duodesiliun",
    "tredesiliun",
    "kuatuordesiliun",
    "kuindesiliun",
    "seksdesiliun",
    "septendesiliun",
    "oktodesiliun",
    "novemdesiliun",
    "vigintiliun",
];

/// Converts an integer-valued digit string to its spoken cardinal phrase,
/// e.g. "1202" -> "seribu dua ratus dua".
///
/// The numeral primitive shared by the other converters: fractions use it for
/// numerators and denominators, times for hour/minute fields, URLs for
/// two-digit runs.
pub struct Cardinal;

impl Cardinal {
    /// Get or initialize the shared instance.
    pub fn global() -> &'static Cardinal {
        static INSTANCE: OnceLock<Cardinal> = OnceLock::new();
        INSTANCE.get_or_init(|| Cardinal)
    }

    /// Convert a digit string (optionally signed, possibly containing
    /// grouping separators) to its spoken phrase. Leading zeros are
    /// insignificant; an input with no digit content reads "nol".
    pub fn convert(&self, token: &str) -> String {
        let negative = token.trim_start().starts_with('-');
        let digits: String = token.chars().filter(|c| c.is_ascii_digit()).collect();
        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return "nol".to_string();
        }

        // Split into 3-digit groups from the right.
        let bytes = digits.as_bytes();
        let mut groups: Vec<u16> = Vec::with_capacity(bytes.len() / 3 + 1);
        let mut end = bytes.len();
        while end > 0 {
            let start = end.saturating_sub(3);
            let value = bytes[start..end]
                .iter()
                .fold(0u16, |acc, b| acc * 10 + u16::from(b - b'0'));
            groups.push(value);
            end = start;
        }

        if groups.len() > SCALES.len() {
            // Longer than the largest named scale; read digit by digit.
            let words: Vec<&str> = digits
                .bytes()
                .map(|b| UNITS[usize::from(b - b'0')])
                .collect();
            return words.join(" ");
        }

        let mut words: Vec<&'static str> = Vec::new();
        if negative {
            words.push("minus");
        }
        for (idx, &value) in groups.iter().enumerate().rev() {
            if value == 0 {
                continue;
            }
            let scale = SCALES[idx];
            // 1000..=1999 contracts "satu ribu" to "seribu"; higher scales
            // keep "satu" ("satu juta").
            if value == 1 && scale == "ribu" {
                words.push("seribu");
                continue;
            }
            push_group(&mut words, value);
            if !scale.is_empty() {
                words.push(scale);
            }
        }
        words.join(" ")
    }
}

/// Append the words for a group value in 1..=999.
fn push_group(words: &mut Vec<&'static str>, n: u16) {
    let hundreds = n / 100;
    let rem = n % 100;
    if hundreds == 1 {
        words.push("seratus");
    } else if hundreds > 1 {
        words.push(UNITS[usize::from(hundreds)]);
        words.push("ratus");
    }
    match rem {
        0 => {}
        10 => words.push("sepuluh"),
        11 => words.push("sebelas"),
        12..=19 => {
            words.push(UNITS[usize::from(rem - 10)]);
            words.push("belas");
        }
        1..=9 => words.push(UNITS[usize::from(rem)]),
        _ => {
            words.push(UNITS[usize::from(rem / 10)]);
            words.push("puluh");
            if rem % 10 != 0 {
                words.push(UNITS[usize::from(rem % 10)]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(token: &str) -> String {
        Cardinal::global().convert(token)
    }

    #[test]
    fn test_zero() {
        assert_eq!(convert("0"), "nol");
        assert_eq!(convert("000"), "nol");
    }

    #[test]
    fn test_units() {
        assert_eq!(convert("7"), "tujuh");
        assert_eq!(convert("9"), "sembilan");
    }

    #[test]
    fn test_teens() {
        assert_eq!(convert("10"), "sepuluh");
        assert_eq!(convert("11"), "sebelas");
        assert_eq!(convert("12"), "dua belas");
        assert_eq!(convert("19"), "sembilan belas");
    }

    #[test]
    fn test_tens() {
        assert_eq!(convert("20"), "dua puluh");
        assert_eq!(convert("24"), "dua puluh empat");
        assert_eq!(convert("99"), "sembilan puluh sembilan");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(convert("100"), "seratus");
        assert_eq!(convert("145"), "seratus empat puluh lima");
        assert_eq!(convert("200"), "dua ratus");
    }

    #[test]
    fn test_thousand_contraction() {
        assert_eq!(convert("1000"), "seribu");
        assert_eq!(convert("1202"), "seribu dua ratus dua");
        assert_eq!(convert("2500"), "dua ribu lima ratus");
        assert_eq!(convert("100000"), "seratus ribu");
    }

    #[test]
    fn test_millions_keep_satu() {
        assert_eq!(convert("1000000"), "satu juta");
        assert_eq!(convert("2000003"), "dua juta tiga");
    }

    #[test]
    fn test_leading_zeros_insignificant() {
        assert_eq!(convert("007"), "tujuh");
    }

    #[test]
    fn test_negative() {
        assert_eq!(convert("-3"), "minus tiga");
        assert_eq!(convert("-1"), "minus satu");
    }

    #[test]
    fn test_grouping_noise_stripped() {
        assert_eq!(convert("1,000"), "seribu");
        assert_eq!(convert("8 "), "delapan");
    }

    #[test]
    fn test_no_digit_content() {
        assert_eq!(convert(""), "nol");
        assert_eq!(convert("abc"), "nol");
    }

    #[test]
    fn test_beyond_named_scales_reads_digits() {
        let token = "1".repeat(67);
        let expected = vec!["satu"; 67].join(" ");
        assert_eq!(convert(&token), expected);
    }
}
