use std::collections::HashMap;
use std::sync::OnceLock;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::cardinal::Cardinal;

/// Rendering of a vulgar-fraction glyph: `single` is used when the glyph
/// stands alone, `prepended` + `text` when an integer precedes it.
#[derive(Clone, Copy)]
pub struct FractionEntry {
    pub prepended: &'static str,
    pub single: &'static str,
    pub text: &'static str,
}

const VULGAR_FRACTIONS: &[(char, FractionEntry)] = &[
    ('½', FractionEntry { prepended: "", single: "setengah", text: "" }),
    ('⅓', FractionEntry { prepended: "se", single: "satu", text: "pertiga" }),
    ('⅔', FractionEntry { prepended: "dua", single: "dua", text: "pertiga" }),
    ('¼', FractionEntry { prepended: "se", single: "satu", text: "perempat" }),
    ('¾', FractionEntry { prepended: "tiga", single: "tiga", text: "perempat" }),
    ('⅕', FractionEntry { prepended: "se", single: "satu", text: "perlima" }),
    ('⅖', FractionEntry { prepended: "dua", single: "dua", text: "perlima" }),
    ('⅗', FractionEntry { prepended: "tiga", single: "tiga", text: "perlima" }),
    ('⅘', FractionEntry { prepended: "empat", single: "empat", text: "perlima" }),
    ('⅙', FractionEntry { prepended: "se", single: "satu", text: "perenam" }),
    ('⅚', FractionEntry { prepended: "lima", single: "lima", text: "perenam" }),
    ('⅐', FractionEntry { prepended: "se", single: "satu", text: "pertujuh" }),
    ('⅛', FractionEntry { prepended: "se", single: "satu", text: "perdelapan" }),
    ('⅜', FractionEntry { prepended: "tiga", single: "tiga", text: "perdelapan" }),
    ('⅝', FractionEntry { prepended: "lima", single: "lima", text: "perdelapan" }),
    ('⅞', FractionEntry { prepended: "tujuh", single: "tujuh", text: "perdelapan" }),
    ('⅑', FractionEntry { prepended: "se", single: "satu", text: "persembilan" }),
    ('⅒', FractionEntry { prepended: "se", single: "satu", text: "persepuluh" }),
];

/// Cardinal last word -> ordinal form for slash denominators. Indonesian
/// carries the ordinal sense in the "per" connector, so the forms coincide
/// with the cardinal words; the table still owns the mapping so a divergent
/// form only needs a value change here.
const DENOMINATOR_ORDINALS: &[(&str, &str)] = &[
    ("nol", "nol"),
    ("satu", "satu"),
    ("dua", "dua"),
    ("tiga", "tiga"),
    ("empat", "empat"),
    ("lima", "lima"),
    ("enam", "enam"),
    ("tujuh", "tujuh"),
    ("delapan", "delapan"),
    ("sembilan", "sembilan"),
    ("sepuluh", "sepuluh"),
    ("sebelas", "sebelas"),
    ("belas", "belas"),
    ("puluh", "puluh"),
    ("ratus", "ratus"),
    ("ribu", "ribu"),
    ("juta", "juta"),
    ("miliar", "miliar"),
    ("triliun", "triliun"),
    ("kuadriliun", "kuadriliun"),
    ("kuintiliun", "kuintiliun"),
    ("sekstiliun", "sekstiliun"),
    ("septiliun", "septiliun"),
    ("oktiliun", "oktiliun"),
    ("noniliun", "noniliun"),
    ("desiliun", "desiliun"),
    ("undesiliun", "undesiliun"),
    ("duodesiliun", "duodesiliun"),
    ("tredesiliun", "tredesiliun"),
    ("kuatuordesiliun", "kuatuordesiliun"),
    ("kuindesiliun", "kuindesiliun"),
    ("seksdesiliun", "seksdesiliun"),
    ("septendesiliun", "septendesiliun"),
    ("oktodesiliun", "oktodesiliun"),
    ("novemdesiliun", "novemdesiliun"),
    ("vigintiliun", "vigintiliun"),
];

/// Denominators with irregular spoken forms instead of regular ordinal
/// formation: (denominator, (singular, plural)) chosen by |numerator|.
const EDGE_DENOMINATORS: &[(&str, (&str, &str))] = &[
    ("1", ("per satu", "per satu")),
    ("2", ("setengah", "setengah")),
    ("4", ("seperempat", "perempat")),
];

/// Numerator and denominator may each be a plain digit run or a run grouped
/// into 3-digit blocks by spaces ("100 000/24").
static SLASH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(-?\d{1,3}(?: \d{3})+|-?\d+) */ *(-?\d{1,3}(?: \d{3})+|-?\d+)").unwrap()
});

/// Converts fraction tokens: vulgar-fraction glyphs ("½", "8½") and slash
/// notation ("1/4", "2 1/2", "100 000/24").
pub struct Fraction {
    glyphs: HashMap<char, FractionEntry>,
    ordinals: HashMap<&'static str, &'static str>,
    edges: HashMap<&'static str, (&'static str, &'static str)>,
    cardinal: &'static Cardinal,
}

impl Fraction {
    /// Get or initialize the shared instance.
    pub fn global() -> &'static Fraction {
        static INSTANCE: OnceLock<Fraction> = OnceLock::new();
        INSTANCE.get_or_init(|| Fraction {
            glyphs: VULGAR_FRACTIONS.iter().copied().collect(),
            ordinals: DENOMINATOR_ORDINALS.iter().copied().collect(),
            edges: EDGE_DENOMINATORS.iter().copied().collect(),
            cardinal: Cardinal::global(),
        })
    }

    pub fn convert(&self, token: &str) -> String {
        let token = token.replace(',', "");

        if let Some(entry) = token.chars().find_map(|c| self.glyphs.get(&c).copied()) {
            let remainder: String = token
                .chars()
                .filter(|c| !self.glyphs.contains_key(c))
                .collect();
            if !remainder.trim().is_empty() {
                let prefix = self.cardinal.convert(&remainder);
                return format!("{} {} {}", prefix, entry.prepended, entry.text);
            }
            return format!("{} {}", entry.single, entry.text);
        }

        if let Some(caps) = SLASH_RE.captures(&token) {
            let numerator = caps[1].replace(' ', "");
            let denominator = caps[2].replace(' ', "");
            let numerator_text = self.cardinal.convert(&numerator);

            let result = if let Some(&(singular, plural)) = self.edges.get(denominator.as_str()) {
                let form = if is_abs_one(&numerator) { singular } else { plural };
                format!("{numerator_text} {form}")
            } else {
                let denominator_text = self.cardinal.convert(&denominator);
                let mut words: Vec<&str> = denominator_text.split(' ').collect();
                if let Some(last) = words.last_mut() {
                    // Only the last word takes the ordinal form; a preceding
                    // multiplier word ("ratus", "ribu") is left untouched.
                    *last = self.ordinals.get(*last).copied().unwrap_or(*last);
                }
                format!("{numerator_text} per {}", words.join(" "))
            };

            // Anything left over is a mixed-number integer part ("2" in
            // "2 1/2").
            let remainder = SLASH_RE.replace_all(&token, "");
            if !remainder.trim().is_empty() {
                let remainder_text = self.cardinal.convert(&remainder);
                let mut words: Vec<&str> = result.split_whitespace().collect();
                if words.first() == Some(&"satu") {
                    words[0] = "se";
                }
                return format!("{remainder_text} {}", words.join(" "));
            }
            return result;
        }

        trace!("no fraction shape matched; passing through");
        token
    }
}

/// Whether a signed digit string has absolute value one ("-1" counts).
fn is_abs_one(digits: &str) -> bool {
    digits.strip_prefix('-').unwrap_or(digits).trim_start_matches('0') == "1"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(token: &str) -> String {
        Fraction::global().convert(token)
    }

    #[test]
    fn test_lone_glyph_exact_spacing() {
        // "½" has an empty `text` field; the trailing space is part of the
        // output contract.
        assert_eq!(convert("½"), "setengah ");
        assert_eq!(convert("⅔"), "dua pertiga");
        assert_eq!(convert("¼"), "satu perempat");
    }

    #[test]
    fn test_glyph_with_integer_prefix() {
        assert_eq!(convert("1½"), "satu  ");
        assert_eq!(convert("8¼"), "delapan se perempat");
        assert_eq!(convert("2⅔"), "dua dua pertiga");
        assert_eq!(convert("8 ½"), "delapan  ");
    }

    #[test]
    fn test_slash_edge_denominators() {
        assert_eq!(convert("1/4"), "satu seperempat");
        assert_eq!(convert("2/4"), "dua perempat");
        assert_eq!(convert("1/2"), "satu setengah");
        assert_eq!(convert("3/2"), "tiga setengah");
        assert_eq!(convert("4/1"), "empat per satu");
        assert_eq!(convert("2/1"), "dua per satu");
    }

    #[test]
    fn test_negative_numerator_counts_as_singular() {
        assert_eq!(convert("-1/4"), "minus satu seperempat");
    }

    #[test]
    fn test_slash_ordinal_denominator() {
        assert_eq!(convert("1/3"), "satu per tiga");
        assert_eq!(convert("5/24"), "lima per dua puluh empat");
    }

    #[test]
    fn test_multiplier_word_before_last_untouched() {
        assert_eq!(convert("1/200"), "satu per dua ratus");
        assert_eq!(convert("3/1000"), "tiga per seribu");
    }

    #[test]
    fn test_grouped_numerator() {
        assert_eq!(convert("100 000/24"), "seratus ribu per dua puluh empat");
    }

    #[test]
    fn test_comma_separator_stripped() {
        assert_eq!(convert("1,000/24"), "seribu per dua puluh empat");
    }

    #[test]
    fn test_mixed_number_elision() {
        // The fractional part "satu setengah" loses "satu" for "se" once an
        // integer part is prepended.
        assert_eq!(convert("2 1/2"), "dua se setengah");
        assert_eq!(convert("3 2/4"), "tiga dua perempat");
    }

    #[test]
    fn test_unmatched_passes_through() {
        assert_eq!(convert("abc"), "abc");
        assert_eq!(convert("/"), "/");
    }
}
