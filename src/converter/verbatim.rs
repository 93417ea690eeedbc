use std::collections::HashMap;
use std::sync::OnceLock;

/// Whole-token and per-character symbol readings: units, currency, math
/// operators, Greek letters.
const SYMBOLS: &[(&str, &str)] = &[
    // Words
    ("feet", "kaki"),
    // Characters
    ("&", "dan"),
    ("_", "garis bawah"),
    ("#", "tagar"),
    ("€", "euro"),
    ("$", "dolar"),
    ("£", "pound"),
    ("~", "tilde"),
    ("%", "persen"),
    // Math
    ("²", "kuadrat"),
    ("³", "kubik"),
    ("×", "kali"),
    ("=", "sama dengan"),
    (">", "lebih besar dari"),
    // Greek
    ("α", "alfa"),
    ("Α", "alfa"),
    ("β", "beta"),
    ("Β", "beta"),
    ("γ", "gamma"),
    ("Γ", "gamma"),
    ("δ", "delta"),
    ("Δ", "delta"),
    ("ε", "epsilon"),
    ("Ε", "epsilon"),
    ("ζ", "zeta"),
    ("Ζ", "zeta"),
    ("η", "eta"),
    ("Η", "eta"),
    ("θ", "theta"),
    ("Θ", "theta"),
    ("ι", "iota"),
    ("Ι", "iota"),
    ("κ", "kappa"),
    ("Κ", "kappa"),
    ("λ", "lambda"),
    ("Λ", "lambda"),
    ("Μ", "mu"),
    ("μ", "mu"),
    ("ν", "nu"),
    ("Ν", "nu"),
    ("ξ", "xi"),
    ("Ξ", "xi"),
    ("ο", "omikron"),
    ("Ο", "omikron"),
    ("π", "pi"),
    ("Π", "pi"),
    ("ρ", "rho"),
    ("Ρ", "rho"),
    ("ς", "sigma"),
    ("σ", "sigma"),
    ("Σ", "sigma"),
    ("Ϲ", "sigma"),
    ("ϲ", "sigma"),
    ("τ", "tau"),
    ("Τ", "tau"),
    ("υ", "upsilon"),
    ("Υ", "upsilon"),
    ("φ", "phi"),
    ("Φ", "phi"),
    ("χ", "chi"),
    ("Χ", "chi"),
    ("ψ", "psi"),
    ("Ψ", "psi"),
    ("ω", "omega"),
    ("Ω", "omega"),
    // Measurement
    ("µ", "mikro"),
];

/// Letter-level spellings for digits (and "." / "-") used on the
/// per-character path. Note the granularity: "6" reads "e n a m" here,
/// letter by letter, where the digit converter would say "enam" — runs of
/// mixed symbols spell out all the way down.
const SPELLED: &[(char, &str)] = &[
    ('.', "titik"),
    ('-', "s t r i p"),
    ('0', "n o l"),
    ('1', "s a t u"),
    ('2', "d u a"),
    ('3', "t i g a"),
    ('4', "e m p a t"),
    ('5', "l i m a"),
    ('6', "e n a m"),
    ('7', "t u j u h"),
    ('8', "d e l a p a n"),
    ('9', "s e m b i l a n"),
];

/// Catch-all spelling for symbol and character runs.
pub struct Verbatim {
    symbols: HashMap<&'static str, &'static str>,
    spelled: HashMap<char, &'static str>,
}

impl Verbatim {
    /// Get or initialize the shared instance.
    pub fn global() -> &'static Verbatim {
        static INSTANCE: OnceLock<Verbatim> = OnceLock::new();
        INSTANCE.get_or_init(|| Verbatim {
            symbols: SYMBOLS.iter().copied().collect(),
            spelled: SPELLED.iter().copied().collect(),
        })
    }

    pub fn convert(&self, token: &str) -> String {
        if let Some(word) = self.symbols.get(token) {
            return (*word).to_string();
        }
        // A single character with no table entry keeps its case.
        if token.chars().count() == 1 {
            return token.to_string();
        }
        let words: Vec<String> = token.chars().map(|c| self.convert_char(c)).collect();
        words.join(" ")
    }

    fn convert_char(&self, c: char) -> String {
        if let Some(word) = self.spelled.get(&c) {
            return (*word).to_string();
        }
        let mut buf = [0u8; 4];
        if let Some(word) = self.symbols.get(&*c.encode_utf8(&mut buf)) {
            return (*word).to_string();
        }
        c.to_lowercase().to_string()
    }
}
