use std::collections::HashMap;
use std::sync::OnceLock;

use once_cell::sync::Lazy;
use regex::Regex;

use super::cardinal::Cardinal;
use super::digit::Digit;

// The three symbol tables are owned per context and stay separate even
// where their contents coincide today: scheme-prefixed URLs, bare
// URLs/handles, and the corrected "sensible" mode each get their own copy
// so one can change without the others.

const HTTPS_SYMBOLS: &[(char, &str)] = &[
    ('/', "garis miring"),
    (':', "titik dua"),
    ('.', "titik"),
    ('#', "tagar"),
    ('-', "strip"),
    ('é', "e a c u t e"),
    ('(', "kurung buka"),
    (')', "kurung tutup"),
    ('_', "garis bawah"),
    (',', "koma"),
    ('%', "persen"),
    ('~', "tilde"),
    (';', "titik koma"),
    ('\'', "kutip tunggal"),
    ('"', "kutip ganda"),
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

const PLAIN_SYMBOLS: &[(char, &str)] = &[
    ('/', "garis miring"),
    (':', "titik dua"),
    ('.', "titik"),
    ('#', "tagar"),
    ('-', "strip"),
    ('é', "e a c u t e"),
    ('(', "kurung buka"),
    (')', "kurung tutup"),
    ('_', "garis bawah"),
    (',', "koma"),
    ('%', "persen"),
    ('~', "tilde"),
    (';', "titik koma"),
    ('\'', "kutip tunggal"),
    ('"', "kutip ganda"),
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

const SENSIBLE_SYMBOLS: &[(char, &str)] = &[
    ('/', "garis miring"),
    (':', "titik dua"),
    ('.', "titik"),
    ('#', "tagar"),
    ('-', "strip"),
    ('é', "e aksen"),
    ('(', "kurung buka"),
    (')', "kurung tutup"),
    ('_', "garis bawah"),
    (',', "koma"),
    ('%', "persen"),
    ('~', "tilde"),
    (';', "titik koma"),
    ('\'', "kutip tunggal"),
    ('"', "kutip ganda"),
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

static SCHEME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://").unwrap());

/// Converts URL, handle, and hashtag tokens symbol by symbol.
///
/// `convert` reproduces the readings found in the data, including its
/// quirks (cardinal-then-respell for two-digit runs, ".com" contraction
/// only behind a scheme prefix). `sensible_convert` is the corrected
/// alternative; callers pick the mode explicitly.
pub struct Electronic {
    https_symbols: HashMap<char, &'static str>,
    plain_symbols: HashMap<char, &'static str>,
    sensible_symbols: HashMap<char, &'static str>,
    cardinal: &'static Cardinal,
    digit: &'static Digit,
}

impl Electronic {
    /// Get or initialize the shared instance.
    pub fn global() -> &'static Electronic {
        static INSTANCE: OnceLock<Electronic> = OnceLock::new();
        INSTANCE.get_or_init(|| Electronic {
            https_symbols: HTTPS_SYMBOLS.iter().copied().collect(),
            plain_symbols: PLAIN_SYMBOLS.iter().copied().collect(),
            sensible_symbols: SENSIBLE_SYMBOLS.iter().copied().collect(),
            cardinal: Cardinal::global(),
            digit: Digit::global(),
        })
    }

    pub fn convert(&self, token: &str) -> String {
        let token = token.to_lowercase();
        if token == "::" {
            return token;
        }
        if token.starts_with('#') && token.chars().count() > 1 {
            return self.convert_hashtag(&token);
        }

        let http = SCHEME_RE.is_match(&token);
        let symbols = if http {
            &self.https_symbols
        } else {
            &self.plain_symbols
        };

        let chars: Vec<char> = token.chars().collect();
        let mut words: Vec<String> = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            if http && chars[i..].starts_with(&['.', 'c', 'o', 'm']) {
                words.push("titik com".to_string());
                i += 4;
                continue;
            }

            let mut run = 0;
            while i + run < chars.len() && chars[i + run].is_ascii_digit() {
                run += 1;
            }

            if run == 2 && chars[i] != '0' {
                // A two-digit run reads as a cardinal, then gets respelled
                // into single characters ("28" -> "d u a p u l u h ...").
                let number: String = chars[i..i + run].iter().collect();
                words.push(spell_out(&self.cardinal.convert(&number)));
                i += run;
            } else if run > 0 && !(run == 1 && chars[i] == '0') {
                let number: String = chars[i..i + run].iter().collect();
                match self.digit.convert(&number) {
                    Ok(text) => words.push(spell_out(&text)),
                    Err(_) => words.push(number),
                }
                i += run;
            } else {
                let c = chars[i];
                match symbols.get(&c) {
                    Some(word) => words.push((*word).to_string()),
                    None => words.push(c.to_string()),
                }
                i += 1;
            }
        }
        words.join(" ")
    }

    /// Corrected rendering: no scheme gating, ".com" reads "dot com"
    /// everywhere, digits go through the character table like any symbol.
    pub fn sensible_convert(&self, token: &str) -> String {
        let token = token.to_lowercase();
        if token == "::" {
            return token;
        }
        if token.starts_with('#') && token.chars().count() > 1 {
            return self.convert_hashtag(&token);
        }

        let chars: Vec<char> = token.chars().collect();
        let mut words: Vec<String> = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            if chars[i..].starts_with(&['.', 'c', 'o', 'm']) {
                words.push("dot com".to_string());
                i += 4;
                continue;
            }
            let c = chars[i];
            match self.sensible_symbols.get(&c) {
                Some(word) => words.push((*word).to_string()),
                None => words.push(c.to_string()),
            }
            i += 1;
        }
        words.join(" ")
    }

    /// "#Tag" reads "tagar" plus the tag spelled through the sensible
    /// table. Unmapped characters run together (letters form words);
    /// mapped ones are set off with spaces.
    fn convert_hashtag(&self, token: &str) -> String {
        let mut out = String::from("tagar ");
        for c in token.chars().skip(1) {
            match self.sensible_symbols.get(&c) {
                Some(word) => {
                    if !out.ends_with(' ') {
                        out.push(' ');
                    }
                    out.push_str(word);
                    out.push(' ');
                }
                None => out.push(c),
            }
        }
        out.trim().to_string()
    }
}

/// Respell a phrase as its non-space characters, one per word.
fn spell_out(text: &str) -> String {
    let letters: Vec<String> = text
        .chars()
        .filter(|c| *c != ' ')
        .map(String::from)
        .collect();
    letters.join(" ")
}
