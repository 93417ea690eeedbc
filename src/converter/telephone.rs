use std::collections::HashMap;
use std::sync::OnceLock;

/// Spoken silence for separators.
const PAUSE: &str = "jeda";

const CHAR_WORDS: &[(char, &str)] = &[
    (' ', PAUSE),
    ('-', PAUSE),
    ('x', "sambungan"),
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

/// Spells telephone tokens digit by digit with pause markers for
/// separators. Letters pass through one character at a time, so
/// abbreviations and words alike come out spelled ("maties" reads
/// "m a t i e s"); the data this models does not distinguish them.
pub struct Telephone {
    words: HashMap<char, &'static str>,
}

impl Telephone {
    /// Get or initialize the shared instance.
    pub fn global() -> &'static Telephone {
        static INSTANCE: OnceLock<Telephone> = OnceLock::new();
        INSTANCE.get_or_init(|| Telephone {
            words: CHAR_WORDS.iter().copied().collect(),
        })
    }

    pub fn convert(&self, token: &str) -> String {
        let token = token.to_lowercase();

        // Parentheses read as pauses, same as hyphens.
        let mut mapped: Vec<String> = Vec::with_capacity(token.len());
        for c in token.chars() {
            let c = if c == '(' || c == ')' { '-' } else { c };
            match self.words.get(&c) {
                Some(word) => mapped.push((*word).to_string()),
                None => mapped.push(c.to_string()),
            }
        }

        // Collapse runs of pauses and drop a pause at the start.
        let mut collapsed: Vec<String> = Vec::with_capacity(mapped.len());
        for word in mapped {
            if word == PAUSE && collapsed.last().map_or(true, |prev| prev == PAUSE) {
                continue;
            }
            collapsed.push(word);
        }

        // A free-standing trailing group of zeros reads as a round number:
        // exactly 2 zero words become "ratus", exactly 3 become "ribu", when
        // the run ends at a pause or the end of the sequence and does not
        // continue a longer zero run.
        let mut i = 0;
        while i < collapsed.len() {
            let mut run = 0;
            while i + run < collapsed.len() && collapsed[i + run] == "nol" {
                run += 1;
            }
            let at_boundary = i + run >= collapsed.len() || collapsed[i + run] == PAUSE;
            let preceded_ok =
                i == 0 || (collapsed[i - 1] != "nol" && collapsed[i - 1] != PAUSE);
            if at_boundary && preceded_ok && (run == 2 || run == 3) {
                let word = if run == 2 { "ratus" } else { "ribu" };
                collapsed.splice(i..i + run, [word.to_string()]);
            }
            i += 1;
        }

        collapsed.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(token: &str) -> String {
        Telephone::global().convert(token)
    }

    #[test]
    fn test_digits_and_separator() {
        assert_eq!(convert("116-20"), "satu satu enam jeda dua nol");
    }

    #[test]
    fn test_leading_pause_dropped() {
        assert_eq!(convert("-116"), "satu satu enam");
        assert_eq!(convert(" 116"), "satu satu enam");
    }

    #[test]
    fn test_pause_runs_collapse() {
        assert_eq!(convert("1 - 2"), "satu jeda dua");
    }

    #[test]
    fn test_parentheses_read_as_pauses() {
        assert_eq!(
            convert("(0321) 123"),
            "nol tiga dua satu jeda satu dua tiga"
        );
    }

    #[test]
    fn test_two_zero_run_contracts_to_ratus() {
        assert_eq!(convert("5100"), "lima satu ratus");
    }

    #[test]
    fn test_three_zero_run_contracts_to_ribu() {
        assert_eq!(convert("1000-22"), "satu ribu jeda dua dua");
    }

    #[test]
    fn test_zero_run_after_zero_does_not_contract() {
        // Four zeros: no suffix of the run may contract, since each candidate
        // run is preceded by another zero.
        assert_eq!(convert("10000"), "satu nol nol nol nol");
    }

    #[test]
    fn test_zero_run_after_pause_does_not_contract() {
        assert_eq!(convert("1-00"), "satu jeda nol nol");
    }

    #[test]
    fn test_letters_spelled_individually() {
        assert_eq!(convert("12abc"), "satu dua a b c");
        assert_eq!(convert("53-8 FNB"), "lima tiga jeda delapan jeda f n b");
    }

    #[test]
    fn test_extension_marker() {
        assert_eq!(
            convert("123 x 45"),
            "satu dua tiga jeda sambungan jeda empat lima"
        );
    }
}
