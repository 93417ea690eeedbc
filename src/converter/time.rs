use std::sync::OnceLock;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::cardinal::Cardinal;

// The three shapes overlap ("hh:mm" satisfies the first two), so the match
// order below is part of the contract: clock first, then duration, then the
// suffix-first form. `(?::|.)` matches any single separator character, not
// just dot and colon; the corpus readings assume exactly that.
static CLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?P<hour>\d{1,2}) *(?:(?::|.) *(?P<minute>\d{1,2}))? *(?P<suffix>[a-zA-Z. ]*)$")
        .unwrap()
});

static DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:(?P<hour>\d{1,2}) *:)? *(?P<minute>\d{1,2})(?: *: *(?P<seconds>\d{1,2})(?: *. *(?P<milliseconds>\d{1,2}))?)? *(?P<suffix>[a-zA-Z. ]*)$",
    )
    .unwrap()
});

static AMPM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?P<suffix>[a-zA-Z. ]*)(?P<hour>\d{1,2})").unwrap()
});

/// Converts clock times ("14.30", "2:30 PM"), durations ("1:30:45.99"), and
/// suffix-first forms ("PM3") into spoken phrases. Unmatched tokens pass
/// through unchanged.
pub struct Time {
    cardinal: &'static Cardinal,
}

impl Time {
    /// Get or initialize the shared instance.
    pub fn global() -> &'static Time {
        static INSTANCE: OnceLock<Time> = OnceLock::new();
        INSTANCE.get_or_init(|| Time {
            cardinal: Cardinal::global(),
        })
    }

    pub fn convert(&self, token: &str) -> String {
        let token = token.trim();

        if let Some(caps) = CLOCK_RE.captures(token) {
            let mut words: Vec<String> = vec![self.cardinal.convert(&caps["hour"])];
            match caps.name("minute").map(|m| m.as_str()) {
                // On the hour reads "tepat" rather than "nol nol".
                Some("00") => words.push("tepat".to_string()),
                Some(minute) => words.push(self.cardinal.convert(minute)),
                None => {}
            }
            push_suffix(&mut words, caps.name("suffix").map_or("", |m| m.as_str()));
            return words.join(" ");
        }

        if let Some(caps) = DURATION_RE.captures(token) {
            let mut words: Vec<String> = Vec::new();
            if let Some(hour) = caps.name("hour") {
                words.push(self.cardinal.convert(hour.as_str()));
                words.push("jam".to_string());
            }
            if let Some(minute) = caps.name("minute") {
                words.push(self.cardinal.convert(minute.as_str()));
                words.push("menit".to_string());
            }
            let seconds = caps.name("seconds");
            if let Some(sec) = seconds {
                words.push("lewat".to_string());
                words.push(self.cardinal.convert(sec.as_str()));
                words.push("detik".to_string());
            }
            if let Some(ms) = caps.name("milliseconds") {
                if seconds.is_none() {
                    words.push("lewat".to_string());
                }
                words.push(self.cardinal.convert(ms.as_str()));
                words.push("milidetik".to_string());
            }
            push_suffix(&mut words, caps.name("suffix").map_or("", |m| m.as_str()));
            return words.join(" ");
        }

        if let Some(caps) = AMPM_RE.captures(token) {
            let mut words: Vec<String> = vec![self.cardinal.convert(&caps["hour"])];
            push_suffix(&mut words, caps.name("suffix").map_or("", |m| m.as_str()));
            return words.join(" ");
        }

        trace!("no time shape matched; passing through");
        token.to_string()
    }
}

/// Append an AM/PM-style suffix one letter at a time, dropping spaces and
/// dots ("p.m." reads "p m").
fn push_suffix(words: &mut Vec<String>, suffix: &str) {
    for c in suffix.to_lowercase().chars() {
        if c != ' ' && c != '.' {
            words.push(c.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(token: &str) -> String {
        Time::global().convert(token)
    }

    #[test]
    fn test_clock_dot_separator() {
        assert_eq!(convert("14.30"), "empat belas tiga puluh");
    }

    #[test]
    fn test_clock_colon_separator() {
        assert_eq!(convert("14:30"), "empat belas tiga puluh");
    }

    #[test]
    fn test_on_the_hour_reads_tepat() {
        assert_eq!(convert("14.00"), "empat belas tepat");
    }

    #[test]
    fn test_hour_only() {
        assert_eq!(convert("7"), "tujuh");
    }

    #[test]
    fn test_clock_with_suffix() {
        assert_eq!(convert("2:30 PM"), "dua tiga puluh p m");
        assert_eq!(convert("2 p.m."), "dua p m");
    }

    #[test]
    fn test_duration_full() {
        assert_eq!(
            convert("1:30:45"),
            "satu jam tiga puluh menit lewat empat puluh lima detik"
        );
    }

    #[test]
    fn test_duration_with_milliseconds() {
        assert_eq!(
            convert("30:45.99"),
            "tiga puluh menit lewat empat puluh lima detik sembilan puluh sembilan milidetik"
        );
    }

    #[test]
    fn test_suffix_first_form() {
        assert_eq!(convert("PM2"), "dua p m");
        assert_eq!(convert("AM10"), "sepuluh a m");
    }

    #[test]
    fn test_clock_shape_wins_over_duration() {
        // "9:05" matches both the clock and duration patterns; the clock
        // reading (no unit words) must win.
        assert_eq!(convert("9:05"), "sembilan lima");
    }

    #[test]
    fn test_unmatched_passes_through() {
        assert_eq!(convert("siang"), "siang");
        assert_eq!(convert(""), "");
    }
}
