//! Formatting utilities used for CLI outputs.

use chrono::TimeDelta;
use regex::Regex;
use std::sync::OnceLock;

fn ansi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"))
}

pub fn strip_ansi(s: &str) -> String {
    ansi_re().replace_all(s, "").into_owned()
}

/// Number of printable characters, ignoring ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    strip_ansi(s).chars().count()
}

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Render a duration as `02h 25m 10s` (or `02:25:10` when `short`).
pub fn delta2readable(delta: TimeDelta, want_sign: bool, short: bool) -> String {
    let secs = delta.num_seconds();
    let abs_s = secs.abs();
    let hours = abs_s / 3600;
    let minutes = (abs_s % 3600) / 60;
    let seconds = abs_s % 60;

    let sign = if secs > 0 && want_sign {
        "+"
    } else if secs < 0 {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}:{:02}", sign, hours, minutes, seconds)
    } else {
        format!("{}{:02}h {:02}m {:02}s", sign, hours, minutes, seconds)
    }
}

/// Render an amount stored in cents with two decimals.
pub fn price2readable(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_c = cents.abs();
    format!("{}{}.{:02}", sign, abs_c / 100, abs_c % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readable_durations() {
        let d = TimeDelta::seconds(2 * 3600 + 25 * 60 + 10);
        assert_eq!(delta2readable(d, false, false), "02h 25m 10s");
        assert_eq!(delta2readable(d, true, true), "+02:25:10");
        assert_eq!(delta2readable(-d, false, true), "-02:25:10");
        assert_eq!(delta2readable(TimeDelta::zero(), true, true), "00:00:00");
    }

    #[test]
    fn ansi_sequences_are_not_counted() {
        assert_eq!(visible_len("\x1b[31mred\x1b[0m"), 3);
        assert_eq!(strip_ansi("\x1b[1mbold\x1b[0m!"), "bold!");
    }

    #[test]
    fn readable_prices() {
        assert_eq!(price2readable(4250), "42.50");
        assert_eq!(price2readable(7), "0.07");
        assert_eq!(price2readable(-105), "-1.05");
    }
}
