use std::time::Duration;

use colored::*;

/// "1 address", "12 addresses".
pub fn count(n: usize, singular: &str, plural: &str) -> String {
    let unit = if n == 1 { singular } else { plural };
    format!("{n} {unit}")
}

pub fn elapsed(duration: Duration) -> ColoredString {
    format!("{:.2}s", duration.as_secs_f64()).bold().yellow()
}
