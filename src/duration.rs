use std::time::Duration;

use anyhow::{bail, Result};

static MINUTE: u64 = 60;
static HOUR: u64 = 60 * MINUTE;

/// Parses durations of the form "5s", "500ms" or compounds like "1m30s".
pub fn parse(s: &str) -> Result<Duration> {
    if s.is_empty() {
        bail!("empty duration");
    }

    let mut res = Duration::ZERO;
    let mut chars = s.chars().peekable();

    while chars.peek().is_some() {
        let mut num: u64 = 0;
        let mut has_digits = false;

        while let Some(d) = chars.peek().and_then(|ch| ch.to_digit(10)) {
            num = num * 10 + d as u64;
            has_digits = true;
            chars.next();
        }

        let mut unit = String::new();
        while let Some(ch) = chars.peek() {
            if !ch.is_alphabetic() {
                break;
            }

            unit.push(*ch);
            chars.next();
        }

        if !has_digits || unit.is_empty() {
            bail!("{} is an invalid duration", s);
        }

        res += to_duration(num, &unit)?;
    }

    Ok(res)
}

fn to_duration(n: u64, unit: &str) -> Result<Duration> {
    match unit {
        "h" | "H" => Ok(Duration::from_secs(HOUR * n)),
        "m" | "M" => Ok(Duration::from_secs(MINUTE * n)),
        "s" | "S" => Ok(Duration::from_secs(n)),
        "ms" => Ok(Duration::from_millis(n)),
        "µs" | "us" => Ok(Duration::from_micros(n)),
        "ns" => Ok(Duration::from_nanos(n)),
        _ => bail!("{} is an invalid time unit", unit),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn time_units() {
        assert_eq!(parse("12s").ok(), Some(Duration::from_secs(12)));
        assert_eq!(parse("500ms").ok(), Some(Duration::from_millis(500)));
        assert_eq!(parse("1m10s").ok(), Some(Duration::from_secs(70)));
        assert_eq!(
            parse("1h15m10s").ok(),
            Some(Duration::from_secs(HOUR + (15 * MINUTE) + 10))
        );

        assert_eq!(parse("1G").ok(), None);
        assert_eq!(parse("1h34m23g").ok(), None);
        assert_eq!(parse("s").ok(), None);
        assert_eq!(parse("").ok(), None);
    }
}
