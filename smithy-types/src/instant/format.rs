/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::{DateTimeFormatError, Instant, NANOS_PER_SECOND};
use chrono::{DateTime, Utc};

fn to_chrono(instant: &Instant) -> Result<DateTime<Utc>, DateTimeFormatError> {
    DateTime::<Utc>::from_timestamp(instant.seconds, instant.subsecond_nanos).ok_or(
        DateTimeFormatError {
            seconds: instant.seconds,
        },
    )
}

fn fraction_digits(nanos: u32) -> String {
    format!("{:09}", nanos).trim_end_matches('0').to_owned()
}

pub(super) mod epoch_seconds {
    use super::{fraction_digits, Instant, NANOS_PER_SECOND};
    use crate::instant::DateTimeParseError;

    pub(in crate::instant) fn format(instant: &Instant) -> String {
        match (instant.seconds, instant.subsecond_nanos) {
            (seconds, 0) => seconds.to_string(),
            (seconds, nanos) if seconds >= 0 => format!("{}.{}", seconds, fraction_digits(nanos)),
            // -1.5 is stored as -2 + 0.5
            (seconds, nanos) => {
                let whole = seconds + 1;
                let fraction = fraction_digits(NANOS_PER_SECOND - nanos);
                if whole == 0 {
                    format!("-0.{}", fraction)
                } else {
                    format!("{}.{}", whole, fraction)
                }
            }
        }
    }

    /// Parses a decimal epoch-seconds value such as `1576540098`, `1576540098.52`, `-1.5` or
    /// `1.429203623625E9` without going through a float.
    ///
    /// Values whose whole seconds do not fit in an `i64`, or that carry non-zero digits past
    /// the nanosecond, are rejected.
    pub(in crate::instant) fn parse(s: &str) -> Result<Instant, DateTimeParseError> {
        let invalid = |reason: &str| {
            DateTimeParseError::new(format!(
                "`{}` is not a valid epoch-seconds value: {}",
                s, reason
            ))
        };
        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
            Some(at) => (
                &unsigned[..at],
                unsigned[at + 1..]
                    .parse::<i32>()
                    .map_err(|_| invalid("malformed exponent"))?,
            ),
            None => (unsigned, 0),
        };
        let (whole_text, fraction_text) = match mantissa.split_once('.') {
            Some((_, "")) => return Err(invalid("empty fraction")),
            Some((whole, fraction)) => (whole, fraction),
            None => (mantissa, ""),
        };
        if whole_text.is_empty()
            || !whole_text
                .bytes()
                .chain(fraction_text.bytes())
                .all(|b| b.is_ascii_digit())
        {
            return Err(invalid("not a decimal number"));
        }
        let digits: Vec<u8> = whole_text
            .bytes()
            .chain(fraction_text.bytes())
            .map(|b| b - b'0')
            .collect();
        let leading_zeros = digits.iter().take_while(|d| **d == 0).count();
        let digits = &digits[leading_zeros..];
        // Index in `digits` of the first digit after the decimal point
        let point = whole_text.len() as i64 + i64::from(exponent) - leading_zeros as i64;
        if point > 19 {
            return Err(invalid("out of range"));
        }
        let digit_at = |index: i64| match usize::try_from(index) {
            Ok(index) => digits.get(index).copied().unwrap_or(0),
            Err(_) => 0,
        };
        let whole = (0..point.max(0))
            .fold(0_i128, |acc, index| acc * 10 + i128::from(digit_at(index)));
        let nanos = (point..point + 9)
            .fold(0_u32, |acc, index| acc * 10 + u32::from(digit_at(index)));
        let sub_nanosecond = digits
            .iter()
            .enumerate()
            .any(|(index, digit)| *digit != 0 && index as i64 >= point + 9);
        if sub_nanosecond {
            return Err(invalid("more precise than nanoseconds"));
        }
        let seconds = i64::try_from(if negative { -whole } else { whole })
            .map_err(|_| invalid("out of range"))?;
        match (negative, nanos) {
            // -1.5 is stored as -2 + 0.5
            (true, nanos) if nanos > 0 => Ok(Instant {
                seconds: seconds.checked_sub(1).ok_or_else(|| invalid("out of range"))?,
                subsecond_nanos: NANOS_PER_SECOND - nanos,
            }),
            _ => Ok(Instant {
                seconds,
                subsecond_nanos: nanos,
            }),
        }
    }
}

pub(super) mod date_time {
    use super::{fraction_digits, to_chrono, DateTimeFormatError, Instant};
    use crate::instant::DateTimeParseError;
    use chrono::{DateTime, SecondsFormat};

    /// Ok: "2019-12-16T23:48:18Z"
    /// Ok: "2019-12-16T23:48:18.52Z"
    pub(in crate::instant) fn format(instant: &Instant) -> Result<String, DateTimeFormatError> {
        let date_time = to_chrono(instant)?;
        if instant.subsecond_nanos == 0 {
            return Ok(date_time.to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let mut out = date_time
            .to_rfc3339_opts(SecondsFormat::Secs, true)
            .trim_end_matches('Z')
            .to_owned();
        out.push('.');
        out.push_str(&fraction_digits(instant.subsecond_nanos));
        out.push('Z');
        Ok(out)
    }

    pub(in crate::instant) fn parse(s: &str) -> Result<Instant, DateTimeParseError> {
        let parsed = DateTime::parse_from_rfc3339(s)
            .map_err(|err| DateTimeParseError::new(format!("`{}`: {}", s, err)))?;
        Ok(Instant::from_secs_and_nanos(
            parsed.timestamp(),
            parsed.timestamp_subsec_nanos(),
        ))
    }
}

pub(super) mod http_date {
    use super::{to_chrono, DateTimeFormatError, Instant};
    use crate::instant::DateTimeParseError;
    use chrono::{NaiveDateTime, TimeZone, Utc};

    /// Ok: "Mon, 16 Dec 2019 23:48:18 GMT"
    /// Ok: "Mon, 16 Dec 2019 23:48:18.520 GMT"
    pub(in crate::instant) fn format(instant: &Instant) -> Result<String, DateTimeFormatError> {
        let date_time = to_chrono(instant)?;
        let pattern = if instant.has_nanos() {
            "%a, %d %b %Y %H:%M:%S%.3f GMT"
        } else {
            "%a, %d %b %Y %H:%M:%S GMT"
        };
        Ok(date_time.format(pattern).to_string())
    }

    pub(in crate::instant) fn parse(s: &str) -> Result<Instant, DateTimeParseError> {
        let naive = NaiveDateTime::parse_from_str(s, "%a, %d %b %Y %H:%M:%S%.f GMT")
            .map_err(|err| DateTimeParseError::new(format!("`{}`: {}", s, err)))?;
        let parsed = Utc.from_utc_datetime(&naive);
        Ok(Instant::from_secs_and_nanos(
            parsed.timestamp(),
            parsed.timestamp_subsec_nanos(),
        ))
    }
}
