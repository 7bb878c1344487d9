/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::error::Error as StdError;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

mod format;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// A point in time, stored as seconds since the Unix epoch plus sub-second nanoseconds.
///
/// `subsecond_nanos` always moves the instant forward in time, so one and a half seconds
/// before the epoch is `{ seconds: -2, subsecond_nanos: 500_000_000 }`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

/// Wire representation for an [`Instant`].
///
/// The JSON-RPC services in this workspace use [`Format::EpochSeconds`]; the other formats are
/// available for members that override the protocol default.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Format {
    /// RFC-3339 / ISO-8601, e.g. `2019-12-16T23:48:18.52Z`
    DateTime,
    /// IMF-fixdate, e.g. `Mon, 16 Dec 2019 23:48:18 GMT`
    HttpDate,
    /// Fractional seconds since the epoch, e.g. `1576540098.52`
    EpochSeconds,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds: seconds + (subsecond_nanos / NANOS_PER_SECOND) as i64,
            subsecond_nanos: subsecond_nanos % NANOS_PER_SECOND,
        }
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(after) => Instant::from_secs_and_nanos(after.as_secs() as i64, after.subsec_nanos()),
            Err(before) => {
                let before = before.duration();
                match before.subsec_nanos() {
                    0 => Instant::from_epoch_seconds(-(before.as_secs() as i64)),
                    nanos => Instant {
                        seconds: -(before.as_secs() as i64) - 1,
                        subsecond_nanos: NANOS_PER_SECOND - nanos,
                    },
                }
            }
        }
    }

    /// Parses a textual timestamp in the given `format`.
    pub fn from_str(s: &str, format: Format) -> Result<Self, DateTimeParseError> {
        match format {
            Format::DateTime => format::date_time::parse(s),
            Format::HttpDate => format::http_date::parse(s),
            Format::EpochSeconds => format::epoch_seconds::parse(s),
        }
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn epoch_subsecond_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// Formats the instant. Fails only when the instant lies outside the range the
    /// calendar formats can express.
    pub fn fmt(&self, format: Format) -> Result<String, DateTimeFormatError> {
        match format {
            Format::DateTime => format::date_time::format(self),
            Format::HttpDate => format::http_date::format(self),
            Format::EpochSeconds => Ok(format::epoch_seconds::format(self)),
        }
    }
}

impl From<SystemTime> for Instant {
    fn from(system_time: SystemTime) -> Self {
        Instant::from_system_time(system_time)
    }
}

/// Failure to parse a timestamp from its wire representation.
#[derive(Debug, PartialEq, Eq)]
pub struct DateTimeParseError {
    message: String,
}

impl DateTimeParseError {
    fn new(message: impl Into<String>) -> Self {
        DateTimeParseError {
            message: message.into(),
        }
    }
}

impl fmt::Display for DateTimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse timestamp: {}", self.message)
    }
}

impl StdError for DateTimeParseError {}

/// Failure to format an [`Instant`] in a calendar format.
#[derive(Debug, PartialEq, Eq)]
pub struct DateTimeFormatError {
    seconds: i64,
}

impl fmt::Display for DateTimeFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "epoch second {} is outside the range of supported calendar dates",
            self.seconds
        )
    }
}

impl StdError for DateTimeFormatError {}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_instant_fmt() {
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(instant.fmt(Format::DateTime).unwrap(), "2019-12-16T23:48:18Z");
        assert_eq!(instant.fmt(Format::EpochSeconds).unwrap(), "1576540098");
        assert_eq!(
            instant.fmt(Format::HttpDate).unwrap(),
            "Mon, 16 Dec 2019 23:48:18 GMT"
        );

        let instant = Instant::from_secs_and_nanos(1576540098, 520_000_000);
        assert_eq!(instant.fmt(Format::DateTime).unwrap(), "2019-12-16T23:48:18.52Z");
        assert_eq!(instant.fmt(Format::EpochSeconds).unwrap(), "1576540098.52");
        assert_eq!(
            instant.fmt(Format::HttpDate).unwrap(),
            "Mon, 16 Dec 2019 23:48:18.520 GMT"
        );
    }

    #[test]
    fn whole_tens_of_seconds_keep_their_zero() {
        let instant = Instant::from_epoch_seconds(1576540090);
        assert_eq!(instant.fmt(Format::DateTime).unwrap(), "2019-12-16T23:48:10Z");
    }

    #[test]
    fn negative_fractions_round_trip_through_epoch_seconds() {
        let instant = Instant::from_str("-1.5", Format::EpochSeconds).unwrap();
        assert_eq!(instant.epoch_seconds(), -2);
        assert_eq!(instant.epoch_subsecond_nanos(), 500_000_000);
        assert_eq!(instant.fmt(Format::EpochSeconds).unwrap(), "-1.5");

        let instant = Instant::from_str("-0.25", Format::EpochSeconds).unwrap();
        assert_eq!(instant, Instant::from_secs_and_nanos(-1, 750_000_000));
        assert_eq!(instant.fmt(Format::EpochSeconds).unwrap(), "-0.25");
    }

    #[test]
    fn epoch_seconds_keep_every_digit() {
        let instant = Instant::from_secs_and_nanos(1_600_000_000, 123_456_789);
        let text = instant.fmt(Format::EpochSeconds).unwrap();
        assert_eq!(text, "1600000000.123456789");
        assert_eq!(Instant::from_str(&text, Format::EpochSeconds), Ok(instant));
        assert_eq!(
            Instant::from_str("1.429203623625E9", Format::EpochSeconds),
            Ok(Instant::from_secs_and_nanos(1_429_203_623, 625_000_000))
        );
        assert_eq!(
            Instant::from_str("15762e-4", Format::EpochSeconds),
            Ok(Instant::from_secs_and_nanos(1, 576_200_000))
        );
        assert_eq!(
            Instant::from_str("-9223372036854775808", Format::EpochSeconds),
            Ok(Instant::from_epoch_seconds(i64::MIN))
        );
    }

    #[test]
    fn epoch_seconds_out_of_range() {
        for text in [
            "18446744073709551615",
            "9223372036854775808",
            "-9223372036854775808.5",
            "1e400",
            "1e19",
            "0.0000000001",
            "1.",
            "+5",
            "1e",
        ] {
            assert!(Instant::from_str(text, Format::EpochSeconds).is_err(), "{}", text);
        }
        assert_eq!(
            Instant::from_str("1e18", Format::EpochSeconds),
            Ok(Instant::from_epoch_seconds(1_000_000_000_000_000_000))
        );
    }

    #[test]
    fn parse_each_format() {
        let expected = Instant::from_secs_and_nanos(1576540098, 520_000_000);
        assert_eq!(
            Instant::from_str("2019-12-16T23:48:18.52Z", Format::DateTime),
            Ok(expected)
        );
        assert_eq!(
            Instant::from_str("Mon, 16 Dec 2019 23:48:18.520 GMT", Format::HttpDate),
            Ok(expected)
        );
        assert_eq!(
            Instant::from_str("1576540098.52", Format::EpochSeconds),
            Ok(expected)
        );
        assert!(Instant::from_str("yesterday", Format::DateTime).is_err());
        assert!(Instant::from_str("16 Dec 2019", Format::HttpDate).is_err());
        assert!(Instant::from_str("12abc", Format::EpochSeconds).is_err());
    }

    #[test]
    fn system_time_before_epoch() {
        let instant = Instant::from_system_time(UNIX_EPOCH - Duration::from_millis(1500));
        assert_eq!(instant, Instant::from_secs_and_nanos(-2, 500_000_000));
    }
}
