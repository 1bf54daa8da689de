// Relfeed  Copyright (C) 2021 Maroš Grego
//
// This file is part of Relfeed. This program comes with ABSOLUTELY NO WARRANTY;
// This is free software, and you are welcome to redistribute it under the
// conditions of the GNU General Public License version 3.0.
//
// You should have received a copy of the GNU General Public License
// along with Relfeed.  If not, see <http://www.gnu.org/licenses/>
use chrono::{NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Serialize, Serializer};
use thiserror::Error;

use std::fmt;

/// The only form of publish dates accepted from the hosting API.
const PUBLISHED_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
/// The same form, byte by byte: `d` stands for an ASCII digit.
const PUBLISHED_SHAPE: &[u8; 20] = b"dddd-dd-ddTdd:dd:ddZ";

/// A wrapper around the `chrono::DateTime<Utc>`, used for rendering of dates.
/// Renders as RFC 3339 with seconds precision and an explicit `+00:00` offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateTime(pub chrono::DateTime<Utc>);

/// Why a publish date was rejected.
#[derive(Debug, Error)]
pub enum DateError {
    /// Not of the form `YYYY-MM-DDTHH:MM:SSZ`
    #[error("expected the form YYYY-MM-DDTHH:MM:SSZ")]
    Shape,
    /// A leap second, which can't be represented
    #[error("seconds out of range")]
    LeapSecond,
    /// Of the right form, but not a real date or time
    #[error("{0}")]
    Chrono(#[from] chrono::ParseError),
}

impl DateTime {
    /// Parse a publish date in the form `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn parse_published(s: &str) -> Result<Self, DateError> {
        let bytes = s.as_bytes();
        if bytes.len() != PUBLISHED_SHAPE.len()
            || !bytes
                .iter()
                .zip(PUBLISHED_SHAPE.iter())
                .all(|(&b, &p)| if p == b'd' { b.is_ascii_digit() } else { b == p })
        {
            return Err(DateError::Shape);
        }
        // chrono accepts the second 60 as a leap second
        if &bytes[17..19] == b"60" {
            return Err(DateError::LeapSecond);
        }
        let naive = NaiveDateTime::parse_from_str(s, PUBLISHED_FORMAT)?;
        Ok(DateTime(Utc.from_utc_datetime(&naive)))
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Secs, false))
    }
}

impl Serialize for DateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod test {
    use super::{DateError, DateTime};
    use chrono::{TimeZone, Utc};

    #[test]
    fn explicit_offset() {
        let date = DateTime::parse_published("2021-05-04T10:00:00Z").unwrap();
        assert_eq!(date.0, Utc.with_ymd_and_hms(2021, 5, 4, 10, 0, 0).unwrap());
        assert_eq!(date.to_string(), "2021-05-04T10:00:00+00:00");
        assert_eq!(
            serde_json::to_string(&date).unwrap(),
            "\"2021-05-04T10:00:00+00:00\""
        );
    }

    #[test]
    fn end_of_year() {
        let date = DateTime::parse_published("1999-12-31T23:59:59Z").unwrap();
        assert_eq!(date.to_string(), "1999-12-31T23:59:59+00:00");
    }

    #[test]
    fn reject_other_formats() {
        for s in [
            "",
            "2021-05-04",
            "2021-05-04T10:00:00",
            "2021-05-04T10:00:00+00:00",
            "2021-05-04T10:00:00.123Z",
            "2021-05-04 10:00:00Z",
            "2021-13-04T10:00:00Z",
            "2021-02-30T10:00:00Z",
            "2021-05-04T25:00:00Z",
            "yesterday",
            "21-05-04T10:00:00Z",
            "+2021-05-04T10:00:00Z",
            "+021-05-04T10:00:00Z",
            " 2021-05-04T10:00:00Z",
            "2021-05-04T10:00: 0Z",
            "2021-5-04T10:00:00Z",
            "2021-05-04T10:00:00z",
            "２０２１-05-04T10:00:00Z",
        ] {
            assert!(DateTime::parse_published(s).is_err(), "{}", s);
        }
    }

    #[test]
    fn reject_leap_second() {
        assert!(matches!(
            DateTime::parse_published("2021-05-04T23:59:60Z"),
            Err(DateError::LeapSecond)
        ));
    }
}
