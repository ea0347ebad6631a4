//! String conveniences: capitalization, trailing zero trimming, lenient date parsing

use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::datetime::at_wall_clock;
use crate::error::{Result, SugarError};

/// Readings that carry their own offset (`Z`, `+02:00`, `-0530`, ...).
const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
];

/// Wall-clock readings without an offset.
const WALL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y%m%dT%H%M%S%.f",
    "%Y%m%d %H%M%S%.f",
    "%Y%m%dT%H%M",
];

/// Wall-clock readings with the hour only; the minute defaults to zero.
const HOUR_FORMATS: &[&str] = &["%Y-%m-%dT%H", "%Y-%m-%d %H", "%Y%m%dT%H"];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

/// A successfully parsed point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reading {
    Zoned(DateTime<FixedOffset>),
    Wall(NaiveDateTime),
}

impl Reading {
    fn into_local(self) -> DateTime<Local> {
        match self {
            Reading::Zoned(at) => at.with_timezone(&Local),
            Reading::Wall(naive) => at_wall_clock(&Local, naive),
        }
    }
}

fn parse_hour(input: &str, fmt: &str) -> Option<NaiveDateTime> {
    let mut parsed = Parsed::new();
    parse(&mut parsed, input, StrftimeItems::new(fmt)).ok()?;
    parsed.set_minute(0).ok()?;
    parsed.to_naive_datetime_with_offset(0).ok()
}

fn parse_reading(raw: &str) -> Option<Reading> {
    // ISO 8601 allows a lower-case `t`/`z` and a comma before the fraction.
    let normalised = raw.trim().to_ascii_uppercase().replace(',', ".");
    let input = normalised.as_str();
    if let Ok(at) = DateTime::parse_from_rfc3339(input) {
        return Some(Reading::Zoned(at));
    }
    let zoned = ZONED_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(input, fmt).ok())
        .map(Reading::Zoned);
    let wall = || {
        WALL_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
            .or_else(|| HOUR_FORMATS.iter().find_map(|fmt| parse_hour(input, fmt)))
            .or_else(|| {
                DATE_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDate::parse_from_str(input, fmt).ok())
                    .map(|date| date.and_time(NaiveTime::MIN))
            })
            .map(Reading::Wall)
    };
    let reading = zoned.or_else(wall);
    if reading.is_none() {
        log::trace!("{raw:?} is not a recognised date");
    }
    reading
}

/// Extension trait for string slices.
pub trait StrExt {
    /// Upper-cases the first character and leaves the rest untouched.
    ///
    /// # Errors
    /// [`SugarError::EmptyString`] when the string is empty.
    fn capitalize(&self) -> Result<String>;

    /// Lower-cases the first character; an empty string stays empty.
    fn decapitalize(&self) -> String;

    /// Drops zeros trailing the decimal point, and the point itself when
    /// nothing is left after it: `"12.3400"` becomes `"12.34"`, `"15.000"`
    /// becomes `"15"`. Anything that is not a plain decimal number is
    /// returned unchanged.
    fn clear_trailing_zeros(&self) -> String;

    /// Parses the string as a point in time and converts it to local time.
    ///
    /// Accepts ISO 8601 dates and date-times in extended (`2023-08-30T12:34`)
    /// or basic (`20230830T1234`) form: `T`, `t` or a space as separator,
    /// hour-only or minute precision, optional seconds with a `.` or `,`
    /// fraction, and an optional `Z` or `±hh[:mm]` offset. Readings with an
    /// offset keep their instant; readings without one are taken as local
    /// wall-clock time. `None` when the string is not a date.
    fn to_local_date(&self) -> Option<DateTime<Local>>;

    /// Parses everything before the first `+` as a point in time.
    ///
    /// Only a `+hh:mm` style suffix is discarded. A trailing `Z` or a negative
    /// offset is still honoured, and the instant it denotes is returned in
    /// local time.
    fn to_date_ignore_timezone(&self) -> Option<DateTime<Local>>;
}

impl StrExt for str {
    fn capitalize(&self) -> Result<String> {
        let mut chars = self.chars();
        let first = chars.next().ok_or(SugarError::EmptyString)?;
        Ok(first.to_uppercase().chain(chars).collect())
    }

    fn decapitalize(&self) -> String {
        let mut chars = self.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    fn clear_trailing_zeros(&self) -> String {
        let Some((whole, fraction)) = self.split_once('.') else {
            return self.to_owned();
        };
        let unsigned = whole.strip_prefix(&['-', '+'][..]).unwrap_or(whole);
        let is_decimal = !unsigned.is_empty()
            && unsigned.bytes().all(|b| b.is_ascii_digit())
            && fraction.bytes().all(|b| b.is_ascii_digit());
        if !is_decimal {
            return self.to_owned();
        }
        match fraction.trim_end_matches('0') {
            "" => whole.to_owned(),
            kept => format!("{whole}.{kept}"),
        }
    }

    fn to_local_date(&self) -> Option<DateTime<Local>> {
        parse_reading(self).map(Reading::into_local)
    }

    fn to_date_ignore_timezone(&self) -> Option<DateTime<Local>> {
        let prefix = self.split('+').next().unwrap_or(self);
        parse_reading(prefix).map(Reading::into_local)
    }
}
