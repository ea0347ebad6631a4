//! Calendar helpers for `chrono::DateTime`
//!
//! All period boundaries and calendar shifts are computed on the wall clock of
//! the value's own time zone and the result keeps that time zone.

use chrono::{
    DateTime, Datelike, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta,
    TimeZone, Timelike, Utc,
};

//────────────────────────────────────────────────────────────────────────────
// DateTimeExt – period boundaries, calendar shifts, time-of-day comparison
//────────────────────────────────────────────────────────────────────────────

/// Extension trait adding calendar conveniences to `chrono::DateTime`.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use sugars_ext::DateTimeExt;
///
/// let at = Utc.with_ymd_and_hms(2025, 9, 4, 14, 30, 0).unwrap();
/// assert_eq!(at.day_minute(), 870);
/// assert_eq!(
///     at.add_days(5),
///     Some(Utc.with_ymd_and_hms(2025, 9, 9, 14, 30, 0).unwrap())
/// );
/// ```
pub trait DateTimeExt: Sized {
    /// Same calendar date at 00:00:00.
    fn start_of_day(&self) -> Self;

    /// Same calendar date at the last representable instant (23:59:59.999999999).
    fn end_of_day(&self) -> Self;

    /// The Monday on or before this date, at 00:00:00.
    fn start_of_week(&self) -> Self;

    /// Day 1 of this month at 00:00:00.
    fn start_of_month(&self) -> Self;

    /// January 1 of this year at 00:00:00.
    fn start_of_year(&self) -> Self;

    /// Number of days in this month, leap years included.
    fn days_in_month(&self) -> u32;

    /// Minutes elapsed since midnight (`hour * 60 + minute`), seconds ignored.
    fn day_minute(&self) -> u32;

    /// Shifts the day-of-month by `days`, rolling over months and years.
    ///
    /// Returns `None` when the result is outside the representable range.
    fn add_days(&self, days: i64) -> Option<Self>;

    /// Shifts the month by `months`, rolling over years.
    ///
    /// A day-of-month past the end of the target month spills into the next
    /// one: 31 January plus one month is 3 March (2 March in leap years).
    fn add_months(&self, months: i64) -> Option<Self>;

    /// Shifts the year by `years`. 29 February plus one year is 1 March.
    fn add_years(&self, years: i64) -> Option<Self>;

    /// Reads the wall clock of this value as if it were UTC.
    ///
    /// 14:30 local becomes 14:30 UTC. This is not a time zone conversion;
    /// the instant changes by the local offset.
    fn as_utc(&self) -> DateTime<Utc>;

    /// Whether both values show the same time of day, date ignored.
    fn is_time_equal<Tz2: TimeZone>(&self, other: &DateTime<Tz2>) -> bool;

    /// Whether this time of day is earlier than `other`'s, date ignored.
    fn is_time_before<Tz2: TimeZone>(&self, other: &DateTime<Tz2>) -> bool;

    /// Whether this time of day is later than `other`'s, date ignored.
    fn is_time_after<Tz2: TimeZone>(&self, other: &DateTime<Tz2>) -> bool;

    /// Whether both values fall on the same wall-clock calendar date.
    fn is_same_day<Tz2: TimeZone>(&self, other: &DateTime<Tz2>) -> bool;
}

impl<Tz: TimeZone> DateTimeExt for DateTime<Tz> {
    fn start_of_day(&self) -> Self {
        at_wall_clock(&self.timezone(), self.date_naive().and_time(NaiveTime::MIN))
    }

    fn end_of_day(&self) -> Self {
        let last = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or(NaiveTime::MIN);
        at_wall_clock(&self.timezone(), self.date_naive().and_time(last))
    }

    fn start_of_week(&self) -> Self {
        let date = self.date_naive();
        let back = i64::from(date.weekday().num_days_from_monday());
        let monday = TimeDelta::try_days(back)
            .and_then(|delta| date.checked_sub_signed(delta))
            .unwrap_or(NaiveDate::MIN);
        at_wall_clock(&self.timezone(), monday.and_time(NaiveTime::MIN))
    }

    fn start_of_month(&self) -> Self {
        let first = self.date_naive().with_day(1).unwrap_or(NaiveDate::MIN);
        at_wall_clock(&self.timezone(), first.and_time(NaiveTime::MIN))
    }

    fn start_of_year(&self) -> Self {
        let first = self.date_naive().with_ordinal(1).unwrap_or(NaiveDate::MIN);
        at_wall_clock(&self.timezone(), first.and_time(NaiveTime::MIN))
    }

    fn days_in_month(&self) -> u32 {
        // Day 0 of the following month is the last day of this one.
        roll_over(self.year(), i64::from(self.month()), 0)
            .map(|last| last.day())
            .unwrap_or(31)
    }

    fn day_minute(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    fn add_days(&self, days: i64) -> Option<Self> {
        let day = i64::from(self.day()).checked_add(days)?;
        self.shifted(0, day)
    }

    fn add_months(&self, months: i64) -> Option<Self> {
        self.shifted(months, i64::from(self.day()))
    }

    fn add_years(&self, years: i64) -> Option<Self> {
        self.shifted(years.checked_mul(12)?, i64::from(self.day()))
    }

    fn as_utc(&self) -> DateTime<Utc> {
        self.naive_local().and_utc()
    }

    fn is_time_equal<Tz2: TimeZone>(&self, other: &DateTime<Tz2>) -> bool {
        self.time() == other.time()
    }

    fn is_time_before<Tz2: TimeZone>(&self, other: &DateTime<Tz2>) -> bool {
        self.time() < other.time()
    }

    fn is_time_after<Tz2: TimeZone>(&self, other: &DateTime<Tz2>) -> bool {
        self.time() > other.time()
    }

    fn is_same_day<Tz2: TimeZone>(&self, other: &DateTime<Tz2>) -> bool {
        self.date_naive() == other.date_naive()
    }
}

/// Internal shift helper shared by the `add_*` methods.
trait Shift: Sized {
    fn shifted(&self, months: i64, day: i64) -> Option<Self>;
}

impl<Tz: TimeZone> Shift for DateTime<Tz> {
    fn shifted(&self, months: i64, day: i64) -> Option<Self> {
        let month = i64::from(self.month()).checked_add(months)?;
        let date = roll_over(self.year(), month - 1, day)?;
        Some(at_wall_clock(&self.timezone(), date.and_time(self.time())))
    }
}

/// Builds a date from a zero-based month and a day-of-month that may both lie
/// outside their usual ranges, letting the excess spill into the neighbouring
/// months and years.
pub(crate) fn roll_over(year: i32, month0: i64, day: i64) -> Option<NaiveDate> {
    let total = i64::from(year).checked_mul(12)?.checked_add(month0)?;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = u32::try_from(total.rem_euclid(12) + 1).ok()?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(TimeDelta::try_days(day - 1)?)
}

/// Pins a wall-clock reading to `tz`.
///
/// Ambiguous readings (clocks turned back) take the earlier instant. Readings
/// inside a gap (clocks turned forward) move forward by the size of the gap.
pub(crate) fn at_wall_clock<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => {
            log::trace!("wall clock {naive} is ambiguous, taking the earlier instant");
            earliest
        }
        LocalResult::None => {
            log::debug!("wall clock {naive} falls in a time zone gap, moving past it");
            // Interpret the reading with the offset in effect just before the
            // gap; that lands the same distance past the transition.
            let before = naive
                .checked_sub_signed(TimeDelta::days(1))
                .map(|probe| tz.offset_from_local_datetime(&probe));
            match before {
                Some(LocalResult::Single(offset)) | Some(LocalResult::Ambiguous(offset, _)) => {
                    let utc = naive - offset.fix();
                    tz.from_utc_datetime(&utc)
                }
                _ => tz.from_utc_datetime(&naive),
            }
        }
    }
}
