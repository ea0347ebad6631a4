//! Tests for the datetime feature

#[cfg(feature = "datetime")]
mod datetime_tests {
    use chrono::{Datelike, FixedOffset, TimeZone, Timelike, Utc, Weekday};
    use sugars_ext::DateTimeExt;

    #[test]
    fn test_datetime_period_starts_across_a_year_boundary() {
        let at = Utc.with_ymd_and_hms(2026, 1, 2, 17, 5, 9).unwrap();
        let week = at.start_of_week();
        assert_eq!(week.weekday(), Weekday::Mon);
        assert_eq!((week.year(), week.month(), week.day()), (2025, 12, 29));
        assert_eq!(at.start_of_month(), Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(at.start_of_year(), Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_datetime_shifts_preserve_time_of_day() {
        let at = Utc.with_ymd_and_hms(2025, 9, 4, 14, 30, 0).unwrap();
        assert_eq!(at.add_days(5), Some(Utc.with_ymd_and_hms(2025, 9, 9, 14, 30, 0).unwrap()));
        assert_eq!(at.add_months(2), Some(Utc.with_ymd_and_hms(2025, 11, 4, 14, 30, 0).unwrap()));
        assert_eq!(at.add_years(3), Some(Utc.with_ymd_and_hms(2028, 9, 4, 14, 30, 0).unwrap()));
    }

    #[test]
    fn test_datetime_fixed_offset_round_trip() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let at = tokyo.with_ymd_and_hms(2024, 2, 29, 23, 45, 0).unwrap();
        assert_eq!(at.days_in_month(), 29);
        assert_eq!(at.day_minute(), 23 * 60 + 45);

        let next = at.add_days(1).expect("in range");
        assert_eq!(next.offset(), at.offset());
        assert_eq!((next.month(), next.day(), next.hour()), (3, 1, 23));

        let utc_wall = at.as_utc();
        assert_eq!((utc_wall.day(), utc_wall.hour(), utc_wall.minute()), (29, 23, 45));
    }

    #[test]
    fn test_datetime_time_comparisons_across_zones() {
        let utc = Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap();
        let plus_one = FixedOffset::east_opt(3600).unwrap();
        // Same instant, but the wall clock reads 09:00.
        let same_instant = utc.with_timezone(&plus_one);
        assert!(utc.is_time_before(&same_instant));
        assert!(same_instant.is_time_after(&utc));
        assert!(!utc.is_time_equal(&same_instant));
    }
}
