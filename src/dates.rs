use chrono::{Datelike, Duration, NaiveDate};

/// The booking window offered to the user, starting at `today`
pub fn upcoming_dates(today: NaiveDate, count: usize) -> Vec<NaiveDate> {
    (0..count)
        .map(|offset| today + Duration::days(offset as i64))
        .collect()
}

/// Formats a date for booking records and cards, e.g. "Mon, 24 Nov 2025"
pub fn format_date_display(date: NaiveDate) -> String {
    format!(
        "{}, {} {} {}",
        date.format("%a"),
        date.day(),
        date.format("%b"),
        date.year()
    )
}

/// Uppercase weekday abbreviation for the date picker row, e.g. "MON"
pub fn format_day_name(date: NaiveDate) -> String {
    date.format("%a").to_string().to_uppercase()
}

/// Month header for the date picker, e.g. "November 2025"
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

pub fn is_past(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nov_24() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 24).unwrap()
    }

    #[test]
    fn window_starts_today_and_is_consecutive() {
        let dates = upcoming_dates(nov_24(), 10);
        assert_eq!(dates.len(), 10);
        assert_eq!(dates[0], nov_24());
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn display_format_matches_booking_cards() {
        assert_eq!(format_date_display(nov_24()), "Mon, 24 Nov 2025");
        // single-digit days are not zero-padded
        let dec_3 = NaiveDate::from_ymd_opt(2025, 12, 3).unwrap();
        assert_eq!(format_date_display(dec_3), "Wed, 3 Dec 2025");
    }

    #[test]
    fn picker_labels() {
        assert_eq!(format_day_name(nov_24()), "MON");
        assert_eq!(format_month_year(nov_24()), "November 2025");
    }

    #[test]
    fn past_is_strictly_before_today() {
        let today = nov_24();
        assert!(is_past(today - Duration::days(1), today));
        assert!(!is_past(today, today));
        assert!(!is_past(today + Duration::days(1), today));
    }
}
