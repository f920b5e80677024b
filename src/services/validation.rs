//! Booking form field checks.
//!
//! Every validator returns an empty string when the value is acceptable and
//! a visitor-facing message otherwise. Name, phone and location expect
//! already-trimmed input (see [`BookingFormInput::trimmed`]).

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::{BookingField, BookingFormInput, ValidationResult};

const MAX_TRAILING_PHONE_DIGITS: usize = 15;

// Lengths are counted the way the browser counts them: UTF-16 code units.
fn form_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn validate_name(name: &str) -> String {
    if form_len(name) < 2 {
        return "Name must be at least 2 characters long".to_string();
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
    {
        return "Name can only contain letters and spaces".to_string();
    }
    String::new()
}

pub fn validate_phone(phone: &str) -> String {
    let cleaned: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect();

    if is_valid_phone_number(&cleaned) {
        String::new()
    } else {
        "Please enter a valid phone number".to_string()
    }
}

// Optional `+`, a non-zero leading digit, then up to 15 more digits.
fn is_valid_phone_number(cleaned: &str) -> bool {
    let digits = cleaned.strip_prefix('+').unwrap_or(cleaned);
    let mut chars = digits.chars();
    match chars.next() {
        Some('1'..='9') => {}
        _ => return false,
    }
    let rest = chars.as_str();
    rest.len() <= MAX_TRAILING_PHONE_DIGITS && rest.chars().all(|c| c.is_ascii_digit())
}

pub fn validate_location(location: &str) -> String {
    if form_len(location) < 5 {
        return "Please enter a more specific location".to_string();
    }
    String::new()
}

pub fn validate_date(date: &str, today: NaiveDate) -> String {
    let Some(selected) = parse_date(date) else {
        return "Please select a valid date".to_string();
    };
    if selected < today {
        return "Please select a future date".to_string();
    }
    String::new()
}

/// Same-day bookings must start after `now`; other days are left to
/// [`validate_date`].
pub fn validate_time(time: &str, date: &str, now: NaiveDateTime) -> String {
    if time.is_empty() {
        return "Please select a time".to_string();
    }
    let Some(clock_time) = parse_time(time) else {
        return "Please select a valid time".to_string();
    };

    if let Some(selected_date) = parse_date(date) {
        if selected_date == now.date() && selected_date.and_time(clock_time) <= now {
            return "Please select a future time".to_string();
        }
    }
    String::new()
}

pub fn validate_duration(duration: &str) -> String {
    if duration.is_empty() {
        return "Please select a duration".to_string();
    }
    String::new()
}

/// Message for a single field, as shown when it loses focus.
pub fn validate_field(field: BookingField, input: &BookingFormInput, now: NaiveDateTime) -> String {
    match field {
        BookingField::Name => validate_name(&input.name),
        BookingField::Phone => validate_phone(&input.phone),
        BookingField::Location => validate_location(&input.location),
        BookingField::Date => validate_date(&input.date, now.date()),
        BookingField::Time => validate_time(&input.time, &input.date, now),
        BookingField::Duration => validate_duration(&input.duration),
    }
}

/// Runs every field check; no early exit, so the page can show all
/// messages at once.
pub fn validate_booking(input: &BookingFormInput, now: NaiveDateTime) -> ValidationResult {
    let mut result = ValidationResult::new();
    for field in BookingField::ALL {
        result.set(field, validate_field(field, input, now));
    }
    result
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

fn parse_time(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 16).unwrap()
    }

    fn valid_input() -> BookingFormInput {
        BookingFormInput {
            name: "Jane Doe".to_string(),
            phone: "(555) 123-4567".to_string(),
            location: "12 Main Street".to_string(),
            date: "2025-06-17".to_string(),
            time: "09:30".to_string(),
            duration: "2-hours".to_string(),
        }
    }

    #[test]
    fn test_name_too_short() {
        for name in ["", "J", "é"] {
            assert_eq!(validate_name(name), "Name must be at least 2 characters long");
        }
    }

    #[test]
    fn test_name_letters_and_spaces_only() {
        assert_eq!(validate_name("Jo"), "");
        assert_eq!(validate_name("Mary Ann Smith"), "");
        assert_eq!(validate_name("R2D2"), "Name can only contain letters and spaces");
        assert_eq!(validate_name("O'Brien"), "Name can only contain letters and spaces");
        assert_eq!(validate_name("José"), "Name can only contain letters and spaces");
    }

    #[test]
    fn test_phone_accepts_common_formats() {
        assert_eq!(validate_phone("123-456-7890"), "");
        assert_eq!(validate_phone("(555) 123 4567"), "");
        assert_eq!(validate_phone("+44 20 7946 0958"), "");
        assert_eq!(validate_phone("7"), "");
    }

    #[test]
    fn test_phone_rejects_bad_numbers() {
        assert_eq!(validate_phone("0123"), "Please enter a valid phone number");
        assert_eq!(validate_phone("abc"), "Please enter a valid phone number");
        assert_eq!(validate_phone(""), "Please enter a valid phone number");
        assert_eq!(validate_phone("+"), "Please enter a valid phone number");
        assert_eq!(validate_phone("555.123.4567"), "Please enter a valid phone number");
        assert_eq!(validate_phone("++15551234567"), "Please enter a valid phone number");
    }

    #[test]
    fn test_phone_digit_limit() {
        // leading digit + 15 more is the longest accepted number
        assert_eq!(validate_phone("1234567890123456"), "");
        assert_eq!(validate_phone("12345678901234567"), "Please enter a valid phone number");
    }

    #[test]
    fn test_location_length() {
        assert_eq!(validate_location("NYC"), "Please enter a more specific location");
        assert_eq!(validate_location("Paris"), "");
    }

    #[test]
    fn test_lengths_count_utf16_units() {
        // Each emoji is two UTF-16 units, so three of them clear the minimum.
        assert_eq!(validate_location("😀😀😀"), "");
        assert_eq!(validate_location("😀😀"), "Please enter a more specific location");
        assert_eq!(validate_name("😀"), "Name can only contain letters and spaces");
    }

    #[test]
    fn test_date_today_is_valid() {
        assert_eq!(validate_date("2025-06-16", today()), "");
        assert_eq!(validate_date("2025-12-01", today()), "");
    }

    #[test]
    fn test_date_in_past_rejected() {
        assert_eq!(validate_date("2025-06-15", today()), "Please select a future date");
    }

    #[test]
    fn test_date_unparseable_rejected() {
        assert_eq!(validate_date("", today()), "Please select a valid date");
        assert_eq!(validate_date("next tuesday", today()), "Please select a valid date");
    }

    #[test]
    fn test_time_required() {
        assert_eq!(validate_time("", "2025-06-16", dt("2025-06-16 10:00")), "Please select a time");
    }

    #[test]
    fn test_time_same_day_must_be_after_now() {
        let now = dt("2025-06-16 10:00");
        let past = (now - Duration::minutes(1)).format("%H:%M").to_string();
        let future = (now + Duration::minutes(1)).format("%H:%M").to_string();

        assert_eq!(validate_time(&past, "2025-06-16", now), "Please select a future time");
        assert_eq!(validate_time(&future, "2025-06-16", now), "");
        assert_eq!(validate_time("10:00", "2025-06-16", now), "Please select a future time");
    }

    #[test]
    fn test_time_other_days_not_compared() {
        let now = dt("2025-06-16 10:00");
        assert_eq!(validate_time("08:00", "2025-06-17", now), "");
        // past dates are the date field's problem
        assert_eq!(validate_time("08:00", "2025-06-15", now), "");
    }

    #[test]
    fn test_time_unparseable_rejected() {
        assert_eq!(
            validate_time("noon", "2025-06-17", dt("2025-06-16 10:00")),
            "Please select a valid time"
        );
    }

    #[test]
    fn test_duration_required() {
        assert_eq!(validate_duration(""), "Please select a duration");
        assert_eq!(validate_duration("2-hours"), "");
    }

    #[test]
    fn test_validate_booking_all_valid() {
        let result = validate_booking(&valid_input(), dt("2025-06-16 10:00"));
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_validate_booking_reports_every_failure() {
        let input = BookingFormInput {
            name: "J".to_string(),
            location: "NYC".to_string(),
            ..valid_input()
        };
        let result = validate_booking(&input, dt("2025-06-16 10:00"));

        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 2);
        assert_eq!(result.focus_target(), Some(BookingField::Name));
        assert_eq!(result.message(BookingField::Location), "Please enter a more specific location");
    }

    #[test]
    fn test_validate_booking_empty_form() {
        let result = validate_booking(&BookingFormInput::default(), dt("2025-06-16 10:00"));
        for field in BookingField::ALL {
            assert!(!result.message(field).is_empty(), "{} should fail", field.as_str());
        }
        assert_eq!(result.focus_target(), Some(BookingField::Name));
    }
}
