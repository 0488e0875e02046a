//! Field-level validators.
//!
//! Every validator is a pure function from the raw input string to a
//! `FieldValidation`. An invalid field is a value, not an error type: the
//! form layer stores these results per field and the UI renders them
//! inline, so the message text here is exactly what the user sees.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use crate::config::{OTP_LENGTH, PHONE_INPUT_MAX_LEN};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

// Matched against the input with spaces, dashes and parens stripped:
// either an international number (leading + allowed, no leading zero)
// or a North-American 3-3-4 grouping.
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?[1-9]\d{0,15}$|^\+?\(?[1-9]\d{2}\)?[\s-]?\d{3}[\s-]?\d{4}$").unwrap()
});

/// Outcome of validating a single field. `message` is empty when valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidation {
    pub is_valid: bool,
    pub message: String,
}

impl FieldValidation {
    pub fn ok() -> Self {
        FieldValidation {
            is_valid: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        FieldValidation {
            is_valid: false,
            message: message.into(),
        }
    }
}

// ─── Text fields ─────────────────────────────────────────────────────────────

/// Person-name fields: required, at least 2 characters after trimming.
pub fn required_name(label: &str, value: &str) -> FieldValidation {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        FieldValidation::fail(format!("{label} is required"))
    } else if trimmed.chars().count() < 2 {
        FieldValidation::fail("Name must be at least 2 characters")
    } else {
        FieldValidation::ok()
    }
}

pub fn email(value: &str) -> FieldValidation {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        FieldValidation::fail("Email is required")
    } else if !EMAIL.is_match(trimmed) {
        FieldValidation::fail("Please enter a valid email address")
    } else {
        FieldValidation::ok()
    }
}

pub fn phone(value: &str) -> FieldValidation {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return FieldValidation::fail("Phone number is required");
    }
    let cleaned: String = trimmed
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();
    if PHONE.is_match(&cleaned) {
        FieldValidation::ok()
    } else {
        FieldValidation::fail("Please enter a valid phone number")
    }
}

/// Input transform applied on every phone keystroke: drop characters that
/// can never appear in a phone number, cap the length at 20.
pub fn format_phone_input(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')' | ' '))
        .collect();
    if cleaned.chars().count() > PHONE_INPUT_MAX_LEN {
        raw.chars().take(PHONE_INPUT_MAX_LEN).collect()
    } else {
        cleaned
    }
}

// ─── Date and numeric fields ─────────────────────────────────────────────────

/// Appointment-date field: required, parseable, not before `today`.
pub fn date_not_past(value: &str, today: NaiveDate) -> FieldValidation {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return FieldValidation::fail("Date is required");
    }
    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) if date >= today => FieldValidation::ok(),
        _ => FieldValidation::fail("Date cannot be in the past"),
    }
}

/// Integer field constrained to an inclusive range, e.g. hour 1..=12,
/// minute 0..=59, age 0..=150.
pub fn bounded_int(label: &str, value: &str, min: i64, max: i64) -> FieldValidation {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return FieldValidation::fail(format!("{label} is required"));
    }
    match trimmed.parse::<i64>() {
        Ok(n) if (min..=max).contains(&n) => FieldValidation::ok(),
        _ => FieldValidation::fail(format!("{label} must be between {min} and {max}")),
    }
}

/// Float field constrained to an inclusive range, e.g. rating 0.0..=5.0.
pub fn bounded_float(label: &str, value: &str, min: f64, max: f64) -> FieldValidation {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return FieldValidation::fail(format!("{label} is required"));
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n >= min && n <= max => FieldValidation::ok(),
        _ => FieldValidation::fail(format!("{label} must be between {min} and {max}")),
    }
}

// ─── Selection and credential fields ─────────────────────────────────────────

/// Select-style fields (country, appointment type, gender, AM/PM):
/// presence is the only constraint, the UI offers only valid options.
pub fn required_choice(label: &str, value: &str) -> FieldValidation {
    if value.trim().is_empty() {
        FieldValidation::fail(format!("{label} is required"))
    } else {
        FieldValidation::ok()
    }
}

pub fn password(value: &str) -> FieldValidation {
    if value.is_empty() {
        FieldValidation::fail("Password is required")
    } else if value.chars().count() < 6 {
        FieldValidation::fail("Password must be at least 6 characters")
    } else {
        FieldValidation::ok()
    }
}

pub fn one_time_code(value: &str) -> FieldValidation {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        FieldValidation::fail("OTP is required")
    } else if trimmed.chars().count() != OTP_LENGTH {
        FieldValidation::fail("OTP must be 6 digits")
    } else if !trimmed.chars().all(|c| c.is_ascii_digit()) {
        FieldValidation::fail("OTP must contain only numbers")
    } else {
        FieldValidation::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn name_required_then_min_length() {
        let v = required_name("Patient name", "");
        assert!(!v.is_valid);
        assert_eq!(v.message, "Patient name is required");

        let v = required_name("Patient name", " J ");
        assert!(!v.is_valid);
        assert_eq!(v.message, "Name must be at least 2 characters");

        assert!(required_name("Patient name", "Jo").is_valid);
    }

    #[test]
    fn email_accepts_plausible_addresses() {
        assert!(email("sarah.johnson@email.com").is_valid);
        assert!(email("a@b.co").is_valid);
    }

    #[test]
    fn email_rejects_missing_parts() {
        assert_eq!(email("").message, "Email is required");
        for bad in ["no-at-sign.com", "two@@signs.com", "no@tld", "spa ce@x.com"] {
            let v = email(bad);
            assert!(!v.is_valid, "{bad} should be invalid");
            assert_eq!(v.message, "Please enter a valid email address");
        }
    }

    #[test]
    fn phone_accepts_common_formats() {
        for good in [
            "+1 (555) 123-4567",
            "555-123-4567",
            "(555) 123 4567",
            "+442071234567",
        ] {
            assert!(phone(good).is_valid, "{good} should be valid");
        }
    }

    #[test]
    fn phone_rejects_garbage() {
        assert_eq!(phone("").message, "Phone number is required");
        for bad in ["abc", "0123456789012345678", "+"] {
            let v = phone(bad);
            assert!(!v.is_valid, "{bad} should be invalid");
            assert_eq!(v.message, "Please enter a valid phone number");
        }
    }

    #[test]
    fn phone_input_strips_letters() {
        assert_eq!(format_phone_input("+1 (555) abc123-4567"), "+1 (555) 123-4567");
    }

    #[test]
    fn phone_input_caps_at_twenty_chars() {
        let long = "1".repeat(30);
        assert_eq!(format_phone_input(&long).chars().count(), 20);
    }

    #[test]
    fn date_today_is_allowed_yesterday_is_not() {
        assert!(date_not_past("2024-01-15", today()).is_valid);
        assert!(date_not_past("2024-02-01", today()).is_valid);

        let v = date_not_past("2024-01-14", today());
        assert_eq!(v.message, "Date cannot be in the past");
    }

    #[test]
    fn date_unparsable_reads_as_past() {
        assert_eq!(date_not_past("", today()).message, "Date is required");
        assert_eq!(
            date_not_past("15/01/2024", today()).message,
            "Date cannot be in the past"
        );
    }

    #[test]
    fn hour_and_minute_bounds() {
        assert!(bounded_int("Hour", "1", 1, 12).is_valid);
        assert!(bounded_int("Hour", "12", 1, 12).is_valid);
        assert_eq!(bounded_int("Hour", "", 1, 12).message, "Hour is required");
        assert_eq!(
            bounded_int("Hour", "13", 1, 12).message,
            "Hour must be between 1 and 12"
        );
        assert_eq!(
            bounded_int("Minute", "60", 0, 59).message,
            "Minute must be between 0 and 59"
        );
        assert!(bounded_int("Minute", "00", 0, 59).is_valid);
    }

    #[test]
    fn rating_bounds() {
        assert!(bounded_float("Rating", "4.8", 0.0, 5.0).is_valid);
        assert_eq!(
            bounded_float("Rating", "5.1", 0.0, 5.0).message,
            "Rating must be between 0 and 5"
        );
    }

    #[test]
    fn choice_is_presence_only() {
        assert_eq!(
            required_choice("AM/PM", "").message,
            "AM/PM is required"
        );
        assert!(required_choice("Appointment type", "Consultation").is_valid);
    }

    #[test]
    fn password_length_rule() {
        assert_eq!(password("").message, "Password is required");
        assert_eq!(password("12345").message, "Password must be at least 6 characters");
        assert!(password("password123").is_valid);
    }

    #[test]
    fn one_time_code_format() {
        assert_eq!(one_time_code("").message, "OTP is required");
        assert_eq!(one_time_code("12345").message, "OTP must be 6 digits");
        assert_eq!(one_time_code("12345a").message, "OTP must contain only numbers");
        assert!(one_time_code("123456").is_valid);
    }
}
