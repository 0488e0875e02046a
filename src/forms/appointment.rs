use super::controller::{FormSpec, FormValues};
use crate::clock::Clock;
use crate::config::{DEFAULT_CLINIC_ADDRESS, DEFAULT_DURATION_MINUTES};
use crate::models::{Appointment, AppointmentStatus, AppointmentType};
use crate::timeofday::{format_display_time, Period};
use crate::validators::{self, FieldValidation};

/// The "New Appointment" booking form. Time is entered as three separate
/// inputs (hour, minute, AM/PM) and joined into a display string on
/// submit; notes are the only optional field.
pub struct AppointmentForm;

const FIELDS: &[&str] = &[
    "patient_name",
    "patient_email",
    "patient_phone",
    "country",
    "date",
    "time_hour",
    "time_minute",
    "time_period",
    "appointment_type",
    "notes",
];

fn parsed<T: std::str::FromStr>(values: &FormValues, field: &str) -> Option<T> {
    values.get(field).and_then(|v| v.trim().parse().ok())
}

impl FormSpec for AppointmentForm {
    type Record = Appointment;

    fn fields(&self) -> &'static [&'static str] {
        FIELDS
    }

    fn transform(&self, field: &str, raw: &str) -> String {
        match field {
            "patient_phone" => validators::format_phone_input(raw),
            _ => raw.to_string(),
        }
    }

    fn validate(&self, field: &str, value: &str, clock: &dyn Clock) -> FieldValidation {
        match field {
            "patient_name" => validators::required_name("Patient name", value),
            "patient_email" => validators::email(value),
            "patient_phone" => validators::phone(value),
            "country" => validators::required_choice("Country", value),
            "date" => validators::date_not_past(value, clock.today()),
            "time_hour" => validators::bounded_int("Hour", value, 1, 12),
            "time_minute" => validators::bounded_int("Minute", value, 0, 59),
            "time_period" => validators::required_choice("AM/PM", value),
            "appointment_type" => validators::required_choice("Appointment type", value),
            _ => FieldValidation::ok(),
        }
    }

    fn build(&self, values: &FormValues) -> Appointment {
        let get = |field: &str| values.get(field).cloned().unwrap_or_default();
        // Validation already passed; the fallbacks are unreachable but keep
        // this path panic-free.
        let hour: u8 = parsed(values, "time_hour").unwrap_or(12);
        let minute: u8 = parsed(values, "time_minute").unwrap_or(0);
        let period = Period::parse(&get("time_period")).unwrap_or(Period::Am);
        let appointment_type =
            AppointmentType::parse(&get("appointment_type")).unwrap_or(AppointmentType::Consultation);
        let country = get("country");

        Appointment {
            id: 0,
            patient_name: get("patient_name").trim().to_string(),
            patient_email: get("patient_email").trim().to_string(),
            patient_phone: get("patient_phone").trim().to_string(),
            country: (!country.is_empty()).then_some(country),
            date: get("date").trim().to_string(),
            time: format_display_time(hour, minute, period),
            duration: DEFAULT_DURATION_MINUTES,
            appointment_type,
            status: AppointmentStatus::Pending,
            notes: get("notes"),
            address: DEFAULT_CLINIC_ADDRESS.into(),
            doctor_name: None,
        }
    }
}
