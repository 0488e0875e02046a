use super::controller::{FormSpec, FormValues};
use crate::clock::Clock;
use crate::models::{Gender, Patient, PatientStatus};
use crate::validators::{self, FieldValidation};

/// The "Add Patient" form. New patients start active with no visit
/// history.
pub struct PatientForm;

const FIELDS: &[&str] = &[
    "name",
    "email",
    "phone",
    "age",
    "gender",
    "medical_history",
    "address",
];

impl FormSpec for PatientForm {
    type Record = Patient;

    fn fields(&self) -> &'static [&'static str] {
        FIELDS
    }

    fn transform(&self, field: &str, raw: &str) -> String {
        match field {
            "phone" => validators::format_phone_input(raw),
            _ => raw.to_string(),
        }
    }

    fn validate(&self, field: &str, value: &str, _clock: &dyn Clock) -> FieldValidation {
        match field {
            "name" => validators::required_name("Patient name", value),
            "email" => validators::email(value),
            "phone" => validators::phone(value),
            "age" => validators::bounded_int("Age", value, 0, 150),
            "gender" => validators::required_choice("Gender", value),
            _ => FieldValidation::ok(),
        }
    }

    fn build(&self, values: &FormValues) -> Patient {
        let get = |field: &str| values.get(field).cloned().unwrap_or_default();
        Patient {
            id: 0,
            name: get("name").trim().to_string(),
            email: get("email").trim().to_string(),
            phone: get("phone").trim().to_string(),
            age: get("age").trim().parse().unwrap_or(0),
            gender: Gender::parse(&get("gender")).unwrap_or(Gender::Other),
            last_visit: String::new(),
            next_appointment: String::new(),
            status: PatientStatus::Active,
            medical_history: get("medical_history"),
            address: get("address"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::forms::{FormController, FormErrors};
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
    }

    #[test]
    fn empty_submit_lists_the_five_required_fields() {
        let mut form = FormController::new(PatientForm);
        let errors: FormErrors = form.submit(&clock()).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors["age"], "Age is required");
        assert_eq!(errors["gender"], "Gender is required");
    }

    #[test]
    fn age_is_bounded() {
        let mut form = FormController::new(PatientForm);
        form.set_field("age", "151", &clock());
        assert_eq!(
            form.validation("age").unwrap().message,
            "Age must be between 0 and 150"
        );
    }

    #[test]
    fn valid_submit_yields_active_patient_without_history() {
        let mut form = FormController::new(PatientForm);
        let clock = clock();
        form.set_field("name", "Ana Lee", &clock);
        form.set_field("email", "ana.lee@email.com", &clock);
        form.set_field("phone", "+1 (555) 222-3344", &clock);
        form.set_field("age", "29", &clock);
        form.set_field("gender", "Female", &clock);
        let patient = form.submit(&clock).expect("valid form submits");
        assert_eq!(patient.status, PatientStatus::Active);
        assert_eq!(patient.gender, Gender::Female);
        assert_eq!(patient.last_visit, "");
        assert_eq!(patient.age, 29);
    }
}
