use super::controller::{FormSpec, FormValues};
use crate::clock::Clock;
use crate::models::{Doctor, DoctorStatus, Specialty};
use crate::validators::{self, FieldValidation};

/// The "Add Doctor" form. Rating is optional on entry (new doctors have
/// no reviews yet) but bounded when given.
pub struct DoctorForm;

const FIELDS: &[&str] = &[
    "name",
    "email",
    "phone",
    "specialty",
    "experience",
    "rating",
    "availability",
    "address",
    "education",
    "certifications",
];

impl FormSpec for DoctorForm {
    type Record = Doctor;

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
            "name" => validators::required_name("Doctor name", value),
            "email" => validators::email(value),
            "phone" => validators::phone(value),
            "specialty" => validators::required_choice("Specialty", value),
            "rating" if !value.trim().is_empty() => {
                validators::bounded_float("Rating", value, 0.0, 5.0)
            }
            _ => FieldValidation::ok(),
        }
    }

    fn build(&self, values: &FormValues) -> Doctor {
        let get = |field: &str| values.get(field).cloned().unwrap_or_default();
        Doctor {
            id: 0,
            name: get("name").trim().to_string(),
            email: get("email").trim().to_string(),
            phone: get("phone").trim().to_string(),
            specialty: Specialty::parse(&get("specialty")).unwrap_or(Specialty::Cardiology),
            experience: get("experience"),
            rating: get("rating").trim().parse().unwrap_or(0.0),
            patients_seen: 0,
            availability: get("availability"),
            status: DoctorStatus::Active,
            address: get("address"),
            education: get("education"),
            certifications: get("certifications"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::forms::FormController;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
    }

    #[test]
    fn empty_submit_lists_the_four_required_fields() {
        let mut form = FormController::new(DoctorForm);
        let errors = form.submit(&clock()).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors["name"], "Doctor name is required");
        assert_eq!(errors["specialty"], "Specialty is required");
    }

    #[test]
    fn blank_rating_is_fine_out_of_range_is_not() {
        let mut form = FormController::new(DoctorForm);
        form.blur("rating", &clock());
        assert!(form.validation("rating").unwrap().is_valid);

        form.set_field("rating", "5.1", &clock());
        assert_eq!(
            form.validation("rating").unwrap().message,
            "Rating must be between 0 and 5"
        );
    }

    #[test]
    fn valid_submit_yields_active_doctor_with_no_patients() {
        let mut form = FormController::new(DoctorForm);
        let clock = clock();
        form.set_field("name", "Dr. Omar Haddad", &clock);
        form.set_field("email", "omar.haddad@hospital.com", &clock);
        form.set_field("phone", "+1 (555) 777-8899", &clock);
        form.set_field("specialty", "Pediatrics", &clock);
        form.set_field("experience", "9 years", &clock);
        let doctor = form.submit(&clock).expect("valid form submits");
        assert_eq!(doctor.specialty, Specialty::Pediatrics);
        assert_eq!(doctor.status, DoctorStatus::Active);
        assert_eq!(doctor.patients_seen, 0);
        assert_eq!(doctor.experience_years(), Some(9));
        assert_eq!(doctor.rating, 0.0);
    }
}
