//! Entity creation forms.
//!
//! One generic controller drives every modal form; the per-entity specs
//! supply the field list, transforms, validators and the record built on
//! submit.

mod appointment;
mod controller;
mod doctor;
mod patient;

pub use appointment::AppointmentForm;
pub use controller::{FieldStatus, FormController, FormErrors, FormSpec, FormValues};
pub use doctor::DoctorForm;
pub use patient::PatientForm;
