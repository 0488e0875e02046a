pub mod appointment;
pub mod doctor;
pub mod enums;
pub mod patient;

pub use appointment::Appointment;
pub use doctor::Doctor;
pub use enums::{
    AppointmentStatus, AppointmentType, DoctorStatus, Gender, PatientStatus, Specialty,
};
pub use patient::Patient;
