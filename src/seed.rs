//! Fixed demo datasets.
//!
//! Each page seeds its own store from here, and the search index keeps its
//! own copy. The copies deliberately do not share state; that is how the
//! dashboard behaves.

use chrono::Duration;

use crate::clock::Clock;
use crate::config::DEFAULT_CLINIC_ADDRESS;
use crate::models::{
    Appointment, AppointmentStatus, AppointmentType, Doctor, DoctorStatus, Gender, Patient,
    PatientStatus, Specialty,
};
use crate::search::SearchData;

#[allow(clippy::too_many_arguments)]
fn appointment(
    id: u32,
    patient_name: &str,
    patient_email: &str,
    patient_phone: &str,
    date: &str,
    time: &str,
    duration: u32,
    appointment_type: AppointmentType,
    status: AppointmentStatus,
    notes: &str,
) -> Appointment {
    Appointment {
        id,
        patient_name: patient_name.into(),
        patient_email: patient_email.into(),
        patient_phone: patient_phone.into(),
        country: None,
        date: date.into(),
        time: time.into(),
        duration,
        appointment_type,
        status,
        notes: notes.into(),
        address: DEFAULT_CLINIC_ADDRESS.into(),
        doctor_name: None,
    }
}

/// The appointments page working set.
pub fn appointments() -> Vec<Appointment> {
    use AppointmentStatus::*;
    use AppointmentType::*;
    vec![
        appointment(
            1,
            "Sarah Johnson",
            "sarah.johnson@email.com",
            "+1 (555) 123-4567",
            "2024-01-15",
            "09:00 AM",
            30,
            Consultation,
            Confirmed,
            "Follow-up appointment for chronic condition",
        ),
        appointment(
            2,
            "Michael Chen",
            "michael.chen@email.com",
            "+1 (555) 234-5678",
            "2024-01-15",
            "10:30 AM",
            45,
            FollowUp,
            Pending,
            "Post-surgery check-up",
        ),
        appointment(
            3,
            "Emily Davis",
            "emily.davis@email.com",
            "+1 (555) 345-6789",
            "2024-01-15",
            "02:00 PM",
            60,
            CheckUp,
            Completed,
            "Annual physical examination",
        ),
        appointment(
            4,
            "Robert Wilson",
            "robert.wilson@email.com",
            "+1 (555) 456-7890",
            "2024-01-16",
            "11:00 AM",
            30,
            Emergency,
            Confirmed,
            "Urgent consultation required",
        ),
        appointment(
            5,
            "Lisa Brown",
            "lisa.brown@email.com",
            "+1 (555) 567-8901",
            "2024-01-16",
            "03:30 PM",
            45,
            Consultation,
            Pending,
            "New patient consultation",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn patient(
    id: u32,
    name: &str,
    email: &str,
    phone: &str,
    age: u32,
    gender: Gender,
    last_visit: &str,
    next_appointment: &str,
    medical_history: &str,
    address: &str,
) -> Patient {
    Patient {
        id,
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        age,
        gender,
        last_visit: last_visit.into(),
        next_appointment: next_appointment.into(),
        status: PatientStatus::Active,
        medical_history: medical_history.into(),
        address: address.into(),
    }
}

/// The patients page working set.
pub fn patients() -> Vec<Patient> {
    vec![
        patient(
            1,
            "Sarah Johnson",
            "sarah.johnson@email.com",
            "+1 (555) 123-4567",
            34,
            Gender::Female,
            "2024-01-10",
            "2024-01-15",
            "Hypertension, Diabetes Type 2",
            "123 Oak Street, City, State 12345",
        ),
        patient(
            2,
            "Michael Chen",
            "michael.chen@email.com",
            "+1 (555) 234-5678",
            28,
            Gender::Male,
            "2024-01-08",
            "2024-01-15",
            "Asthma, Seasonal Allergies",
            "456 Pine Avenue, City, State 12345",
        ),
        patient(
            3,
            "Emily Davis",
            "emily.davis@email.com",
            "+1 (555) 345-6789",
            42,
            Gender::Female,
            "2024-01-12",
            "2024-01-16",
            "Migraine, Insomnia",
            "789 Elm Road, City, State 12345",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn doctor(
    id: u32,
    name: &str,
    email: &str,
    phone: &str,
    specialty: Specialty,
    experience: &str,
    rating: f32,
    patients_seen: u32,
    availability: &str,
    address: &str,
    education: &str,
    certifications: &str,
) -> Doctor {
    Doctor {
        id,
        name: name.into(),
        email: email.into(),
        phone: phone.into(),
        specialty,
        experience: experience.into(),
        rating,
        patients_seen,
        availability: availability.into(),
        status: DoctorStatus::Active,
        address: address.into(),
        education: education.into(),
        certifications: certifications.into(),
    }
}

/// The doctors page working set.
pub fn doctors() -> Vec<Doctor> {
    vec![
        doctor(
            1,
            "Dr. Sarah Johnson",
            "sarah.johnson@hospital.com",
            "+1 (555) 123-4567",
            Specialty::Cardiology,
            "15 years",
            4.8,
            1247,
            "Mon-Fri, 9AM-5PM",
            "123 Medical Center Dr, Suite 100",
            "MD - Harvard Medical School",
            "Board Certified Cardiologist",
        ),
        doctor(
            2,
            "Dr. Michael Chen",
            "michael.chen@hospital.com",
            "+1 (555) 234-5678",
            Specialty::Neurology,
            "12 years",
            4.9,
            892,
            "Mon-Fri, 8AM-4PM",
            "123 Medical Center Dr, Suite 200",
            "MD - Stanford Medical School",
            "Board Certified Neurologist",
        ),
    ]
}

/// The search index dataset. Same five appointments as the page copy plus
/// the attending doctor, five patients, four doctors.
pub fn search_data() -> SearchData {
    let mut appointments = appointments();
    let attending = [
        "Dr. Sarah Johnson",
        "Dr. Michael Chen",
        "Dr. Sarah Johnson",
        "Dr. Sarah Johnson",
        "Dr. Michael Chen",
    ];
    for (appointment, doctor_name) in appointments.iter_mut().zip(attending) {
        appointment.doctor_name = Some(doctor_name.into());
    }

    let mut patients = patients();
    patients.push(patient(
        4,
        "Robert Wilson",
        "robert.wilson@email.com",
        "+1 (555) 456-7890",
        45,
        Gender::Male,
        "2024-01-14",
        "2024-01-16",
        "Heart Disease, High Cholesterol",
        "",
    ));
    patients.push(patient(
        5,
        "Lisa Brown",
        "lisa.brown@email.com",
        "+1 (555) 567-8901",
        31,
        Gender::Female,
        "2024-01-13",
        "2024-01-16",
        "Pregnancy, Gestational Diabetes",
        "",
    ));

    let mut doctors = doctors();
    doctors.push(doctor(
        3,
        "Dr. Emily Rodriguez",
        "emily.rodriguez@hospital.com",
        "+1 (555) 345-6789",
        Specialty::Pediatrics,
        "8 years",
        4.7,
        567,
        "Mon-Fri, 9AM-6PM",
        "",
        "",
        "",
    ));
    doctors.push(doctor(
        4,
        "Dr. David Thompson",
        "david.thompson@hospital.com",
        "+1 (555) 456-7890",
        Specialty::Orthopedics,
        "20 years",
        4.6,
        1892,
        "Mon-Fri, 8AM-5PM",
        "",
        "",
        "",
    ));

    SearchData {
        appointments,
        patients,
        doctors,
    }
}

/// The calendar working set, dated relative to the injected clock so the
/// current month always has entries.
pub fn calendar_appointments(clock: &dyn Clock) -> Vec<Appointment> {
    use AppointmentStatus::*;
    use AppointmentType::*;
    let today = clock.today();
    let entries: [(&str, &str, u32, AppointmentType, AppointmentStatus, i64); 8] = [
        ("Sarah Johnson", "09:00 AM", 30, Consultation, Confirmed, 0),
        ("Michael Chen", "10:30 AM", 45, FollowUp, Pending, 1),
        ("Emily Davis", "02:00 PM", 60, CheckUp, Confirmed, 2),
        ("Robert Wilson", "11:15 AM", 30, Emergency, Confirmed, 3),
        ("Lisa Brown", "04:30 PM", 45, Consultation, Pending, 5),
        ("David Thompson", "08:45 AM", 30, FollowUp, Completed, -1),
        ("Maria Garcia", "01:20 PM", 60, CheckUp, Confirmed, 7),
        ("James Miller", "03:45 PM", 30, Consultation, Pending, 10),
    ];
    entries
        .iter()
        .enumerate()
        .map(|(index, (name, time, duration, kind, status, offset))| {
            let date = today + Duration::days(*offset);
            Appointment {
                id: index as u32 + 1,
                patient_name: (*name).into(),
                patient_email: String::new(),
                patient_phone: String::new(),
                country: None,
                date: date.format("%Y-%m-%d").to_string(),
                time: (*time).into(),
                duration: *duration,
                appointment_type: *kind,
                status: *status,
                notes: String::new(),
                address: String::new(),
                doctor_name: None,
            }
        })
        .collect()
}
