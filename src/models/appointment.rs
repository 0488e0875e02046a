use serde::{Deserialize, Serialize};

use super::enums::{AppointmentStatus, AppointmentType};
use crate::store::Record;

/// A booked appointment. `date` is a calendar date string ("YYYY-MM-DD")
/// and `time` a 12-hour display string ("09:00 AM"); both stay strings
/// because that is how the booking form produces them and how the lists
/// render them. `doctor_name` is only populated in the search dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u32,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub country: Option<String>,
    pub date: String,
    pub time: String,
    pub duration: u32,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    pub notes: String,
    pub address: String,
    pub doctor_name: Option<String>,
}

impl Record for Appointment {
    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn entity() -> &'static str {
        "appointment"
    }
}
