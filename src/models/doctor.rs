use serde::{Deserialize, Serialize};

use super::enums::{DoctorStatus, Specialty};
use crate::store::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub specialty: Specialty,
    /// Free-text tenure as entered, e.g. "15 years".
    pub experience: String,
    pub rating: f32,
    pub patients_seen: u32,
    pub availability: String,
    pub status: DoctorStatus,
    pub address: String,
    pub education: String,
    pub certifications: String,
}

impl Doctor {
    /// Leading integer of the free-text `experience` field ("15 years" →
    /// 15). None when the text does not start with a digit; range filters
    /// then treat the doctor as never matching an experience bound.
    pub fn experience_years(&self) -> Option<u32> {
        let digits: String = self
            .experience
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }
}

impl Record for Doctor {
    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn entity() -> &'static str {
        "doctor"
    }
}
