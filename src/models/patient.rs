use serde::{Deserialize, Serialize};

use super::enums::{Gender, PatientStatus};
use crate::store::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub gender: Gender,
    /// "YYYY-MM-DD" or empty when the patient has no visit history yet.
    pub last_visit: String,
    pub next_appointment: String,
    pub status: PatientStatus,
    pub medical_history: String,
    pub address: String,
}

impl Record for Patient {
    fn id(&self) -> u32 {
        self.id
    }

    fn set_id(&mut self, id: u32) {
        self.id = id;
    }

    fn entity() -> &'static str {
        "patient"
    }
}
