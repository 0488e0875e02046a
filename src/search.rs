//! Global search.
//!
//! The header search box looks across appointments, patients and doctors
//! at once. The index owns its own seeded dataset, separate from the page
//! stores (the dashboard has always worked that way; `seed::search_data`
//! is the single place both copies come from).

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use crate::config::SEARCH_DEBOUNCE_MS;
use crate::debounce::Debouncer;
use crate::models::{Appointment, Doctor, Patient};

#[derive(Debug, Clone, Default)]
pub struct SearchData {
    pub appointments: Vec<Appointment>,
    pub patients: Vec<Patient>,
    pub doctors: Vec<Doctor>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchResults {
    pub appointments: Vec<Appointment>,
    pub patients: Vec<Patient>,
    pub doctors: Vec<Doctor>,
}

impl SearchResults {
    pub fn total(&self) -> usize {
        self.appointments.len() + self.patients.len() + self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// What the given tab shows: All passes everything through, an entity
    /// tab empties the other two lists.
    pub fn visible(&self, tab: ActiveTab) -> SearchResults {
        match tab {
            ActiveTab::All => self.clone(),
            ActiveTab::Appointments => SearchResults {
                appointments: self.appointments.clone(),
                ..Default::default()
            },
            ActiveTab::Patients => SearchResults {
                patients: self.patients.clone(),
                ..Default::default()
            },
            ActiveTab::Doctors => SearchResults {
                doctors: self.doctors.clone(),
                ..Default::default()
            },
        }
    }

    /// Count shown on the tab button itself.
    pub fn tab_count(&self, tab: ActiveTab) -> usize {
        match tab {
            ActiveTab::All => self.total(),
            ActiveTab::Appointments => self.appointments.len(),
            ActiveTab::Patients => self.patients.len(),
            ActiveTab::Doctors => self.doctors.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveTab {
    #[default]
    All,
    Appointments,
    Patients,
    Doctors,
}

pub struct SearchIndex {
    data: SearchData,
}

impl SearchIndex {
    pub fn new(data: SearchData) -> Self {
        SearchIndex { data }
    }

    /// Case-insensitive substring search over a fixed field set per
    /// entity. A blank query returns three empty lists no matter what the
    /// index holds.
    pub fn search(&self, query: &str) -> SearchResults {
        if query.trim().is_empty() {
            return SearchResults::default();
        }
        let lower = query.to_lowercase();

        let appointments: Vec<Appointment> = self
            .data
            .appointments
            .iter()
            .filter(|a| {
                a.patient_name.to_lowercase().contains(&lower)
                    || a.patient_email.to_lowercase().contains(&lower)
                    || a.patient_phone.contains(&lower)
                    || a.appointment_type.as_str().to_lowercase().contains(&lower)
                    || a.doctor_name
                        .as_deref()
                        .is_some_and(|name| name.to_lowercase().contains(&lower))
                    || a.date.contains(&lower)
                    || a.time.to_lowercase().contains(&lower)
            })
            .cloned()
            .collect();

        let patients: Vec<Patient> = self
            .data
            .patients
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&lower)
                    || p.email.to_lowercase().contains(&lower)
                    || p.phone.contains(&lower)
                    || p.medical_history.to_lowercase().contains(&lower)
                    || p.status.as_str().contains(&lower)
            })
            .cloned()
            .collect();

        let doctors: Vec<Doctor> = self
            .data
            .doctors
            .iter()
            .filter(|d| {
                d.name.to_lowercase().contains(&lower)
                    || d.email.to_lowercase().contains(&lower)
                    || d.phone.contains(&lower)
                    || d.specialty.as_str().to_lowercase().contains(&lower)
                    || d.status.as_str().contains(&lower)
            })
            .cloned()
            .collect();

        debug!(
            query = %query,
            appointments = appointments.len(),
            patients = patients.len(),
            doctors = doctors.len(),
            "search executed"
        );

        SearchResults {
            appointments,
            patients,
            doctors,
        }
    }
}

/// Search box glue: keystrokes go in, at most one search per quiet window
/// comes out.
pub struct DebouncedSearch {
    index: SearchIndex,
    debouncer: Debouncer<String>,
}

impl DebouncedSearch {
    pub fn new(index: SearchIndex) -> Self {
        DebouncedSearch {
            index,
            debouncer: Debouncer::new(Duration::from_millis(SEARCH_DEBOUNCE_MS)),
        }
    }

    pub fn input(&mut self, query: &str, now: Instant) {
        self.debouncer.submit(query.to_string(), now);
    }

    /// Run the pending query if its window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<SearchResults> {
        self.debouncer
            .poll(now)
            .map(|query| self.index.search(&query))
    }

    /// Closing the search modal drops whatever was still pending.
    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn index() -> SearchIndex {
        SearchIndex::new(seed::search_data())
    }

    #[test]
    fn blank_query_returns_nothing() {
        let results = index().search("");
        assert!(results.is_empty());
        let results = index().search("   ");
        assert!(results.is_empty());
    }

    #[test]
    fn chen_spans_all_three_entities() {
        let results = index().search("chen");
        // Michael Chen's own appointment plus one chaired by Dr. Michael Chen.
        assert_eq!(results.appointments.len(), 2);
        assert_eq!(results.patients.len(), 1);
        assert_eq!(results.doctors.len(), 1);
        assert_eq!(results.total(), 4);
    }

    #[test]
    fn query_is_case_insensitive() {
        assert_eq!(index().search("CHEN").total(), index().search("chen").total());
    }

    #[test]
    fn date_text_matches_appointments() {
        let results = index().search("2024-01-16");
        assert_eq!(results.appointments.len(), 2);
        assert!(results.doctors.is_empty());
    }

    #[test]
    fn specialty_matches_doctors_only() {
        let results = index().search("cardiology");
        assert!(results.appointments.is_empty());
        assert!(results.patients.is_empty());
        assert_eq!(results.doctors.len(), 1);
        assert_eq!(results.doctors[0].name, "Dr. Sarah Johnson");
    }

    #[test]
    fn medical_history_matches_patients() {
        let results = index().search("asthma");
        assert_eq!(results.patients.len(), 1);
        assert_eq!(results.patients[0].name, "Michael Chen");
    }

    #[test]
    fn phone_fragment_matches_raw_digits() {
        let results = index().search("567-8901");
        assert_eq!(results.appointments.len(), 1);
        assert_eq!(results.patients.len(), 1);
    }

    #[test]
    fn no_hits_is_an_empty_result_not_an_error() {
        assert!(index().search("zzzzz").is_empty());
    }

    #[test]
    fn tab_slicing_keeps_only_the_active_entity() {
        let results = index().search("chen");
        let patients_tab = results.visible(ActiveTab::Patients);
        assert_eq!(patients_tab.patients.len(), 1);
        assert!(patients_tab.appointments.is_empty());
        assert!(patients_tab.doctors.is_empty());
        assert_eq!(results.tab_count(ActiveTab::Appointments), 2);
        assert_eq!(results.tab_count(ActiveTab::All), 4);
    }

    #[test]
    fn three_keystrokes_one_search() {
        let mut search = DebouncedSearch::new(index());
        let start = Instant::now();
        search.input("c", start);
        search.input("ch", start + Duration::from_millis(100));
        search.input("chen", start + Duration::from_millis(200));

        assert!(search.poll(start + Duration::from_millis(450)).is_none());
        let results = search
            .poll(start + Duration::from_millis(500))
            .expect("final query fires");
        assert_eq!(results.total(), 4);
        assert!(search.poll(start + Duration::from_secs(1)).is_none());
    }

    #[test]
    fn cancel_suppresses_the_pending_query() {
        let mut search = DebouncedSearch::new(index());
        let start = Instant::now();
        search.input("chen", start);
        search.cancel();
        assert!(search.poll(start + Duration::from_secs(1)).is_none());
    }

    #[test]
    fn debounced_blank_query_clears_results() {
        let mut search = DebouncedSearch::new(index());
        let start = Instant::now();
        search.input("", start);
        let results = search
            .poll(start + Duration::from_millis(300))
            .expect("blank query still fires");
        assert!(results.is_empty());
    }
}
