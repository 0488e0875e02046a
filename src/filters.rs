//! List filtering.
//!
//! Every page list runs its rows through one of the `filter_*` functions
//! on each change: free-text term AND every structured predicate. A `None`
//! predicate is the "all" sentinel and matches everything. The functions
//! are pure and keep the input order, so re-running a filter never
//! reshuffles or accumulates results.

use chrono::NaiveDate;

use crate::models::{
    Appointment, AppointmentStatus, AppointmentType, Doctor, DoctorStatus, Gender, Patient,
    PatientStatus, Specialty,
};
use crate::timeofday::{minute_of_day, parse_display_time, Period};

/// One end of a time-of-day range, entered as separate 12-hour components.
/// Components left blank widen toward the extreme: a lower bound resolves
/// missing parts toward 12:00 AM, an upper bound toward 11:59 PM.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeBound {
    pub hour: Option<u8>,
    pub minute: Option<u8>,
    pub period: Option<Period>,
}

impl TimeBound {
    pub fn is_unset(&self) -> bool {
        self.hour.is_none() && self.minute.is_none() && self.period.is_none()
    }

    fn resolve(&self, default_hour: u8, default_minute: u8, default_period: Period) -> u16 {
        minute_of_day(
            self.hour.unwrap_or(default_hour),
            self.minute.unwrap_or(default_minute),
            self.period.unwrap_or(default_period),
        )
    }

    fn as_lower(&self) -> u16 {
        self.resolve(12, 0, Period::Am)
    }

    fn as_upper(&self) -> u16 {
        self.resolve(11, 59, Period::Pm)
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppointmentFilters {
    pub status: Option<AppointmentStatus>,
    pub appointment_type: Option<AppointmentType>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub time_from: TimeBound,
    pub time_to: TimeBound,
    pub duration: Option<u32>,
}

impl AppointmentFilters {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default)]
pub struct PatientFilters {
    pub status: Option<PatientStatus>,
    pub gender: Option<Gender>,
    pub age_min: Option<u32>,
    pub age_max: Option<u32>,
}

impl PatientFilters {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default)]
pub struct DoctorFilters {
    pub specialty: Option<Specialty>,
    pub status: Option<DoctorStatus>,
    pub experience_min: Option<u32>,
    pub experience_max: Option<u32>,
    pub rating_min: Option<f32>,
    pub rating_max: Option<f32>,
}

impl DoctorFilters {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn text_matches(term: &str, fields: &[&str]) -> bool {
    let term = term.to_lowercase();
    if term.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

fn in_range<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    if let Some(min) = min {
        if value < min {
            return false;
        }
    }
    if let Some(max) = max {
        if value > max {
            return false;
        }
    }
    true
}

pub fn filter_appointments(
    list: &[Appointment],
    term: &str,
    filters: &AppointmentFilters,
) -> Vec<Appointment> {
    list.iter()
        .filter(|a| {
            if !text_matches(term, &[&a.patient_name, &a.patient_email]) {
                return false;
            }
            if let Some(status) = filters.status {
                if a.status != status {
                    return false;
                }
            }
            if let Some(kind) = filters.appointment_type {
                if a.appointment_type != kind {
                    return false;
                }
            }
            if filters.date_from.is_some() || filters.date_to.is_some() {
                // A record whose date does not parse can never satisfy a bound.
                match NaiveDate::parse_from_str(&a.date, "%Y-%m-%d") {
                    Ok(date) => {
                        if !in_range(date, filters.date_from, filters.date_to) {
                            return false;
                        }
                    }
                    Err(_) => return false,
                }
            }
            if !filters.time_from.is_unset() || !filters.time_to.is_unset() {
                match parse_display_time(&a.time) {
                    Some(minute) => {
                        let low = filters.time_from.as_lower();
                        let high = filters.time_to.as_upper();
                        if minute < low || minute > high {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            if let Some(duration) = filters.duration {
                if a.duration != duration {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

pub fn filter_patients(list: &[Patient], term: &str, filters: &PatientFilters) -> Vec<Patient> {
    list.iter()
        .filter(|p| {
            if !text_matches(term, &[&p.name, &p.email, &p.phone]) {
                return false;
            }
            if let Some(status) = filters.status {
                if p.status != status {
                    return false;
                }
            }
            if let Some(gender) = filters.gender {
                if p.gender != gender {
                    return false;
                }
            }
            in_range(p.age, filters.age_min, filters.age_max)
        })
        .cloned()
        .collect()
}

pub fn filter_doctors(list: &[Doctor], term: &str, filters: &DoctorFilters) -> Vec<Doctor> {
    list.iter()
        .filter(|d| {
            if !text_matches(term, &[&d.name, &d.email, d.specialty.as_str()]) {
                return false;
            }
            if let Some(specialty) = filters.specialty {
                if d.specialty != specialty {
                    return false;
                }
            }
            if let Some(status) = filters.status {
                if d.status != status {
                    return false;
                }
            }
            if filters.experience_min.is_some() || filters.experience_max.is_some() {
                match d.experience_years() {
                    Some(years) => {
                        if !in_range(years, filters.experience_min, filters.experience_max) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            in_range(d.rating, filters.rating_min, filters.rating_max)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn no_term_and_all_sentinels_is_identity() {
        let list = seed::appointments();
        let out = filter_appointments(&list, "", &AppointmentFilters::default());
        assert_eq!(out.len(), list.len());
        let ids: Vec<u32> = out.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let list = seed::appointments();
        let filters = AppointmentFilters {
            status: Some(AppointmentStatus::Pending),
            ..Default::default()
        };
        let once = filter_appointments(&list, "", &filters);
        let twice = filter_appointments(&once, "", &filters);
        assert_eq!(
            once.iter().map(|a| a.id).collect::<Vec<_>>(),
            twice.iter().map(|a| a.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn pending_status_and_chen_term_combine() {
        let list = seed::appointments();
        let filters = AppointmentFilters {
            status: Some(AppointmentStatus::Pending),
            ..Default::default()
        };
        let out = filter_appointments(&list, "chen", &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].patient_name, "Michael Chen");
    }

    #[test]
    fn term_matches_email_case_insensitively() {
        let list = seed::appointments();
        let out = filter_appointments(&list, "LISA.BROWN@", &AppointmentFilters::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 5);
    }

    #[test]
    fn date_range_is_inclusive() {
        let list = seed::appointments();
        let filters = AppointmentFilters {
            date_from: NaiveDate::from_ymd_opt(2024, 1, 16),
            date_to: NaiveDate::from_ymd_opt(2024, 1, 16),
            ..Default::default()
        };
        let out = filter_appointments(&list, "", &filters);
        assert_eq!(out.iter().map(|a| a.id).collect::<Vec<_>>(), vec![4, 5]);
    }

    #[test]
    fn time_lower_bound_widens_missing_components() {
        let list = seed::appointments();
        // From 2 PM with no minute set: matches 02:00 PM and 03:30 PM.
        let filters = AppointmentFilters {
            time_from: TimeBound {
                hour: Some(2),
                minute: None,
                period: Some(Period::Pm),
            },
            ..Default::default()
        };
        let out = filter_appointments(&list, "", &filters);
        assert_eq!(out.iter().map(|a| a.id).collect::<Vec<_>>(), vec![3, 5]);
    }

    #[test]
    fn time_range_brackets_morning_slots() {
        let list = seed::appointments();
        let filters = AppointmentFilters {
            time_from: TimeBound {
                hour: Some(9),
                minute: Some(0),
                period: Some(Period::Am),
            },
            time_to: TimeBound {
                hour: Some(11),
                minute: Some(0),
                period: Some(Period::Am),
            },
            ..Default::default()
        };
        let out = filter_appointments(&list, "", &filters);
        assert_eq!(out.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 2, 4]);
    }

    #[test]
    fn duration_is_an_exact_match() {
        let list = seed::appointments();
        let filters = AppointmentFilters {
            duration: Some(45),
            ..Default::default()
        };
        let out = filter_appointments(&list, "", &filters);
        assert_eq!(out.iter().map(|a| a.id).collect::<Vec<_>>(), vec![2, 5]);
    }

    #[test]
    fn clear_restores_the_sentinels() {
        let mut filters = AppointmentFilters {
            status: Some(AppointmentStatus::Cancelled),
            duration: Some(30),
            ..Default::default()
        };
        filters.clear();
        let list = seed::appointments();
        assert_eq!(filter_appointments(&list, "", &filters).len(), list.len());
    }

    #[test]
    fn patient_age_range_and_gender_combine() {
        let list = seed::patients();
        let filters = PatientFilters {
            gender: Some(Gender::Female),
            age_min: Some(40),
            ..Default::default()
        };
        let out = filter_patients(&list, "", &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Emily Davis");
    }

    #[test]
    fn patient_term_searches_phone_too() {
        let list = seed::patients();
        let out = filter_patients(&list, "234-5678", &PatientFilters::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Michael Chen");
    }

    #[test]
    fn doctor_term_searches_specialty() {
        let list = seed::doctors();
        let out = filter_doctors(&list, "neuro", &DoctorFilters::default());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Dr. Michael Chen");
    }

    #[test]
    fn doctor_experience_range_parses_tenure_text() {
        let list = seed::doctors();
        let filters = DoctorFilters {
            experience_min: Some(14),
            ..Default::default()
        };
        let out = filter_doctors(&list, "", &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Dr. Sarah Johnson");
    }

    #[test]
    fn unparsable_experience_never_matches_a_bound() {
        let mut list = seed::doctors();
        list[0].experience = "veteran".into();
        let filters = DoctorFilters {
            experience_min: Some(1),
            ..Default::default()
        };
        let out = filter_doctors(&list, "", &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Dr. Michael Chen");
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        let list = seed::doctors();
        let filters = DoctorFilters {
            rating_min: Some(4.9),
            ..Default::default()
        };
        let out = filter_doctors(&list, "", &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].rating, 4.9);
    }
}
