//! Month calendar view.
//!
//! A Sunday-first month grid with a selected day, per-day appointment
//! lookup, and the quick stats panel next to the grid.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::Serialize;

use crate::clock::Clock;
use crate::models::{Appointment, AppointmentStatus};

/// Cells for the month containing `month`. Leading `None`s pad the first
/// week so weekday columns line up, Sunday first.
pub fn month_grid(month: NaiveDate) -> Vec<Option<NaiveDate>> {
    // Day 1 exists in every month.
    let first = month.with_day(1).unwrap_or(month);
    let next = first
        .checked_add_months(Months::new(1))
        .unwrap_or(first);
    let days_in_month = (next - first).num_days();
    let offset = first.weekday().num_days_from_sunday() as usize;

    let mut cells: Vec<Option<NaiveDate>> = vec![None; offset];
    cells.extend((0..days_in_month).map(|day| Some(first + Duration::days(day))));
    cells
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarStats {
    pub total: usize,
    pub this_month: usize,
    pub pending: usize,
    pub confirmed: usize,
}

pub struct CalendarView {
    /// First day of the displayed month.
    current: NaiveDate,
    selected: NaiveDate,
}

impl CalendarView {
    pub fn new(clock: &dyn Clock) -> Self {
        let today = clock.today();
        CalendarView {
            current: today.with_day(1).unwrap_or(today),
            selected: today,
        }
    }

    pub fn current_month(&self) -> NaiveDate {
        self.current
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn select(&mut self, date: NaiveDate) {
        self.selected = date;
    }

    pub fn grid(&self) -> Vec<Option<NaiveDate>> {
        month_grid(self.current)
    }

    pub fn previous_month(&mut self) {
        self.current = self
            .current
            .checked_sub_months(Months::new(1))
            .unwrap_or(self.current);
    }

    pub fn next_month(&mut self) {
        self.current = self
            .current
            .checked_add_months(Months::new(1))
            .unwrap_or(self.current);
    }

    pub fn go_to_today(&mut self, clock: &dyn Clock) {
        let today = clock.today();
        self.current = today.with_day(1).unwrap_or(today);
        self.selected = today;
    }

    pub fn appointments_on<'a>(
        &self,
        list: &'a [Appointment],
        date: NaiveDate,
    ) -> Vec<&'a Appointment> {
        let wanted = date.format("%Y-%m-%d").to_string();
        list.iter().filter(|a| a.date == wanted).collect()
    }

    /// The side panel: totals over the whole set, "this month" relative to
    /// the displayed month.
    pub fn stats(&self, list: &[Appointment]) -> CalendarStats {
        let this_month = list
            .iter()
            .filter(|a| {
                NaiveDate::parse_from_str(&a.date, "%Y-%m-%d")
                    .map(|date| {
                        date.year() == self.current.year() && date.month() == self.current.month()
                    })
                    .unwrap_or(false)
            })
            .count();
        CalendarStats {
            total: list.len(),
            this_month,
            pending: list
                .iter()
                .filter(|a| a.status == AppointmentStatus::Pending)
                .count(),
            confirmed: list
                .iter()
                .filter(|a| a.status == AppointmentStatus::Confirmed)
                .count(),
        }
    }
}
