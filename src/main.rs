//! Demo walkthrough: seed the stores, book an appointment through the
//! form, filter a page list, run a debounced search.

use std::thread;
use std::time::{Duration, Instant};

use tracing_subscriber::EnvFilter;

use clinicdesk::clock::{Clock, SystemClock};
use clinicdesk::config;
use clinicdesk::filters::{filter_appointments, AppointmentFilters};
use clinicdesk::forms::{AppointmentForm, FormController};
use clinicdesk::models::AppointmentStatus;
use clinicdesk::search::{DebouncedSearch, SearchIndex};
use clinicdesk::seed;
use clinicdesk::store::MemStore;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let clock = SystemClock;
    let mut appointments = MemStore::seeded(seed::appointments());

    let mut form = FormController::new(AppointmentForm);
    form.set_field("patient_name", "Jordan Fox", &clock);
    form.set_field("patient_email", "jordan.fox@email.com", &clock);
    form.set_field("patient_phone", "+1 (555) 987-6543", &clock);
    form.set_field("country", "US", &clock);
    let today = clock.today().format("%Y-%m-%d").to_string();
    form.set_field("date", &today, &clock);
    form.set_field("time_hour", "09", &clock);
    form.set_field("time_minute", "30", &clock);
    form.set_field("time_period", "AM", &clock);
    form.set_field("appointment_type", "Consultation", &clock);

    match form.submit(&clock) {
        Ok(draft) => {
            let id = appointments.create(draft);
            tracing::info!(id, "appointment booked");
        }
        Err(errors) => {
            for (field, message) in &errors {
                tracing::warn!(field = *field, message = %message, "form error");
            }
        }
    }

    let filters = AppointmentFilters {
        status: Some(AppointmentStatus::Pending),
        ..Default::default()
    };
    let pending = filter_appointments(appointments.list(), "", &filters);
    tracing::info!(count = pending.len(), "pending appointments");

    let mut search = DebouncedSearch::new(SearchIndex::new(seed::search_data()));
    search.input("chen", Instant::now());
    thread::sleep(Duration::from_millis(config::SEARCH_DEBOUNCE_MS + 50));
    if let Some(results) = search.poll(Instant::now()) {
        tracing::info!(
            appointments = results.appointments.len(),
            patients = results.patients.len(),
            doctors = results.doctors.len(),
            "search results for \"chen\""
        );
    }
}
