pub mod auth;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod debounce;
pub mod filters;
pub mod forms;
pub mod models;
pub mod search;
pub mod seed;
pub mod store;
pub mod timeofday;
pub mod validators;
