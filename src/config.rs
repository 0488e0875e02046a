/// Application-level constants
pub const APP_NAME: &str = "Clinicdesk";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Delay between the last keystroke and the search actually running.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;

/// Duration assigned to appointments created through the booking form.
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

/// Clinic address stamped on appointments created through the booking form.
pub const DEFAULT_CLINIC_ADDRESS: &str = "123 Medical Center Dr, Suite 100";

/// Hard cap on the phone input after stripping disallowed characters.
pub const PHONE_INPUT_MAX_LEN: usize = 20;

/// One-time-code length, resend cooldown and resend budget for the login flow.
pub const OTP_LENGTH: usize = 6;
pub const OTP_RESEND_COOLDOWN_SECS: u64 = 30;
pub const OTP_MAX_RESENDS: u32 = 3;

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_name_is_clinicdesk() {
        assert_eq!(APP_NAME, "Clinicdesk");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn debounce_window_is_300ms() {
        assert_eq!(SEARCH_DEBOUNCE_MS, 300);
    }

    #[test]
    fn otp_limits_match_the_login_flow() {
        assert_eq!(OTP_LENGTH, 6);
        assert_eq!(OTP_RESEND_COOLDOWN_SECS, 30);
        assert_eq!(OTP_MAX_RESENDS, 3);
    }

    #[test]
    fn default_log_filter_targets_this_crate() {
        assert_eq!(default_log_filter(), "clinicdesk=info");
    }
}
