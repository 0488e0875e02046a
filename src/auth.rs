//! Mock login flow.
//!
//! Email + password against a fixed demo user set, then a one-time code
//! step. The code is generated for realism but any well-formed six-digit
//! code passes, exactly like the demo backend it stands in for. Nothing
//! here is real authentication.

use std::time::{Duration, Instant};

use rand::Rng;
use thiserror::Error;
use tracing::info;

use crate::config::{OTP_MAX_RESENDS, OTP_RESEND_COOLDOWN_SECS};
use crate::forms::FormErrors;
use crate::validators;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub email: String,
    pub name: String,
    pub role: String,
    pub specialty: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: UserProfile,
    pub token: String,
}

struct DemoUser {
    email: &'static str,
    password: &'static str,
    name: &'static str,
    role: &'static str,
    specialty: &'static str,
}

const DEMO_USERS: &[DemoUser] = &[
    DemoUser {
        email: "doctor@hospital.com",
        password: "password123",
        name: "Dr. Sarah Johnson",
        role: "Doctor",
        specialty: "Cardiology",
    },
    DemoUser {
        email: "admin@hospital.com",
        password: "admin123",
        name: "Admin User",
        role: "Administrator",
        specialty: "Management",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginStep {
    Email,
    Otp,
    Success,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Resend OTP in {0}s")]
    CooldownActive(u64),
    #[error("Maximum resend attempts reached")]
    ResendLimitReached,
    #[error("operation not valid in the current step")]
    WrongStep,
    /// Per-field messages; the banner errors above are the general ones.
    #[error("please correct the highlighted fields")]
    Validation(FormErrors),
}

pub struct LoginFlow {
    step: LoginStep,
    email: String,
    code: String,
    resend_attempts: u32,
    cooldown_until: Option<Instant>,
}

impl LoginFlow {
    pub fn new() -> Self {
        LoginFlow {
            step: LoginStep::Email,
            email: String::new(),
            code: String::new(),
            resend_attempts: 0,
            cooldown_until: None,
        }
    }

    pub fn step(&self) -> LoginStep {
        self.step
    }

    /// First screen. Field validation runs before the credential check, so
    /// a malformed email never produces the credentials banner.
    pub fn submit_credentials(
        &mut self,
        email: &str,
        password: &str,
        now: Instant,
    ) -> Result<(), AuthError> {
        if self.step != LoginStep::Email {
            return Err(AuthError::WrongStep);
        }

        let mut errors = FormErrors::new();
        let email_check = validators::email(email);
        if !email_check.is_valid {
            errors.insert("email", email_check.message);
        }
        let password_check = validators::password(password);
        if !password_check.is_valid {
            errors.insert("password", password_check.message);
        }
        if !errors.is_empty() {
            return Err(AuthError::Validation(errors));
        }

        let known = DEMO_USERS
            .iter()
            .any(|user| user.email == email && user.password == password);
        if !known {
            return Err(AuthError::InvalidCredentials);
        }

        self.email = email.to_string();
        self.code = generate_code();
        self.resend_attempts = 0;
        self.cooldown_until = Some(now + Duration::from_secs(OTP_RESEND_COOLDOWN_SECS));
        self.step = LoginStep::Otp;
        info!(email = %self.email, "one-time code issued");
        Ok(())
    }

    /// Second screen. Any well-formed six-digit code is accepted.
    pub fn verify_code(&mut self, code: &str) -> Result<Session, AuthError> {
        if self.step != LoginStep::Otp {
            return Err(AuthError::WrongStep);
        }

        let format_check = validators::one_time_code(code);
        if !format_check.is_valid {
            let mut errors = FormErrors::new();
            errors.insert("otp", format_check.message);
            return Err(AuthError::Validation(errors));
        }

        let user = DEMO_USERS
            .iter()
            .find(|user| user.email == self.email)
            .ok_or(AuthError::InvalidCredentials)?;

        self.step = LoginStep::Success;
        info!(email = %self.email, "login complete");
        Ok(Session {
            user: UserProfile {
                email: user.email.into(),
                name: user.name.into(),
                role: user.role.into(),
                specialty: user.specialty.into(),
            },
            token: format!(
                "mock-jwt-token-{}",
                chrono::Utc::now().timestamp_millis()
            ),
        })
    }

    /// Seconds left before a resend is allowed.
    pub fn countdown_remaining(&self, now: Instant) -> u64 {
        match self.cooldown_until {
            Some(until) if until > now => (until - now).as_secs(),
            _ => 0,
        }
    }

    pub fn resend_attempts(&self) -> u32 {
        self.resend_attempts
    }

    pub fn resend_code(&mut self, now: Instant) -> Result<(), AuthError> {
        if self.step != LoginStep::Otp {
            return Err(AuthError::WrongStep);
        }
        let remaining = self.countdown_remaining(now);
        if remaining > 0 {
            return Err(AuthError::CooldownActive(remaining));
        }
        if self.resend_attempts >= OTP_MAX_RESENDS {
            return Err(AuthError::ResendLimitReached);
        }
        self.code = generate_code();
        self.resend_attempts += 1;
        self.cooldown_until = Some(now + Duration::from_secs(OTP_RESEND_COOLDOWN_SECS));
        info!(email = %self.email, attempt = self.resend_attempts, "one-time code reissued");
        Ok(())
    }

    /// Back link on the code screen; the email screen starts over.
    pub fn back_to_email(&mut self) {
        self.step = LoginStep::Email;
        self.code.clear();
        self.cooldown_until = None;
    }
}

impl Default for LoginFlow {
    fn default() -> Self {
        Self::new()
    }
}

fn generate_code() -> String {
    format!("{:06}", rand::thread_rng().gen_range(0..1_000_000))
}
