//! Input validation for the welcome screen

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid")
});

/// Validates an email address used as the sender identity
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }

    if email.len() > 254 {
        return Err("Email too long (max 254 characters)".to_string());
    }

    if !EMAIL_RE.is_match(email) {
        return Err("Email address is badly formatted".to_string());
    }

    Ok(())
}

/// Validates a password for registration
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password should be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    Ok(())
}
