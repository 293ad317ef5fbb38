use crate::application::forms::FormErrors;

pub(super) const MIN_PASSWORD_LENGTH: usize = 8;

/// Adds a `password` field error for each rule the password breaks.
pub(super) fn validate_password(password: &str, username: &str, errors: &mut FormErrors) {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.add(
            "password",
            format!("password must be at least {MIN_PASSWORD_LENGTH} characters"),
        );
    }

    if !password.is_empty() && password.chars().all(|c| c.is_ascii_digit()) {
        errors.add("password", "password cannot be entirely numeric");
    }

    if password.to_lowercase() == username.to_lowercase() {
        errors.add("password", "password is too similar to the username");
    }
}
