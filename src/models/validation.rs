use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use regex::Regex;

use super::user::{CreateUserRequest, UpdateUserRequest, UserFields};

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_EMAIL_LENGTH: usize = 255;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Name validation
pub fn validate_name(name: &str) -> Result<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(anyhow!("Name is required"));
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(anyhow!(
            "Name cannot be longer than {} characters",
            MAX_NAME_LENGTH
        ));
    }

    Ok(())
}

/// Email validation
pub fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(anyhow!("Email is required"));
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(anyhow!(
            "Email cannot be longer than {} characters",
            MAX_EMAIL_LENGTH
        ));
    }

    if !EMAIL_REGEX.is_match(email) {
        return Err(anyhow!("Invalid email format"));
    }

    Ok(())
}

fn validate_fields(name: &str, email: &str) -> Result<UserFields> {
    let mut problems = Vec::new();

    if let Err(e) = validate_name(name) {
        problems.push(e.to_string());
    }
    if let Err(e) = validate_email(email) {
        problems.push(e.to_string());
    }

    if !problems.is_empty() {
        return Err(anyhow!(problems.join("; ")));
    }

    Ok(UserFields {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
    })
}

impl CreateUserRequest {
    pub fn validate(&self) -> Result<UserFields> {
        validate_fields(&self.name, &self.email)
    }
}

impl UpdateUserRequest {
    pub fn validate(&self) -> Result<UserFields> {
        validate_fields(&self.name, &self.email)
    }
}
