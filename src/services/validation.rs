//! Validation rules for the player form

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+").expect("email pattern is valid")
});

const NICKNAME_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const GENERATED_NICKNAME_LEN: usize = 10;

/// Fields of the player form, in the order they are asked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerField {
    FirstName,
    LastName,
    Email,
    Nickname,
    Age,
}

impl PlayerField {
    pub const ALL: [PlayerField; 5] = [
        PlayerField::FirstName,
        PlayerField::LastName,
        PlayerField::Email,
        PlayerField::Nickname,
        PlayerField::Age,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlayerField::FirstName => "First name",
            PlayerField::LastName => "Last name",
            PlayerField::Email => "Email",
            PlayerField::Nickname => "Nickname",
            PlayerField::Age => "Age",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, PlayerField::Nickname)
    }

    /// Prompt text, required fields marked with `*`
    pub fn prompt(self) -> String {
        if self.is_required() {
            format!("* {}:", self.label())
        } else {
            format!("{}:", self.label())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} should start from upper case")]
    NotTitleCase(&'static str),

    #[error("{0} should contain letters only")]
    NoLetters(&'static str),

    #[error("Email is invalid, it should be like \"example@example.com\"")]
    InvalidEmail,

    #[error("Nickname shouldn't contain spaces")]
    NicknameWithSpaces,

    #[error("Age is invalid, it should contain digits only")]
    InvalidAge,
}

/// Every word starts upper-case and continues lower-case, with at least one cased letter
pub fn is_title_case(value: &str) -> bool {
    let mut previous_cased = false;
    let mut seen_cased = false;

    for c in value.chars() {
        if c.is_uppercase() {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else if c.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            seen_cased = true;
        } else {
            previous_cased = false;
        }
    }

    seen_cased
}

/// First or last name; empty means not given
pub fn validate_name(field: PlayerField, value: &str) -> Result<Option<String>, ValidationError> {
    if value.is_empty() {
        return Ok(None);
    }
    if !is_title_case(value) {
        return Err(ValidationError::NotTitleCase(field.label()));
    }
    if !value.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::NoLetters(field.label()));
    }
    Ok(Some(value.to_string()))
}

pub fn validate_email(value: &str) -> Result<Option<String>, ValidationError> {
    if value.is_empty() {
        return Ok(None);
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(Some(value.to_string()))
}

/// Nickname is required; an empty answer gets a random one
pub fn validate_nickname<R: Rng + ?Sized>(value: &str, rng: &mut R) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Ok(generate_nickname(rng));
    }
    if value.contains(' ') {
        return Err(ValidationError::NicknameWithSpaces);
    }
    Ok(value.to_string())
}

pub fn validate_age(value: &str) -> Result<Option<i64>, ValidationError> {
    if value.is_empty() {
        return Ok(None);
    }
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidAge);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| ValidationError::InvalidAge)
}

pub fn generate_nickname<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..GENERATED_NICKNAME_LEN)
        .map(|_| NICKNAME_ALPHABET[rng.gen_range(0..NICKNAME_ALPHABET.len())] as char)
        .collect()
}
