use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error("email address is not of the form local@domain.tld")]
    InvalidEmail,
    #[error("a submission is already in progress")]
    Busy,
}

/// Raw values read from the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    /// Trim every field and check it is fit to send.
    pub fn validate(&self) -> Result<ContactFields, ContactError> {
        let trimmed = ContactFields {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
        };
        for (field, value) in [
            ("name", &trimmed.name),
            ("email", &trimmed.email),
            ("subject", &trimmed.subject),
            ("message", &trimmed.message),
        ] {
            if value.is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !is_valid_email(&trimmed.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(trimmed)
    }
}

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

/// Simulated submission lifecycle: Idle -> Sending -> Sent -> Idle.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContactForm {
    phase: FormPhase,
}

impl ContactForm {
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Validate and, on success, enter the sending state.
    pub fn submit(&mut self, fields: &ContactFields) -> Result<ContactFields, ContactError> {
        if self.phase != FormPhase::Idle {
            return Err(ContactError::Busy);
        }
        let clean = fields.validate()?;
        self.phase = FormPhase::Sending;
        Ok(clean)
    }

    pub fn sent(&mut self) {
        if self.phase == FormPhase::Sending {
            self.phase = FormPhase::Sent;
        }
    }

    pub fn reset(&mut self) {
        self.phase = FormPhase::Idle;
    }
}
