//! Optional arguments with defaults, and a validating accessor pair.

use thiserror::Error;

use crate::assert;
use crate::config::RunConfig;
use crate::errors::{CaseResult, KataError};
use crate::harness::Suite;
use crate::output::Reporter;

pub const DEFAULT_NAME: &str = "Anonymous";
pub const DEFAULT_AVATAR: &str = "default.jpg";
const PHONE_DIGITS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Invalid phone number.")]
    InvalidPhoneNumber,
}

/// Saves a contact card; `name` and `avatar` fall back to their defaults.
pub fn create_contact(phone_number: &str, name: Option<&str>, avatar: Option<&str>) -> String {
    if phone_number.is_empty() {
        return "Invalid phone number".to_string();
    }
    format!(
        "Contact saved! Name: {}, Phone number: {}, Avatar: /public/pictures/{}",
        name.unwrap_or(DEFAULT_NAME),
        phone_number,
        avatar.unwrap_or(DEFAULT_AVATAR)
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    phone_number: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }

    /// The stored number formatted as `(555) 123-4567`.
    pub fn phone_number(&self) -> String {
        format!(
            "({}) {}-{}",
            segment(&self.phone_number, 0, 3),
            segment(&self.phone_number, 3, 6),
            segment(&self.phone_number, 6, usize::MAX)
        )
    }

    pub fn set_phone_number(&mut self, phone_number: &str) -> Result<(), ContactError> {
        if phone_number.chars().count() != PHONE_DIGITS {
            return Err(ContactError::InvalidPhoneNumber);
        }
        self.phone_number = phone_number.to_string();
        Ok(())
    }
}

// Character slice that clamps out-of-range bounds instead of panicking.
fn segment(s: &str, start: usize, end: usize) -> String {
    s.chars().skip(start).take(end.saturating_sub(start)).collect()
}

pub fn suite<R: Reporter>(suite: &mut Suite<R>, config: &RunConfig) -> CaseResult {
    suite.describe("create_contact", |g| {
        g.it("uses the defaults when only a phone number is given", || {
            assert::strict_equal(
                create_contact("5551234567", None, None).as_str(),
                "Contact saved! Name: Anonymous, Phone number: 5551234567, Avatar: /public/pictures/default.jpg",
            )
        });
        g.it("rejects a missing phone number", || {
            assert::strict_equal(
                create_contact("", Some("Lane"), None).as_str(),
                "Invalid phone number",
            )
        });
        if config.with_submit {
            g.it("keeps explicit arguments", || {
                assert::strict_equal(
                    create_contact("5559876543", Some("Lane"), Some("lane.png")).as_str(),
                    "Contact saved! Name: Lane, Phone number: 5559876543, Avatar: /public/pictures/lane.png",
                )
            });
        }
        Ok(())
    })?;

    suite.describe("Contact phone number", |g| {
        g.it("formats the stored number", || {
            let contact = Contact::new("Lane", "5551234567");
            assert::strict_equal(contact.phone_number().as_str(), "(555) 123-4567")
        });
        g.it("accepts a ten digit number", || {
            let mut contact = Contact::new("Lane", "5551234567");
            contact
                .set_phone_number("5559876543")
                .map_err(KataError::raised)?;
            assert::strict_equal(contact.phone_number().as_str(), "(555) 987-6543")
        });
        g.it("rejects a short number", || {
            let mut contact = Contact::new("Lane", "5551234567");
            assert::throws(|| contact.set_phone_number("12345"), Some("Invalid phone number."))
        });
        if config.with_submit {
            g.it("leaves the old number after a rejected update", || {
                let mut contact = Contact::new("Lane", "5551234567");
                assert::throws(|| contact.set_phone_number("555123456789"), None)?;
                assert::strict_equal(contact.phone_number().as_str(), "(555) 123-4567")
            });
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_stored_numbers_format_without_panicking() {
        assert_eq!(Contact::new("x", "55").phone_number(), "(55) -");
    }

    #[test]
    fn setter_counts_characters() {
        let mut contact = Contact::new("x", "5551234567");
        assert_eq!(
            contact.set_phone_number("555123456"),
            Err(ContactError::InvalidPhoneNumber)
        );
        assert_eq!(contact.set_phone_number("0123456789"), Ok(()));
        assert_eq!(contact.phone_number(), "(012) 345-6789");
    }
}
