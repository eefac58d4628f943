// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Pure field validation rules. No I/O, no UI types.

use std::collections::BTreeMap;

use email_address::EmailAddress;

use crate::models::record::FormRecord;

/// The four fields a submission consists of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Number,
    Password,
}

impl Field {
    /// All fields in form display order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Number, Field::Password];

    /// User-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Number => "Number",
            Field::Password => "Password",
        }
    }
}

/// Mapping from failing field to its error text. Absent key means valid.
pub type FieldErrors = BTreeMap<Field, String>;

/// Validate a single field value, returning the error text when it fails.
pub fn validate_field(field: Field, value: &str) -> Option<String> {
    match field {
        Field::Name => validate_name(value),
        Field::Email => validate_email(value),
        Field::Number => validate_number(value),
        Field::Password => validate_password(value),
    }
}

/// Full-record validation, performed mandatorily at submit time.
///
/// Incremental per-field results are never trusted alone: a field the user
/// never touched would otherwise bypass its rule.
pub fn validate_record(record: &FormRecord) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for (field, value) in [
        (Field::Name, record.name.as_str()),
        (Field::Email, record.email.as_str()),
        (Field::Number, record.number.as_str()),
        (Field::Password, record.password.as_str()),
    ] {
        if let Some(message) = validate_field(field, value) {
            errors.insert(field, message);
        }
    }
    errors
}

fn validate_name(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Name is required".into());
    }
    if value.split_whitespace().count() < 2 {
        return Some("Full name is required".into());
    }
    None
}

fn validate_email(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Email is required".into());
    }
    if !email_is_valid(value) {
        return Some("Email address is invalid".into());
    }
    None
}

/// RFC-parseable address with a dotted domain ending in an alphabetic TLD
/// of at least two characters ("user@host" without a dot is rejected).
fn email_is_valid(value: &str) -> bool {
    if EmailAddress::parse_with_options(value, Default::default()).is_err() {
        return false;
    }
    let domain = value.rsplit('@').next().unwrap_or_default();
    match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

fn validate_number(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Number is required".into());
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Some("Number must be digits only".into());
    }
    // Strict format: exactly 10 digits with a 7/8/9 prefix.
    if value.len() != 10 || !matches!(value.as_bytes()[0], b'7'..=b'9') {
        return Some("Number must be 10 digits starting with 7, 8, or 9".into());
    }
    None
}

fn validate_password(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Password is required".into());
    }
    if value.chars().count() < 8 {
        return Some("Password must be at least 8 characters long".into());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_record() -> FormRecord {
        FormRecord {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            number: "8123456789".into(),
            password: "longenough1".into(),
        }
    }

    #[test]
    fn valid_record_has_no_errors() {
        assert!(validate_record(&valid_record()).is_empty());
    }

    #[test]
    fn empty_record_flags_every_field_as_required() {
        let errors = validate_record(&FormRecord::default());

        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&Field::Name], "Name is required");
        assert_eq!(errors[&Field::Email], "Email is required");
        assert_eq!(errors[&Field::Number], "Number is required");
        assert_eq!(errors[&Field::Password], "Password is required");
    }

    #[test]
    fn missing_fields_are_flagged_exactly() {
        let mut record = valid_record();
        record.email = String::new();
        record.password = String::new();

        let errors = validate_record(&record);

        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key(&Field::Email));
        assert!(errors.contains_key(&Field::Password));
    }

    #[test]
    fn single_token_name_is_rejected() {
        assert_eq!(
            validate_field(Field::Name, "Jane").as_deref(),
            Some("Full name is required")
        );
        assert_eq!(validate_field(Field::Name, "Jane Doe"), None);
    }

    #[test]
    fn whitespace_only_name_counts_as_single_token() {
        assert_eq!(
            validate_field(Field::Name, "   Jane   ").as_deref(),
            Some("Full name is required")
        );
        assert_eq!(validate_field(Field::Name, "  Jane   Doe "), None);
    }

    #[test]
    fn email_requires_dotted_domain_with_alpha_tld() {
        assert_eq!(validate_field(Field::Email, "jane@example.com"), None);
        assert_eq!(validate_field(Field::Email, "j.doe+tag@sub.example.org"), None);
        assert_eq!(
            validate_field(Field::Email, "jane@example").as_deref(),
            Some("Email address is invalid")
        );
        assert_eq!(
            validate_field(Field::Email, "jane@example.c").as_deref(),
            Some("Email address is invalid")
        );
        assert_eq!(
            validate_field(Field::Email, "jane@example.c0m").as_deref(),
            Some("Email address is invalid")
        );
        assert_eq!(
            validate_field(Field::Email, "not-an-email").as_deref(),
            Some("Email address is invalid")
        );
    }

    #[test]
    fn number_rejects_non_digits() {
        assert_eq!(
            validate_field(Field::Number, "12a45").as_deref(),
            Some("Number must be digits only")
        );
    }

    #[test]
    fn number_enforces_strict_format() {
        assert_eq!(validate_field(Field::Number, "8123456789"), None);
        assert_eq!(validate_field(Field::Number, "7000000000"), None);
        assert_eq!(validate_field(Field::Number, "9999999999"), None);
        assert_eq!(
            validate_field(Field::Number, "1234567890").as_deref(),
            Some("Number must be 10 digits starting with 7, 8, or 9")
        );
        assert_eq!(
            validate_field(Field::Number, "812345678").as_deref(),
            Some("Number must be 10 digits starting with 7, 8, or 9")
        );
        assert_eq!(
            validate_field(Field::Number, "81234567890").as_deref(),
            Some("Number must be 10 digits starting with 7, 8, or 9")
        );
    }

    #[test]
    fn password_length_rule() {
        assert_eq!(
            validate_field(Field::Password, "short1").as_deref(),
            Some("Password must be at least 8 characters long")
        );
        assert_eq!(validate_field(Field::Password, "longenough1"), None);
        // Exactly eight characters passes.
        assert_eq!(validate_field(Field::Password, "12345678"), None);
    }
}
