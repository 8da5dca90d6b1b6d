use crate::{AddressForm, Field, Messages};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use validator::{Validate, ValidationError, ValidationErrors};

/// Kinds of validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Field is empty after trimming whitespace.
    Required,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match *self {
            ErrorKind::Required => "required",
        }
    }
}

/// A failed rule, attached to the field it concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub kind: ErrorKind,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FieldError", 2)?;
        state.serialize_field("field", &self.field)?;
        state.serialize_field("message", &self.message)?;
        state.end()
    }
}

/// Outcome of validating an [`AddressForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    /// Never empty; errors for `mailingAddress` come before `billingAddress`.
    Invalid(Vec<FieldError>),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Validation::Valid => &[],
            Validation::Invalid(errors) => errors,
        }
    }
}

impl Serialize for Validation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Validation::Valid => {
                let mut state = serializer.serialize_struct("Validation", 1)?;
                state.serialize_field("valid", &true)?;
                state.end()
            }
            Validation::Invalid(errors) => {
                let mut state = serializer.serialize_struct("Validation", 2)?;
                state.serialize_field("valid", &false)?;
                state.serialize_field("errors", errors)?;
                state.end()
            }
        }
    }
}

/// Validate a form with the default messages.
pub fn validate(form: &AddressForm) -> Validation {
    validate_with(form, &Messages::default())
}

/// Validate a form. Both rules run every time; every failure is reported.
pub fn validate_with(form: &AddressForm, messages: &Messages) -> Validation {
    let mut errors = Vec::new();

    if is_blank(&form.mailing_address) {
        errors.push(FieldError {
            field: Field::MailingAddress,
            kind: ErrorKind::Required,
            message: messages.mailing_address_required.to_string(),
        });
    }

    // Billing address only matters once the user asked for a separate one.
    if form.separate_billing_address && is_blank(&form.billing_address) {
        errors.push(FieldError {
            field: Field::BillingAddress,
            kind: ErrorKind::Required,
            message: messages.billing_address_required.to_string(),
        });
    }

    if errors.is_empty() {
        Validation::Valid
    } else {
        Validation::Invalid(errors)
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl From<&FieldError> for ValidationError {
    fn from(error: &FieldError) -> Self {
        let mut validation_error = ValidationError::new(error.kind.code());
        validation_error.message = Some(error.message.clone().into());
        validation_error
    }
}

impl Validate for AddressForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let failures = validate(self);
        if failures.is_valid() {
            return Ok(());
        }
        let mut errors = ValidationErrors::new();
        for error in failures.errors() {
            errors.add(error.field.as_str(), error.into());
        }
        Err(errors)
    }
}
