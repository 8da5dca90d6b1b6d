/*!
Live form state.

A [`FormSession`] owns the values being edited, re-validates after every change and
only lets a submission through when the form is valid. Errors for a field are shown
once the user has touched it.
*/
use crate::{
    error::Error,
    validation::{validate_with, FieldError, Validation},
    AddressForm, Field, Messages,
};
use log::{debug, info, warn};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct FormSession {
    values: AddressForm,
    messages: Messages,
    touched: HashSet<Field>,
    validation: Validation,
    submissions: u32,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    pub fn new() -> Self {
        Self::with_messages(Messages::default())
    }

    pub fn with_messages(messages: Messages) -> Self {
        let values = AddressForm::default();
        let validation = validate_with(&values, &messages);
        FormSession {
            values,
            messages,
            touched: HashSet::new(),
            validation,
            submissions: 0,
        }
    }

    pub fn values(&self) -> &AddressForm {
        &self.values
    }

    pub fn validation(&self) -> &Validation {
        &self.validation
    }

    pub fn set_mailing_address(&mut self, value: impl Into<String>) {
        self.values.mailing_address = value.into();
        self.changed(Field::MailingAddress);
    }

    pub fn set_billing_address(&mut self, value: impl Into<String>) {
        self.values.billing_address = value.into();
        self.changed(Field::BillingAddress);
    }

    pub fn set_separate_billing_address(&mut self, value: bool) {
        self.values.separate_billing_address = value;
        self.changed(Field::SeparateBillingAddress);
    }

    /// Mark a field as touched when it loses focus.
    pub fn blur(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    pub fn errors(&self) -> &[FieldError] {
        self.validation.errors()
    }

    pub fn field_errors(&self, field: Field) -> impl Iterator<Item = &FieldError> {
        self.errors().iter().filter(move |e| e.field == field)
    }

    /// Messages to display next to `field`, joined with `,`.
    /// `None` until the field is touched, or when it has no errors.
    pub fn visible_errors(&self, field: Field) -> Option<String> {
        if !self.is_touched(field) {
            return None;
        }
        let messages: Vec<&str> = self
            .field_errors(field)
            .map(|e| e.message.as_str())
            .collect();
        if messages.is_empty() {
            None
        } else {
            Some(messages.join(","))
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid()
    }

    /// The billing address input is hidden unless a separate address was chosen.
    pub fn billing_address_hidden(&self) -> bool {
        !self.values.separate_billing_address
    }

    /// Number of submissions accepted so far.
    pub fn submissions(&self) -> u32 {
        self.submissions
    }

    /// Restore default values and forget touched state.
    pub fn reset(&mut self) {
        self.values = AddressForm::default();
        self.touched.clear();
        self.revalidate();
    }

    /// Validate once more and hand the values to `consumer` if they pass.
    ///
    /// A blocked submission touches every field so all errors become visible,
    /// and `consumer` is not called.
    pub fn submit<F, R>(&mut self, consumer: F) -> Result<R, Error>
    where
        F: FnOnce(&AddressForm) -> R,
    {
        self.touched.extend(Field::ALL);
        self.revalidate();

        match &self.validation {
            Validation::Valid => {
                self.submissions += 1;
                info!("address form submitted ({})", self.submissions);
                Ok(consumer(&self.values))
            }
            Validation::Invalid(errors) => {
                warn!("address form submission blocked: {} error(s)", errors.len());
                Err(Error::Invalid(errors.clone()))
            }
        }
    }

    fn changed(&mut self, field: Field) {
        self.touched.insert(field);
        self.revalidate();
    }

    fn revalidate(&mut self) {
        self.validation = validate_with(&self.values, &self.messages);
        debug!(
            "address form validated: {} error(s)",
            self.validation.errors().len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ErrorKind;

    #[test]
    fn new_session_is_invalid_but_quiet() {
        let session = FormSession::new();
        assert_eq!(&AddressForm::default(), session.values());
        assert!(!session.can_submit());
        assert_eq!(1, session.errors().len());
        assert_eq!(None, session.visible_errors(Field::MailingAddress));
        assert!(session.billing_address_hidden());
    }

    #[test]
    fn errors_visible_after_blur() {
        let mut session = FormSession::new();
        session.blur(Field::MailingAddress);
        assert_eq!(
            Some("Mailing address is required".to_string()),
            session.visible_errors(Field::MailingAddress)
        );
        assert_eq!(None, session.visible_errors(Field::BillingAddress));
    }

    #[test]
    fn revalidates_on_every_change() {
        let mut session = FormSession::new();
        session.set_mailing_address("1 Main St");
        assert!(session.is_valid());

        session.set_separate_billing_address(true);
        assert!(!session.billing_address_hidden());
        assert!(!session.is_valid());
        let errors: Vec<&FieldError> = session.field_errors(Field::BillingAddress).collect();
        assert_eq!(1, errors.len());
        assert_eq!(ErrorKind::Required, errors[0].kind);
        // billing not touched yet
        assert_eq!(None, session.visible_errors(Field::BillingAddress));

        session.set_billing_address("2 Oak Ave");
        assert!(session.is_valid());

        session.set_billing_address(" ");
        assert_eq!(
            Some("Billing address is required.".to_string()),
            session.visible_errors(Field::BillingAddress)
        );

        session.set_separate_billing_address(false);
        assert!(session.is_valid());
        assert_eq!(None, session.visible_errors(Field::BillingAddress));
    }

    #[test]
    fn submit_blocked_while_invalid() {
        let mut session = FormSession::new();
        session.set_separate_billing_address(true);

        let mut called = false;
        let err = session.submit(|_| called = true).unwrap_err();
        assert!(!called);
        assert!(matches!(err, Error::Invalid(_)));
        let fields: Vec<Field> = err.field_errors().iter().map(|e| e.field).collect();
        assert_eq!(vec![Field::MailingAddress, Field::BillingAddress], fields);
        assert_eq!(0, session.submissions());

        // every error is now on display
        assert!(session.visible_errors(Field::MailingAddress).is_some());
        assert!(session.visible_errors(Field::BillingAddress).is_some());
    }

    #[test]
    fn submit_hands_over_values() {
        let mut session = FormSession::new();
        session.set_mailing_address("1 Main St");
        session.set_separate_billing_address(true);
        session.set_billing_address("2 Oak Ave");

        let submitted = session.submit(|form| form.clone()).unwrap();
        assert_eq!(AddressForm::new(true, "1 Main St", "2 Oak Ave"), submitted);
        assert_eq!(1, session.submissions());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut session = FormSession::new();
        session.set_mailing_address("1 Main St");
        session.set_separate_billing_address(true);
        session.reset();

        assert_eq!(&AddressForm::default(), session.values());
        for field in Field::ALL {
            assert!(!session.is_touched(field));
        }
        assert_eq!(1, session.errors().len());
    }

    #[test]
    fn custom_messages_are_used() {
        let mut session = FormSession::with_messages(Messages {
            mailing_address_required: "Enter a mailing address".into(),
            ..Default::default()
        });
        session.blur(Field::MailingAddress);
        assert_eq!(
            Some("Enter a mailing address".to_string()),
            session.visible_errors(Field::MailingAddress)
        );
    }
}
