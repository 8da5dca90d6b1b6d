use std::borrow::Cow;

/// Message text reported for each rule.
/// Derives Default through the impl below, so remember to `..Default::default()`
/// after you override what you want.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub mailing_address_required: Cow<'static, str>,
    pub billing_address_required: Cow<'static, str>,
}

impl Default for Messages {
    fn default() -> Self {
        Messages {
            mailing_address_required: Cow::Borrowed("Mailing address is required"),
            billing_address_required: Cow::Borrowed("Billing address is required."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_one_message() {
        let messages = Messages {
            billing_address_required: "Please enter a billing address".into(),
            ..Default::default()
        };
        assert_eq!("Mailing address is required", messages.mailing_address_required);
        assert_eq!(
            "Please enter a billing address",
            messages.billing_address_required
        );
    }
}
