use crate::error::Error;
use serde::{Deserialize, Serialize};

/// Address form values: a mailing address and an optional separate billing address.
///
/// Missing keys deserialize to their defaults, so `{}` is a valid (but failing) form.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Eq, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AddressForm {
    /// `true` when the billing address differs from the mailing address.
    /// Only then is `billing_address` required.
    pub separate_billing_address: bool,
    /// Required in every state.
    pub mailing_address: String,
    /// Unconstrained, and hidden in the form, unless `separate_billing_address` is set.
    pub billing_address: String,
}

impl AddressForm {
    pub fn new(
        separate_billing_address: bool,
        mailing_address: impl Into<String>,
        billing_address: impl Into<String>,
    ) -> Self {
        AddressForm {
            separate_billing_address,
            mailing_address: mailing_address.into(),
            billing_address: billing_address.into(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}
