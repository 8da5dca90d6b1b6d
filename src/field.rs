use serde::{Deserialize, Serialize};
use std::fmt;

/// The fields of an [`AddressForm`](crate::AddressForm).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    SeparateBillingAddress,
    MailingAddress,
    BillingAddress,
}

impl Field {
    pub const ALL: [Field; 3] = [
        Field::SeparateBillingAddress,
        Field::MailingAddress,
        Field::BillingAddress,
    ];

    /// Name of the field as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        use Field::*;
        match *self {
            SeparateBillingAddress => "separateBillingAddress",
            MailingAddress => "mailingAddress",
            BillingAddress => "billingAddress",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}
