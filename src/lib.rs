/*!
# Address form with a conditionally required billing address

## Legal

Dual-licensed under `MIT` or the [UNLICENSE](http://unlicense.org/).

## Features

A user enters a mailing address and chooses whether billing goes to the same address
or to a separate one. The mailing address is always required; the billing address is
required only when a separate one was chosen. Both are checked after trimming
whitespace, and every failing rule is reported.

- [`validate`] is a pure function from an [`AddressForm`] to a [`Validation`].
- [`FormSession`] keeps the values being edited, re-validates on every change, shows
  errors for touched fields and blocks submission while the form is invalid.
- [`AddressForm`] also implements [`validator::Validate`].

Serialization is done with [serde](https://crates.io/crates/serde); a [`Validation`]
serializes as `{"valid":true}` or `{"valid":false,"errors":[{"field":..,"message":..}]}`.

## Usage

```rust
use address_form::{validate, AddressForm, Field, FormSession};

let form = AddressForm::from_json(r#"{ "separateBillingAddress": true, "mailingAddress": "1 Main St" }"#)?;
let validation = validate(&form);
assert_eq!(Field::BillingAddress, validation.errors()[0].field);

let mut session = FormSession::new();
session.set_mailing_address("1 Main St");
let submitted = session.submit(|values| values.clone())?;
assert_eq!("1 Main St", submitted.mailing_address);
# Ok::<(), address_form::error::Error>(())
```

Logging goes through the [log](https://crates.io/crates/log) facade; install any
logger (`pretty_env_logger`, `env_logger`, ...) to see it.
*/
mod field;
mod form;
mod messages;
mod session;
mod validation;

pub mod error;

pub use error::Error;
pub use field::Field;
pub use form::AddressForm;
pub use messages::Messages;
pub use session::FormSession;
pub use validation::{validate, validate_with, ErrorKind, FieldError, Validation};

/// Reimport `validator` dependency.
pub mod validator {
    pub use validator::*;
}
