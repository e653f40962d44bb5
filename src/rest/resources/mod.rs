//! Typed resource modules.
//!
//! Each module declares one resource (and, where the API keeps an audit
//! trail, its `log` submodule) together with a filter struct and the
//! operations the API supports for it:
//!
//! | Module | get | query | page | create | update | delete |
//! |---|---|---|---|---|---|---|
//! | [`transfer`] | ✓ | ✓ | ✓ | ✓ | | ✓ |
//! | [`boleto`] | ✓ | ✓ | ✓ | ✓ | | ✓ |
//! | [`boleto_payment`] | ✓ | ✓ | ✓ | ✓ | | ✓ |
//! | [`boleto_holmes`] | ✓ | ✓ | ✓ | ✓ | | |
//! | [`brcode_payment`] | ✓ | ✓ | ✓ | ✓ | ✓ | |
//! | [`payment_request`] | | ✓ | ✓ | ✓ | | |
//!
//! Every `log` submodule supports get, query and page.
//!
//! # Example
//!
//! ```rust,ignore
//! use starkbank::rest::resources::boleto_payment::{self, BoletoPayment};
//!
//! let payments = boleto_payment::create(
//!     &client,
//!     &user,
//!     &[BoletoPayment {
//!         line: Some("34191.09008 61713.957308 71444.640008 2 83430000984732".to_string()),
//!         tax_id: "20.018.183/0001-80".to_string(),
//!         description: "loading a random account".to_string(),
//!         ..Default::default()
//!     }],
//! )
//! .await?;
//!
//! let logs = boleto_payment::log::query(
//!     &client,
//!     &user,
//!     None,
//!     &boleto_payment::log::LogQuery {
//!         payment_ids: payments.iter().filter_map(|p| p.id.clone()).collect(),
//!         ..Default::default()
//!     },
//! )?
//! .try_collect()
//! .await?;
//! ```

pub mod boleto;
pub mod boleto_holmes;
pub mod boleto_payment;
pub mod brcode_payment;
pub mod payment_request;
pub mod transfer;

pub use boleto::Boleto;
pub use boleto_holmes::BoletoHolmes;
pub use boleto_payment::BoletoPayment;
pub use brcode_payment::BrcodePayment;
pub use payment_request::PaymentRequest;
pub use transfer::Transfer;
