//! Route and envelope naming for REST resources.
//!
//! Every resource is identified by a CamelCase name (e.g. `"TransferLog"`).
//! The API derives both its routes and its JSON envelope keys from that
//! name, so the SDK does the same instead of hard-coding each one.
//!
//! # Rules
//!
//! - **endpoint**: CamelCase to kebab-case, with a trailing `-log` segment
//!   nested as `/log` (`TransferLog` -> `transfer/log`)
//! - **singular key**: the last kebab segment (`BrcodePayment` -> `payment`)
//! - **plural key**: the singular key plus `s`; `y` becomes `ies`, words that
//!   already end in `s` are unchanged (`holmes`)
//!
//! # Example
//!
//! ```rust
//! use starkbank::rest::{endpoint, plural_key, singular_key};
//!
//! assert_eq!(endpoint("BoletoHolmesLog"), "boleto-holmes/log");
//! assert_eq!(singular_key("BoletoHolmesLog"), "log");
//! assert_eq!(plural_key("BoletoHolmesLog"), "logs");
//!
//! assert_eq!(endpoint("BoletoHolmes"), "boleto-holmes");
//! assert_eq!(plural_key("BoletoHolmes"), "holmes");
//! ```

/// Converts a CamelCase name to kebab-case.
#[must_use]
pub fn kebab_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    for (index, c) in name.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if index > 0 {
                result.push('-');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Returns the route of a resource, relative to the versioned base path.
#[must_use]
pub fn endpoint(name: &str) -> String {
    let kebab = kebab_case(name);
    kebab
        .strip_suffix("-log")
        .map_or_else(|| kebab.clone(), |parent| format!("{parent}/log"))
}

/// Returns the JSON key wrapping a single resource.
#[must_use]
pub fn singular_key(name: &str) -> String {
    let kebab = kebab_case(name);
    kebab
        .rsplit('-')
        .next()
        .map_or_else(|| kebab.clone(), ToString::to_string)
}

/// Returns the JSON key wrapping a list of resources.
#[must_use]
pub fn plural_key(name: &str) -> String {
    let singular = singular_key(name);
    if singular.ends_with('s') {
        singular
    } else if let Some(stem) = singular.strip_suffix('y') {
        format!("{stem}ies")
    } else {
        format!("{singular}s")
    }
}

/// Joins an endpoint and an id into a request path.
///
/// The id is percent-encoded so that it always occupies a single segment.
#[must_use]
pub fn id_path(endpoint: &str, id: &str) -> String {
    format!("{endpoint}/{}", urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("Transfer"), "transfer");
        assert_eq!(kebab_case("BoletoPayment"), "boleto-payment");
        assert_eq!(kebab_case("BrcodePayment"), "brcode-payment");
        assert_eq!(kebab_case("BoletoHolmesLog"), "boleto-holmes-log");
    }

    #[test]
    fn test_endpoint_nests_logs_under_parent() {
        assert_eq!(endpoint("Transfer"), "transfer");
        assert_eq!(endpoint("TransferLog"), "transfer/log");
        assert_eq!(endpoint("BoletoLog"), "boleto/log");
        assert_eq!(endpoint("BoletoPaymentLog"), "boleto-payment/log");
        assert_eq!(endpoint("BoletoHolmesLog"), "boleto-holmes/log");
        assert_eq!(endpoint("PaymentRequest"), "payment-request");
    }

    #[test]
    fn test_singular_key_is_last_segment() {
        assert_eq!(singular_key("Transfer"), "transfer");
        assert_eq!(singular_key("TransferLog"), "log");
        assert_eq!(singular_key("BrcodePayment"), "payment");
        assert_eq!(singular_key("PaymentRequest"), "request");
        assert_eq!(singular_key("BoletoHolmes"), "holmes");
    }

    #[test]
    fn test_plural_key_rules() {
        assert_eq!(plural_key("Transfer"), "transfers");
        assert_eq!(plural_key("BoletoPaymentLog"), "logs");
        assert_eq!(plural_key("BoletoHolmes"), "holmes");
        assert_eq!(plural_key("Policy"), "policies");
        assert_eq!(plural_key("PaymentRequest"), "requests");
    }

    #[test]
    fn test_id_path_encodes_id() {
        assert_eq!(id_path("transfer/log", "5656565656565656"), "transfer/log/5656565656565656");
        assert_eq!(id_path("boleto", "a/b c"), "boleto/a%2Fb%20c");
    }
}
