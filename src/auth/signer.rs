//! Request signing seam.
//!
//! The API authenticates every request with a signature over
//! `"{access_id}:{access_time}:{body}"`. Producing that signature (ECDSA over
//! the user's private key) is delegated to a [`Signer`] implementation so the
//! SDK never handles key material itself.

use std::fmt;

/// Produces the `Access-Signature` header value for a request.
///
/// Implementations must be thread-safe: a single signer is shared by every
/// request issued with the same [`User`](crate::User), possibly concurrently.
///
/// # Example
///
/// ```rust
/// use starkbank::auth::Signer;
///
/// struct StaticSigner;
///
/// impl Signer for StaticSigner {
///     fn sign(&self, message: &str) -> String {
///         format!("signed:{}", message.len())
///     }
/// }
///
/// assert_eq!(StaticSigner.sign("abc"), "signed:3");
/// ```
pub trait Signer: Send + Sync {
    /// Signs `message`, returning the encoded signature.
    fn sign(&self, message: &str) -> String;
}

impl<F> Signer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn sign(&self, message: &str) -> String {
        self(message)
    }
}

/// Builds the message the API expects to be signed.
#[must_use]
pub fn signing_message(access_id: &str, access_time: &str, body: &str) -> String {
    format!("{access_id}:{access_time}:{body}")
}

pub(crate) struct MaskedSigner;

impl fmt::Debug for MaskedSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Signer(*****)")
    }
}
