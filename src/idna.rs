//! Thin wrapper around domain-to-ASCII conversion.
//!
//! IDNA's internals are deliberately left to a real dependency rather than
//! reimplemented here. The teacher's own `idna` crate
//! (`examples/servo-rust-url/idna/src/lib.rs`, `domain_to_ascii`) is that
//! dependency.

use crate::error::ParseError;

/// <https://url.spec.whatwg.org/#concept-domain-to-ascii>, non-transitional,
/// matching the modern `idna` crate's default processing flags.
pub fn domain_to_ascii(domain: &str) -> Result<String, ParseError> {
    idna::domain_to_ascii(domain).map_err(|_| ParseError::InvalidDomainName)
}
