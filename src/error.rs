//! Error types. Grounded on the `thiserror`-based wrapper in
//! `examples/other_examples/a4038cf0_ada-url-rust__src-lib.rs.rs` and the
//! validation-error taxonomy of
//! `examples/simonwuelker-Stormlicht/web/url/src/validation_error.rs`,
//! folded down to the handful of conditions this crate treats as fatal
//! rather than setter-ignorable.

use thiserror::Error;

/// Why a parse (or a setter that re-enters the parser) failed.
///
/// A `ParseError` leaves the `Url` untouched: on `parse` the result stays in
/// its initial state; on a setter, the receiver's pre-call bytes are
/// preserved by staging the new serialization in a scratch buffer before
/// splicing it in.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("input has no scheme and no base URL was given")]
    MissingSchemeNonRelativeUrl,
    #[error("relative reference against a base URL with an opaque path must be a fragment-only reference")]
    RelativeUrlWithOpaquePathBase,
    #[error("special URLs cannot have an empty host")]
    HostMissing,
    #[error("input contains a forbidden host code point")]
    ForbiddenHostCodePoint,
    #[error("input contains a forbidden domain code point")]
    ForbiddenDomainCodePoint,
    #[error("IPv4 address is malformed")]
    InvalidIpv4Address,
    #[error("IPv6 address is malformed")]
    InvalidIpv6Address,
    #[error("IDNA domain-to-ASCII conversion failed")]
    InvalidDomainName,
    #[error("port is not a number")]
    PortInvalid,
    #[error("port number {0} exceeds 65535")]
    PortOutOfRange(u32),
    #[error("authority terminated with credentials but no host (bare \"@\")")]
    EmptyHostWithCredentials,
}

/// The three-way result of a setter: `Applied` and `Ignored` both leave
/// `Err` out of the happy path so callers can match on outcome without
/// immediately propagating `?`, mirroring the C API's `{1, 0, <0}`
/// convention without collapsing "ignored" into an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// The setter took effect; the URL was re-serialized.
    Applied,
    /// The URL categorically cannot accept this change (e.g. setting a
    /// host on an opaque-path URL); the URL is unchanged.
    Ignored,
}

pub type SetResult = Result<SetOutcome, ParseError>;
