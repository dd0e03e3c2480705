//! A WHATWG URL Standard-conformant URL parser.
//!
//! Parses, serializes, and incrementally mutates URLs the way
//! `https://url.spec.whatwg.org/` specifies: a single canonical buffer per
//! `Url`, with byte offsets delimiting scheme, userinfo, host, port, path,
//! query and fragment, rather than separately-owned component strings.
//!
//! ```
//! use weburl::Url;
//!
//! let url = Url::parse("https://example.com/a/b?c=1#d").unwrap();
//! assert_eq!(url.host_str(), Some("example.com"));
//! assert_eq!(url.path(), "/a/b");
//! ```
//!
//! This crate does not implement `URLSearchParams`, origin computation, or
//! any networking; see the crate's `DESIGN.md` for the full list of
//! deliberate omissions.

mod charset;
mod error;
mod host;
mod idna;
mod parser;
mod percent;
mod scheme;
mod url;

pub use error::{ParseError, SetOutcome, SetResult};
pub use scheme::SchemeType;
pub use url::Url;
