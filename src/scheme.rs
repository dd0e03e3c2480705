//! Scheme classification: <https://url.spec.whatwg.org/#url-miscellaneous>.
//!
//! Grounded on `examples/original_source/include/url/type.h`, with one fix:
//! the source's `ws`/`wss` branch returns its `https` tag for a 3-byte
//! `"wss"` scheme (a copy-paste bug). `wss` gets its own tag here, with its
//! own default port. See `DESIGN.md`.

/// A URL's scheme, tagged the way the algorithm needs to dispatch on it.
/// `Opaque` covers every non-special scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeType {
    Ftp,
    File,
    Http,
    Https,
    Ws,
    Wss,
    Opaque,
}

impl SchemeType {
    /// <https://url.spec.whatwg.org/#is-special>
    #[inline]
    pub const fn is_special(self) -> bool {
        !matches!(self, SchemeType::Opaque)
    }

    /// <https://url.spec.whatwg.org/#default-port>
    #[inline]
    pub const fn default_port(self) -> Option<u16> {
        match self {
            SchemeType::Ftp => Some(21),
            SchemeType::Http | SchemeType::Ws => Some(80),
            SchemeType::Https | SchemeType::Wss => Some(443),
            SchemeType::File | SchemeType::Opaque => None,
        }
    }

    /// Classifies an already-lowercased scheme (without the trailing `:`).
    pub fn classify(scheme: &[u8]) -> SchemeType {
        match scheme {
            b"ftp" => SchemeType::Ftp,
            b"file" => SchemeType::File,
            b"http" => SchemeType::Http,
            b"https" => SchemeType::Https,
            b"ws" => SchemeType::Ws,
            b"wss" => SchemeType::Wss,
            _ => SchemeType::Opaque,
        }
    }
}
