//! Percent-encoding of candidate references.
//!
//! Candidates are encoded with the same character set a browser's
//! `encodeURI` leaves alone, so that spaces, en dashes and accented
//! letters in hand-named files become valid resource references while
//! path separators and URL punctuation survive.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Everything outside ASCII alphanumerics and `;,/?:@&=+$-_.!~*'()#`.
const URI_RESERVED_KEPT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// Encode a path or URL for use as a resource reference.
///
/// ```
/// use gameshelf_covers::encode::encode_uri;
///
/// assert_eq!(
///     encode_uri("./imagenes/Hades_II_Early Access.webp"),
///     "./imagenes/Hades_II_Early%20Access.webp"
/// );
/// ```
pub fn encode_uri(s: &str) -> String {
    utf8_percent_encode(s, URI_RESERVED_KEPT).to_string()
}

/// Reverse [`encode_uri`]. Sequences that do not decode to UTF-8 are
/// replaced lossily.
pub fn decode_uri(s: &str) -> Cow<'_, str> {
    percent_decode_str(s).decode_utf8_lossy()
}

/// True for references that point off-site (`http://`, `https://`, `//host`).
pub fn is_remote(reference: &str) -> bool {
    let lower = reference.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://") || lower.starts_with("//")
}
