//! Credential redaction for URL-like history entries.

/// Separator between a VFS/URL scheme and the rest of the entry.
const URL_DELIMITER: &str = "://";

/// Drop the password from a `user:password@host` entry.
///
/// The entry is split on its last `@`. The password separator is the first
/// `:` after the `://` delimiter when there is one, otherwise the first `:`
/// in the entry. A `:` after the `@` is a port separator and leaves the
/// entry untouched.
///
/// ```
/// use termline::strip_password;
///
/// assert_eq!(strip_password("admin:secret@host/path"), "admin@host/path");
/// assert_eq!(strip_password("ftp://me:pw@host:21"), "ftp://me@host:21");
/// assert_eq!(strip_password("me@host:21"), "me@host:21");
/// ```
#[must_use]
pub fn strip_password(url: &str) -> String {
    let Some(at) = url.rfind('@') else {
        return url.to_string();
    };
    let colon = match url.find(URL_DELIMITER) {
        Some(delim) => {
            let from = delim + URL_DELIMITER.len();
            url[from..].find(':').map(|i| from + i)
        }
        None => url.find(':'),
    };
    match colon {
        Some(colon) if colon < at => format!("{}{}", &url[..colon], &url[at..]),
        _ => url.to_string(),
    }
}
