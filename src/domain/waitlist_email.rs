//! src/domain/waitlist_email.rs

use crate::domain::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Whitespace as browsers define it for form input patterns. Unlike Unicode `\s` it
/// includes U+FEFF and excludes U+0085.
const WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// non-whitespace local part, `@`, non-whitespace domain containing a dot
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    let part = format!("[^{}@]+", WHITESPACE);
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is valid")
});

const MIN_EMAIL_LENGTH: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistEmail(String);

impl WaitlistEmail {
    /// Returns an instance of `WaitlistEmail` if the input passes all waitlist checks.
    /// Checks run in a fixed order and the first failing one is reported.
    pub fn parse(s: String) -> Result<WaitlistEmail, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Required);
        }
        // length in UTF-16 code units, as browsers count it
        if s.encode_utf16().count() < MIN_EMAIL_LENGTH {
            return Err(ValidationError::TooShort);
        }
        if !s.contains('@') {
            return Err(ValidationError::MissingAt);
        }
        if !s.contains('.') {
            return Err(ValidationError::MissingDomain);
        }
        if !EMAIL_SHAPE.is_match(&s) {
            return Err(ValidationError::InvalidShape);
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for WaitlistEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WaitlistEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
