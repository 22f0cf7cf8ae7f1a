//! src/domain/mod.rs

mod waitlist_email;

pub use waitlist_email::WaitlistEmail;

/// Validation error for a waitlist email. The display text is shown to the visitor as is.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email is required")]
    Required,
    #[error("Email is too short")]
    TooShort,
    #[error("Please include '@' in your email")]
    MissingAt,
    #[error("Please include a valid domain")]
    MissingDomain,
    #[error("Please enter a valid email address")]
    InvalidShape,
}
