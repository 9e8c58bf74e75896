//! Field validators.
//!
//! Each validator is a pure function from raw input (plus the configured
//! constraints) to either the accepted value or a typed error whose
//! `Display` is the message shown to the user.

mod country;
mod deposit;
mod document;
mod gate;

pub use country::{validate_country, CountryError};
pub use deposit::{validate_deposit, DepositError};
pub use document::{validate_document, DocumentError};
pub use gate::{check_submission, GateFailure};

/// A verification token passes when present and non-empty. Authenticity is
/// the verification provider's concern.
pub fn verification_passed(token: Option<&str>) -> bool {
    token.is_some_and(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::verification_passed;

    #[test]
    fn token_presence_is_the_only_check() {
        assert!(verification_passed(Some("abc123")));
        assert!(verification_passed(Some("x")));
        assert!(!verification_passed(Some("")));
        assert!(!verification_passed(None));
    }
}
