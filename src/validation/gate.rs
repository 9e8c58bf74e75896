//! Final check run when the user asks to review the form.

use thiserror::Error;

use crate::config::{DepositLimits, Policy};
use crate::format::format_limit;
use crate::record::{FormRecord, Submission};
use crate::validation::deposit::validate_deposit;
use crate::validation::document::DocumentError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GateFailure {
    #[error(transparent)]
    Document(DocumentError),
    #[error("Please complete the CAPTCHA verification")]
    VerificationFailed,
    #[error("Please select a country")]
    CountryUnselected,
    #[error(
        "Deposit amount must be between {} and {}",
        format_limit(.min),
        format_limit(.max)
    )]
    DepositOutOfRange { min: f64, max: f64 },
}

impl GateFailure {
    /// Country and verification have no inline error slot; they are shown
    /// once as a blocking notice.
    pub fn is_notice(&self) -> bool {
        matches!(self, Self::VerificationFailed | Self::CountryUnselected)
    }
}

/// Re-validates every field from the record itself, without trusting the
/// inline error state. All failures are reported.
pub fn check_submission(
    record: &FormRecord,
    policy: &Policy,
) -> Result<Submission, Vec<GateFailure>> {
    let mut failures = Vec::new();

    if record.document().is_none() {
        failures.push(GateFailure::Document(DocumentError::Missing));
    }
    if !record.verification_passed() {
        failures.push(GateFailure::VerificationFailed);
    }
    if record.selected_country().is_none() {
        failures.push(GateFailure::CountryUnselected);
    }
    let deposit = validate_deposit(record.deposit_input(), &policy.deposit);
    if deposit.is_err() {
        failures.push(out_of_range(&policy.deposit));
    }

    match (record.selected_country(), deposit, record.document()) {
        (Some(country), Ok(amount), Some(document)) if failures.is_empty() => {
            Ok(Submission::new(country, amount, document.clone()))
        }
        _ => Err(failures),
    }
}

fn out_of_range(limits: &DepositLimits) -> GateFailure {
    GateFailure::DepositOutOfRange {
        min: limits.min,
        max: limits.max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Document, SelectedCountry};
    use crate::reference::RiskTier;

    fn complete_record() -> FormRecord {
        let mut record = FormRecord::default();
        record.set_country(Some(SelectedCountry {
            name: "Egypt".to_string(),
            risk: RiskTier::High,
        }));
        record.set_deposit("30000".to_string(), Some(30_000.0));
        record.set_document(Some(Document::new("bill.pdf", "application/pdf", 1024)));
        record.set_verification(true);
        record
    }

    #[test]
    fn complete_record_passes() {
        let submission = check_submission(&complete_record(), &Policy::default()).unwrap();
        assert_eq!(submission.country(), "Egypt");
        assert_eq!(submission.risk_tier(), RiskTier::High);
        assert_eq!(submission.deposit_amount(), 30_000.0);
        assert_eq!(submission.document().name, "bill.pdf");
        assert!(submission.verification_passed());
    }

    #[test]
    fn empty_record_reports_everything_in_order() {
        let failures = check_submission(&FormRecord::default(), &Policy::default()).unwrap_err();
        assert_eq!(
            failures,
            vec![
                GateFailure::Document(DocumentError::Missing),
                GateFailure::VerificationFailed,
                GateFailure::CountryUnselected,
                GateFailure::DepositOutOfRange {
                    min: 20_000.0,
                    max: 50_000.0
                },
            ]
        );
    }

    #[test]
    fn deposit_is_reparsed_from_raw_input() {
        let mut record = complete_record();
        record.set_deposit("10".to_string(), Some(10.0));
        let failures = check_submission(&record, &Policy::default()).unwrap_err();
        assert_eq!(failures.len(), 1);
        assert_eq!(
            failures[0].to_string(),
            "Deposit amount must be between 20,000 and 50,000"
        );
    }

    #[test]
    fn notices_versus_inline() {
        assert!(GateFailure::CountryUnselected.is_notice());
        assert!(GateFailure::VerificationFailed.is_notice());
        assert!(!GateFailure::Document(DocumentError::Missing).is_notice());
        assert!(!GateFailure::DepositOutOfRange { min: 1.0, max: 2.0 }.is_notice());
        assert_eq!(
            GateFailure::Document(DocumentError::Missing).to_string(),
            "Proof of address is required"
        );
    }
}
