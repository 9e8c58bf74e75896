//! Text for the read-only confirmation view.

use std::fmt;

use crate::format::{format_megabytes, format_usd};
use crate::record::Submission;
use crate::reference::RiskTier;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationSummary {
    pub country: String,
    pub risk: RiskTier,
    pub deposit: String,
    pub document_name: String,
    pub document_details: String,
    pub verification: &'static str,
}

impl From<&Submission> for ConfirmationSummary {
    fn from(submission: &Submission) -> Self {
        let document = submission.document();
        Self {
            country: submission.country().to_string(),
            risk: submission.risk_tier(),
            deposit: format_usd(submission.deposit_amount()),
            document_name: document.name.clone(),
            document_details: format!(
                "File type: {}, Size: {}",
                document.mime_type,
                format_megabytes(document.size_bytes)
            ),
            verification: "Completed",
        }
    }
}

impl fmt::Display for ConfirmationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Please Confirm Your Information")?;
        writeln!(f, "  Country: {}", self.country)?;
        writeln!(f, "  Risk Level: {}", self.risk)?;
        writeln!(f, "  Deposit Amount: {}", self.deposit)?;
        writeln!(f, "  Proof of Address: {}", self.document_name)?;
        writeln!(f, "    {}", self.document_details)?;
        write!(f, "  CAPTCHA Verification: {}", self.verification)
    }
}
