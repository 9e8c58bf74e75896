//! Shared test utilities.

#![allow(dead_code)]

use kyc_intake::config::Policy;
use kyc_intake::record::{Document, Submission};
use kyc_intake::session::{Session, VerificationWidget};

pub const MIB: u64 = 1024 * 1024;

/// Counts how often the session asked for a widget reset.
#[derive(Debug, Default)]
pub struct CountingWidget {
    pub resets: usize,
}

impl VerificationWidget for CountingWidget {
    fn reset(&mut self) {
        self.resets += 1;
    }
}

pub type TestSession = Session<Vec<Submission>, CountingWidget>;

pub fn new_session() -> TestSession {
    Session::new(Policy::default(), Vec::new(), CountingWidget::default())
}

pub fn pdf(size_bytes: u64) -> Document {
    Document::new("proof.pdf", "application/pdf", size_bytes)
}

/// Fills every field with valid input.
pub fn fill_valid(session: &mut TestSession) {
    session.select_country("Egypt").unwrap();
    session.enter_deposit("30000").unwrap();
    session.choose_document(pdf(2 * MIB)).unwrap();
    session.on_verification(Some("abc123")).unwrap();
}
