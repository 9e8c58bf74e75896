use std::io::{BufRead, Write};

use anyhow::Result;

use crate::cli::document::document_from_path;
use crate::cli::script::{parse_line, ScriptCommand, HELP};
use crate::format::format_usd;
use crate::session::{Session, SubmissionSink, SubmitOutcome, VerificationWidget};
use crate::ui::form::{FormState, SessionPhase};
use crate::ui::summary::ConfirmationSummary;

/// Widget stand-in for the line interface: the user re-enters a token with
/// `verify` after each submission.
#[derive(Debug, Default)]
pub struct PromptWidget {
    resets: usize,
}

impl PromptWidget {
    pub fn resets(&self) -> usize {
        self.resets
    }
}

impl VerificationWidget for PromptWidget {
    fn reset(&mut self) {
        self.resets += 1;
        tracing::info!(resets = self.resets, "verification widget reset");
    }
}

/// Reads line commands from `input` until EOF or `quit`, printing feedback
/// to `out`. Command errors are reported and the loop continues.
pub fn run_session<S, V, R, W>(
    session: &mut Session<S, V>,
    input: R,
    out: &mut W,
) -> Result<()>
where
    S: SubmissionSink,
    V: VerificationWidget,
    R: BufRead,
    W: Write,
{
    writeln!(out, "KYC Form (type 'help' for commands)")?;
    for line in input.lines() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "Error: {}", err)?;
                continue;
            }
        };
        if command == ScriptCommand::Quit {
            break;
        }
        if let Err(err) = apply(session, command, out) {
            writeln!(out, "Error: {}", err)?;
        }
    }
    Ok(())
}

fn apply<S, V, W>(
    session: &mut Session<S, V>,
    command: ScriptCommand,
    out: &mut W,
) -> Result<()>
where
    S: SubmissionSink,
    V: VerificationWidget,
    W: Write,
{
    match command {
        ScriptCommand::Country(name) => {
            session.select_country(&name)?;
            match session.state().record().risk_tier() {
                Some(risk) => writeln!(out, "Risk Level: {}", risk)?,
                None => writeln!(out, "Country cleared")?,
            }
        }
        ScriptCommand::Deposit(input) => {
            session.enter_deposit(&input)?;
            print_inline(out, session.state().errors().deposit.as_deref())?;
        }
        ScriptCommand::Document(Some(path)) => {
            let candidate = document_from_path(&path)?;
            session.choose_document(candidate)?;
            match session.state().record().document() {
                Some(doc) => writeln!(out, "File selected: {}", doc.name)?,
                None => print_inline(out, session.state().errors().document.as_deref())?,
            }
        }
        ScriptCommand::Document(None) => session.clear_document()?,
        ScriptCommand::Verify(token) => {
            session.on_verification(token.as_deref())?;
            if session.state().record().verification_passed() {
                writeln!(out, "Verification passed")?;
            } else {
                writeln!(out, "Verification not completed")?;
            }
        }
        ScriptCommand::Submit => match session.submit()? {
            SubmitOutcome::Confirming => print_state(out, session.state())?,
            SubmitOutcome::Blocked(failures) => {
                for failure in failures {
                    if failure.is_notice() {
                        writeln!(out, "Notice: {}", failure)?;
                    } else {
                        writeln!(out, "  ! {}", failure)?;
                    }
                }
            }
        },
        ScriptCommand::Back => {
            session.back()?;
            print_state(out, session.state())?;
        }
        ScriptCommand::Confirm => {
            session.confirm()?;
            writeln!(out, "Form submitted successfully!")?;
        }
        ScriptCommand::Status => {
            print_state(out, session.state())?;
            if session.phase() == SessionPhase::Editing {
                let ready = if session.can_submit() { "ready" } else { "incomplete" };
                writeln!(out, "Review Information: {}", ready)?;
            }
        }
        ScriptCommand::Help => writeln!(out, "{}", HELP)?,
        ScriptCommand::Quit => {}
    }
    Ok(())
}

fn print_inline<W: Write>(out: &mut W, error: Option<&str>) -> std::io::Result<()> {
    match error {
        Some(message) => writeln!(out, "  ! {}", message),
        None => writeln!(out, "  ok"),
    }
}

fn print_state<W: Write>(out: &mut W, state: &FormState) -> std::io::Result<()> {
    if let Some(submission) = state.submission() {
        return writeln!(out, "{}", ConfirmationSummary::from(submission));
    }

    let record = state.record();
    let errors = state.errors();
    writeln!(out, "Country: {}", record.country().unwrap_or("-"))?;
    if let Some(risk) = record.risk_tier() {
        writeln!(out, "Risk Level: {}", risk)?;
    }
    match record.deposit_amount() {
        Some(amount) => writeln!(out, "Deposit Amount: {}", format_usd(amount))?,
        None => writeln!(out, "Deposit Amount: {}", record.deposit_input())?,
    }
    if let Some(message) = &errors.deposit {
        writeln!(out, "  ! {}", message)?;
    }
    match record.document() {
        Some(doc) => writeln!(out, "Proof of Address: {}", doc.name)?,
        None => writeln!(out, "Proof of Address: -")?,
    }
    if let Some(message) = &errors.document {
        writeln!(out, "  ! {}", message)?;
    }
    let verification = if record.verification_passed() {
        "Completed"
    } else {
        "Pending"
    };
    writeln!(out, "CAPTCHA Verification: {}", verification)
}
