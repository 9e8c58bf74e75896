//! Command-line front end.

mod document;
mod run;
mod script;

use std::fs::OpenOptions;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::{Config, Policy};
use crate::reference::regions;
use crate::session::{JsonSink, Session};
use crate::validation::{validate_deposit, validate_document};

pub use document::{document_from_path, mime_for_path};
pub use run::{run_session, PromptWidget};
pub use script::{parse_line, ScriptCommand, ScriptError};

#[derive(Parser, Debug)]
#[command(name = "kyc-intake", version, about = "KYC intake form")]
pub struct Cli {
    #[arg(long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List countries and their risk tiers by region
    Countries,
    /// Validate a deposit amount
    CheckDeposit { amount: String },
    /// Validate a proof-of-address file
    CheckDocument { path: PathBuf },
    /// Fill in the form interactively (default)
    Run,
}

impl Command {
    /// Subcommand name without its arguments.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Countries => "countries",
            Self::CheckDeposit { .. } => "check-deposit",
            Self::CheckDocument { .. } => "check-document",
            Self::Run => "run",
        }
    }
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        Ok(config)
    }
}

pub fn execute<R: BufRead, W: Write>(
    command: Command,
    config: &Config,
    input: R,
    out: &mut W,
) -> Result<ExitCode> {
    let policy = Policy::from(config);
    match command {
        Command::Countries => {
            for region in regions() {
                writeln!(out, "{}", region.name)?;
                for country in region.countries {
                    writeln!(out, "  {} ({})", country.name, country.risk)?;
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::CheckDeposit { amount } => match validate_deposit(&amount, &policy.deposit) {
            Ok(_) => {
                writeln!(out, "ok")?;
                Ok(ExitCode::SUCCESS)
            }
            Err(err) => {
                writeln!(out, "{}", err)?;
                Ok(ExitCode::FAILURE)
            }
        },
        Command::CheckDocument { path } => {
            let candidate = document_from_path(&path)?;
            match validate_document(candidate, &policy.document) {
                Ok(doc) => {
                    writeln!(
                        out,
                        "ok: {} ({}, {} bytes)",
                        doc.name, doc.mime_type, doc.size_bytes
                    )?;
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => {
                    writeln!(out, "{}", err)?;
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Run => {
            let sink: Box<dyn Write> = match &config.submission.output {
                Some(path) => Box::new(
                    OpenOptions::new()
                        .create(true)
                        .append(true)
                        .open(path)
                        .with_context(|| {
                            format!("failed to open submission output '{}'", path.display())
                        })?,
                ),
                None => Box::new(std::io::stdout()),
            };
            let mut session = Session::new(policy, JsonSink::new(sink), PromptWidget::default());
            run_session(&mut session, input, out)?;
            if session.sink().failures() > 0 {
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
