//! KYC intake form: country risk lookup, field validation and the
//! edit → confirm → submit flow.

pub mod cli;
pub mod config;
pub mod format;
pub mod logging;
pub mod record;
pub mod reference;
pub mod session;
pub mod ui;
pub mod validation;
