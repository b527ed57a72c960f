//! Foreign operator modules for the Ergo translator.
//!
//! - `datetime` - parsing, calendar fields, durations and comparisons

pub mod datetime;

use ergo_core::RegistrationError;
use ergo_registry::ForeignModule;

/// All modules installed by `Translator::with_default_modules`.
pub fn default_modules() -> Result<Vec<ForeignModule>, RegistrationError> {
    Ok(vec![datetime::module()?])
}
