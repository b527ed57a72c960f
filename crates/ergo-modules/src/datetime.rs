//! Date/time runtime operators.
//!
//! The date/time library itself lives in the runtime. Here it is only named:
//! each operator becomes a closure over `Foreign(name)` so calls to it can be
//! resolved and carried through to the evaluator.

use ergo_core::RegistrationError;
use ergo_registry::{ForeignModule, ForeignTable};

/// Parsing and calendar field extraction; one argument each.
pub const UNARY_OPERATORS: &[&str] = &[
    "dateTime",
    "dateTimeSecond",
    "dateTimeMinute",
    "dateTimeHour",
    "dateTimeDay",
    "dateTimeWeek",
    "dateTimeMonth",
    "dateTimeQuarter",
    "dateTimeYear",
    "durationAmount",
];

/// Formatting, arithmetic and comparison; two arguments each.
pub const BINARY_OPERATORS: &[&str] = &[
    "dateTimeFormat",
    "dateTimeAdd",
    "dateTimeSubtract",
    "dateTimeDiff",
    "dateTimeIsBefore",
    "dateTimeIsAfter",
    "dateTimeIsSame",
    "duration",
];

/// Constants of the calendar.
pub const CONSTANTS: &[&str] = &["dateTimeMin", "dateTimeMax"];

/// The date/time module.
pub fn module() -> Result<ForeignModule, RegistrationError> {
    let mut table = ForeignTable::new();
    for name in UNARY_OPERATORS {
        table.register_unary(name)?;
    }
    for name in BINARY_OPERATORS {
        table.register_binary(name)?;
    }
    for name in CONSTANTS {
        table.register_constant(name)?;
    }
    Ok(ForeignModule::new("datetime", table))
}
