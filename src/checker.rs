//! Requirement verification and console reporting.
//!
//! Evaluates a [`RequirementCollection`] and renders the outcome
//! through a [`Printer`]: a section title, one progress dot per
//! requirement, and a full-width status banner. Failures list every
//! unmet requirement with its wrapped error text.

use std::io::Write;

use tracing::{debug, info};

use crate::error::Result;
use crate::format::Printer;
use crate::requirement::RequirementCollection;

/// Verbosity at which a fully passing run is reported.
const REPORT_VERBOSITY: i32 = 2;

/// Evaluate every requirement and render a report through `printer`.
///
/// Returns `true` when all requirements are fulfilled. A passing run
/// renders only when the printer verbosity is at least
/// `REPORT_VERBOSITY`; a failing run raises the held verbosity first
/// so the report is always visible.
///
/// # Errors
///
/// Returns an error if writing to the output sink fails.
pub fn run<W: Write>(
    printer: &mut Printer<W>,
    requirements: &RequirementCollection,
) -> Result<bool> {
    let passed = requirements.evaluate();
    info!(total = requirements.len(), passed, "requirement check complete");

    if passed && printer.verbosity() < REPORT_VERBOSITY {
        return Ok(true);
    }
    if !passed && printer.verbosity() < REPORT_VERBOSITY {
        printer.set_verbosity(REPORT_VERBOSITY);
    }

    let width = printer.width();
    printer.title("Environment requirements", REPORT_VERBOSITY, None)?;
    printer.printvln(
        &format!("> Terminal width: {width} columns"),
        REPORT_VERBOSITY,
        None,
    )?;
    printer.printvln("> Checking requirements:", REPORT_VERBOSITY, None)?;

    let mut failures = Vec::new();
    for requirement in requirements {
        if requirement.is_fulfilled() {
            printer.printv(".", REPORT_VERBOSITY, Some("green"))?;
        } else {
            printer.printv("E", REPORT_VERBOSITY, Some("red"))?;
            if let Some(message) = printer.requirement_error_message(requirement) {
                failures.push(message);
            }
        }
    }
    printer.printvln("", REPORT_VERBOSITY, None)?;

    if failures.is_empty() {
        printer.block(
            "OK",
            "Your environment is ready.",
            REPORT_VERBOSITY,
            Some("success"),
        )?;
    } else {
        debug!(failures = failures.len(), "rendering failure details");
        printer.block(
            "ERROR",
            "Your environment is not ready.",
            REPORT_VERBOSITY,
            Some("error"),
        )?;
        printer.title(
            "Fix the following mandatory requirements",
            REPORT_VERBOSITY,
            Some("red"),
        )?;
        for message in &failures {
            printer.printv(&format!(" * {message}"), REPORT_VERBOSITY, Some("red"))?;
        }
    }
    printer.printvln("", REPORT_VERBOSITY, None)?;

    Ok(passed)
}
