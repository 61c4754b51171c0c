//! Outcome classification and output.
//!
//! The "none" and "multiple" diagnostics are advisory: they are written
//! alongside whatever validated payloads follow and never change the exit
//! status.

use std::fmt;
use std::io::Write;

use crate::validate::{ValidatedPayload, Validation};

/// Diagnostic line for an image without any QR symbol
pub const NONE_DETECTED_MESSAGE: &str = "no QR code detected, data may be corrupted";

/// Diagnostic line for an image with more than one QR symbol
pub const MULTIPLE_DETECTED_MESSAGE: &str = "multiple QR codes detected, data may be corrupted";

/// Terminal classification of a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No symbols were found
    NoneDetected,
    /// Two or more symbols were found
    MultipleDetected,
    /// A symbol carried a valid payload
    Decoded(ValidatedPayload),
    /// Exactly one symbol was found and it failed validation
    NoValidPayload,
}

impl Outcome {
    /// Diagnostic text, for the outcomes that have one
    pub fn diagnostic(&self) -> Option<&'static str> {
        match self {
            Outcome::NoneDetected => Some(NONE_DETECTED_MESSAGE),
            Outcome::MultipleDetected => Some(MULTIPLE_DETECTED_MESSAGE),
            Outcome::Decoded(_) | Outcome::NoValidPayload => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NoneDetected => f.write_str(NONE_DETECTED_MESSAGE),
            Outcome::MultipleDetected => f.write_str(MULTIPLE_DETECTED_MESSAGE),
            Outcome::Decoded(payload) => f.write_str(payload.text()),
            Outcome::NoValidPayload => Ok(()),
        }
    }
}

/// Derive the ordered outcomes from the validated symbols
///
/// | symbols | outcomes |
/// |---|---|
/// | 0 | `NoneDetected` |
/// | 1, invalid | `NoValidPayload` |
/// | 1, valid | `Decoded` |
/// | 2+ | `MultipleDetected`, then one `Decoded` per valid symbol |
pub fn classify(validations: &[Validation]) -> Vec<Outcome> {
    let decoded = validations
        .iter()
        .filter_map(Validation::payload)
        .cloned()
        .map(Outcome::Decoded);

    match validations.len() {
        0 => vec![Outcome::NoneDetected],
        1 => match &validations[0] {
            Validation::Validated(payload) => vec![Outcome::Decoded(payload.clone())],
            Validation::Invalid { .. } => vec![Outcome::NoValidPayload],
        },
        _ => std::iter::once(Outcome::MultipleDetected).chain(decoded).collect(),
    }
}

/// Writes outcomes to an output stream
///
/// Diagnostics are written as lines, payloads as their decoded text with no
/// separator, so every outcome is written exactly as it displays. The stream is flushed after every write so partial output
/// survives a later failure.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    /// Wrap an output stream
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write a single outcome
    pub fn write_outcome(&mut self, outcome: &Outcome) -> std::io::Result<()> {
        match outcome {
            Outcome::NoneDetected | Outcome::MultipleDetected => {
                writeln!(self.out, "{}", outcome)?;
            }
            Outcome::Decoded(_) => write!(self.out, "{}", outcome)?,
            Outcome::NoValidPayload => return Ok(()),
        }
        self.out.flush()
    }

    /// Write outcomes in order
    pub fn emit(&mut self, outcomes: &[Outcome]) -> std::io::Result<()> {
        for outcome in outcomes {
            self.write_outcome(outcome)?;
        }
        Ok(())
    }

    /// Recover the wrapped stream
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Render outcomes to a byte buffer exactly as [`Reporter`] would write them
pub fn render(outcomes: &[Outcome]) -> Vec<u8> {
    let mut reporter = Reporter::new(Vec::new());
    // Writing to a Vec cannot fail.
    let _ = reporter.emit(outcomes);
    reporter.into_inner()
}
