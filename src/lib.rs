// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod error;
mod format;
mod kind;
mod normalization;
mod observability;
mod registry;
mod trace;
mod validator;
mod verdict;

// This is the public API of the library
pub use error::InvalidRequest;
pub use kind::IdentifierKind;
pub use observability::labels::Labels;
pub use registry::{RuleDescription, RuleRegistry, RuleValidator};
pub use trace::Trace;
pub use validator::{validate, validate_request, Validation, ValidationRequest, ValidationResult};
pub use verdict::Verdict;

#[cfg(any(feature = "testing", feature = "bench"))]
pub use crate::{
    checksum::{
        check_digit_valid, Checksum, ChecksumComputation, NrbChecksum, PeselChecksum,
        PolishIdCardChecksum, PolishNipChecksum, PolishPassportChecksum, RegonChecksum,
    },
    error::FormatViolation,
    format::{check_format, matches},
    normalization::normalize,
    verdict::to_verdict,
};
