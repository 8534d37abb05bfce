use crate::checksum::Checksum;
use crate::error::InvalidRequest;
use crate::format::check_format;
use crate::kind::IdentifierKind;
use crate::normalization::normalize;
use crate::observability::labels::Labels;
use crate::observability::metrics::{record_invalid_request, ValidationMetrics};
use crate::trace::Trace;
use crate::verdict::{to_verdict, Verdict};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Outcome of a single validation call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validation {
    pub verdict: Verdict,
    pub trace: Trace,
}

impl Validation {
    pub fn is_ok(&self) -> bool {
        self.verdict.is_ok()
    }
}

/// Validates a raw identifier of the given kind.
///
/// The value is normalized, its format is checked and, only when the format is
/// correct, its checksum is verified. Malformed input never returns an error, it
/// simply yields [Verdict::Failed] with the reason recorded in the trace.
pub fn validate(kind: IdentifierKind, raw: &str) -> Validation {
    let metrics = ValidationMetrics::new(&Labels::for_kind(kind));
    let mut trace = Trace::new();
    trace.push(format_args!("{kind} verification started, tested value is '{raw}'"));

    let canonical = normalize(raw, kind);
    trace.push(format_args!("The {kind} after cleaning is '{canonical}'"));

    let format_ok = match check_format(raw, &canonical, kind) {
        Ok(()) => {
            trace.push(format_args!(
                "The {kind} has the correct format, starting checksum verification"
            ));
            true
        }
        Err(violation) => {
            trace.push(violation);
            false
        }
    };

    let checksum_ok = format_ok
        && match kind.compute(&canonical) {
            Some(computation) => {
                trace.push(computation);
                computation.is_valid()
            }
            None => {
                trace.push("The checksum could not be computed");
                false
            }
        };

    let verdict = to_verdict(format_ok, checksum_ok);
    match verdict {
        Verdict::Ok => trace.push(format_args!("{kind} is correct")),
        Verdict::Failed => trace.push(format_args!("{kind} is incorrect")),
    }
    metrics.record(verdict, !format_ok);

    Validation { verdict, trace }
}

/// A validation request as supplied by a host.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ValidationRequest {
    pub kind: String,
    #[serde(default)]
    pub raw_value: Option<String>,
}

impl ValidationRequest {
    pub fn new(kind: IdentifierKind, raw_value: impl Into<String>) -> Self {
        Self {
            kind: kind.to_string(),
            raw_value: Some(raw_value.into()),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub verdict: Verdict,
    pub trace: Vec<String>,
}

impl From<Validation> for ValidationResult {
    fn from(validation: Validation) -> Self {
        Self {
            verdict: validation.verdict,
            trace: validation.trace.into_entries(),
        }
    }
}

/// Validates a host request. Only a request that breaks the contract (unknown
/// kind, absent value) is an error; an incorrect identifier is a `Failed` result.
pub fn validate_request(request: &ValidationRequest) -> Result<ValidationResult, InvalidRequest> {
    let result = IdentifierKind::from_str(&request.kind)
        .map_err(|_| InvalidRequest::UnknownKind(request.kind.clone()))
        .and_then(|kind| match &request.raw_value {
            Some(raw_value) => Ok(validate(kind, raw_value).into()),
            None => Err(InvalidRequest::MissingField(kind.field_id().to_string())),
        });

    if let Err(error) = &result {
        record_invalid_request(error);
    }
    result
}
