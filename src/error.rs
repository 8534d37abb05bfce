use thiserror::Error;

/// The caller did not honour the validation contract.
///
/// This is distinct from an identifier that is present but incorrect, which is
/// reported as [crate::Verdict::Failed].
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum InvalidRequest {
    #[error("Unknown identifier kind: {0}")]
    UnknownKind(String),

    #[error("No validation rule registered under the name {0}")]
    UnknownRule(String),

    /// The field is absent, or present without a value
    #[error("Required field {0} has no value")]
    MissingField(String),
}

/// Reason why an identifier was rejected before its checksum was computed.
#[derive(Debug, PartialEq, Eq, Clone, Error)]
#[error("{0}")]
pub struct FormatViolation(pub String);
