use crate::error::InvalidRequest;
use crate::kind::IdentifierKind;
use crate::observability::metrics::record_invalid_request;
use crate::validator::{validate, Validation};
use crate::verdict::Verdict;
use lazy_static::lazy_static;
use std::collections::HashMap;
use strum::IntoEnumIterator;

lazy_static! {
    static ref GLOBAL_REGISTRY: RuleRegistry = RuleRegistry::new();
}

const INITIAL_REVISIONS: &[(&str, &str)] = &[("1.0", "Start Revision")];

/// Packaging metadata of a rule. None of it is used to compute a verdict.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleDescription {
    pub method_description: &'static str,
    pub field_description: &'static str,
    pub revisions: &'static [(&'static str, &'static str)],
    pub ok_message: &'static str,
    pub failed_message: &'static str,
}

impl RuleDescription {
    fn for_kind(kind: IdentifierKind) -> Self {
        let (method_description, field_description, ok_message, failed_message) = match kind {
            IdentifierKind::IdNumber => (
                "Verification of the correctness of the Polish ID card number",
                "ID number field",
                "Given ID number is correct",
                "Given ID number is incorrect",
            ),
            IdentifierKind::Pesel => (
                "Verification of the correctness of the PESEL number",
                "PESEL field value",
                "Given PESEL is correct!",
                "Given PESEL is incorrect!",
            ),
            IdentifierKind::Nip => (
                "Verification of the correctness of the Polish VAT ID (NIP)",
                "NIP Number field value",
                "Given NIP Number is correct!",
                "Given NIP Number is incorrect!",
            ),
            IdentifierKind::Nrb => (
                "Verification of the correctness of Polish Bank Account Number (NRB)",
                "NRB field value",
                "Given NRB is correct!",
                "Given NRB is incorrect!",
            ),
            IdentifierKind::Regon => (
                "Verification of correctness of Polish Business Identifier (REGON)",
                "REGON number field value",
                "Given REGON number is correct!",
                "Given REGON number is incorrect!",
            ),
            IdentifierKind::Passport => (
                "Verification of correctness of Polish passport number",
                "Polish passport number field value",
                "Given Polish passport number is correct!",
                "Given Polish passport number is incorrect!",
            ),
        };
        Self {
            method_description,
            field_description,
            revisions: INITIAL_REVISIONS,
            ok_message,
            failed_message,
        }
    }

    pub fn message(&self, verdict: Verdict) -> &'static str {
        match verdict {
            Verdict::Ok => self.ok_message,
            Verdict::Failed => self.failed_message,
        }
    }
}

/// A validation rule as exposed to the host: one identifier kind, the field it
/// reads and its description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleValidator {
    kind: IdentifierKind,
    description: RuleDescription,
}

impl RuleValidator {
    pub fn new(kind: IdentifierKind) -> Self {
        Self {
            kind,
            description: RuleDescription::for_kind(kind),
        }
    }

    pub fn kind(&self) -> IdentifierKind {
        self.kind
    }

    pub fn rule_name(&self) -> &'static str {
        self.kind.rule_name()
    }

    pub fn field_id(&self) -> &'static str {
        self.kind.field_id()
    }

    pub fn description(&self) -> &RuleDescription {
        &self.description
    }

    pub fn validate(&self, raw: &str) -> Validation {
        validate(self.kind, raw)
    }

    /// Looks up the rule's field in the host's field map and validates its value.
    ///
    /// An absent field, or a field without a value, is a contract violation and
    /// not an incorrect identifier.
    pub fn execute(
        &self,
        fields: &HashMap<String, Option<String>>,
    ) -> Result<Validation, InvalidRequest> {
        match fields.get(self.field_id()) {
            Some(Some(raw)) => Ok(self.validate(raw)),
            Some(None) | None => {
                let error = InvalidRequest::MissingField(self.field_id().to_string());
                record_invalid_request(&error);
                Err(error)
            }
        }
    }
}

/// Read-only mapping from rule names to validators, in registration order.
pub struct RuleRegistry {
    rules: Vec<RuleValidator>,
}

impl RuleRegistry {
    fn new() -> Self {
        Self {
            rules: IdentifierKind::iter().map(RuleValidator::new).collect(),
        }
    }

    /// The process-wide registry, built on first use.
    pub fn global() -> &'static RuleRegistry {
        &GLOBAL_REGISTRY
    }

    pub fn get(&self, rule_name: &str) -> Option<&RuleValidator> {
        self.rules
            .iter()
            .find(|rule| rule.rule_name() == rule_name)
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.rule_name())
    }

    pub fn validators(&self) -> impl Iterator<Item = &RuleValidator> {
        self.rules.iter()
    }

    pub fn validate(&self, rule_name: &str, raw: &str) -> Result<Validation, InvalidRequest> {
        match self.get(rule_name) {
            Some(rule) => Ok(rule.validate(raw)),
            None => {
                let error = InvalidRequest::UnknownRule(rule_name.to_string());
                record_invalid_request(&error);
                Err(error)
            }
        }
    }
}
