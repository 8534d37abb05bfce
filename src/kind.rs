use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The Polish identifiers that can be validated.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    AsRefStr,
    EnumIter,
    EnumString,
)]
pub enum IdentifierKind {
    /// National ID card number (dowód osobisty), e.g. `ABA 300000`
    #[serde(rename = "IDNumber")]
    #[strum(serialize = "IDNumber", ascii_case_insensitive)]
    IdNumber,
    /// Personal identification number
    #[serde(rename = "PESEL")]
    #[strum(serialize = "PESEL", ascii_case_insensitive)]
    Pesel,
    /// Tax identifier
    #[serde(rename = "NIP")]
    #[strum(serialize = "NIP", ascii_case_insensitive)]
    Nip,
    /// Bank account number, the domestic form of a Polish IBAN
    #[serde(rename = "NRB")]
    #[strum(serialize = "NRB", ascii_case_insensitive)]
    Nrb,
    /// Business registry number, 9 or 14 digits
    #[serde(rename = "REGON")]
    #[strum(serialize = "REGON", ascii_case_insensitive)]
    Regon,
    #[strum(ascii_case_insensitive)]
    Passport,
}

impl IdentifierKind {
    /// Name of the rule under which the host registers this validator.
    pub fn rule_name(&self) -> &'static str {
        match self {
            IdentifierKind::IdNumber => "CheckPolishID",
            IdentifierKind::Pesel => "CheckPESEL",
            IdentifierKind::Nip => "CheckNIP",
            IdentifierKind::Nrb => "CheckPolishBAN",
            IdentifierKind::Regon => "CheckREGON",
            IdentifierKind::Passport => "CheckPolishPassport",
        }
    }

    /// Name of the host field holding the raw value.
    pub fn field_id(&self) -> &'static str {
        match self {
            IdentifierKind::IdNumber => "PolishIDNumber",
            IdentifierKind::Pesel => "PESEL",
            IdentifierKind::Nip => "NIP",
            IdentifierKind::Nrb => "NRB",
            IdentifierKind::Regon => "REGON",
            IdentifierKind::Passport => "PassportNumber",
        }
    }
}
