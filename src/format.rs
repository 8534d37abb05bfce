use crate::error::FormatViolation;
use crate::kind::IdentifierKind;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Accepted raw shapes, checked before separators and prefixes are removed.
    static ref ID_NUMBER_SHAPE: Regex = Regex::new(r"^[A-Za-z]{3}\s?[0-9]{6}$").unwrap();
    static ref NIP_SHAPE: Regex = Regex::new(
        r"^(?:[Pp][Ll] ?)?(?:[0-9]{10}|[0-9]{3}-[0-9]{3}-[0-9]{2}-[0-9]{2}|[0-9]{3} [0-9]{3} [0-9]{2} [0-9]{2})$"
    )
    .unwrap();
    static ref NRB_SHAPE: Regex =
        Regex::new(r"^(?:[Pp][Ll])?(?:[0-9]{2}(?: [0-9]{4}){6}|[0-9]{26})$").unwrap();

    // Structure of the canonical form.
    static ref ID_NUMBER_STRUCTURE: Regex = Regex::new(r"^[A-Z]{3}[0-9]{6}$").unwrap();
    static ref PESEL_STRUCTURE: Regex = Regex::new(r"^[0-9]{11}$").unwrap();
    static ref NIP_STRUCTURE: Regex = Regex::new(r"^[0-9]{10}$").unwrap();
    static ref NRB_STRUCTURE: Regex = Regex::new(r"^PL[0-9]{26}$").unwrap();
    static ref REGON_STRUCTURE: Regex = Regex::new(r"^(?:[0-9]{9}|[0-9]{14})$").unwrap();
    static ref PASSPORT_STRUCTURE: Regex = Regex::new(r"^[A-Z]{2}[0-9]{7}$").unwrap();
}

struct FormatRule {
    name: &'static str,
    raw_shape: Option<&'static Regex>,
    lengths: &'static [usize],
    structure: &'static Regex,
    structure_description: &'static str,
}

fn format_rule(kind: IdentifierKind) -> FormatRule {
    match kind {
        IdentifierKind::IdNumber => FormatRule {
            name: "ID number",
            raw_shape: Some(&*ID_NUMBER_SHAPE),
            lengths: &[9],
            structure: &ID_NUMBER_STRUCTURE,
            structure_description: "3 letters followed by 6 digits",
        },
        IdentifierKind::Pesel => FormatRule {
            name: "PESEL",
            raw_shape: None,
            lengths: &[11],
            structure: &PESEL_STRUCTURE,
            structure_description: "11 digits",
        },
        IdentifierKind::Nip => FormatRule {
            name: "NIP",
            raw_shape: Some(&*NIP_SHAPE),
            lengths: &[10],
            structure: &NIP_STRUCTURE,
            structure_description: "10 digits",
        },
        IdentifierKind::Nrb => FormatRule {
            name: "NRB",
            raw_shape: Some(&*NRB_SHAPE),
            lengths: &[28],
            structure: &NRB_STRUCTURE,
            structure_description: "PL followed by 26 digits",
        },
        IdentifierKind::Regon => FormatRule {
            name: "REGON",
            raw_shape: None,
            lengths: &[9, 14],
            structure: &REGON_STRUCTURE,
            structure_description: "9 or 14 digits",
        },
        IdentifierKind::Passport => FormatRule {
            name: "passport number",
            raw_shape: None,
            lengths: &[9],
            structure: &PASSPORT_STRUCTURE,
            structure_description: "2 letters followed by 7 digits",
        },
    }
}

/// Checks the raw shape, the canonical length and the canonical character
/// classes, in that order, and reports the first one that does not hold.
pub fn check_format(
    raw: &str,
    canonical: &str,
    kind: IdentifierKind,
) -> Result<(), FormatViolation> {
    let rule = format_rule(kind);

    if let Some(shape) = rule.raw_shape {
        if !shape.is_match(raw) {
            return Err(FormatViolation(format!(
                "The input {} has an incorrect format",
                rule.name
            )));
        }
    }

    let length = canonical.chars().count();
    if !rule.lengths.contains(&length) {
        let expected = rule
            .lengths
            .iter()
            .map(|l| l.to_string())
            .collect::<Vec<_>>()
            .join(" or ");
        return Err(FormatViolation(format!(
            "The {} has an incorrect length of {}. It should have {} characters",
            rule.name, length, expected
        )));
    }

    if !rule.structure.is_match(canonical) {
        return Err(FormatViolation(format!(
            "The {} has an incorrect value. It should consist of {}",
            rule.name, rule.structure_description
        )));
    }

    Ok(())
}

pub fn matches(raw: &str, canonical: &str, kind: IdentifierKind) -> bool {
    check_format(raw, canonical, kind).is_ok()
}
