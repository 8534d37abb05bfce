mod nrb_checksum;
mod pesel_checksum;
mod polish_id_card_checksum;
mod polish_nip_checksum;
mod polish_passport_checksum;
mod regon_checksum;

pub use crate::checksum::nrb_checksum::NrbChecksum;
pub use crate::checksum::pesel_checksum::PeselChecksum;
pub use crate::checksum::polish_id_card_checksum::PolishIdCardChecksum;
pub use crate::checksum::polish_nip_checksum::PolishNipChecksum;
pub use crate::checksum::polish_passport_checksum::PolishPassportChecksum;
pub use crate::checksum::regon_checksum::RegonChecksum;

use crate::kind::IdentifierKind;
use crate::normalization::char_code;
use std::fmt;

/// Intermediate values of a checksum computation, kept for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChecksumComputation {
    /// Weighted sum of the checksum-bearing positions. NRB has none.
    pub weighted_sum: Option<u32>,
    /// Check value derived from the identifier
    pub computed: u32,
    /// Check value the identifier needs in order to be valid, either declared
    /// by its last digit or fixed by the scheme
    pub expected: u32,
}

impl ChecksumComputation {
    pub fn is_valid(&self) -> bool {
        self.computed == self.expected
    }
}

impl fmt::Display for ChecksumComputation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(sum) = self.weighted_sum {
            write!(f, "The sum of the products is {sum}, ")?;
        }
        write!(
            f,
            "the calculated check value is {}, the expected check value is {}",
            self.computed, self.expected
        )
    }
}

pub trait Checksum: Send + Sync {
    /// Returns `None` when the canonical value does not have the shape the scheme
    /// needs. This never panics, whatever the input.
    fn compute(&self, canonical: &str) -> Option<ChecksumComputation>;

    fn is_valid_checksum(&self, canonical: &str) -> bool {
        self.compute(canonical)
            .map(|computation| computation.is_valid())
            .unwrap_or(false)
    }
}

pub fn check_digit_valid(canonical: &str, kind: IdentifierKind) -> bool {
    kind.is_valid_checksum(canonical)
}

impl Checksum for IdentifierKind {
    fn compute(&self, canonical: &str) -> Option<ChecksumComputation> {
        match self {
            IdentifierKind::IdNumber => PolishIdCardChecksum.compute(canonical),
            IdentifierKind::Pesel => PeselChecksum.compute(canonical),
            IdentifierKind::Nip => PolishNipChecksum.compute(canonical),
            IdentifierKind::Nrb => NrbChecksum.compute(canonical),
            IdentifierKind::Regon => RegonChecksum.compute(canonical),
            IdentifierKind::Passport => PolishPassportChecksum.compute(canonical),
        }
    }
}

/// Weighted sum over exactly `weights.len()` characters, the first `letter_count`
/// of which must be ASCII letters and the rest digits.
fn code_sum(canonical: &str, letter_count: usize, weights: &[u32]) -> Option<u32> {
    let mut chars = canonical.chars();
    let mut sum = 0;
    for (i, weight) in weights.iter().enumerate() {
        let c = chars.next()?;
        let code = if i < letter_count {
            if !c.is_ascii_alphabetic() {
                return None;
            }
            char_code(c)?
        } else {
            c.to_digit(10)?
        };
        sum += code * weight;
    }
    if chars.next().is_some() {
        return None;
    }
    Some(sum)
}

/// Weighted sum of the leading digits plus the trailing check digit. The input
/// must consist of exactly `weights.len() + 1` digits.
fn digit_sum_and_check_digit(canonical: &str, weights: &[u32]) -> Option<(u32, u32)> {
    let mut digits = canonical.chars().map(|c| c.to_digit(10));
    let mut sum = 0;
    for weight in weights {
        sum += digits.next()?? * weight;
    }
    let check_digit = digits.next()??;
    if digits.next().is_some() {
        return None;
    }
    Some((sum, check_digit))
}
