use crate::checksum::{Checksum, ChecksumComputation};
use crate::normalization::COUNTRY_PREFIX;

pub struct NrbChecksum;

const NRB_LENGTH: usize = 28;
const ROTATED_PREFIX_LENGTH: usize = 4;
// "PL" as IBAN digits: P = 25, L = 21
const COUNTRY_CODE_DIGITS: &str = "2521";
const MODULUS: u32 = 97;

// https://en.wikipedia.org/wiki/International_Bank_Account_Number#Validating_the_IBAN
impl Checksum for NrbChecksum {
    fn compute(&self, canonical: &str) -> Option<ChecksumComputation> {
        if canonical.len() != NRB_LENGTH
            || !canonical.starts_with(COUNTRY_PREFIX)
            || !canonical[COUNTRY_PREFIX.len()..]
                .bytes()
                .all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let rotated = format!(
            "{}{}",
            &canonical[ROTATED_PREFIX_LENGTH..],
            &canonical[..ROTATED_PREFIX_LENGTH]
        )
        .replace(COUNTRY_PREFIX, COUNTRY_CODE_DIGITS);

        Some(ChecksumComputation {
            weighted_sum: None,
            computed: decimal_remainder(&rotated, MODULUS)?,
            expected: 1,
        })
    }
}

/// Remainder of the division of an arbitrarily long decimal number by `modulus`.
///
/// The number is folded digit by digit, so the intermediate value never exceeds
/// `modulus * 10`.
pub fn decimal_remainder(decimal: &str, modulus: u32) -> Option<u32> {
    if decimal.is_empty() {
        return None;
    }
    decimal.chars().try_fold(0u32, |remainder, c| {
        c.to_digit(10).map(|digit| (remainder * 10 + digit) % modulus)
    })
}

#[cfg(test)]
mod test {
    use crate::checksum::nrb_checksum::decimal_remainder;
    use crate::checksum::*;
    use iban::Iban;

    const VALID_NRBS: &[&str] = &[
        "PL61109010140000071219812874",
        "PL27114020040000300201355387",
    ];

    #[test]
    fn test_valid_nrbs() {
        for nrb in VALID_NRBS {
            assert!(NrbChecksum.is_valid_checksum(nrb), "{nrb}");
        }
    }

    #[test]
    fn test_invalid_nrbs() {
        let invalid_nrbs = vec![
            // wrong checksum
            "PL62109010140000071219812874",
            "PL61109010140000071219812875",
            // missing prefix, the canonical form always carries it
            "61109010140000071219812874",
            // wrong length
            "PL6110901014000007121981287",
            "PL611090101400000712198128740",
            // not digits
            "PL6110901014000007121981287X",
            "DE61109010140000071219812874",
        ];
        for nrb in invalid_nrbs {
            assert!(!NrbChecksum.is_valid_checksum(nrb), "{nrb}");
        }
    }

    #[test]
    fn rearranged_valid_number_leaves_remainder_one() {
        // 1090 1014 0000 0712 1981 2874 | 2521 61
        assert_eq!(
            decimal_remainder("109010140000071219812874252161", 97),
            Some(1)
        );
        let computation = NrbChecksum.compute(VALID_NRBS[0]).unwrap();
        assert_eq!(computation.weighted_sum, None);
        assert_eq!(computation.computed, 1);
    }

    #[test]
    fn remainder_matches_native_arithmetic() {
        for value in [0u64, 1, 96, 97, 98, 12_345_678_901_234, u64::MAX] {
            assert_eq!(
                decimal_remainder(&value.to_string(), 97),
                Some((value % 97) as u32)
            );
        }
        assert_eq!(decimal_remainder("", 97), None);
        assert_eq!(decimal_remainder("12a", 97), None);
    }

    #[test]
    fn agrees_with_iban_validation() {
        let candidates = [
            "PL61109010140000071219812874",
            "PL27114020040000300201355387",
            "PL62109010140000071219812874",
            "PL61109010140000071219812875",
            "PL00000000000000000000000000",
        ];
        for candidate in candidates {
            assert_eq!(
                NrbChecksum.is_valid_checksum(candidate),
                candidate.parse::<Iban>().is_ok(),
                "{candidate}"
            );
        }
    }

    #[test]
    fn detects_every_single_digit_substitution() {
        let valid = VALID_NRBS[0];
        for position in 2..valid.len() {
            for replacement in '0'..='9' {
                let mut mutated: Vec<char> = valid.chars().collect();
                if mutated[position] == replacement {
                    continue;
                }
                mutated[position] = replacement;
                let mutated: String = mutated.into_iter().collect();
                assert!(!NrbChecksum.is_valid_checksum(&mutated), "{mutated}");
            }
        }
    }
}
