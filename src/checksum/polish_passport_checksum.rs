use crate::checksum::{code_sum, Checksum, ChecksumComputation};

pub struct PolishPassportChecksum;

const MULTIPLIERS: &[u32] = &[7, 3, 9, 1, 7, 3, 1, 7, 3];
const LETTER_COUNT: usize = 2;

// Same scheme as the ID card: the first digit carries weight 9 and acts as the
// check digit, so a valid number sums to a multiple of 10.
impl Checksum for PolishPassportChecksum {
    fn compute(&self, canonical: &str) -> Option<ChecksumComputation> {
        let sum = code_sum(canonical, LETTER_COUNT, MULTIPLIERS)?;
        Some(ChecksumComputation {
            weighted_sum: Some(sum),
            computed: sum % 10,
            expected: 0,
        })
    }
}

#[cfg(test)]
mod test {
    use crate::checksum::*;

    #[test]
    fn test_valid_numbers() {
        let valid_ids = vec!["AB1234562", "ZS0000177", "EA1654321"];
        for id in valid_ids {
            assert!(PolishPassportChecksum.is_valid_checksum(id), "{id}");
        }
    }

    #[test]
    fn test_invalid_numbers() {
        let invalid_ids = vec![
            // wrong checksum
            "AB1234567",
            "EA7654321",
            // wrong shape
            "A11234562",
            "ABC234562",
            "AB123456",
            "AB12345620",
        ];
        for id in invalid_ids {
            assert!(!PolishPassportChecksum.is_valid_checksum(id), "{id}");
        }
    }

    #[test]
    fn letters_are_converted_to_codes() {
        // A = 10 and B = 11: 10×7 + 11×3 = 103, digits add 112
        let computation = PolishPassportChecksum.compute("AB1234567").unwrap();
        assert_eq!(computation.weighted_sum, Some(215));
        assert_eq!(computation.computed, 5);
        assert_eq!(computation.expected, 0);
    }

    #[test]
    fn detects_single_digit_substitutions() {
        let valid = "AB1234562";
        for position in 2..valid.len() {
            for replacement in '0'..='9' {
                let mut mutated: Vec<char> = valid.chars().collect();
                if mutated[position] == replacement {
                    continue;
                }
                mutated[position] = replacement;
                let mutated: String = mutated.into_iter().collect();
                assert!(!PolishPassportChecksum.is_valid_checksum(&mutated), "{mutated}");
            }
        }
    }
}
