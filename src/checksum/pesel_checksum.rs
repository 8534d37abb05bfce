use crate::checksum::{digit_sum_and_check_digit, Checksum, ChecksumComputation};

pub struct PeselChecksum;

const MULTIPLIERS: &[u32] = &[1, 3, 7, 9, 1, 3, 7, 9, 1, 3];

impl Checksum for PeselChecksum {
    fn compute(&self, canonical: &str) -> Option<ChecksumComputation> {
        // A×1 + B×3 + C×7 + D×9 + E×1 + F×3 + G×7 + H×9 + I×1 + J×3
        let (sum, actual_check_digit) = digit_sum_and_check_digit(canonical, MULTIPLIERS)?;

        // the check digit is the last digit of (10 − last digit of the sum)
        let expected_check_digit = (10 - (sum % 10)) % 10;

        Some(ChecksumComputation {
            weighted_sum: Some(sum),
            computed: expected_check_digit,
            expected: actual_check_digit,
        })
    }
}
