use crate::checksum::{digit_sum_and_check_digit, Checksum, ChecksumComputation};

pub struct PolishNipChecksum;

const CHECKSUM_WEIGHTS: &[u32] = &[6, 5, 7, 2, 3, 4, 5, 6, 7];

impl Checksum for PolishNipChecksum {
    fn compute(&self, canonical: &str) -> Option<ChecksumComputation> {
        let (sum, actual_checksum) = digit_sum_and_check_digit(canonical, CHECKSUM_WEIGHTS)?;

        // A remainder of 10 never matches a single digit, such numbers are never issued.
        Some(ChecksumComputation {
            weighted_sum: Some(sum),
            computed: sum % 11,
            expected: actual_checksum,
        })
    }
}
