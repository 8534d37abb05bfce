use crate::checksum::{digit_sum_and_check_digit, Checksum, ChecksumComputation};

pub struct RegonChecksum;

const SHORT_WEIGHTS: &[u32] = &[8, 9, 2, 3, 4, 5, 6, 7];
// The 14 digit form embeds a 9 digit REGON, the fifth weight is 0 on purpose.
const LONG_WEIGHTS: &[u32] = &[2, 4, 8, 5, 0, 9, 7, 3, 6, 1, 2, 4, 8];

impl Checksum for RegonChecksum {
    fn compute(&self, canonical: &str) -> Option<ChecksumComputation> {
        let weights = match canonical.len() {
            9 => SHORT_WEIGHTS,
            14 => LONG_WEIGHTS,
            _ => return None,
        };
        let (sum, actual_check_digit) = digit_sum_and_check_digit(canonical, weights)?;

        Some(ChecksumComputation {
            weighted_sum: Some(sum),
            computed: sum % 11,
            expected: actual_check_digit,
        })
    }
}
