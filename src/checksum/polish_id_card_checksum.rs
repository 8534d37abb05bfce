use crate::checksum::{code_sum, Checksum, ChecksumComputation};

pub struct PolishIdCardChecksum;

const MULTIPLIERS: &[u32] = &[7, 3, 1, 9, 7, 3, 1, 7, 3];
const LETTER_COUNT: usize = 3;

// The series letters count as A = 10 ... Z = 35. There is no separate check
// digit to extract: the fourth position carries weight 9 (≡ −1 mod 10), so the
// whole number sums to a multiple of 10 exactly when the fourth digit equals the
// classic check digit computed from the other positions.
impl Checksum for PolishIdCardChecksum {
    fn compute(&self, canonical: &str) -> Option<ChecksumComputation> {
        let sum = code_sum(canonical, LETTER_COUNT, MULTIPLIERS)?;
        Some(ChecksumComputation {
            weighted_sum: Some(sum),
            computed: sum % 10,
            expected: 0,
        })
    }
}
