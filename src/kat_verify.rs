// In-process KAT verification: each vector check returns a bool, the report
// folds them with AND. Mirrors what the emitted harness computes.

use tracing::warn;

use crate::kat_vector::TestVector;
use crate::reference_cipher::BlockCipher256;

/// Runs one vector through the IUT and compares the block byte by byte.
pub fn check_vector<C: BlockCipher256 + ?Sized>(iut: &C, v: &TestVector) -> bool {
    let mut state = v.plaintext;
    iut.encrypt_block(&v.key, &mut state);
    state.iter().zip(v.ciphertext.iter()).all(|(a, b)| a == b)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyReport {
    pub total: u64,
    /// 1-based positions of failing vectors, in run order
    pub failed: Vec<u64>,
    all_pass: bool,
}

impl VerifyReport {
    pub fn new() -> Self {
        Self { total: 0, failed: Vec::new(), all_pass: true }
    }

    pub fn record(&mut self, pass: bool) {
        self.total += 1;
        self.all_pass &= pass;
        if !pass {
            self.failed.push(self.total);
        }
    }

    pub fn all_pass(&self) -> bool {
        self.all_pass
    }
}

impl Default for VerifyReport {
    fn default() -> Self {
        Self::new()
    }
}

pub fn verify_vectors<'a, C, I>(iut: &C, vectors: I) -> VerifyReport
where
    C: BlockCipher256 + ?Sized,
    I: IntoIterator<Item = &'a TestVector>,
{
    let mut report = VerifyReport::new();
    for v in vectors {
        let pass = check_vector(iut, v);
        if !pass {
            warn!(index = report.total + 1, key = %hex::encode(v.key), "vector failed");
        }
        report.record(pass);
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference_cipher::{encrypt_copy, ReferenceAes256};

    fn vector(seed: u8) -> TestVector {
        let key = [seed; 32];
        let plaintext = [seed.wrapping_mul(3); 16];
        TestVector { key, plaintext, ciphertext: encrypt_copy(&ReferenceAes256, &key, &plaintext) }
    }

    #[test]
    fn reference_passes_its_own_vectors() {
        let vs: Vec<_> = (0..8).map(vector).collect();
        let report = verify_vectors(&ReferenceAes256, &vs);
        assert_eq!(report.total, 8);
        assert!(report.all_pass());
        assert!(report.failed.is_empty());
    }

    #[test]
    fn broken_iut_is_flagged_per_vector() {
        let vs: Vec<_> = (0..4).map(vector).collect();
        // flips one bit only when the key starts with 2
        let broken = |k: &[u8; 32], b: &mut [u8; 16]| {
            ReferenceAes256.encrypt_block(k, b);
            if k[0] == 2 {
                b[15] ^= 1;
            }
        };
        let report = verify_vectors(&broken, &vs);
        assert!(!report.all_pass());
        assert_eq!(report.failed, vec![3]);
    }

    #[test]
    fn empty_run_passes() {
        let none: [TestVector; 0] = [];
        let report = verify_vectors(&ReferenceAes256, &none);
        assert!(report.all_pass());
        assert_eq!(report.total, 0);
    }
}
