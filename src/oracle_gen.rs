// Random oracle generator: draws key/plaintext from a CSPRNG, encrypts the
// single block with a trusted cipher and streams `key pt ct` hex records.

use std::io::Write;

use rand_core::{CryptoRng, RngCore};
use tracing::{debug, info};

use crate::error::Result;
use crate::kat_params::{BLOCKBYTES, DEFAULT_ORACLE_COUNT, KEYBYTES};
use crate::kat_vector::TestVector;
use crate::reference_cipher::BlockCipher256;

// Progress is traced every this many records
const PROGRESS_EVERY: u64 = 100_000;

#[derive(Clone, Debug)]
pub struct OracleConfig {
    pub count: u64,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self { count: DEFAULT_ORACLE_COUNT }
    }
}

/// Unbounded vector source; bound it with `.take(n)` or `write_oracle`.
pub struct OracleGenerator<R, C> {
    rng: R,
    cipher: C,
}

impl<R, C> OracleGenerator<R, C>
where
    R: RngCore + CryptoRng,
    C: BlockCipher256,
{
    pub fn new(rng: R, cipher: C) -> Self {
        Self { rng, cipher }
    }

    /// Draws one vector. Randomness failures surface before anything is produced.
    pub fn next_vector(&mut self) -> Result<TestVector> {
        let mut key = [0u8; KEYBYTES];
        let mut plaintext = [0u8; BLOCKBYTES];
        self.rng.try_fill_bytes(&mut key)?;
        self.rng.try_fill_bytes(&mut plaintext)?;

        let mut ciphertext = plaintext;
        self.cipher.encrypt_block(&key, &mut ciphertext);

        Ok(TestVector { key, plaintext, ciphertext })
    }
}

impl<R, C> Iterator for OracleGenerator<R, C>
where
    R: RngCore + CryptoRng,
    C: BlockCipher256,
{
    type Item = Result<TestVector>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_vector())
    }
}

/// Streams `count` records to `out`, one line each. Every line is formatted in
/// full and handed to a single `write_all`, so a failure never leaves half a
/// record behind.
pub fn write_oracle<W, R, C>(out: &mut W, gen: &mut OracleGenerator<R, C>, count: u64) -> Result<u64>
where
    W: Write,
    R: RngCore + CryptoRng,
    C: BlockCipher256,
{
    let mut line = String::with_capacity(2 * (KEYBYTES + 2 * BLOCKBYTES) + 3);
    for i in 0..count {
        let v = gen.next_vector()?;

        line.clear();
        line.push_str(&v.to_record());
        line.push('\n');
        out.write_all(line.as_bytes())?;

        if (i + 1) % PROGRESS_EVERY == 0 {
            debug!(written = i + 1, total = count, "oracle progress");
        }
    }
    out.flush()?;

    info!(records = count, "oracle run complete");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KatError;
    use crate::kat_vector::parse_record;
    use crate::reference_cipher::{encrypt_copy, ReferenceAes256};
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;
    use std::num::NonZeroU32;

    fn is_lower_hex(s: &str, len: usize) -> bool {
        s.len() == len && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    #[test]
    fn three_records_have_oracle_shape() {
        let mut gen = OracleGenerator::new(ChaCha20Rng::seed_from_u64(1), ReferenceAes256);
        let mut out = Vec::new();
        assert_eq!(write_oracle(&mut out, &mut gen, 3).unwrap(), 3);

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in lines {
            let f: Vec<&str> = line.split(' ').collect();
            assert_eq!(f.len(), 3);
            assert!(is_lower_hex(f[0], 64));
            assert!(is_lower_hex(f[1], 32));
            assert!(is_lower_hex(f[2], 32));
        }
    }

    #[test]
    fn ciphertext_matches_reference() {
        let gen = OracleGenerator::new(ChaCha20Rng::seed_from_u64(7), ReferenceAes256);
        for v in gen.take(50) {
            let v = v.unwrap();
            assert_eq!(encrypt_copy(&ReferenceAes256, &v.key, &v.plaintext), v.ciphertext);
        }
    }

    #[test]
    fn written_records_replay_against_reference() {
        let mut gen = OracleGenerator::new(ChaCha20Rng::seed_from_u64(3), ReferenceAes256);
        let mut out = Vec::new();
        write_oracle(&mut out, &mut gen, 20).unwrap();

        for (i, line) in String::from_utf8(out).unwrap().lines().enumerate() {
            let v = parse_record(i + 1, line).unwrap();
            assert_eq!(encrypt_copy(&ReferenceAes256, &v.key, &v.plaintext), v.ciphertext);
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let a: Vec<_> = OracleGenerator::new(ChaCha20Rng::seed_from_u64(42), ReferenceAes256)
            .take(5)
            .map(|v| v.unwrap())
            .collect();
        let b: Vec<_> = OracleGenerator::new(ChaCha20Rng::seed_from_u64(42), ReferenceAes256)
            .take(5)
            .map(|v| v.unwrap())
            .collect();
        assert_eq!(a, b);
        assert_ne!(a[0].key, a[1].key);
    }

    struct DeadRng;

    impl RngCore for DeadRng {
        fn next_u32(&mut self) -> u32 {
            unreachable!()
        }
        fn next_u64(&mut self) -> u64 {
            unreachable!()
        }
        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unreachable!()
        }
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand_core::Error> {
            Err(rand_core::Error::from(NonZeroU32::new(rand_core::Error::CUSTOM_START).unwrap()))
        }
    }

    impl CryptoRng for DeadRng {}

    #[test]
    fn entropy_failure_is_fatal_and_writes_nothing() {
        let mut gen = OracleGenerator::new(DeadRng, ReferenceAes256);
        let mut out = Vec::<u8>::new();
        let err = write_oracle(&mut out, &mut gen, 3).unwrap_err();
        assert!(matches!(err, KatError::Entropy(_)));
        assert!(out.is_empty());
    }
}
