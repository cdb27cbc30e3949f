// Test vector types: the validated (key, plaintext, ciphertext) triple and the
// raw field text as it was scanned out of a corpus document.

use crate::error::{Field, KatError, Result};
use crate::kat_params::{BLOCKBYTES, KEYBYTES};

/// One AES-256 ECB known answer: `ciphertext = Encrypt(key, plaintext)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestVector {
    pub key: [u8; KEYBYTES],
    pub plaintext: [u8; BLOCKBYTES],
    pub ciphertext: [u8; BLOCKBYTES],
}

impl TestVector {
    /// Oracle line without the trailing newline: `key pt ct`, lowercase hex.
    pub fn to_record(&self) -> String {
        format!(
            "{} {} {}",
            hex::encode(self.key),
            hex::encode(self.plaintext),
            hex::encode(self.ciphertext)
        )
    }
}

/// Parses one oracle line back into a vector. `line_no` is 1-based and only
/// used for diagnostics.
pub fn parse_record(line_no: usize, line: &str) -> Result<TestVector> {
    let invalid = |reason: String| KatError::InvalidRecord { line: line_no, reason };

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(invalid(format!("expected 3 fields, found {}", fields.len())));
    }

    let mut v = TestVector {
        key: [0u8; KEYBYTES],
        plaintext: [0u8; BLOCKBYTES],
        ciphertext: [0u8; BLOCKBYTES],
    };
    hex::decode_to_slice(fields[0], &mut v.key).map_err(|e| invalid(format!("key: {e}")))?;
    hex::decode_to_slice(fields[1], &mut v.plaintext)
        .map_err(|e| invalid(format!("plaintext: {e}")))?;
    hex::decode_to_slice(fields[2], &mut v.ciphertext)
        .map_err(|e| invalid(format!("ciphertext: {e}")))?;
    Ok(v)
}

/// Field text exactly as extracted from a corpus document, unvalidated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawVector {
    pub file: String,
    /// 1-based line number of the COUNT marker that opened the block
    pub line: usize,
    pub key: String,
    pub plaintext: String,
    pub ciphertext: String,
}

impl RawVector {
    /// Canonical raw form of an already validated vector (lowercase hex).
    pub fn from_vector(file: &str, line: usize, v: &TestVector) -> Self {
        RawVector {
            file: file.to_string(),
            line,
            key: hex::encode(v.key),
            plaintext: hex::encode(v.plaintext),
            ciphertext: hex::encode(v.ciphertext),
        }
    }

    /// Strict check: hex alphabet and exact byte length for all three fields.
    pub fn validate(&self) -> Result<TestVector> {
        Ok(TestVector {
            key: self.decode_field(Field::Key, &self.key, 1)?,
            plaintext: self.decode_field(Field::Plaintext, &self.plaintext, 2)?,
            ciphertext: self.decode_field(Field::Ciphertext, &self.ciphertext, 3)?,
        })
    }

    fn decode_field<const N: usize>(&self, field: Field, value: &str, offset: usize) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        hex::decode_to_slice(value, &mut out).map_err(|_| KatError::InvalidField {
            file: self.file.clone(),
            line: self.line + offset,
            field,
            value: value.to_string(),
            expected: 2 * N,
        })?;
        Ok(out)
    }
}
