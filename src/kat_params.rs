// AES-256 ECB KAT params: key 32 bytes, one 16-byte block, NIST CAVP corpus conventions.

pub const KEYBYTES: usize = 32;
pub const BLOCKBYTES: usize = 16;

pub const KEY_HEX_LEN: usize = 2 * KEYBYTES; // 64
pub const BLOCK_HEX_LEN: usize = 2 * BLOCKBYTES; // 32

// Oracle run length when the caller does not ask for a count
pub const DEFAULT_ORACLE_COUNT: u64 = 1_000_000;

// Corpus conventions (KAT_AES.zip, ECB encrypt files)
pub const MODE_FAMILY_PREFIX: &str = "ECB";
pub const ENCRYPT_MARKER: &str = "[ENCRYPT]";
pub const COUNT_MARKER: &str = "COUNT = ";

// Lines following a COUNT marker: key, plaintext, ciphertext
pub const BLOCK_FIELD_LINES: usize = 3;

pub const DEFAULT_CORPUS_FILES: [&str; 4] = [
    "ECBGFSbox256e.txt",
    "ECBKeySbox256e.txt",
    "ECBVarKey256e.txt",
    "ECBVarTxt256e.txt",
];

// Symbol the hosting harness defines for the implementation under test
pub const DEFAULT_CIPHER_FN: &str = "AES256_Encrypt";
