// Block cipher seam shared by the reference AES-256 (RustCrypto `aes`) and
// any implementation under test.

use aes::Aes256;
use cipher::generic_array::GenericArray;
use cipher::{BlockEncrypt, KeyInit};

use crate::kat_params::{BLOCKBYTES, KEYBYTES};

/// Single-block AES-256 encryption, in place.
pub trait BlockCipher256 {
    fn encrypt_block(&self, key: &[u8; KEYBYTES], block: &mut [u8; BLOCKBYTES]);
}

/// Adapts a plain `fn(key, block)` so IUTs exposed as free functions plug in.
impl<F> BlockCipher256 for F
where
    F: Fn(&[u8; KEYBYTES], &mut [u8; BLOCKBYTES]),
{
    fn encrypt_block(&self, key: &[u8; KEYBYTES], block: &mut [u8; BLOCKBYTES]) {
        self(key, block)
    }
}

/// Trusted reference: RustCrypto AES-256, ECB, one block, no padding.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReferenceAes256;

impl BlockCipher256 for ReferenceAes256 {
    fn encrypt_block(&self, key: &[u8; KEYBYTES], block16: &mut [u8; BLOCKBYTES]) {
        let cipher = Aes256::new(GenericArray::from_slice(key));
        let mut block = GenericArray::clone_from_slice(block16);
        cipher.encrypt_block(&mut block);
        block16.copy_from_slice(&block);
    }
}

/// Out-of-place convenience over any `BlockCipher256`.
pub fn encrypt_copy<C: BlockCipher256 + ?Sized>(
    c: &C,
    key: &[u8; KEYBYTES],
    plaintext: &[u8; BLOCKBYTES],
) -> [u8; BLOCKBYTES] {
    let mut out = *plaintext;
    c.encrypt_block(key, &mut out);
    out
}
