// Emits one self-checking test block per vector through a HarnessTemplate.
// Block names carry a run-wide index so blocks from many files can share one
// compilation unit.

use std::io::Write;

use crate::error::Result;
use crate::kat_params::{BLOCKBYTES, KEYBYTES};
use crate::kat_template::{fill, HarnessTemplate};
use crate::kat_vector::RawVector;

pub struct Emitter {
    template: HarnessTemplate,
    next_index: u64,
}

impl Emitter {
    pub fn new(template: HarnessTemplate) -> Self {
        Self { template, next_index: 1 }
    }

    pub fn template(&self) -> &HarnessTemplate {
        &self.template
    }

    /// Number of blocks emitted so far.
    pub fn emitted(&self) -> u64 {
        self.next_index - 1
    }

    pub fn write_prologue<W: Write>(&self, out: &mut W) -> Result<()> {
        let text = fill(&self.template.prologue, &[("cipher_fn", self.template.cipher_fn.as_str())]);
        out.write_all(text.as_bytes())?;
        Ok(())
    }

    pub fn write_epilogue<W: Write>(&self, out: &mut W) -> Result<()> {
        let text = fill(&self.template.epilogue, &[("cipher_fn", self.template.cipher_fn.as_str())]);
        out.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Writes the block for `v` under the next index and returns that index.
    pub fn emit<W: Write>(&mut self, out: &mut W, v: &RawVector) -> Result<u64> {
        let idx = self.next_index;
        let block = self.render_block(idx, v);
        out.write_all(block.as_bytes())?;
        self.next_index += 1;
        Ok(idx)
    }

    pub fn render_block(&self, idx: u64, v: &RawVector) -> String {
        let t = &self.template;
        let idx_text = idx.to_string();
        let key = fill(&t.key_name, &[("idx", idx_text.as_str())]);
        let state = fill(&t.state_name, &[("idx", idx_text.as_str())]);
        let target = fill(&t.target_name, &[("idx", idx_text.as_str())]);
        let (key, state, target) = (key.as_str(), state.as_str(), target.as_str());

        let key_len = KEYBYTES.to_string();
        let block_len = BLOCKBYTES.to_string();
        let key_bytes = self.byte_list(&v.key, KEYBYTES);
        let pt_bytes = self.byte_list(&v.plaintext, BLOCKBYTES);
        let ct_bytes = self.byte_list(&v.ciphertext, BLOCKBYTES);
        let names: [(&str, &str); 3] = [("key", key), ("state", state), ("target", target)];

        let mut s = String::new();
        s.push_str(&fill(
            &t.array_decl,
            &[("name", key), ("len", key_len.as_str()), ("bytes", key_bytes.as_str())],
        ));
        s.push_str(&fill(
            &t.state_decl,
            &[("name", state), ("len", block_len.as_str()), ("bytes", pt_bytes.as_str())],
        ));
        s.push_str(&fill(
            &t.cipher_call,
            &[("cipher_fn", t.cipher_fn.as_str()), ("key", key), ("state", state)],
        ));
        s.push_str(&fill(
            &t.array_decl,
            &[("name", target), ("len", block_len.as_str()), ("bytes", ct_bytes.as_str())],
        ));
        s.push_str(&fill(
            &t.compare_loop,
            &[("state", state), ("target", target), ("len", block_len.as_str())],
        ));
        s.push_str(&fill(&t.fail_marker, &names));
        s.push_str(&fill(&t.accumulate, &names));
        s
    }

    fn byte_list(&self, value: &str, nbytes: usize) -> String {
        hex_pairs(value, nbytes)
            .iter()
            .map(|pair| fill(&self.template.byte_literal, &[("hex", pair.as_str())]))
            .collect::<Vec<String>>()
            .join(&self.template.byte_separator)
    }
}

/// Splits field text into exactly `nbytes` two-character slices, clamped at the
/// end of the text. Lenient extraction relies on this: short or overlong values
/// come out as empty or truncated pairs and fail when the harness is built.
pub fn hex_pairs(value: &str, nbytes: usize) -> Vec<String> {
    let chars: Vec<char> = value.chars().collect();
    (0..nbytes)
        .map(|j| {
            let lo = (2 * j).min(chars.len());
            let hi = (2 * j + 2).min(chars.len());
            chars[lo..hi].iter().collect()
        })
        .collect()
}
