// Harness templates for emitted self-checking test blocks.
//
// Every slot is plain text with `${var}` placeholders. Variables available per
// slot:
//   key_name / state_name / target_name   idx
//   array_decl / state_decl               name, len, bytes
//   byte_literal                          hex
//   cipher_call                           cipher_fn, key, state
//   compare_loop                          state, target, len
//   fail_marker / accumulate              state, target
//   prologue / epilogue                   cipher_fn

use std::str::FromStr;

use crate::error::KatError;
use crate::kat_params::DEFAULT_CIPHER_FN;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessTemplate {
    pub cipher_fn: String,
    pub key_name: String,
    pub state_name: String,
    pub target_name: String,
    pub array_decl: String,
    pub state_decl: String,
    pub byte_literal: String,
    pub byte_separator: String,
    pub cipher_call: String,
    pub compare_loop: String,
    pub fail_marker: String,
    pub accumulate: String,
    pub prologue: String,
    pub epilogue: String,
}

impl HarnessTemplate {
    /// C body for `MainTest.c`: `pass` and `allPass` come from the host.
    pub fn c() -> Self {
        Self {
            cipher_fn: DEFAULT_CIPHER_FN.into(),
            key_name: "key${idx}".into(),
            state_name: "state${idx}".into(),
            target_name: "target${idx}".into(),
            array_decl: "  uint8_t ${name}[${len}]={${bytes}};\n".into(),
            state_decl: "  uint8_t ${name}[${len}]={${bytes}};\n".into(),
            byte_literal: "0x${hex},".into(),
            byte_separator: "".into(),
            cipher_call: "  ${cipher_fn}(${key},${state});\n".into(),
            compare_loop: "  pass=1;\n  for (int j=0;j<${len};j++) pass&=(${state}[j]==${target}[j]);\n".into(),
            fail_marker: "  printf(pass?\"\":\"x\");\n".into(),
            accumulate: "  allPass&=pass;\n".into(),
            prologue: concat!(
                "#include <stdint.h>\n",
                "#include <stdio.h>\n",
                "#include \"aes256.h\"\n",
                "\n",
                "int main(void)\n",
                "{\n",
                "  uint8_t pass;\n",
                "  uint8_t allPass=1;\n",
            )
            .into(),
            epilogue: concat!(
                "  printf(allPass?\"\\nAll tests passed\\n\":\"\\nFAILED\\n\");\n",
                "  return allPass?0:1;\n",
                "}\n",
            )
            .into(),
        }
    }

    /// Rust body; standalone mode wraps it in `fn run_kat(..) -> bool`.
    pub fn rust() -> Self {
        Self {
            cipher_fn: "aes256_encrypt".into(),
            key_name: "key${idx}".into(),
            state_name: "state${idx}".into(),
            target_name: "target${idx}".into(),
            array_decl: "    let ${name}: [u8; ${len}] = [${bytes}];\n".into(),
            state_decl: "    let mut ${name}: [u8; ${len}] = [${bytes}];\n".into(),
            byte_literal: "0x${hex}".into(),
            byte_separator: ", ".into(),
            cipher_call: "    ${cipher_fn}(&${key}, &mut ${state});\n".into(),
            compare_loop: "    pass = ${state}.iter().zip(${target}.iter()).all(|(a, b)| a == b);\n".into(),
            fail_marker: "    if !pass {\n        print!(\"x\");\n    }\n".into(),
            accumulate: "    all_pass &= pass;\n".into(),
            prologue: concat!(
                "pub fn run_kat(${cipher_fn}: fn(&[u8; 32], &mut [u8; 16])) -> bool {\n",
                "    let mut pass: bool;\n",
                "    let mut all_pass = true;\n",
            )
            .into(),
            epilogue: "    all_pass\n}\n".into(),
        }
    }

    pub fn with_cipher_fn(mut self, name: &str) -> Self {
        self.cipher_fn = name.to_string();
        self
    }
}

impl FromStr for HarnessTemplate {
    type Err = KatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" => Ok(Self::c()),
            "rust" => Ok(Self::rust()),
            other => Err(KatError::UnknownTemplate(other.to_string())),
        }
    }
}

/// Substitutes `${var}` placeholders in one pass; unknown names are kept verbatim
/// and substituted text is never rescanned.
pub fn fill(slot: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(slot.len());
    let mut rest = slot;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let name = &after[..end];
                match vars.iter().find(|(k, _)| *k == name) {
                    Some((_, v)) => out.push_str(v),
                    None => out.push_str(&rest[start..start + 2 + end + 1]),
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
