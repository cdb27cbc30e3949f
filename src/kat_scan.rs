// NIST CAVP AES ECB known-answer document scanner.
//
// Layout: line 1 is the mode marker, then blocks of
//   COUNT = n
//   KEY = <hex>
//   PLAINTEXT = <hex>
//   CIPHERTEXT = <hex>
// with arbitrary lines (blank, comments) between blocks.

use tracing::{debug, trace};

use crate::corpus_cursor::LineCursor;
use crate::error::{Field, KatError, Result};
use crate::kat_params::{BLOCK_FIELD_LINES, COUNT_MARKER, ENCRYPT_MARKER, MODE_FAMILY_PREFIX};
use crate::kat_vector::RawVector;

/// Naming and marker conventions of the corpus.
#[derive(Clone, Debug)]
pub struct CorpusRules {
    pub name_prefix: String,
    pub mode_marker: String,
    pub count_marker: String,
}

impl Default for CorpusRules {
    fn default() -> Self {
        Self {
            name_prefix: MODE_FAMILY_PREFIX.to_string(),
            mode_marker: ENCRYPT_MARKER.to_string(),
            count_marker: COUNT_MARKER.to_string(),
        }
    }
}

impl CorpusRules {
    pub fn accepts_name(&self, file_name: &str) -> bool {
        file_name.starts_with(&self.name_prefix)
    }

    pub fn accepts_mode(&self, first_line: Option<&str>) -> bool {
        first_line == Some(self.mode_marker.as_str())
    }
}

/// Value of a `label = value` line: the third space-separated token of the
/// right-trimmed line. `line_no` is 1-based.
pub fn field_value(file: &str, line_no: usize, field: Field, line: &str) -> Result<String> {
    line.trim_end()
        .split(' ')
        .nth(2)
        .map(str::to_string)
        .ok_or_else(|| KatError::MalformedLine {
            file: file.to_string(),
            line: line_no,
            field,
            text: line.to_string(),
        })
}

/// Scans one document. `None` when the mode marker rejects it, otherwise the
/// raw triples in document order. A block whose marker has fewer than three
/// lines after it ends the scan silently.
pub fn scan_document(file: &str, text: &str, rules: &CorpusRules) -> Result<Option<Vec<RawVector>>> {
    let lines: Vec<&str> = text.lines().collect();
    if !rules.accepts_mode(lines.first().copied()) {
        return Ok(None);
    }

    let mut cur = LineCursor::new(&lines);
    cur.advance();

    let mut out = Vec::new();
    while cur.seek_prefix(&rules.count_marker, BLOCK_FIELD_LINES) {
        let marker_line = cur.position() + 1;
        cur.advance();

        let Some(block) = cur.take(BLOCK_FIELD_LINES) else {
            break;
        };
        let v = RawVector {
            file: file.to_string(),
            line: marker_line,
            key: field_value(file, marker_line + 1, Field::Key, block[0])?,
            plaintext: field_value(file, marker_line + 2, Field::Plaintext, block[1])?,
            ciphertext: field_value(file, marker_line + 3, Field::Ciphertext, block[2])?,
        };
        trace!(file, line = marker_line, key = %v.key, "extracted vector");
        out.push(v);
    }

    if cur.remaining() > 0 {
        debug!(file, trailing_lines = cur.remaining(), "no further count block");
    }
    Ok(Some(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(count: usize, key: &str, pt: &str, ct: &str) -> String {
        format!("COUNT = {count}\nKEY = {key}\nPLAINTEXT = {pt}\nCIPHERTEXT = {ct}\n")
    }

    #[test]
    fn single_block_document() {
        let text = format!(
            "[ENCRYPT]\n{}",
            block(0, &"aa".repeat(32), &"bb".repeat(16), &"cc".repeat(16))
        );
        let vs = scan_document("ECBVarKey256e.txt", &text, &CorpusRules::default())
            .unwrap()
            .unwrap();
        assert_eq!(vs.len(), 1);
        assert_eq!(vs[0].line, 2);
        assert_eq!(vs[0].key, "aa".repeat(32));
        assert_eq!(vs[0].plaintext, "bb".repeat(16));
        assert_eq!(vs[0].ciphertext, "cc".repeat(16));
    }

    #[test]
    fn blocks_come_out_in_document_order() {
        let mut text = String::from("[ENCRYPT]\n\n");
        for n in 0..5 {
            text.push_str(&block(n, &format!("{:064x}", n), &"00".repeat(16), &format!("{:032x}", n)));
            text.push('\n');
        }
        let vs = scan_document("ECBGFSbox256e.txt", &text, &CorpusRules::default())
            .unwrap()
            .unwrap();
        assert_eq!(vs.len(), 5);
        for (n, v) in vs.iter().enumerate() {
            assert_eq!(v.ciphertext, format!("{:032x}", n));
        }
        assert!(vs.windows(2).all(|w| w[0].line < w[1].line));
    }

    #[test]
    fn decrypt_document_is_rejected() {
        let text = format!("[DECRYPT]\n{}", block(0, "00", "11", "22"));
        assert!(scan_document("ECBVarTxt256d.txt", &text, &CorpusRules::default())
            .unwrap()
            .is_none());
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let text = "[ENCRYPT]\r\nCOUNT = 0\r\nKEY = 01\r\nPLAINTEXT = 02\r\nCIPHERTEXT = 03\r\n";
        let vs = scan_document("ECBx", text, &CorpusRules::default()).unwrap().unwrap();
        assert_eq!(vs[0].key, "01");
        assert_eq!(vs[0].ciphertext, "03");
    }

    #[test]
    fn trailing_partial_block_is_dropped() {
        let text = format!("[ENCRYPT]\n{}COUNT = 1\nKEY = 00\nPLAINTEXT = 11\n", block(0, "aa", "bb", "cc"));
        let vs = scan_document("ECBx", &text, &CorpusRules::default()).unwrap().unwrap();
        assert_eq!(vs.len(), 1);
    }

    #[test]
    fn field_without_value_is_malformed() {
        let text = "[ENCRYPT]\nCOUNT = 0\nKEY =\nPLAINTEXT = 11\nCIPHERTEXT = 22\n";
        let err = scan_document("ECBx", text, &CorpusRules::default()).unwrap_err();
        assert!(matches!(err, KatError::MalformedLine { line: 3, field: Field::Key, .. }));
    }

    #[test]
    fn value_is_third_token_only() {
        assert_eq!(field_value("f", 1, Field::Key, "KEY = abcd trailing\n").unwrap(), "abcd");
    }

    #[test]
    fn name_prefix_filter() {
        let rules = CorpusRules::default();
        assert!(rules.accepts_name("ECBVarTxt256e.txt"));
        assert!(!rules.accepts_name("CBCVarTxt256e.txt"));
        assert!(!rules.accepts_name("ecbVarTxt256e.txt"));
    }
}
