// Pull-based cursor over the immutable line list of one corpus document.

pub struct LineCursor<'a> {
    lines: &'a [&'a str],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self { lines, pos: 0 }
    }

    /// 0-based index of the current line.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.lines.len().saturating_sub(self.pos)
    }

    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    pub fn advance(&mut self) -> Option<&'a str> {
        let line = self.peek()?;
        self.pos += 1;
        Some(line)
    }

    /// True when the current line exists and at least `n` lines follow it.
    pub fn has_lookahead(&self, n: usize) -> bool {
        self.pos + n < self.lines.len()
    }

    /// Moves to the next line starting with `prefix` that still has `lookahead`
    /// lines after it. On `false` the cursor is parked at the end of the search
    /// window and nothing further can match.
    pub fn seek_prefix(&mut self, prefix: &str, lookahead: usize) -> bool {
        while self.has_lookahead(lookahead) {
            if self.lines[self.pos].starts_with(prefix) {
                return true;
            }
            self.pos += 1;
        }
        false
    }

    /// Consumes the next `n` lines, or nothing if fewer remain.
    pub fn take(&mut self, n: usize) -> Option<&'a [&'a str]> {
        if self.remaining() < n {
            return None;
        }
        let block = &self.lines[self.pos..self.pos + n];
        self.pos += n;
        Some(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seek_stops_on_marker_with_room() {
        let lines = ["x", "COUNT = 0", "a", "b", "c"];
        let mut cur = LineCursor::new(&lines);
        assert!(cur.seek_prefix("COUNT = ", 3));
        assert_eq!(cur.position(), 1);
        assert_eq!(cur.advance(), Some("COUNT = 0"));
        assert_eq!(cur.take(3), Some(&lines[2..5]));
        assert_eq!(cur.remaining(), 0);
        assert_eq!(cur.peek(), None);
    }

    #[test]
    fn marker_inside_lookahead_margin_is_not_found() {
        let lines = ["x", "COUNT = 0", "a", "b"];
        let mut cur = LineCursor::new(&lines);
        assert!(!cur.seek_prefix("COUNT = ", 3));
        assert!(!cur.has_lookahead(3));
    }

    #[test]
    fn take_refuses_short_tail() {
        let lines = ["a", "b"];
        let mut cur = LineCursor::new(&lines);
        assert_eq!(cur.take(3), None);
        assert_eq!(cur.position(), 0);
    }
}
