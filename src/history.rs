/// Accepted command lines plus the up/down navigation cursor.
///
/// The cursor ranges over `0..=len`; `len` is the fresh empty line.
#[derive(Debug, Default)]
pub struct HistoryLedger {
    entries: Vec<String>,
    cursor: usize,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: &str) {
        self.entries.push(line.to_string());
        self.cursor = self.entries.len();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Arrow up. Sticks on the oldest entry.
    pub fn previous(&mut self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        self.cursor = self.cursor.saturating_sub(1);
        self.entries[self.cursor].clone()
    }

    /// Arrow down. Walking off the newest entry yields the empty line.
    pub fn next(&mut self) -> String {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            self.entries[self.cursor].clone()
        } else {
            self.cursor = self.entries.len();
            String::new()
        }
    }

    pub fn render(&self) -> Vec<String> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{:4}  {}", i + 1, c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(lines: &[&str]) -> HistoryLedger {
        let mut h = HistoryLedger::new();
        for l in lines {
            h.push(l);
        }
        h
    }

    #[test]
    fn previous_walks_back_then_sticks() {
        let mut h = ledger(&["a", "b", "c"]);
        assert_eq!(h.previous(), "c");
        assert_eq!(h.previous(), "b");
        assert_eq!(h.previous(), "a");
        assert_eq!(h.previous(), "a");
        assert_eq!(h.cursor(), 0);
    }

    #[test]
    fn previous_then_next() {
        let mut h = ledger(&["a", "b", "c"]);
        let seen: Vec<String> = vec![h.previous(), h.previous(), h.previous(), h.next()];
        assert_eq!(seen, vec!["c", "b", "a", "b"]);
    }

    #[test]
    fn next_past_newest_is_empty() {
        let mut h = ledger(&["a", "b"]);
        h.previous();
        assert_eq!(h.next(), "");
        assert_eq!(h.cursor(), 2);
        assert_eq!(h.next(), "");
        assert_eq!(h.cursor(), 2);
    }

    #[test]
    fn empty_ledger_navigation() {
        let mut h = HistoryLedger::new();
        assert_eq!(h.previous(), "");
        assert_eq!(h.next(), "");
        assert_eq!(h.cursor(), 0);
    }

    #[test]
    fn push_resets_cursor_and_keeps_duplicates() {
        let mut h = ledger(&["a", "a"]);
        h.previous();
        h.previous();
        h.push("b");
        assert_eq!(h.cursor(), 3);
        assert_eq!(h.entries(), ["a", "a", "b"]);
    }

    #[test]
    fn navigation_leaves_entries_alone() {
        let mut h = ledger(&["x", "y"]);
        h.previous();
        h.next();
        h.next();
        assert_eq!(h.entries(), ["x", "y"]);
    }

    #[test]
    fn clear_resets_everything() {
        let mut h = ledger(&["a", "b"]);
        h.clear();
        assert!(h.is_empty());
        assert_eq!(h.cursor(), 0);
        assert_eq!(h.previous(), "");
    }

    #[test]
    fn render_numbers_entries() {
        let h = ledger(&["help", "scan quick"]);
        assert_eq!(h.render(), vec!["   1  help", "   2  scan quick"]);
    }
}
