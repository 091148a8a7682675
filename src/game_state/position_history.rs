//! Placement keys of every completed move, for repetition counting.
//!
//! Keys compare by exact string equality. Side to move and castling rights are
//! not encoded, so two placements reached with different rights still count
//! as the same position.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionHistory {
    keys: Vec<String>,
}

impl PositionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: String) {
        self.keys.push(key);
    }

    /// How many times `key` has already been recorded.
    pub fn occurrences(&self, key: &str) -> usize {
        self.keys.iter().filter(|k| k.as_str() == key).count()
    }

    /// Replace the most recent key, used after a promotion changes the placement.
    pub fn replace_last(&mut self, key: String) {
        match self.keys.last_mut() {
            Some(last) => *last = key,
            None => self.keys.push(key),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
