//! The tape: logically infinite in both directions, materialized lazily.
//!
//! Cells are kept in two growth stacks indexed by head position: `right`
//! holds logical cells 0, 1, 2, … and `left` holds logical cells -1, -2, …
//! in push order. This keeps both directions of growth O(1) amortized
//! instead of paying O(n) for every prepend on a flat buffer. The depth of
//! the left stack is the rendering offset ("zero"): how far the materialized
//! window's edge has shifted left of logical cell 0.

use crate::types::BLANK_SYMBOL;

/// A bidirectionally growable tape. Every cell outside the materialized
/// window reads as the blank symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    left: Vec<char>,
    right: Vec<char>,
}

impl Tape {
    /// Creates a tape whose cells 0..n hold the given symbols.
    pub fn new(initial: &str) -> Self {
        Self {
            left: Vec::new(),
            right: initial.chars().collect(),
        }
    }

    /// The symbol at a logical position, blank if the cell was never written.
    pub fn read(&self, pos: isize) -> char {
        let cell = if pos >= 0 {
            self.right.get(pos as usize)
        } else {
            self.left.get((-(pos + 1)) as usize)
        };

        cell.copied().unwrap_or(BLANK_SYMBOL)
    }

    /// Writes a symbol at a logical position, growing the materialized window
    /// when the position lies past either edge. The head only ever moves one
    /// cell per step, so growth is by a single cell in practice; positions
    /// further out are still handled by blank-filling the gap.
    pub fn write(&mut self, pos: isize, symbol: char) {
        let (stack, idx) = if pos >= 0 {
            (&mut self.right, pos as usize)
        } else {
            (&mut self.left, (-(pos + 1)) as usize)
        };

        if idx >= stack.len() {
            stack.resize(idx, BLANK_SYMBOL);
            stack.push(symbol);
        } else {
            stack[idx] = symbol;
        }
    }

    /// How many cells have been materialized left of logical cell 0.
    pub fn offset(&self) -> usize {
        self.left.len()
    }

    /// The number of materialized cells.
    pub fn len(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// True if no cell has been materialized.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    /// The materialized window as a string, leftmost cell first.
    pub fn window(&self) -> String {
        self.left.iter().rev().chain(self.right.iter()).collect()
    }
}
