//! Core data structures for the interpreter: machine descriptions, transition
//! conditions and effects, step outcomes, and the error taxonomy shared by the
//! loader and the execution engine.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use thiserror::Error;

/// The blank symbol. Every unmaterialized tape cell reads as this, and it is a
/// member of every alphabet whether or not the description declares it.
pub const BLANK_SYMBOL: char = '_';

/// A validated Turing machine description.
///
/// Produced once by the loader and never mutated afterwards; the engine owns
/// its own copy of the mutable run state (tape, head, current state).
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Valid tape symbols, including the implicit blank.
    pub alphabet: HashSet<char>,
    /// Declared state names.
    pub states: HashSet<String>,
    /// The state the machine starts in.
    pub start_state: String,
    /// Reaching this state halts the machine.
    pub accept_state: String,
    /// Initial tape contents, laid out from logical cell 0 rightwards.
    pub tape: String,
    /// The transition table. Keys are unique by construction.
    pub transitions: HashMap<Condition, Effect>,
}

/// The lookup key of a transition: the current state and the symbol under the
/// head. Two conditions are equal iff both components match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Condition {
    pub state: String,
    pub symbol: char,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "state={} symbol={:?}", self.state, self.symbol)
    }
}

/// The outcome of firing a transition: the symbol written at the old head
/// position, the direction the head moves, and the state adopted afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    pub next_state: String,
    pub write: char,
    pub direction: Direction,
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "state={} symbol={:?} direction={}",
            self.next_state, self.write, self.direction
        )
    }
}

/// Head movement. Exactly one cell per step; there is no "stay".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one cell to the left.
    Left,
    /// Move the head one cell to the right.
    Right,
}

impl Direction {
    /// Parses a direction token from a rule line. Only `<` and `>` are valid.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "<" => Some(Direction::Left),
            ">" => Some(Direction::Right),
            _ => None,
        }
    }

    /// The head displacement this direction stands for.
    pub fn delta(&self) -> isize {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "<"),
            Direction::Right => write!(f, ">"),
        }
    }
}

/// The outcome of a single execution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A transition fired and the machine keeps running.
    Continue,
    /// The machine has reached the accept state.
    Accepted,
}

/// Every failure the interpreter can report. All variants are fatal; there is
/// no warning level and no recovery mid-run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuringMachineError {
    /// A state name that is not in the declared state set.
    #[error("line {line}: unknown state [{name}] in {field}")]
    UnknownState {
        line: usize,
        field: &'static str,
        name: String,
    },
    /// A symbol outside the declared alphabet (blank included).
    #[error("line {line}: unknown symbol [{symbol}] in {field}")]
    UnknownSymbol {
        line: usize,
        field: &'static str,
        symbol: char,
    },
    /// The same (state, symbol) condition was defined twice.
    #[error("line {line}: duplicate transition, got [{condition}] condition already")]
    DuplicateTransition { line: usize, condition: Condition },
    /// A direction token other than `<` or `>`.
    #[error("line {line}: invalid direction [{token}]")]
    InvalidDirection { line: usize, token: String },
    /// A line that does not match the expected positional layout.
    #[error("line {line}: malformed line: {reason}")]
    MalformedLine { line: usize, reason: String },
    /// A reachable configuration has no rule. Never a silent halt.
    #[error("no transition defined for {0}")]
    NoTransitionDefined(Condition),
    /// Reading the description file failed.
    #[error("file error: {0}")]
    FileError(String),
    /// Writing the trace to the output stream failed.
    #[error("output error: {0}")]
    OutputError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_serialization() {
        let left = Direction::Left;
        let right = Direction::Right;

        let left_json = serde_json::to_string(&left).unwrap();
        let right_json = serde_json::to_string(&right).unwrap();

        assert_eq!(left_json, "\"Left\"");
        assert_eq!(right_json, "\"Right\"");

        let left_deserialized: Direction = serde_json::from_str(&left_json).unwrap();
        let right_deserialized: Direction = serde_json::from_str(&right_json).unwrap();

        assert_eq!(left, left_deserialized);
        assert_eq!(right, right_deserialized);
    }

    #[test]
    fn test_effect_round_trip() {
        let effect = Effect {
            next_state: "carry".to_string(),
            write: '0',
            direction: Direction::Left,
        };

        let json = serde_json::to_string(&effect).unwrap();
        let back: Effect = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, back);
    }

    #[test]
    fn test_direction_parse() {
        assert_eq!(Direction::parse("<"), Some(Direction::Left));
        assert_eq!(Direction::parse(">"), Some(Direction::Right));
        assert_eq!(Direction::parse("L"), None);
        assert_eq!(Direction::parse(""), None);
    }

    #[test]
    fn test_condition_value_equality() {
        let a = Condition {
            state: "A".to_string(),
            symbol: '1',
        };
        let b = Condition {
            state: "A".to_string(),
            symbol: '1',
        };
        let c = Condition {
            state: "A".to_string(),
            symbol: '0',
        };

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_error_display() {
        let error = TuringMachineError::NoTransitionDefined(Condition {
            state: "A".to_string(),
            symbol: '1',
        });

        let error_msg = format!("{}", error);
        assert!(error_msg.contains("no transition defined"));
        assert!(error_msg.contains("state=A"));

        let error = TuringMachineError::UnknownState {
            line: 3,
            field: "start state",
            name: "Q".to_string(),
        };
        assert_eq!(error.to_string(), "line 3: unknown state [Q] in start state");
    }
}
