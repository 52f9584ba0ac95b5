//! Line-oriented parser for machine descriptions.
//!
//! The format is strictly positional: line 1 is the alphabet, line 2 the
//! state set, line 3 the start state, line 4 the accept state, line 5 the
//! initial tape contents, and every further line one transition rule of the
//! form `<from> <read> -> <to> <write> <direction>`. All validation happens
//! here, at load time; the returned `Program` is ready to execute.

use crate::types::{
    Condition, Direction, Effect, Program, TuringMachineError, BLANK_SYMBOL,
};
use std::collections::{HashMap, HashSet};

/// Parses a machine description into a validated `Program`.
///
/// Fails with the error taxonomy of the loader: `UnknownState`,
/// `UnknownSymbol`, `DuplicateTransition`, `InvalidDirection` or
/// `MalformedLine`, each carrying the 1-based line number and the offending
/// field. The first failure aborts the parse; there is no partial recovery.
pub fn parse(input: &str) -> Result<Program, TuringMachineError> {
    let lines: Vec<&str> = input.lines().map(strip_cr).collect();

    let alphabet_line = header(&lines, 0, "alphabet")?;
    let states_line = header(&lines, 1, "states")?;
    let start_line = header(&lines, 2, "start state")?;
    let accept_line = header(&lines, 3, "accept state")?;
    let tape_line = header(&lines, 4, "initial tape")?;

    // The blank symbol is always valid even though never declared.
    let mut alphabet: HashSet<char> = alphabet_line.chars().collect();
    alphabet.insert(BLANK_SYMBOL);

    let states: HashSet<String> = states_line.split_whitespace().map(String::from).collect();

    let start_state = check_state(start_line, &states, 3, "start state")?;
    let accept_state = check_state(accept_line, &states, 4, "accept state")?;

    for symbol in tape_line.chars() {
        if !alphabet.contains(&symbol) {
            return Err(TuringMachineError::UnknownSymbol {
                line: 5,
                field: "initial tape",
                symbol,
            });
        }
    }

    let mut transitions = HashMap::new();
    for (i, line) in lines.iter().enumerate().skip(5) {
        parse_rule(i + 1, line, &alphabet, &states, &mut transitions)?;
    }

    Ok(Program {
        alphabet,
        states,
        start_state,
        accept_state,
        tape: tape_line.to_string(),
        transitions,
    })
}

/// Tolerate CR-LF descriptions by dropping the trailing carriage return.
fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Fetches a mandatory header line by position.
fn header<'a>(
    lines: &[&'a str],
    index: usize,
    what: &str,
) -> Result<&'a str, TuringMachineError> {
    lines
        .get(index)
        .copied()
        .ok_or_else(|| TuringMachineError::MalformedLine {
            line: index + 1,
            reason: format!("missing {what} line"),
        })
}

/// Checks membership of a state name in the declared state set.
fn check_state(
    name: &str,
    states: &HashSet<String>,
    line: usize,
    field: &'static str,
) -> Result<String, TuringMachineError> {
    if states.contains(name) {
        Ok(name.to_string())
    } else {
        Err(TuringMachineError::UnknownState {
            line,
            field,
            name: name.to_string(),
        })
    }
}

/// Parses and validates one transition rule line, inserting it into the table.
///
/// Field layout: `<from> <read> -> <to> <write> <direction>`. The separator
/// field is positionally required but never interpreted. Validation order:
/// states, symbols, direction, then duplicate condition.
fn parse_rule(
    line_no: usize,
    line: &str,
    alphabet: &HashSet<char>,
    states: &HashSet<String>,
    transitions: &mut HashMap<Condition, Effect>,
) -> Result<(), TuringMachineError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(TuringMachineError::MalformedLine {
            line: line_no,
            reason: format!("expected 6 fields in transition rule, got {}", fields.len()),
        });
    }

    let from = check_state(fields[0], states, line_no, "rule from-state")?;
    let next_state = check_state(fields[3], states, line_no, "rule to-state")?;
    let read = check_symbol(fields[1], alphabet, line_no, "read symbol")?;
    let write = check_symbol(fields[4], alphabet, line_no, "write symbol")?;

    let direction =
        Direction::parse(fields[5]).ok_or_else(|| TuringMachineError::InvalidDirection {
            line: line_no,
            token: fields[5].to_string(),
        })?;

    let condition = Condition {
        state: from,
        symbol: read,
    };
    if transitions.contains_key(&condition) {
        return Err(TuringMachineError::DuplicateTransition {
            line: line_no,
            condition,
        });
    }

    transitions.insert(
        condition,
        Effect {
            next_state,
            write,
            direction,
        },
    );

    Ok(())
}

/// Extracts a single-character symbol field and checks alphabet membership.
fn check_symbol(
    field: &str,
    alphabet: &HashSet<char>,
    line: usize,
    name: &'static str,
) -> Result<char, TuringMachineError> {
    let mut chars = field.chars();
    let symbol = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => {
            return Err(TuringMachineError::MalformedLine {
                line,
                reason: format!("{name} must be a single character, got [{field}]"),
            })
        }
    };

    if !alphabet.contains(&symbol) {
        return Err(TuringMachineError::UnknownSymbol {
            line,
            field: name,
            symbol,
        });
    }

    Ok(symbol)
}
