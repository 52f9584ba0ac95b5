//! Embedded demo machine descriptions, known-good and always available.

use crate::parser::parse;
use crate::types::{Program, TuringMachineError};

// Descriptions are embedded verbatim in the line-oriented input format.
const PROGRAM_TEXTS: [(&str, &str); 3] = [
    // Flips a single bit and halts one cell to the right.
    ("bit-flip", "01\nA B\nA\nB\n1\nA 1 -> B 0 >\n"),
    // Adds one to a binary number, most significant bit first.
    (
        "binary-increment",
        "01\nscan carry done\nscan\ndone\n1011\n\
         scan 0 -> scan 0 >\n\
         scan 1 -> scan 1 >\n\
         scan _ -> carry _ <\n\
         carry 1 -> carry 0 <\n\
         carry 0 -> done 1 <\n\
         carry _ -> done 1 <\n",
    ),
    // Stamps a marker one cell left of the input, growing the tape leftward.
    (
        "left-pad",
        "1x\nS T H\nS\nH\n1\nS 1 -> T 1 <\nT _ -> H x <\n",
    ),
];

lazy_static::lazy_static! {
    /// Parsed demo programs, in declaration order. Texts that fail to parse
    /// are skipped rather than poisoning the registry.
    pub static ref PROGRAMS: Vec<(&'static str, Program)> = PROGRAM_TEXTS
        .iter()
        .filter_map(|(name, text)| parse(text).ok().map(|program| (*name, program)))
        .collect();
}

pub struct ProgramManager;

impl ProgramManager {
    /// The number of available demo programs.
    pub fn program_count() -> usize {
        PROGRAMS.len()
    }

    /// Fetches a demo program by its index.
    pub fn program_by_index(index: usize) -> Result<Program, TuringMachineError> {
        PROGRAMS
            .get(index)
            .map(|(_, program)| program.clone())
            .ok_or_else(|| {
                TuringMachineError::FileError(format!("Program index {} out of range", index))
            })
    }

    /// Fetches a demo program by name.
    pub fn program_by_name(name: &str) -> Result<Program, TuringMachineError> {
        PROGRAMS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, program)| program.clone())
            .ok_or_else(|| TuringMachineError::FileError(format!("Program '{}' not found", name)))
    }

    /// Lists all demo program names.
    pub fn list_program_names() -> Vec<&'static str> {
        PROGRAMS.iter().map(|(name, _)| *name).collect()
    }

    /// The original description text of a demo program.
    pub fn program_text_by_name(name: &str) -> Result<&'static str, TuringMachineError> {
        PROGRAM_TEXTS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, text)| *text)
            .ok_or_else(|| TuringMachineError::FileError(format!("Program '{}' not found", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::TuringMachine;

    #[test]
    fn test_all_demo_texts_parse() {
        assert_eq!(PROGRAMS.len(), PROGRAM_TEXTS.len());
    }

    #[test]
    fn test_all_demos_run_to_acceptance() {
        for (name, program) in PROGRAMS.iter() {
            let mut machine = TuringMachine::new(program.clone());

            let mut accepted = false;
            for _ in 0..1000 {
                match machine.step() {
                    Ok(crate::types::Step::Accepted) => {
                        accepted = true;
                        break;
                    }
                    Ok(crate::types::Step::Continue) => {}
                    Err(e) => panic!("demo '{}' failed: {}", name, e),
                }
            }

            assert!(accepted, "demo '{}' did not halt within 1000 steps", name);
        }
    }

    #[test]
    fn test_binary_increment_result() {
        let program = ProgramManager::program_by_name("binary-increment").unwrap();
        let mut machine = TuringMachine::new(program);

        let mut out = Vec::new();
        machine.run(&mut out).unwrap();

        // 1011 + 1 = 1100; the scan materialized one blank past the input.
        assert_eq!(machine.tape().window(), "1100_");
        assert_eq!(machine.state(), "done");
    }

    #[test]
    fn test_left_pad_grows_leftward() {
        let program = ProgramManager::program_by_name("left-pad").unwrap();
        let mut machine = TuringMachine::new(program);

        let mut out = Vec::new();
        machine.run(&mut out).unwrap();

        assert_eq!(machine.tape().window(), "x1");
        assert_eq!(machine.tape().offset(), 1);
        assert_eq!(machine.head(), -2);
    }

    #[test]
    fn test_lookup_by_name_and_index() {
        assert!(ProgramManager::program_by_name("bit-flip").is_ok());
        assert!(ProgramManager::program_by_name("nonexistent").is_err());
        assert!(ProgramManager::program_by_index(0).is_ok());
        assert!(ProgramManager::program_by_index(999).is_err());

        let names = ProgramManager::list_program_names();
        assert_eq!(names.len(), ProgramManager::program_count());
        assert!(names.contains(&"binary-increment"));
    }

    #[test]
    fn test_program_text_round_trips_through_parser() {
        let text = ProgramManager::program_text_by_name("bit-flip").unwrap();
        let reparsed = parse(text).unwrap();
        let stored = ProgramManager::program_by_name("bit-flip").unwrap();
        assert_eq!(reparsed, stored);
    }
}
