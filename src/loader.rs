//! Loading machine descriptions from files and directories.

use crate::parser::parse;
use crate::types::{Program, TuringMachineError};
use std::fs;
use std::path::{Path, PathBuf};

/// `ProgramLoader` reads machine descriptions from disk and hands them to the
/// parser. Descriptions are plain text files; directory scans pick up the
/// `.tm` extension.
pub struct ProgramLoader;

impl ProgramLoader {
    /// Loads and validates a single machine description file.
    ///
    /// # Returns
    ///
    /// * `Ok(Program)` if the file is read and parsed successfully.
    /// * `Err(TuringMachineError::FileError)` if the file cannot be read.
    /// * Any parser error if the content is not a valid description.
    pub fn load_program(path: &Path) -> Result<Program, TuringMachineError> {
        let content = fs::read_to_string(path).map_err(|e| {
            TuringMachineError::FileError(format!("Failed to read file {}: {}", path.display(), e))
        })?;

        parse(&content)
    }

    /// Parses a machine description from in-memory content, e.g. an embedded
    /// demo or user input.
    pub fn load_program_from_string(content: &str) -> Result<Program, TuringMachineError> {
        parse(content)
    }

    /// Loads every `.tm` file in a directory. Directories and files with
    /// other extensions are skipped; each file yields its own `Result` so one
    /// bad description does not hide the rest.
    pub fn load_programs(directory: &Path) -> Vec<Result<(PathBuf, Program), TuringMachineError>> {
        if !directory.exists() {
            return vec![Err(TuringMachineError::FileError(format!(
                "Directory {} does not exist",
                directory.display()
            )))];
        }

        let entries = match fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(e) => {
                return vec![Err(TuringMachineError::FileError(format!(
                    "Failed to read directory {}: {}",
                    directory.display(),
                    e
                )))]
            }
        };

        entries
            .filter_map(|entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        return Some(Err(TuringMachineError::FileError(format!(
                            "Failed to read directory entry: {}",
                            e
                        ))))
                    }
                };

                let path = entry.path();

                if path.is_dir() || path.extension().is_none_or(|ext| ext != "tm") {
                    return None;
                }

                match Self::load_program(&path) {
                    Ok(program) => Some(Ok((path, program))),
                    Err(e) => Some(Err(e)),
                }
            })
            .collect()
    }
}
