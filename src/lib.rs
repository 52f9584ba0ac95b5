//! Single-tape Turing machine interpreter.
//!
//! The loader parses a line-oriented machine description into a validated
//! transition table and initial configuration; the engine drives the step
//! loop over a lazily growing bidirectional tape and renders one trace frame
//! per configuration.

pub mod loader;
pub mod machine;
pub mod parser;
pub mod programs;
pub mod tape;
pub mod trace;
pub mod types;

/// Re-exports the `ProgramLoader` struct from the loader module.
pub use loader::ProgramLoader;
/// Re-exports the `TuringMachine` struct from the machine module.
pub use machine::TuringMachine;
/// Re-exports the `parse` function from the parser module.
pub use parser::parse;
/// Re-exports the demo registry from the programs module.
pub use programs::{ProgramManager, PROGRAMS};
/// Re-exports the `Tape` struct from the tape module.
pub use tape::Tape;
/// Re-exports the frame renderer from the trace module.
pub use trace::render_frame;
/// Re-exports the core value types and the error enum from the types module.
pub use types::{
    Condition, Direction, Effect, Program, Step, TuringMachineError, BLANK_SYMBOL,
};
