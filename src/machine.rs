//! The execution engine. Owns the mutable run state (current state, head,
//! tape) and drives the step loop: look up the transition for the current
//! (state, symbol) condition, write, move, adopt the next state, and stop the
//! instant the accept state is reached. The engine imposes no step limit;
//! divergence is a property of the description, not a fault detected here.

use crate::tape::Tape;
use crate::trace::render_frame;
use crate::types::{Condition, Effect, Program, Step, TuringMachineError};
use std::io::Write;

/// A single-tape Turing machine mid-execution.
pub struct TuringMachine {
    state: String,
    head: isize,
    tape: Tape,
    program: Program,
    step_count: usize,
}

impl TuringMachine {
    /// Creates a machine at the initial configuration of a program:
    /// start state, head at logical cell 0, tape as declared, offset 0.
    pub fn new(program: Program) -> Self {
        Self {
            state: program.start_state.clone(),
            head: 0,
            tape: Tape::new(&program.tape),
            program,
            step_count: 0,
        }
    }

    /// Executes one transition.
    ///
    /// Order of operations matters: the effect symbol is written at the *old*
    /// head position (growing the window if the head sits one past either
    /// edge), then the head moves one cell, then the next state is adopted.
    ///
    /// A condition with no table entry is fatal; there is no implicit
    /// halt-on-missing-transition.
    pub fn step(&mut self) -> Result<Step, TuringMachineError> {
        if self.is_accepted() {
            return Ok(Step::Accepted);
        }

        let condition = Condition {
            state: self.state.clone(),
            symbol: self.tape.read(self.head),
        };

        let effect: Effect = self
            .program
            .transitions
            .get(&condition)
            .cloned()
            .ok_or(TuringMachineError::NoTransitionDefined(condition))?;

        self.tape.write(self.head, effect.write);
        self.head += effect.direction.delta();
        self.state = effect.next_state;
        self.step_count += 1;

        Ok(if self.is_accepted() {
            Step::Accepted
        } else {
            Step::Continue
        })
    }

    /// Runs to acceptance, writing one frame per configuration to `out`:
    /// first the untouched initial configuration, then one frame after every
    /// step. Does not return for a non-halting description.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<(), TuringMachineError> {
        write_frame(out, &self.render())?;

        while !self.is_accepted() {
            self.step()?;
            write_frame(out, &self.render())?;
        }

        Ok(())
    }

    /// Renders the current configuration as a trace frame.
    pub fn render(&self) -> String {
        render_frame(
            &self.state,
            self.head,
            &self.tape.window(),
            self.tape.offset(),
        )
    }

    /// Restores the initial configuration of the program.
    pub fn reset(&mut self) {
        self.state = self.program.start_state.clone();
        self.head = 0;
        self.tape = Tape::new(&self.program.tape);
        self.step_count = 0;
    }

    /// The current state label.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// The current head position (logical, may be negative).
    pub fn head(&self) -> isize {
        self.head
    }

    /// The tape, for inspection.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// How many transitions have fired so far.
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// True once the current state is the accept state.
    pub fn is_accepted(&self) -> bool {
        self.state == self.program.accept_state
    }
}

fn write_frame<W: Write>(out: &mut W, frame: &str) -> Result<(), TuringMachineError> {
    out.write_all(frame.as_bytes())
        .map_err(|e| TuringMachineError::OutputError(e.to_string()))
}
