use clap::Parser;
use machina::loader::ProgramLoader;
use machina::machine::TuringMachine;
use machina::types::TuringMachineError;
use std::io;
use std::path::Path;
use std::process;

#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// Path to the machine description file
    machine: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli.machine) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run(path: &str) -> Result<(), TuringMachineError> {
    let program = ProgramLoader::load_program(Path::new(path))?;
    let mut machine = TuringMachine::new(program);

    let stdout = io::stdout();
    machine.run(&mut stdout.lock())
}
