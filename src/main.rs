/*
 * This is the CLI frontend for the LS-8 library.
 */
use std::io;
use std::path::PathBuf;
use std::process;

use ansi_term::Colour;
use anyhow::{Context, Result};
use clap::Parser;

use ls8::memory::hex_dump;
use ls8::{load_program, Executor, ExecutorConfiguration, Memory, Registers};

/// LS-8 emulator
/// Loads a .ls8 program file (one 8 bits binary literal per line) at address
/// 0x00 and runs it until HLT. PRN and PRA output goes to standard output.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct CommandLineArguments {
    /// Program file location
    program: PathBuf,

    /// Print the execution trace on standard error
    #[arg(short, long)]
    trace: bool,

    /// Dump registers and memory on standard error after HLT
    #[arg(short, long)]
    dump: bool,
}

fn main() {
    let parameters = CommandLineArguments::parse();

    if let Err(e) = run(parameters) {
        print_err(&format!("{:#}", e));
        process::exit(1);
    }
}

fn run(parameters: CommandLineArguments) -> Result<()> {
    let mut memory = Memory::default();
    load_program(&parameters.program, &mut memory)
        .with_context(|| format!("could not load '{}'", parameters.program.display()))?;

    let mut registers = Registers::new(0x00);
    let executor = Executor::new(ExecutorConfiguration {
        trace: parameters.trace,
    });
    let stdout = io::stdout();
    let stderr = io::stderr();
    executor.run(
        &mut memory,
        &mut registers,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;

    if parameters.dump {
        eprintln!("{:?}", registers);
        for line in hex_dump(&memory)? {
            eprintln!("{}", line);
        }
    }

    Ok(())
}

fn print_err(msg: &str) {
    eprintln!("{}: {}", Colour::Red.paint("Error"), msg);
}
