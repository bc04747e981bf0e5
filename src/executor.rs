use std::io::Write;

use crate::{run_until_halt, AppResult, Memory, Registers};

#[derive(Debug, Default)]
pub struct ExecutorConfiguration {
    pub trace: bool,
}

/*
 * Executor
 * Runs a loaded program until HLT, writing what PRN and PRA print to the
 * output as it comes and, when tracing, one log line per step to the trace.
 */
#[derive(Debug, Default)]
pub struct Executor {
    configuration: ExecutorConfiguration,
}

impl Executor {
    pub fn new(configuration: ExecutorConfiguration) -> Self {
        Self { configuration }
    }

    /// Returns the number of executed instructions.
    pub fn run<O: Write, T: Write>(
        &self,
        memory: &mut Memory,
        registers: &mut Registers,
        output: &mut O,
        trace: &mut T,
    ) -> AppResult<usize> {
        let mut steps: usize = 0;
        run_until_halt(memory, registers, |log_line| -> AppResult<()> {
            steps += 1;

            if let Some(text) = &log_line.output {
                output.write_all(text.as_bytes())?;
            }
            if self.configuration.trace {
                writeln!(trace, "{}", log_line)?;
            }

            Ok(())
        })?;
        output.flush()?;

        Ok(steps)
    }
}
