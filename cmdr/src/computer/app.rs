// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{CLIArg, CommandResult, complete_command, run_command};
use keyline::{EditorConfig, Readline, ReadlineError, ReadlineEvent, ok};
use miette::IntoDiagnostic;
use std::{io::{Read, Write},
          path::Path};

pub const PROMPT: &str = "computer> ";

/// What the main loop does with the result of one [`Readline::read_line`] call.
#[derive(Debug)]
enum ControlFlow {
    ProcessLine(String),
    Exit,
    Fail(ReadlineError),
}

impl From<Result<ReadlineEvent, ReadlineError>> for ControlFlow {
    fn from(result_readline_event: Result<ReadlineEvent, ReadlineError>) -> Self {
        match result_readline_event {
            Ok(ReadlineEvent::Line(line)) => ControlFlow::ProcessLine(line),
            Ok(ReadlineEvent::Eof | ReadlineEvent::Interrupted) => ControlFlow::Exit,
            Err(error) => ControlFlow::Fail(error),
        }
    }
}

/// Run the shell on the terminal until `quit`, Ctrl-D or Ctrl-C.
///
/// # Errors
///
/// Returns an error if `--max-history` is 0, or the terminal stops working.
pub fn run_app(cli_arg: &CLIArg) -> miette::Result<()> {
    let mut readline = Readline::new_stdio(EditorConfig::default());
    if let Some(max_history) = cli_arg.max_history {
        readline
            .history_mut()
            .set_max_len(max_history)
            .into_diagnostic()?;
    }
    readline.set_completer(complete_command);

    let history_file = Path::new(&cli_arg.history_file);
    load_history(&mut readline, history_file);

    let mut stdout = std::io::stdout();
    let result = run_loop(&mut readline, history_file, &mut stdout);
    save_history(&readline, history_file);
    result
}

/// Read, dispatch and save history after every command.
///
/// # Errors
///
/// Returns the first fatal editor error, or a failure to write command output.
pub fn run_loop<R: Read, W: Write>(
    readline: &mut Readline<R, W>,
    history_file: &Path,
    out: &mut impl Write,
) -> miette::Result<()> {
    loop {
        match ControlFlow::from(readline.read_line(PROMPT)) {
            ControlFlow::ProcessLine(line) => {
                if line.is_empty() {
                    continue;
                }
                // % is Display, ? is Debug.
                tracing::debug!(message = "command", line = %line);
                let result = run_command(&line, out).into_diagnostic()?;
                save_history(readline, history_file);
                if result == CommandResult::Quit {
                    break;
                }
            }
            ControlFlow::Exit => break,
            ControlFlow::Fail(error) => {
                tracing::error!(message = "read_line failed", error = %error);
                return Err(miette::miette!("failed to read line: {error}"));
            }
        }
    }
    ok!()
}

/// Failures are reported and otherwise ignored.
pub fn load_history<R: Read, W: Write>(readline: &mut Readline<R, W>, path: &Path) {
    if let Err(error) = readline.history_mut().load_from_file(path) {
        tracing::warn!(message = "history not loaded", error = %error);
        eprintln!("{error}");
    }
}

/// Failures are reported and otherwise ignored.
pub fn save_history<R: Read, W: Write>(readline: &Readline<R, W>, path: &Path) {
    if let Err(error) = readline.history().save_to_file(path) {
        tracing::warn!(message = "history not saved", error = %error);
        eprintln!("{error}");
    }
}
