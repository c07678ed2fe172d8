// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use keyline::Completion;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Generic,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub token: &'static str,
    pub help: &'static str,
    pub kind: CommandKind,
}

const fn command(token: &'static str, help: &'static str, kind: CommandKind) -> Command {
    Command { token, help, kind }
}

pub static COMMANDS: [Command; 15] = [
    command("hello", "help for hello", CommandKind::Help),
    command("helo", "help for helo", CommandKind::Help),
    command("joe", "help for joe", CommandKind::Generic),
    command("james", "help for james", CommandKind::Generic),
    command("quit", "quit from computer", CommandKind::Quit),
    command("blah0", "help for blah0", CommandKind::Generic),
    command("blah1", "help for blah1", CommandKind::Generic),
    command("blah2", "help for blah2", CommandKind::Generic),
    command("blah3", "help for blah3", CommandKind::Generic),
    command("blah4", "help for blah4", CommandKind::Generic),
    command("blah5", "help for blah5", CommandKind::Generic),
    command("blah6", "help for blah6", CommandKind::Generic),
    command("blah7", "help for blah7", CommandKind::Generic),
    command("blah8", "help for blah8", CommandKind::Generic),
    command("blah9", "help for blah9", CommandKind::Generic),
];

/// Commands whose token starts with `prefix`, in table order.
pub fn matching_commands(prefix: &str) -> impl Iterator<Item = &'static Command> {
    COMMANDS.iter().filter(move |it| it.token.starts_with(prefix))
}

/// Completer installed on the editor.
#[must_use]
pub fn complete_command(line: &str) -> Vec<Completion> {
    matching_commands(line)
        .map(|it| Completion::new(it.token, it.help))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Run(&'static Command),
    NoMatch,
    Ambiguous(Vec<&'static str>),
}

/// A line runs the command it is a prefix of, if there is exactly one.
#[must_use]
pub fn dispatch(line: &str) -> Dispatch {
    let found: Vec<_> = matching_commands(line).collect();
    match found.as_slice() {
        [] => Dispatch::NoMatch,
        [only] => Dispatch::Run(*only),
        many => Dispatch::Ambiguous(many.iter().map(|it| it.token).collect()),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandResult {
    KeepGoing,
    Quit,
}

/// Run `line` and write what it says to `out`.
///
/// # Errors
///
/// Returns the write error, if any.
pub fn run_command(line: &str, out: &mut impl Write) -> io::Result<CommandResult> {
    match dispatch(line) {
        Dispatch::Run(command) => match command.kind {
            CommandKind::Help => writeln!(out, "help for '{line}'")?,
            CommandKind::Generic => writeln!(out, "generic for '{line}'")?,
            CommandKind::Quit => return Ok(CommandResult::Quit),
        },
        Dispatch::NoMatch => writeln!(out, "no commands matched")?,
        Dispatch::Ambiguous(tokens) => {
            writeln!(out, "more than one command matched: {}", tokens.join(" "))?;
        }
    }
    out.flush()?;
    Ok(CommandResult::KeepGoing)
}
