// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::{Args, Parser};

pub const DEFAULT_HISTORY_FILE: &str = "history.txt";

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "computer")]
#[command(about = "A tiny command shell with completion and history")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nUSAGE:\n  computer [\x1b[34moptions\x1b[0m]\n\nKEYS:\n  Tab complete, Tab Tab or ? list commands, Ctrl-R search history, Ctrl-D quit\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(
        long,
        default_value = DEFAULT_HISTORY_FILE,
        help = "File that history is loaded from on start, and saved to after each command."
    )]
    pub history_file: String,

    #[arg(long, help = "Number of history entries to keep. Must be at least 1.")]
    pub max_history: Option<usize>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging."
    )]
    pub enable_logging: bool,
}
