// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use keyline::{ok, try_initialize_logging_global};
use keyline_cmdr::{CLIArg, run_app};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    enable_logging.then(|| {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    run_app(&cli_arg)?;

    enable_logging.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    ok!()
}
