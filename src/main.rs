// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::ffi::OsString;
use std::io;

use anyhow::Result;
use clap::Parser;

use hullo::write_greeting;

/// Print a fixed greeting to standard output.
///
/// Every invocation writes the same single line and exits with status
/// 0. The automatic help and version flags are disabled so that no
/// argument, flag-shaped or otherwise, changes the output.
#[derive(Debug, Parser)]
#[clap(name = env!("CARGO_CRATE_NAME"))]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct App {
    /// accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    args: Vec<OsString>,
}

fn main() -> Result<()> {
    let _args = App::parse();

    let stdout = io::stdout();
    write_greeting(&mut stdout.lock())?;

    Ok(())
}
