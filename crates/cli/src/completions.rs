// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `baton completions <shell>` - tab completion for subcommands and flags
//!
//! The script is written to stdout, so it can be sourced directly:
//!
//! ```bash
//! source <(baton completions bash)
//! baton completions fish | source
//! ```

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

/// Write the completion script for `shell`, covering every `baton` subcommand.
pub fn generate_completions<C: CommandFactory>(shell: Shell) {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "baton", &mut io::stdout());
}

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
