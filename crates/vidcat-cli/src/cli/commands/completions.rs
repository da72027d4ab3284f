//! `vidcat completions <shell>` – emit a completion script.

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

use crate::cli::Cli;

pub fn run_completions(shell: Shell) {
    write_completions(shell, &mut io::stdout());
}

/// Writes the completion script for `shell`; needs no config or database.
fn write_completions(shell: Shell, out: &mut impl Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "vidcat", out);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bash_script_lists_subcommands() {
        let mut out = Vec::new();
        write_completions(Shell::Bash, &mut out);
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("vidcat"));
        for sub in ["add", "list", "show", "remove", "completions"] {
            assert!(script.contains(sub), "missing {sub}");
        }
    }
}
