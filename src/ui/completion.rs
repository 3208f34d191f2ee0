//! Shell completion scripts for librarian

use clap::{Command, CommandFactory};
use clap_complete::{Generator, generate};

use std::io::Write;

/// Write shell completions for `app` to `out`
pub fn write_completions<G: Generator>(generator: G, app: &mut Command, out: &mut dyn Write) {
    let name = app.get_name().to_string();
    generate(generator, app, name, out);
}

/// Print shell completions to stdout
pub fn print_completions<G: Generator>(generator: G, app: &mut Command) {
    write_completions(generator, app, &mut std::io::stdout());
}

/// Generate the completion script for the librarian CLI as a string
pub fn generate_completion_script(shell: clap_complete::Shell) -> Result<String, String> {
    let mut cmd = crate::ui::cli::Cli::command();
    let mut buf = Vec::new();

    write_completions(shell, &mut cmd, &mut buf);

    String::from_utf8(buf).map_err(|e| format!("Failed to generate completion script: {e}"))
}
