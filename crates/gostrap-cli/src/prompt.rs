//! Prompts for values missing from the command line.
//!
//! With the `interactive` feature and a terminal on stdin, prompts go through
//! `dialoguer`.  Otherwise a single line is read from stdin, so piped input
//! (`printf 'shopapi\n\n' | gostrap`) works the same way.

use std::io::{self, BufRead, Write};

use crate::error::{CliResult, IntoCli};

/// Ask for the project name.  Whitespace around the answer is dropped.
pub fn project_name() -> CliResult<String> {
    ask("Project name", false)
}

/// Ask for the destination.  An empty answer means the current directory.
pub fn destination() -> CliResult<String> {
    ask("Destination (empty for current directory)", true)
}

#[cfg(feature = "interactive")]
fn ask(prompt: &str, allow_empty: bool) -> CliResult<String> {
    use std::io::IsTerminal;

    if !io::stdin().is_terminal() {
        return ask_line(prompt, &mut io::stdin().lock());
    }

    let answer: String = dialoguer::Input::with_theme(&dialoguer::theme::ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(allow_empty)
        .interact_text()
        .map_err(io::Error::from)
        .with_cli_context(|| format!("reading {}", prompt.to_lowercase()))?;
    Ok(answer.trim().to_string())
}

#[cfg(not(feature = "interactive"))]
fn ask(prompt: &str, _allow_empty: bool) -> CliResult<String> {
    ask_line(prompt, &mut io::stdin().lock())
}

/// Prompt on stderr and read one line.  End of input counts as an empty answer.
fn ask_line(prompt: &str, input: &mut impl BufRead) -> CliResult<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{prompt}: ")
        .and_then(|()| stderr.flush())
        .with_cli_context(|| "writing prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .with_cli_context(|| format!("reading {}", prompt.to_lowercase()))?;
    Ok(line.trim().to_string())
}
