use dialoguer::Input;
use shared::types::Result;
use std::io::{BufRead, IsTerminal, Write};

pub const QUESTION_PROMPT: &str = "Faça sua pergunta";

/// Read one line of input. Empty input is accepted as-is.
///
/// On a terminal the prompt goes through dialoguer; when stdin is piped or redirected the line is
/// read straight from stdin.
pub fn ask_user_prompt() -> Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        let question: String = Input::new()
            .with_prompt(QUESTION_PROMPT)
            .allow_empty(true)
            .interact_text()?;
        return Ok(question);
    }

    let mut stdout = std::io::stdout();
    write!(stdout, "{}: ", QUESTION_PROMPT)?;
    stdout.flush()?;
    read_question_from(stdin.lock())
}

/// One line from `reader` without its line ending. End of input yields an empty question.
pub fn read_question_from<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\n', '\r']);
    Ok(trimmed.to_string())
}
