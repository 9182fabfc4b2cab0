use crate::classifier::PatternLabel;

/// One line of interactive quiz input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCommand {
    Guess(PatternLabel),
    Skip,
    Score,
    Quit,
}

/// Map a typed answer line to a command. Guesses accept full names and the
/// single-letter shortcuts shown in the prompt (d / u / b).
pub fn parse_quiz_command(line: &str) -> Option<QuizCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => Some(QuizCommand::Quit),
        "s" | "skip" => Some(QuizCommand::Skip),
        "score" => Some(QuizCommand::Score),
        other => other.parse::<PatternLabel>().ok().map(QuizCommand::Guess),
    }
}
