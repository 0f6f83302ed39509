//! Input line parsing.

/// What the user asked for with one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Command {
    /// Plain text: submit it as a question.
    Ask(String),
    /// `/history`: list submitted questions.
    History,
    /// `/select <n>`: select the n-th history entry (1-based).
    Select(usize),
    Help,
    Quit,
    /// Unknown command or bad arguments, with a message for the user.
    Invalid(String),
}

pub(super) fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Command::Ask(line.to_string());
    };

    let mut words = rest.split_whitespace();
    let name = words.next().unwrap_or("");
    let arg = words.next();

    match (name, arg) {
        ("history" | "h", None) => Command::History,
        ("help" | "?", None) => Command::Help,
        ("quit" | "exit" | "q", None) => Command::Quit,
        ("select" | "s", Some(n)) => match n.parse::<usize>() {
            Ok(n) if n >= 1 && words.next().is_none() => Command::Select(n),
            _ => Command::Invalid(format!("not a history number: {n}")),
        },
        ("select" | "s", None) => Command::Invalid("usage: /select <number>".into()),
        _ => Command::Invalid(format!("unknown command: /{rest}")),
    }
}
