//! Plain-text rendering of messages, history and static screens.
//!
//! Answer text is printed as received; markdown is left for the reader's
//! terminal or pager to deal with.

use careergpt_common::{HistoryEntry, HistoryId, Message, Role};

pub(super) const PENDING_INDICATOR: &str = "Analyzing your career query...";

pub(super) const BUSY_NOTICE: &str =
    "Still working on your previous question, please wait for the answer.";

/// History questions longer than this are cut in the listing.
const HISTORY_QUESTION_WIDTH: usize = 60;

pub(super) fn welcome() -> String {
    [
        "CareerGPT",
        "",
        "Welcome to Career Advisor AI!",
        "I'm here to help guide your career journey. Ask me about:",
        "  - Career Paths",
        "  - Study Materials",
        "  - Learning Roadmaps",
        "  - Industry Insights",
        "",
        "Type your career-related questions below! (/help for commands)",
        "",
    ]
    .join("\n")
}

pub(super) fn help() -> String {
    [
        "Commands:",
        "  /history       list the questions asked in this session",
        "  /select <n>    select question n from the history",
        "  /help          show this help",
        "  /quit          leave (also Ctrl-D)",
        "Anything else is sent as a question.",
    ]
    .join("\n")
}

pub(super) fn message(msg: &Message) -> String {
    match msg.role() {
        Role::Question => format!("you> {}", msg.text()),
        Role::Answer => format!("advisor>\n{}\n", msg.text()),
    }
}

pub(super) fn history(entries: &[HistoryEntry], selected: Option<HistoryId>) -> String {
    let mut out = String::from("Search History");
    if entries.is_empty() {
        out.push_str("\n  (no questions yet)");
        return out;
    }

    for (i, entry) in entries.iter().enumerate() {
        let marker = if Some(entry.id) == selected { '*' } else { ' ' };
        out.push_str(&format!(
            "\n{marker}{:>3}. {}\n      {}",
            i + 1,
            truncate(entry.question.trim(), HISTORY_QUESTION_WIDTH),
            entry.display_timestamp()
        ));
    }
    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let cut: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{cut}...")
}
