use crate::core::message::{Message, TranscriptRole};

/// Formats one entry for the terminal.
///
/// Continuation lines are indented under the prefix so multi-line replies
/// (compound summaries, help) stay readable.
pub fn render_line(message: &Message, language: &str) -> String {
    let prefix = match message.role {
        TranscriptRole::User => "Você: ".to_string(),
        TranscriptRole::Bot => "Bot: ".to_string(),
        TranscriptRole::Translated => format!("Bot [{language}]: "),
        TranscriptRole::AppInfo => "ℹ️  ".to_string(),
        TranscriptRole::AppError => "❌ ".to_string(),
    };

    let mut lines = message.content.lines();
    let mut rendered = format!("{prefix}{}", lines.next().unwrap_or_default());
    for line in lines {
        rendered.push('\n');
        if !line.is_empty() {
            rendered.push_str("  ");
            rendered.push_str(line);
        }
    }
    rendered
}
