mod registry;

pub use registry::{all_commands, CommandInvocation};

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::Local;

use crate::core::session::{ChatSession, SessionRecord};
use crate::utils::logging::transcript_text;

#[derive(Debug, PartialEq, Eq)]
pub enum CommandResult {
    Continue,
    ProcessAsMessage(String),
    Quit,
}

/// Runs a slash command, or hands the trimmed input back as a chat message.
pub fn process_input(session: &mut ChatSession, input: &str) -> CommandResult {
    let trimmed = input.trim();

    let Some(rest) = trimmed.strip_prefix('/') else {
        return CommandResult::ProcessAsMessage(trimmed.to_string());
    };

    let mut parts = rest.splitn(2, ' ');
    let command_name = match parts.next() {
        Some(name) if !name.is_empty() => name,
        _ => return CommandResult::ProcessAsMessage(trimmed.to_string()),
    };
    let args = parts.next().unwrap_or("").trim();

    match registry::find_command(command_name) {
        Some(command) => (command.handler)(
            session,
            CommandInvocation {
                input: trimmed,
                args,
            },
        ),
        None => CommandResult::ProcessAsMessage(trimmed.to_string()),
    }
}

pub(super) fn handle_help(session: &mut ChatSession, _invocation: CommandInvocation<'_>) -> CommandResult {
    let mut help = String::from("Commands:");
    for command in all_commands() {
        help.push_str(&format!("\n  {:<16} {}", command.usage, command.help));
    }
    help.push_str("\nAnything else is sent to the bot.");
    session.notify(help);
    CommandResult::Continue
}

pub(super) fn handle_log(session: &mut ChatSession, invocation: CommandInvocation<'_>) -> CommandResult {
    let parts: Vec<&str> = invocation.input.split_whitespace().collect();

    let result = match parts.len() {
        1 => session.record.logging.toggle_logging(),
        2 => session.record.logging.set_log_file(parts[1].to_string()),
        _ => {
            session.notify_error(format!(
                "Usage: /log [filename] (logging: {})",
                session.record.logging.get_status_string()
            ));
            return CommandResult::Continue;
        }
    };
    match result {
        Ok(message) => session.notify(message),
        Err(e) => session.notify_error(format!("Log error: {e}")),
    }
    CommandResult::Continue
}

pub(super) fn handle_dump(session: &mut ChatSession, invocation: CommandInvocation<'_>) -> CommandResult {
    let filename = match invocation.args {
        "" => format!("papagaio-log-{}.txt", Local::now().format("%Y-%m-%d")),
        args if args.contains(char::is_whitespace) => {
            session.notify_error("Usage: /dump [filename]");
            return CommandResult::Continue;
        }
        args => args.to_string(),
    };

    match dump_conversation(&session.record, &filename) {
        Ok(count) => session.notify(format!("Dumped {count} entries to: {filename}")),
        Err(e) => session.notify_error(format!("Dump error: {e}")),
    }
    CommandResult::Continue
}

/// Writes the conversation so far, without app notices, to a new file.
pub fn dump_conversation(record: &SessionRecord, filename: &str) -> Result<usize, Box<dyn Error>> {
    let entries: Vec<_> = record
        .transcript
        .entries()
        .iter()
        .filter(|message| !message.role.is_app())
        .collect();

    if entries.is_empty() {
        return Err("No conversation to dump - the chat history is empty.".into());
    }
    if Path::new(filename).exists() {
        return Err(format!(
            "File '{filename}' already exists. Please specify a different filename with /dump <filename>."
        )
        .into());
    }

    let mut writer = BufWriter::new(File::create(filename)?);
    for message in &entries {
        writeln!(writer, "{}", transcript_text(message, &record.language))?;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(entries.len())
}

pub(super) fn handle_learned(session: &mut ChatSession, _invocation: CommandInvocation<'_>) -> CommandResult {
    let learned = session.dispatcher.store().learned();
    if learned.is_empty() {
        session.notify("No answers learned yet.");
        return CommandResult::Continue;
    }

    let mut listing = format!("Learned answers ({}):", learned.len());
    for (question, answer) in learned {
        listing.push_str(&format!("\n  {question} → {answer}"));
    }
    session.notify(listing);
    CommandResult::Continue
}

pub(super) fn handle_lang(session: &mut ChatSession, invocation: CommandInvocation<'_>) -> CommandResult {
    let code = invocation.args;
    if code.is_empty() || code.contains(char::is_whitespace) {
        let current = session
            .dispatcher
            .translation()
            .map(|settings| settings.target_language.clone());
        match current {
            Some(language) => session.notify_error(format!("Usage: /lang <code> (current: {language})")),
            None => session.notify_error("Usage: /lang <code> (translation is off)"),
        }
        return CommandResult::Continue;
    }

    if session.dispatcher.set_target_language(code) {
        session.record.language = code.to_lowercase();
        session.notify(format!("Translating replies into: {}", code.to_lowercase()));
    } else {
        session.notify_error("Translation is off for this session.");
    }
    CommandResult::Continue
}

pub(super) fn handle_quit(_session: &mut ChatSession, _invocation: CommandInvocation<'_>) -> CommandResult {
    CommandResult::Quit
}

#[cfg(test)]
mod tests;
