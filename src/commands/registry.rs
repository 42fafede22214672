use super::CommandResult;
use crate::core::session::ChatSession;

pub type CommandHandler = fn(&mut ChatSession, CommandInvocation<'_>) -> CommandResult;

pub struct Command {
    pub name: &'static str,
    pub usage: &'static str,
    pub help: &'static str,
    pub handler: CommandHandler,
}

#[derive(Clone, Copy)]
pub struct CommandInvocation<'a> {
    pub input: &'a str,
    pub args: &'a str,
}

pub fn all_commands() -> &'static [Command] {
    COMMANDS
}

pub fn find_command(name: &str) -> Option<&'static Command> {
    all_commands()
        .iter()
        .find(|command| command.name.eq_ignore_ascii_case(name))
}

const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        usage: "/help",
        help: "Show available commands.",
        handler: super::handle_help,
    },
    Command {
        name: "log",
        usage: "/log [filename]",
        help: "Start logging to a file, or pause/resume the current log.",
        handler: super::handle_log,
    },
    Command {
        name: "dump",
        usage: "/dump [filename]",
        help: "Save the conversation so far to a file.",
        handler: super::handle_dump,
    },
    Command {
        name: "learned",
        usage: "/learned",
        help: "List the answers learned in this session.",
        handler: super::handle_learned,
    },
    Command {
        name: "lang",
        usage: "/lang <code>",
        help: "Translate later replies into another language.",
        handler: super::handle_lang,
    },
    Command {
        name: "quit",
        usage: "/quit",
        help: "End the session.",
        handler: super::handle_quit,
    },
];
