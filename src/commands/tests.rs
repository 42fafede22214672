use super::*;
use crate::core::confirm::FixedAnswer;
use crate::core::config::Config;
use crate::core::message::Message;
use crate::core::session::{bootstrap_session, SessionOptions};
use tempfile::TempDir;
use tokio::sync::mpsc::UnboundedReceiver;

fn session(options: SessionOptions) -> (ChatSession, UnboundedReceiver<Message>) {
    bootstrap_session(
        &Config::default(),
        SessionOptions {
            env_only: true,
            ..options
        },
    )
    .expect("session should bootstrap")
}

fn next(rx: &mut UnboundedReceiver<Message>) -> Message {
    rx.try_recv().expect("command should render a notice")
}

#[test]
fn plain_text_is_processed_as_a_trimmed_message() {
    let (mut session, _rx) = session(SessionOptions::default());
    assert_eq!(
        process_input(&mut session, "  ola  "),
        CommandResult::ProcessAsMessage("ola".to_string())
    );
}

#[test]
fn unknown_commands_fall_through_as_messages() {
    let (mut session, mut rx) = session(SessionOptions::default());
    assert_eq!(
        process_input(&mut session, "/sqrt(4)"),
        CommandResult::ProcessAsMessage("/sqrt(4)".to_string())
    );
    assert_eq!(
        process_input(&mut session, "/"),
        CommandResult::ProcessAsMessage("/".to_string())
    );
    assert!(rx.try_recv().is_err());
}

#[test]
fn help_lists_every_command() {
    let (mut session, mut rx) = session(SessionOptions::default());
    assert_eq!(process_input(&mut session, "/HELP"), CommandResult::Continue);

    let help = next(&mut rx);
    assert_eq!(help.role, crate::core::message::TranscriptRole::AppInfo);
    for command in all_commands() {
        assert!(help.content.contains(command.usage), "missing {}", command.name);
    }
}

#[test]
fn quit_ends_the_session() {
    let (mut session, _rx) = session(SessionOptions::default());
    assert_eq!(process_input(&mut session, "/quit"), CommandResult::Quit);
}

#[test]
fn log_without_file_reports_error_then_enables_with_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conversa.log");
    let (mut session, mut rx) = session(SessionOptions::default());

    process_input(&mut session, "/log");
    let error = next(&mut rx);
    assert!(error.content.starts_with("Log error: No log file specified"));

    process_input(&mut session, &format!("/log {}", path.display()));
    assert!(next(&mut rx).content.starts_with("Logging enabled to: "));
    assert_eq!(
        session.record.logging.get_status_string(),
        "active (conversa.log)"
    );

    process_input(&mut session, "/log");
    assert!(next(&mut rx).content.starts_with("Logging paused"));

    process_input(&mut session, "/log a b");
    assert_eq!(
        next(&mut rx),
        Message::app_error("Usage: /log [filename] (logging: paused (conversa.log))")
    );
}

#[tokio::test]
async fn dump_writes_conversation_without_notices() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("conversa.txt");
    let path_arg = path.to_string_lossy().into_owned();
    let (mut session, mut rx) = session(SessionOptions {
        no_translate: true,
        ..Default::default()
    });

    process_input(&mut session, &format!("/dump {path_arg}"));
    assert_eq!(
        next(&mut rx),
        Message::app_error("Dump error: No conversation to dump - the chat history is empty.")
    );
    session.record.record(&Message::app_error("ignored"));

    session
        .dispatcher
        .process_turn("ola", &mut FixedAnswer(false))
        .await;
    while let Ok(message) = rx.try_recv() {
        session.record.record(&message);
    }

    process_input(&mut session, &format!("/dump {path_arg}"));
    assert_eq!(
        next(&mut rx),
        Message::app_info(format!("Dumped 2 entries to: {path_arg}"))
    );
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Você: ola\n\nOlá! Como posso ajudar você hoje?\n\n"
    );

    process_input(&mut session, &format!("/dump {path_arg}"));
    assert!(next(&mut rx).content.contains("already exists"));
}

#[tokio::test]
async fn learned_lists_session_answers() {
    let (mut session, mut rx) = session(SessionOptions {
        no_translate: true,
        ..Default::default()
    });

    process_input(&mut session, "/learned");
    assert_eq!(next(&mut rx), Message::app_info("No answers learned yet."));

    session
        .dispatcher
        .process_turn("2*21", &mut FixedAnswer(true))
        .await;
    while rx.try_recv().is_ok() {}

    process_input(&mut session, "/learned");
    assert_eq!(
        next(&mut rx).content,
        "Learned answers (1):\n  2*21 → O resultado de \"2*21\" é 42."
    );
}

#[test]
fn lang_switches_translation_target() {
    let (mut session, mut rx) = session(SessionOptions::default());

    process_input(&mut session, "/lang ES");
    assert_eq!(next(&mut rx), Message::app_info("Translating replies into: es"));
    assert_eq!(session.record.language, "es");
    assert_eq!(
        session.dispatcher.translation().map(|t| t.target_language.as_str()),
        Some("es")
    );

    process_input(&mut session, "/lang");
    assert_eq!(
        next(&mut rx),
        Message::app_error("Usage: /lang <code> (current: es)")
    );
}

#[test]
fn lang_is_refused_when_translation_is_off() {
    let (mut session, mut rx) = session(SessionOptions {
        no_translate: true,
        ..Default::default()
    });

    process_input(&mut session, "/lang fr");
    assert_eq!(
        next(&mut rx),
        Message::app_error("Translation is off for this session.")
    );
    assert_eq!(session.record.language, "en");
}
