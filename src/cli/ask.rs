use std::error::Error;
use std::io::Write;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::core::config::Config;
use crate::core::confirm::FixedAnswer;
use crate::core::message::Message;
use crate::core::session::{bootstrap_session, ChatSession, SessionOptions};
use crate::ui::chat_loop::Screen;

pub async fn run_ask(
    config: &Config,
    options: SessionOptions,
    message: &str,
) -> Result<(), Box<dyn Error>> {
    let (session, rx) = bootstrap_session(config, options)?;
    ask(session, rx, message, std::io::stdout()).await
}

/// Answers one message and returns once every lookup it started has
/// rendered its result.
pub async fn ask<W: Write>(
    session: ChatSession,
    mut rx: UnboundedReceiver<Message>,
    message: &str,
    out: W,
) -> Result<(), Box<dyn Error>> {
    let message = message.trim();
    if message.is_empty() {
        return Err("nothing to ask".into());
    }

    let ChatSession {
        mut dispatcher,
        sink,
        mut record,
        auto_accept,
        ..
    } = session;
    drop(sink);

    let outcome = dispatcher
        .process_turn(message, &mut FixedAnswer(auto_accept))
        .await;
    // The receiver closes once the dispatcher and every flow task let go of
    // their senders.
    drop(dispatcher);
    outcome.join().await;

    let mut screen = Screen::new(out);
    while let Some(entry) = rx.recv().await {
        screen.show(&mut record, entry)?;
    }
    Ok(())
}
