//! Line-oriented chat session.
//!
//! Input lines and finished background flows race in one `select!`, so a
//! late PubChem or search result prints as soon as it lands, even while the
//! user is typing the next question.

use std::error::Error;
use std::io::{self, Write};

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::commands::{process_input, CommandResult};
use crate::core::confirm::Confirm;
use crate::core::message::Message;
use crate::core::session::{ChatSession, SessionRecord};
use crate::ui::render::render_line;

/// Writes rendered entries and mirrors them into the session record.
pub struct Screen<W> {
    out: W,
}

impl<W: Write> Screen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn show(&mut self, record: &mut SessionRecord, message: Message) -> io::Result<()> {
        writeln!(self.out, "{}", render_line(&message, &record.language))?;
        self.out.flush()?;
        record.record(&message);
        Ok(())
    }

    /// Prints everything already queued without waiting for more.
    pub fn show_pending(
        &mut self,
        record: &mut SessionRecord,
        rx: &mut UnboundedReceiver<Message>,
    ) -> io::Result<()> {
        while let Ok(message) = rx.try_recv() {
            self.show(record, message)?;
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }
}

/// Interprets an answer to the learning prompt. Empty input means no;
/// anything unrecognised asks again.
pub fn parse_confirmation(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "s" | "sim" | "y" | "yes" => Some(true),
        "" | "n" | "nao" | "não" | "no" => Some(false),
        _ => None,
    }
}

struct TerminalConfirm<'a, R, W> {
    screen: &'a mut Screen<W>,
    record: &'a mut SessionRecord,
    input: &'a mut Lines<R>,
    rx: &'a mut UnboundedReceiver<Message>,
    auto_accept: bool,
}

#[async_trait]
impl<'a, R, W> Confirm for TerminalConfirm<'a, R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    async fn confirm(&mut self, prompt: &str) -> bool {
        // The reply being judged has to be on screen before the question.
        if let Err(err) = self.screen.show_pending(self.record, self.rx) {
            warn!(error = %err, "failed to write pending entries");
        }
        if self.auto_accept {
            return true;
        }
        loop {
            if let Err(err) = self.screen.prompt(&format!("{prompt} (s/n) ")) {
                warn!(error = %err, "failed to write prompt");
                return false;
            }
            match self.input.next_line().await {
                Ok(Some(line)) => {
                    if let Some(answer) = parse_confirmation(&line) {
                        return answer;
                    }
                }
                Ok(None) => return false,
                Err(err) => {
                    warn!(error = %err, "failed to read confirmation");
                    return false;
                }
            }
        }
    }
}

/// Runs the interactive session until `/quit` or end of input.
///
/// At end of input, lookups still in flight are awaited so piped questions
/// get their answers; `/quit` leaves immediately.
pub async fn run_chat<R, W>(
    mut session: ChatSession,
    mut rx: UnboundedReceiver<Message>,
    input: R,
    out: W,
) -> Result<(), Box<dyn Error>>
where
    R: AsyncBufRead + Unpin + Send,
    W: Write + Send,
{
    let mut screen = Screen::new(out);
    let mut lines = input.lines();
    let mut in_flight: Vec<JoinHandle<()>> = Vec::new();

    loop {
        screen.show_pending(&mut session.record, &mut rx)?;
        in_flight.retain(|handle| !handle.is_finished());

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    for handle in in_flight.drain(..) {
                        if let Err(err) = handle.await {
                            debug!(error = %err, "flow task ended abnormally");
                        }
                    }
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }

                match process_input(&mut session, &line) {
                    CommandResult::Continue => {}
                    CommandResult::Quit => break,
                    CommandResult::ProcessAsMessage(message) => {
                        let ChatSession { dispatcher, record, auto_accept, .. } = &mut session;
                        let mut confirm = TerminalConfirm {
                            screen: &mut screen,
                            record,
                            input: &mut lines,
                            rx: &mut rx,
                            auto_accept: *auto_accept,
                        };
                        let outcome = dispatcher.process_turn(&message, &mut confirm).await;
                        debug!(flows = ?outcome.flow_kinds(), learned = outcome.learned, "turn finished");
                        in_flight.extend(outcome.flows.into_iter().map(|(_, handle)| handle));
                    }
                }
            }
            Some(message) = rx.recv() => {
                screen.show(&mut session.record, message)?;
            }
        }
    }

    screen.show_pending(&mut session.record, &mut rx)?;
    Ok(())
}
