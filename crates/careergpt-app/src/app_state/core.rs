//! ChatApp struct and the input/answer event loop.

use std::io::Write;
use std::sync::Arc;

use careergpt_ai::{AnswerClient, ChatSession, SubmitError};
use careergpt_common::{CareerError, Message};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::{JoinError, JoinHandle};

use super::input::{parse_command, Command};
use super::render;

type PendingAnswer = JoinHandle<Result<Message, SubmitError>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Terminal chat front end over a shared `ChatSession`.
pub struct ChatApp<W: Write> {
    session: Arc<ChatSession>,
    client: Arc<dyn AnswerClient>,
    out: W,
    /// The one in-flight request, if any.
    pending: Option<PendingAnswer>,
}

impl<W: Write> ChatApp<W> {
    pub fn new(session: Arc<ChatSession>, client: Arc<dyn AnswerClient>, out: W) -> Self {
        Self {
            session,
            client,
            out,
            pending: None,
        }
    }

    /// Run until `/quit` or end of input.
    ///
    /// An answer still being generated at that point is waited for and
    /// printed before returning.
    pub async fn run<R>(mut self, mut reader: R) -> Result<(), CareerError>
    where
        R: AsyncBufRead + Unpin,
    {
        writeln!(self.out, "{}", render::welcome())?;
        self.out.flush()?;

        // Partial reads stay here when the answer branch wins the select
        let mut buf = Vec::new();
        loop {
            tokio::select! {
                // A finished answer is shown before the next line is read
                biased;

                joined = wait_pending(&mut self.pending) => {
                    self.pending = None;
                    self.on_answer(joined)?;
                }
                read = reader.read_until(b'\n', &mut buf) => {
                    if read? == 0 && buf.is_empty() {
                        break;
                    }
                    let line = decode_line(&buf);
                    buf.clear();
                    if self.on_line(&line)? == Flow::Quit {
                        break;
                    }
                }
            }
            self.out.flush()?;
        }

        if let Some(handle) = self.pending.take() {
            let joined = handle.await;
            self.on_answer(joined)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn on_line(&mut self, line: &str) -> Result<Flow, CareerError> {
        match parse_command(line) {
            Command::Ask(text) => self.ask(text)?,
            Command::History => {
                let snapshot = self.session.snapshot();
                writeln!(
                    self.out,
                    "{}",
                    render::history(&snapshot.history, snapshot.selected)
                )?;
            }
            Command::Select(n) => self.select(n)?,
            Command::Help => writeln!(self.out, "{}", render::help())?,
            Command::Invalid(msg) => writeln!(self.out, "{msg}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn ask(&mut self, text: String) -> Result<(), CareerError> {
        if text.trim().is_empty() {
            return Ok(());
        }
        if self.pending.is_some() {
            writeln!(self.out, "{}", render::BUSY_NOTICE)?;
            return Ok(());
        }

        writeln!(self.out, "{}", render::message(&Message::question(text.as_str())))?;
        writeln!(self.out, "{}", render::PENDING_INDICATOR)?;

        let session = Arc::clone(&self.session);
        let client = Arc::clone(&self.client);
        self.session.set_draft(text);
        self.pending = Some(tokio::spawn(async move {
            session.submit_draft(client.as_ref()).await
        }));
        Ok(())
    }

    fn select(&mut self, n: usize) -> Result<(), CareerError> {
        let history = self.session.history();
        match n.checked_sub(1).and_then(|i| history.get(i)) {
            Some(entry) if self.session.select_history_entry(entry.id) => {
                writeln!(self.out, "Selected: {}", entry.question.trim())?;
            }
            _ => writeln!(self.out, "No history entry {n}")?,
        }
        Ok(())
    }

    fn on_answer(
        &mut self,
        joined: Result<Result<Message, SubmitError>, JoinError>,
    ) -> Result<(), CareerError> {
        match joined {
            Ok(Ok(answer)) => writeln!(self.out, "{}", render::message(&answer))?,
            Ok(Err(SubmitError::Busy)) => writeln!(self.out, "{}", render::BUSY_NOTICE)?,
            Ok(Err(SubmitError::EmptyQuestion)) => {}
            Err(e) => {
                tracing::error!("answer task failed: {e}");
                return Err(CareerError::AnswerTask(e.to_string()));
            }
        }
        Ok(())
    }
}

/// Strip the line ending; bytes that are not UTF-8 become U+FFFD.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

async fn wait_pending(
    pending: &mut Option<PendingAnswer>,
) -> Result<Result<Message, SubmitError>, JoinError> {
    match pending {
        Some(handle) => handle.await,
        None => std::future::pending().await,
    }
}
