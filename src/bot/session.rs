use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};
use uuid::Uuid;

use crate::responses::RandomSource;
use crate::telemetry::{TelemetryEvent, TelemetryRecorder};
use super::responder::Responder;

/// Shown to the user when a turn fails. Nothing partial is ever sent.
pub const APOLOGY: &str = "Sorry, I didn't quite get that.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// One conversation against a shared responder. Owns its randomness and telemetry.
pub struct ChatSession<R> {
    pub id: SessionId,
    responder: Arc<Responder>,
    rng: R,
    pub telemetry: TelemetryRecorder,
}

impl<R: RandomSource> ChatSession<R> {
    pub fn new(responder: Arc<Responder>, rng: R) -> Self {
        Self {
            id: SessionId::new(),
            responder,
            rng,
            telemetry: TelemetryRecorder::new(),
        }
    }

    /// Answers one line. Failures become an apology and a log line.
    pub fn handle(&mut self, line: &str) -> String {
        match self.responder.reply(line, &mut self.rng) {
            Ok(reply) => {
                self.telemetry.record(TelemetryEvent::Classified { category: reply.category });
                reply.text
            }
            Err(e) => {
                warn!(session = %self.id.0, error = %e, "turn failed");
                self.telemetry.record(TelemetryEvent::Failed { kind: e.kind() });
                APOLOGY.to_string()
            }
        }
    }

    /// Reads lines until EOF, writing one reply per non-blank line.
    pub async fn run<I, O>(&mut self, input: I, mut output: O) -> std::io::Result<()>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let reply = self.handle(&line);
            output.write_all(reply.as_bytes()).await?;
            output.write_all(b"\n").await?;
            output.flush().await?;
        }

        let summary = self.telemetry.aggregate_session();
        info!(session = %self.id.0, ?summary, "session closed");
        Ok(())
    }
}
