//! REPL Module
//!
//! Interactive loop that reads commands and pages through location areas.

mod commands;
mod input;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::api::PokeClient;
use crate::error::Result;

pub use commands::{Action, Command, CommandRegistry, Flow, Session};
pub use input::clean_input;

use commands::write_line;

/// Prompt printed before each line of input
pub const PROMPT: &str = "Pokedex > ";

/// The read-eval-print loop and its pagination state.
#[derive(Debug)]
pub struct Repl {
    registry: CommandRegistry,
    client: PokeClient,
    session: Session,
}

impl Repl {
    pub fn new(registry: CommandRegistry, client: PokeClient) -> Self {
        Self {
            registry,
            client,
            session: Session::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // == Run ==
    /// Reads lines from `input` until `exit` or end of input.
    ///
    /// Command failures are printed and the loop continues; only I/O errors
    /// on `input` or `out` end it early.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();

        loop {
            out.write_all(PROMPT.as_bytes()).await?;
            out.flush().await?;

            let Some(line) = lines.next_line().await? else {
                debug!("End of input");
                break;
            };

            if self.dispatch(&line, out).await? == Flow::Exit {
                break;
            }
        }

        out.flush().await?;
        Ok(())
    }

    // == Dispatch ==
    /// Interprets one line of input.
    pub async fn dispatch<W>(&mut self, line: &str, out: &mut W) -> Result<Flow>
    where
        W: AsyncWrite + Unpin,
    {
        let words = clean_input(line);
        let Some(name) = words.first() else {
            return Ok(Flow::Continue);
        };

        let Some(command) = self.registry.get(name) else {
            write_line(out, "Unknown command").await?;
            return Ok(Flow::Continue);
        };

        match self
            .registry
            .execute(command, &self.client, &mut self.session, out)
            .await
        {
            Ok(flow) => Ok(flow),
            Err(err) => {
                warn!(command = command.name, "Command failed: {}", err);
                write_line(out, &format!("Error: {}", err)).await?;
                Ok(Flow::Continue)
            }
        }
    }
}
