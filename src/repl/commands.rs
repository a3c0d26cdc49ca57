//! REPL Commands
//!
//! The command table is built once at startup and never mutated; the REPL
//! loop receives it by value.

use std::collections::BTreeMap;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::api::PokeClient;
use crate::error::Result;
use crate::models::LocationAreaPage;

/// What a command does when invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Exit,
    Help,
    Map,
    MapBack,
}

/// Whether the REPL should keep reading input after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// A named REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub action: Action,
}

/// Pagination cursor through the `location-area` listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// URL of the page `map` shows next; `None` means the first page
    pub next: Option<String>,
    /// URL of the page `mapb` shows; `None` on the first page
    pub previous: Option<String>,
}

// == Command Registry ==
/// Immutable lookup table of commands, ordered by name.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, Command>,
}

impl CommandRegistry {
    /// Builds a registry from a list of commands.
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().map(|cmd| (cmd.name, cmd)).collect(),
        }
    }

    /// The standard Pokedex commands.
    pub fn builtin() -> Self {
        Self::new([
            Command {
                name: "exit",
                description: "Exit the Pokedex",
                action: Action::Exit,
            },
            Command {
                name: "help",
                description: "Displays a help message",
                action: Action::Help,
            },
            Command {
                name: "map",
                description: "Explore the next 20 location areas",
                action: Action::Map,
            },
            Command {
                name: "mapb",
                description: "Go back to the previous 20 location areas",
                action: Action::MapBack,
            },
        ])
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }

    // == Execute ==
    /// Runs `command`, writing its output to `out`.
    pub async fn execute<W>(
        &self,
        command: &Command,
        client: &PokeClient,
        session: &mut Session,
        out: &mut W,
    ) -> Result<Flow>
    where
        W: AsyncWrite + Unpin,
    {
        match command.action {
            Action::Exit => command_exit(out).await,
            Action::Help => command_help(self, out).await,
            Action::Map => command_map(client, session, out).await,
            Action::MapBack => command_map_back(client, session, out).await,
        }
    }
}

/// Writes `line` followed by a newline.
pub(crate) async fn write_line<W>(out: &mut W, line: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    Ok(())
}

async fn command_exit<W>(out: &mut W) -> Result<Flow>
where
    W: AsyncWrite + Unpin,
{
    write_line(out, "Closing the Pokedex... Goodbye!").await?;
    Ok(Flow::Exit)
}

async fn command_help<W>(registry: &CommandRegistry, out: &mut W) -> Result<Flow>
where
    W: AsyncWrite + Unpin,
{
    write_line(out, "Welcome to the Pokedex!").await?;
    write_line(out, "Usage:").await?;
    write_line(out, "").await?;
    for cmd in registry.iter() {
        write_line(out, &format!("{}: {}", cmd.name, cmd.description)).await?;
    }
    Ok(Flow::Continue)
}

async fn command_map<W>(client: &PokeClient, session: &mut Session, out: &mut W) -> Result<Flow>
where
    W: AsyncWrite + Unpin,
{
    let page = client.location_areas(session.next.as_deref()).await?;
    show_page(page, session, out).await
}

async fn command_map_back<W>(
    client: &PokeClient,
    session: &mut Session,
    out: &mut W,
) -> Result<Flow>
where
    W: AsyncWrite + Unpin,
{
    let Some(previous) = session.previous.as_deref() else {
        write_line(out, "you're on the first page").await?;
        return Ok(Flow::Continue);
    };

    let page = client.location_areas(Some(previous)).await?;
    show_page(page, session, out).await
}

/// Prints the area names on `page` and moves both cursors to its links.
async fn show_page<W>(page: LocationAreaPage, session: &mut Session, out: &mut W) -> Result<Flow>
where
    W: AsyncWrite + Unpin,
{
    for name in page.names() {
        write_line(out, name).await?;
    }

    session.next = page.next;
    session.previous = page.previous;
    Ok(Flow::Continue)
}
