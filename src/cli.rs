//! Command line interface
//!
//! `run` keeps the watcher going until Ctrl+C. Every other command is one
//! request through the same core runtime, started without a watcher.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local, Utc};
use clap::{Parser, Subcommand};
use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use ck_app::{AppPaths, CoreError, CoreHandle, CoreNotification};
use ck_core::config::AppConfig;
use ck_core::ports::HistoryStoreError;
use ck_core::{Snapshot, SnapshotId, SnapshotKind};

use crate::bootstrap::wiring::paste_simulator;
use crate::bootstrap::{AppMode, ClipKeepApp};

#[derive(Debug, Parser)]
#[command(name = "clipkeep", version, about = "Clipboard history keeper")]
pub struct Cli {
    /// Configuration file (default: config.toml in the data directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Watch the clipboard and record history until interrupted
    Run,

    /// List history entries, most recent first
    List {
        #[arg(long)]
        json: bool,

        #[arg(long)]
        limit: Option<usize>,
    },

    /// Case-insensitive search over text entries
    Search {
        query: String,

        #[arg(long)]
        json: bool,
    },

    /// Show one entry in full
    Show {
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// Delete one entry
    Delete { id: String },

    /// Delete every entry
    Clear {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Delete the COUNT oldest entries
    ClearOldest {
        #[arg(allow_negative_numbers = true)]
        count: i64,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Put an entry back on the clipboard
    Copy {
        id: String,

        /// Simulate Ctrl+V into the focused window afterwards
        #[arg(long)]
        paste: bool,
    },

    /// Show the history capacity, or set it when VALUE is given
    MaxItems { value: Option<usize> },
}

impl Command {
    /// Prompt for destructive commands that were not pre-confirmed.
    pub fn confirmation_prompt(&self) -> Option<String> {
        match self {
            Command::Clear { yes: false } => {
                Some("This deletes the whole clipboard history.".to_string())
            }
            Command::ClearOldest { count, yes: false } if *count > 0 => Some(format!(
                "This deletes the {count} oldest clipboard entries."
            )),
            _ => None,
        }
    }
}

/// Ask for an explicit `yes`. Anything else declines.
pub fn confirm(prompt: &str, mut input: impl BufRead, mut output: impl Write) -> io::Result<bool> {
    write!(output, "{prompt} Type 'yes' to continue: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("yes"))
}

pub async fn execute(cli: Cli, config: AppConfig, paths: AppPaths) -> Result<()> {
    if cli.command == Command::Run {
        return run_daemon(&config, &paths).await;
    }

    if let Some(prompt) = cli.command.confirmation_prompt() {
        if !confirm(&prompt, io::stdin().lock(), io::stderr())? {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let app = ClipKeepApp::start(&config, &paths, AppMode::OneShot).await?;
    let result = run_one_shot(&cli.command, app.handle(), &config).await;
    app.shutdown().await?;

    print!("{}", result?);
    Ok(())
}

async fn run_daemon(config: &AppConfig, paths: &AppPaths) -> Result<()> {
    let app = ClipKeepApp::start(config, paths, AppMode::Daemon).await?;
    let mut notifications = app.handle().subscribe();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            res = &mut ctrl_c => {
                if let Err(err) = res {
                    warn!(error = %err, "Failed to listen for Ctrl+C");
                }
                info!("Interrupted, shutting down");
                break;
            }
            msg = notifications.recv() => match msg {
                Ok(CoreNotification::ClipboardUpdated { items }) => {
                    info!(items = items.len(), "Clipboard history updated");
                }
                Ok(CoreNotification::OperationFailed { operation, message }) => {
                    warn!(%operation, %message, "Core operation failed");
                }
                Err(RecvError::Lagged(skipped)) => {
                    debug!(skipped, "Notification receiver lagged");
                }
                Err(RecvError::Closed) => break,
            }
        }
    }

    app.shutdown().await
}

/// Execute a non-`run` command and return what should be printed.
pub async fn run_one_shot(command: &Command, core: &CoreHandle, config: &AppConfig) -> Result<String> {
    match command {
        Command::Run => bail!("`run` is not a one-shot command"),

        Command::List { json, limit } => {
            let mut items = core.get_all_items().await?;
            if let Some(limit) = limit {
                items.truncate(*limit);
            }
            render_items(&items, *json)
        }

        Command::Search { query, json } => {
            let items = core.search_items(query.as_str()).await?;
            render_items(&items, *json)
        }

        Command::Show { id, json } => {
            let item = find(core, id).await?;
            if *json {
                return Ok(format!("{}\n", serde_json::to_string_pretty(&item)?));
            }
            Ok(format!("{}\n{}\n", format_line(&item), item.content))
        }

        Command::Delete { id } => {
            let id = SnapshotId::from(id.as_str());
            let existed = core.get_item_by_id(id.clone()).await?.is_some();
            core.delete_item(id.clone()).await?;
            Ok(if existed {
                format!("Deleted {id}\n")
            } else {
                format!("No entry {id}; nothing deleted\n")
            })
        }

        Command::Clear { .. } => {
            let before = core.get_all_items().await?.len();
            core.clear_all().await?;
            Ok(format!("Cleared {before} entries\n"))
        }

        Command::ClearOldest { count, .. } => {
            let before = core.get_all_items().await?.len();
            core.clear_oldest(*count).await?;
            let after = core.get_all_items().await?.len();
            Ok(format!("Removed {} oldest entries\n", before - after))
        }

        Command::Copy { id, paste } => {
            let item = find(core, id).await?;
            core.copy_to_clipboard(item.kind, item.content.clone())
                .await?;
            match core.update_last_used(item.id.clone()).await {
                // the owning daemon re-captures the copy and moves it up
                Err(CoreError::Store(HistoryStoreError::ReadOnly(_))) => {
                    debug!(id = %item.id, "History read-only, last-used not recorded")
                }
                other => other?,
            }

            if *paste {
                if let Err(err) = paste_simulator(config).simulate_paste().await {
                    warn!(error = %format!("{err:#}"), "Simulated paste failed");
                }
            }
            Ok(format!("Copied {}\n", item.id))
        }

        Command::MaxItems { value: None } => Ok(format!("{}\n", core.get_max_items().await?)),

        Command::MaxItems { value: Some(max_items) } => {
            core.set_max_items(*max_items).await?;
            Ok(format!("max_items set to {max_items}\n"))
        }
    }
}

async fn find(core: &CoreHandle, id: &str) -> Result<Snapshot> {
    core.get_item_by_id(SnapshotId::from(id))
        .await?
        .with_context(|| format!("no clipboard entry with id {id}"))
}

fn render_items(items: &[Snapshot], json: bool) -> Result<String> {
    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(items)?));
    }

    let mut out = String::new();
    for item in items {
        let _ = writeln!(out, "{}", format_line(item));
    }
    Ok(out)
}

/// One human readable line: id, kind, capture time and preview.
pub fn format_line(item: &Snapshot) -> String {
    let when = DateTime::<Utc>::from_timestamp_millis(item.captured_at)
        .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| item.captured_at.to_string());

    let summary = match item.kind {
        SnapshotKind::Text => item.preview.clone().unwrap_or_else(|| item.content.clone()),
        SnapshotKind::Image => format!("[image, ~{} KB]", approx_image_kb(&item.content)),
    };

    format!("{}  {:<5}  {}  {}", item.id, item.kind, when, summary)
}

fn approx_image_kb(data_url: &str) -> usize {
    // base64 carries 3 bytes in 4 characters
    data_url.len() * 3 / 4 / 1024
}

#[cfg(test)]
mod tests {
    use super::*;
    use ck_core::clipboard::encode_png_data_url;

    #[test]
    fn parses_subcommands_in_kebab_case() {
        let cli = Cli::parse_from(["clipkeep", "clear-oldest", "3", "--yes"]);
        assert_eq!(cli.command, Command::ClearOldest { count: 3, yes: true });

        let cli = Cli::parse_from(["clipkeep", "--config", "/tmp/c.toml", "max-items", "20"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(cli.command, Command::MaxItems { value: Some(20) });
    }

    #[test]
    fn negative_clear_oldest_count_parses() {
        let cli = Cli::parse_from(["clipkeep", "clear-oldest", "-2"]);
        assert_eq!(cli.command, Command::ClearOldest { count: -2, yes: false });
    }

    #[test]
    fn destructive_commands_ask_first() {
        assert!(Command::Clear { yes: false }.confirmation_prompt().is_some());
        assert!(Command::Clear { yes: true }.confirmation_prompt().is_none());
        assert!(Command::ClearOldest { count: 2, yes: false }
            .confirmation_prompt()
            .is_some());
        assert!(Command::ClearOldest { count: 0, yes: false }
            .confirmation_prompt()
            .is_none());
        assert!(Command::List { json: false, limit: None }
            .confirmation_prompt()
            .is_none());
    }

    #[test]
    fn only_yes_confirms() {
        let mut out = Vec::new();
        assert!(confirm("Sure?", "yes\n".as_bytes(), &mut out).unwrap());
        assert!(confirm("Sure?", "YES\n".as_bytes(), &mut out).unwrap());
        assert!(!confirm("Sure?", "y\n".as_bytes(), &mut out).unwrap());
        assert!(!confirm("Sure?", "".as_bytes(), &mut out).unwrap());
        assert!(String::from_utf8(out).unwrap().contains("Type 'yes'"));
    }

    #[test]
    fn text_line_shows_preview() {
        let item = Snapshot::text("hello\n\nworld", 0, 100)
            .unwrap()
            .with_id(SnapshotId::from("id-1"));

        let line = format_line(&item);
        assert!(line.starts_with("id-1  text "));
        assert!(line.ends_with("hello world"));
    }

    #[test]
    fn image_line_shows_size_not_data() {
        let item = Snapshot::image(encode_png_data_url(&[0u8; 4096]), 0)
            .unwrap()
            .with_id(SnapshotId::from("img"));

        let line = format_line(&item);
        assert!(line.contains("[image, ~"));
        assert!(!line.contains("base64"));
    }
}
